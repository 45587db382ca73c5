#[cfg(test)]
#[path = "disk_test.rs"]
mod tests;

use std::path::Path;

use anyhow::Result;
use async_trait::async_trait;
use tokio::fs;
use tokio::io::AsyncWriteExt;

use crate::domain::models::MarkupStore;

/// Documents on the local filesystem, written as the surface's exported
/// markup text and read back raw.
#[derive(Default)]
pub struct DiskStore {}

#[async_trait]
impl MarkupStore for DiskStore {
    async fn write(&self, path: &Path, markup: &str) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).await?;
            }
        }

        let mut file = fs::File::create(path).await?;
        file.write_all(markup.as_bytes()).await?;

        return Ok(());
    }

    async fn read(&self, path: &Path) -> Result<String> {
        let payload = fs::read_to_string(path).await?;
        return Ok(payload);
    }
}
