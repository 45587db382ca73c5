use std::path::Path;

use anyhow::Result;
use async_trait::async_trait;

/// Where documents persist. The only collaborator whose failures are part
/// of the design: a failed write must leave the session marked unsaved.
#[async_trait]
pub trait MarkupStore {
    async fn write(&self, path: &Path, markup: &str) -> Result<()>;

    async fn read(&self, path: &Path) -> Result<String>;
}

pub type StoreBox = Box<dyn MarkupStore + Send + Sync>;
