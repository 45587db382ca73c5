use anyhow::Result;

use super::Config;
use super::ConfigKey;
use crate::application::cli;

#[test]
fn it_serializes_to_valid_toml() {
    let res = Config::serialize_default(cli::build());
    let toml_res = res.parse::<toml_edit::DocumentMut>();

    assert!(toml_res.is_ok());
    assert!(res.contains("start-dir"));
    assert!(res.contains("default-extension"));
}

#[test]
fn it_defaults_every_key() {
    assert!(!Config::default(ConfigKey::ConfigFile).is_empty());
    assert_eq!(Config::default(ConfigKey::DefaultExtension), "html");
    assert_eq!(Config::default(ConfigKey::File), "");
    assert_eq!(Config::default(ConfigKey::StartDir), "./");
}

#[tokio::test]
async fn it_loads_config_from_file() -> Result<()> {
    let matches =
        cli::build().try_get_matches_from(vec!["jotter", "-c", "./config.example.toml"])?;
    Config::load(vec![&matches]).await?;
    return Ok(());
}

#[tokio::test]
async fn it_fails_on_a_malformed_config() -> Result<()> {
    let matches =
        cli::build().try_get_matches_from(vec!["jotter", "-c", "./test/bad-config.toml"])?;
    let res = Config::load(vec![&matches]).await;

    assert!(res.is_err());
    return Ok(());
}
