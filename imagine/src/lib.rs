use std::{
    fs,
    path::{Path, PathBuf},
};

use color_eyre::{
    Result,
    eyre::{WrapErr as _, eyre},
};
use serde::de::DeserializeOwned;

pub mod cli;
pub mod config;
pub mod output;
pub mod runner;

pub use config::Config;

const CONFIG_FILE_NAME: &str = "imagine.ron";

pub fn load_ron_file<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let src = fs::read_to_string(path)?;
    Ok(ron::from_str(&src)?)
}

pub fn config_path() -> Result<PathBuf> {
    Ok(dirs::config_local_dir()
        .ok_or(eyre!("Couldn't get config dir"))?
        .join(CONFIG_FILE_NAME))
}

/// `None` if there is no config file yet.
pub fn load_config() -> Result<Option<Config>> {
    load_config_from(&config_path()?)
}

pub fn load_config_from(path: &Path) -> Result<Option<Config>> {
    if !path.exists() {
        Ok(None)
    } else {
        load_ron_file(path)
            .map(Some)
            .wrap_err_with(|| format!("Invalid config file {}", path.display()))
    }
}
