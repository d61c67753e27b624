pub mod config;
pub mod sync;

use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use plexarr_config::{load_dotenv, Config};
use std::path::Path;

/// `--env-file` when given, otherwise the process environment plus any `.env`
/// found from the working directory up.
pub fn load_config(env_file: Option<&Path>) -> Result<Config> {
    match env_file {
        Some(path) => Config::from_env_file(path)
            .wrap_err_with(|| format!("Failed to load configuration from {}", path.display())),
        None => {
            load_dotenv();
            Config::from_env().wrap_err("Failed to load configuration from the environment")
        }
    }
}
