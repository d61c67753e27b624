pub mod config;
pub mod credentials;

pub use config::{load_dotenv, read_env_file, ArrConfig, Config, ConfigError};
pub use credentials::{mask_string, Credentials};
