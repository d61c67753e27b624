use crate::credentials::Credentials;
use serde::Serialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

pub const PLEX_DISCOVER_URL: &str = "PLEX_DISCOVER_URL";
pub const TMDB_URL: &str = "TMDB_URL";
pub const RADARR_URL: &str = "RADARR_URL";
pub const SONARR_URL: &str = "SONARR_URL";
pub const RADARR_ROOT_FOLDER: &str = "RADARR_ROOT_FOLDER";
pub const SONARR_ROOT_FOLDER: &str = "SONARR_ROOT_FOLDER";
pub const QUALITY_PROFILE_NAME: &str = "QUALITY_PROFILE_NAME";
pub const SONARR_LANGUAGE_PROFILE_ID: &str = "SONARR_LANGUAGE_PROFILE_ID";

const DEFAULT_PLEX_DISCOVER_URL: &str = "https://metadata.provider.plex.tv";
const DEFAULT_TMDB_URL: &str = "https://api.themoviedb.org/3";
const DEFAULT_RADARR_URL: &str = "http://localhost:7878";
const DEFAULT_SONARR_URL: &str = "http://localhost:8989";
const DEFAULT_ROOT_FOLDER: &str = "/config";
const DEFAULT_QUALITY_PROFILE_NAME: &str = "HD-1080p";
const DEFAULT_LANGUAGE_PROFILE_ID: i64 = 1;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable(s): {}", .0.join(", "))]
    Missing(Vec<&'static str>),

    #[error("invalid value {value:?} for {key}: {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },

    #[error("failed to read env file {}: {source}", path.display())]
    EnvFile {
        path: PathBuf,
        #[source]
        source: dotenvy::Error,
    },
}

/// Connection settings for one *arr instance
#[derive(Debug, Clone, Serialize)]
pub struct ArrConfig {
    /// Base URL without the `/api/v3` suffix
    pub url: String,
    pub root_folder: String,
}

/// Everything a run needs, read once before the first request.
#[derive(Debug, Clone, Serialize)]
pub struct Config {
    pub credentials: Credentials,
    pub plex_url: String,
    pub tmdb_url: String,
    pub radarr: ArrConfig,
    pub sonarr: ArrConfig,
    pub quality_profile_name: String,
    pub language_profile_id: i64,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Like [`Config::from_env`], with `path` filling in whatever the process
    /// environment does not set.
    pub fn from_env_file(path: &Path) -> Result<Self, ConfigError> {
        let file_vars = read_env_file(path)?;
        Self::from_lookup(|key| std::env::var(key).ok().or_else(|| file_vars.get(key).cloned()))
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let credentials = Credentials::from_lookup(&lookup).map_err(ConfigError::Missing)?;

        let optional = |key: &str, default: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| default.to_string())
        };
        let url = |key: &str, default: &str| optional(key, default).trim_end_matches('/').to_string();

        let language_profile_id = match lookup(SONARR_LANGUAGE_PROFILE_ID).filter(|v| !v.trim().is_empty()) {
            Some(raw) => raw.trim().parse::<i64>().map_err(|e| ConfigError::Invalid {
                key: SONARR_LANGUAGE_PROFILE_ID,
                value: raw.clone(),
                reason: e.to_string(),
            })?,
            None => DEFAULT_LANGUAGE_PROFILE_ID,
        };

        let config = Self {
            credentials,
            plex_url: url(PLEX_DISCOVER_URL, DEFAULT_PLEX_DISCOVER_URL),
            tmdb_url: url(TMDB_URL, DEFAULT_TMDB_URL),
            radarr: ArrConfig {
                url: url(RADARR_URL, DEFAULT_RADARR_URL),
                root_folder: optional(RADARR_ROOT_FOLDER, DEFAULT_ROOT_FOLDER),
            },
            sonarr: ArrConfig {
                url: url(SONARR_URL, DEFAULT_SONARR_URL),
                root_folder: optional(SONARR_ROOT_FOLDER, DEFAULT_ROOT_FOLDER),
            },
            quality_profile_name: optional(QUALITY_PROFILE_NAME, DEFAULT_QUALITY_PROFILE_NAME),
            language_profile_id,
        };

        debug!(
            plex_url = %config.plex_url,
            radarr_url = %config.radarr.url,
            sonarr_url = %config.sonarr.url,
            quality_profile = %config.quality_profile_name,
            "Configuration loaded"
        );
        Ok(config)
    }

    /// Copy safe to print: credentials masked, everything else as loaded
    pub fn masked(&self) -> Config {
        Config {
            credentials: self.credentials.masked(),
            ..self.clone()
        }
    }
}

/// Load `./.env` (or the first one found walking up) into the process
/// environment. Variables already set are left alone.
pub fn load_dotenv() -> Option<PathBuf> {
    match dotenvy::dotenv() {
        Ok(path) => {
            debug!(path = %path.display(), "Loaded environment from .env");
            Some(path)
        }
        Err(e) if e.not_found() => None,
        Err(e) => {
            warn!(error = %e, "Failed to read .env file, continuing with process environment");
            None
        }
    }
}

/// Parse an env file without touching the process environment
pub fn read_env_file(path: &Path) -> Result<HashMap<String, String>, ConfigError> {
    let env_file_error = |source| ConfigError::EnvFile {
        path: path.to_path_buf(),
        source,
    };

    let mut vars = HashMap::new();
    for item in dotenvy::from_path_iter(path).map_err(env_file_error)? {
        let (key, value) = item.map_err(env_file_error)?;
        vars.insert(key, value);
    }
    Ok(vars)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::credentials::{PLEX_TOKEN, RADARR_API_KEY, SONARR_API_KEY, TMDB_API_KEY};
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn required() -> HashMap<String, String> {
        [
            (PLEX_TOKEN, "plex-token"),
            (RADARR_API_KEY, "radarr-key"),
            (SONARR_API_KEY, "sonarr-key"),
            (TMDB_API_KEY, "tmdb-key"),
        ]
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
    }

    fn load(vars: &HashMap<String, String>) -> Result<Config, ConfigError> {
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = load(&required()).unwrap();
        assert_eq!(config.plex_url, "https://metadata.provider.plex.tv");
        assert_eq!(config.tmdb_url, "https://api.themoviedb.org/3");
        assert_eq!(config.radarr.url, "http://localhost:7878");
        assert_eq!(config.sonarr.url, "http://localhost:8989");
        assert_eq!(config.radarr.root_folder, "/config");
        assert_eq!(config.sonarr.root_folder, "/config");
        assert_eq!(config.quality_profile_name, "HD-1080p");
        assert_eq!(config.language_profile_id, 1);
    }

    #[test]
    fn test_overrides_and_trailing_slash() {
        let mut vars = required();
        vars.insert(RADARR_URL.to_string(), "http://192.168.1.15:7878/".to_string());
        vars.insert(SONARR_ROOT_FOLDER.to_string(), "/tv".to_string());
        vars.insert(QUALITY_PROFILE_NAME.to_string(), "Ultra-HD".to_string());
        vars.insert(SONARR_LANGUAGE_PROFILE_ID.to_string(), " 3 ".to_string());

        let config = load(&vars).unwrap();
        assert_eq!(config.radarr.url, "http://192.168.1.15:7878");
        assert_eq!(config.sonarr.root_folder, "/tv");
        assert_eq!(config.quality_profile_name, "Ultra-HD");
        assert_eq!(config.language_profile_id, 3);
    }

    #[test]
    fn test_missing_required_variables() {
        let mut vars = required();
        vars.remove(TMDB_API_KEY);
        vars.remove(PLEX_TOKEN);

        match load(&vars) {
            Err(ConfigError::Missing(missing)) => {
                assert_eq!(missing, vec![PLEX_TOKEN, TMDB_API_KEY]);
            }
            other => panic!("expected missing variables, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_language_profile() {
        let mut vars = required();
        vars.insert(SONARR_LANGUAGE_PROFILE_ID.to_string(), "english".to_string());
        let err = load(&vars).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: SONARR_LANGUAGE_PROFILE_ID, .. }));
    }

    #[test]
    fn test_masked_hides_credentials() {
        let config = load(&required()).unwrap();
        let masked = config.masked();
        assert_eq!(masked.credentials.plex_token, "pl***en");
        assert_eq!(masked.radarr.url, config.radarr.url);
    }

    #[test]
    fn test_read_env_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "# plexarr").unwrap();
        writeln!(file, "PLEX_TOKEN=from-file").unwrap();
        writeln!(file, "RADARR_URL=\"http://radarr:7878\"").unwrap();

        let vars = read_env_file(file.path()).unwrap();
        assert_eq!(vars.get("PLEX_TOKEN").map(String::as_str), Some("from-file"));
        assert_eq!(vars.get("RADARR_URL").map(String::as_str), Some("http://radarr:7878"));
    }

    #[test]
    fn test_read_env_file_missing() {
        let err = read_env_file(Path::new("/nonexistent/plexarr/.env")).unwrap_err();
        assert!(matches!(err, ConfigError::EnvFile { .. }));
    }
}
