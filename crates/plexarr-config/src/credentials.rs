use serde::Serialize;
use std::fmt;

pub const PLEX_TOKEN: &str = "PLEX_TOKEN";
pub const RADARR_API_KEY: &str = "RADARR_API_KEY";
pub const SONARR_API_KEY: &str = "SONARR_API_KEY";
pub const TMDB_API_KEY: &str = "TMDB_API_KEY";

/// The four secrets a run needs. All are required, none have defaults.
#[derive(Clone, Serialize)]
pub struct Credentials {
    pub plex_token: String,
    pub radarr_api_key: String,
    pub sonarr_api_key: String,
    pub tmdb_api_key: String,
}

impl Credentials {
    /// Read every credential, collecting the names of the ones that are
    /// missing or blank instead of stopping at the first.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, Vec<&'static str>>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut missing = Vec::new();
        let mut require = |key: &'static str| match lookup(key) {
            Some(value) if !value.trim().is_empty() => value,
            _ => {
                missing.push(key);
                String::new()
            }
        };

        let credentials = Self {
            plex_token: require(PLEX_TOKEN),
            radarr_api_key: require(RADARR_API_KEY),
            sonarr_api_key: require(SONARR_API_KEY),
            tmdb_api_key: require(TMDB_API_KEY),
        };

        if missing.is_empty() {
            Ok(credentials)
        } else {
            Err(missing)
        }
    }

    pub fn masked(&self) -> Credentials {
        Credentials {
            plex_token: mask_string(&self.plex_token),
            radarr_api_key: mask_string(&self.radarr_api_key),
            sonarr_api_key: mask_string(&self.sonarr_api_key),
            tmdb_api_key: mask_string(&self.tmdb_api_key),
        }
    }
}

// Secrets must never reach logs through `{:?}`
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let masked = self.masked();
        f.debug_struct("Credentials")
            .field("plex_token", &masked.plex_token)
            .field("radarr_api_key", &masked.radarr_api_key)
            .field("sonarr_api_key", &masked.sonarr_api_key)
            .field("tmdb_api_key", &masked.tmdb_api_key)
            .finish()
    }
}

pub fn mask_string(s: &str) -> String {
    if s.is_empty() {
        return "<not set>".to_string();
    }
    let chars: Vec<char> = s.chars().collect();
    if chars.len() <= 4 {
        return "*".repeat(chars.len());
    }
    let head: String = chars[..2].iter().collect();
    let tail: String = chars[chars.len() - 2..].iter().collect();
    format!("{}***{}", head, tail)
}
