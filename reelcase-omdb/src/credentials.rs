use std::path::PathBuf;

use crate::error::OmdbError;

/// Credentials for the OMDb API.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub api_key: String,
}

/// Where the API key's value came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CredentialSource {
    /// Loaded from an environment variable.
    EnvVar(&'static str),
    /// Loaded from the config file.
    ConfigFile,
    /// Not set anywhere.
    Missing,
}

impl std::fmt::Display for CredentialSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EnvVar(var) => write!(f, "env ${}", var),
            Self::ConfigFile => write!(f, "config file"),
            Self::Missing => write!(f, "not set"),
        }
    }
}

/// TOML config file format.
#[derive(Debug, serde::Deserialize, serde::Serialize)]
struct ConfigFile {
    omdb: Option<OmdbConfig>,
}

#[derive(Debug, serde::Deserialize, serde::Serialize)]
struct OmdbConfig {
    api_key: Option<String>,
}

impl Credentials {
    /// Load the API key from the environment or the config file.
    ///
    /// Priority: `OMDB_API_KEY` env var > config file.
    pub fn load() -> Result<Self, OmdbError> {
        let config = load_config_file();

        let api_key = std::env::var("OMDB_API_KEY")
            .ok()
            .or_else(|| config.and_then(|c| c.api_key))
            .ok_or_else(|| {
                OmdbError::Config(
                    "Missing API key. Set OMDB_API_KEY env var or add to config file".to_string(),
                )
            })?;

        Ok(Self { api_key })
    }
}

/// Return the path to the credentials config file.
pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("reelcase").join("credentials.toml"))
}

/// Save credentials to the config file, creating parent directories as
/// needed. Returns the path the file was written to.
pub fn save_to_file(creds: &Credentials) -> Result<PathBuf, OmdbError> {
    let path = config_path()
        .ok_or_else(|| OmdbError::Config("Could not determine config directory".to_string()))?;

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let config = ConfigFile {
        omdb: Some(OmdbConfig {
            api_key: Some(creds.api_key.clone()),
        }),
    };

    let toml_str = toml::to_string_pretty(&config)
        .map_err(|e| OmdbError::Config(format!("Failed to serialize config: {}", e)))?;

    std::fs::write(&path, toml_str)?;
    Ok(path)
}

/// Determine where the API key is coming from.
pub fn api_key_source() -> CredentialSource {
    if std::env::var("OMDB_API_KEY").is_ok() {
        CredentialSource::EnvVar("OMDB_API_KEY")
    } else if load_config_file().and_then(|c| c.api_key).is_some() {
        CredentialSource::ConfigFile
    } else {
        CredentialSource::Missing
    }
}

fn load_config_file() -> Option<OmdbConfig> {
    let path = config_path()?;
    let content = std::fs::read_to_string(&path).ok()?;
    let config: ConfigFile = toml::from_str(&content).ok()?;
    config.omdb
}
