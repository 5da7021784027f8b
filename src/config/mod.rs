/// Application configuration module
use crate::errors::ConfigError;
use std::env;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub api_key: String,
    pub nasa_api_url: String,
    pub mars_rover: String,
    pub output_dir: PathBuf,
    pub timeouts: FetchTimeouts,
}

#[derive(Clone, Debug)]
pub struct FetchTimeouts {
    pub default_seconds: u64,
    pub rover_seconds: u64,
}

impl FetchTimeouts {
    pub fn default_budget(&self) -> Duration {
        Duration::from_secs(self.default_seconds)
    }

    pub fn rover_budget(&self) -> Duration {
        Duration::from_secs(self.rover_seconds)
    }
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = ["API_KEY", "NASA_API_KEY"]
            .iter()
            .filter_map(|key| lookup(*key))
            .find(|value| !value.trim().is_empty())
            .ok_or(ConfigError::MissingApiKey)?;

        let nasa_api_url =
            lookup("NASA_API_URL").unwrap_or_else(|| "https://api.nasa.gov".to_string());

        let mars_rover = lookup("MARS_ROVER").unwrap_or_else(|| "curiosity".to_string());

        let output_dir = lookup("OUTPUT_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("."));

        let timeouts = FetchTimeouts {
            default_seconds: env_u64(&lookup, "HTTP_TIMEOUT_SECONDS", 20)?,
            rover_seconds: env_u64(&lookup, "ROVER_TIMEOUT_SECONDS", 10)?,
        };

        Ok(Self {
            api_key,
            nasa_api_url,
            mars_rover,
            output_dir,
            timeouts,
        })
    }
}

fn env_u64<F>(lookup: &F, key: &str, default: u64) -> Result<u64, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => Ok(default),
        Some(value) => value.trim().parse().map_err(|_| ConfigError::InvalidNumber {
            key: key.to_string(),
            value,
        }),
    }
}
