use thiserror::Error;

pub const API_URL_VAR: &str = "TICKETMASTER_API_URL";
pub const IDENTITY_API_KEY_VAR: &str = "TICKETMASTER_IDENTITY_API_KEY";
pub const IDENTITY_URL_VAR: &str = "TICKETMASTER_IDENTITY_URL";

pub const DEFAULT_IDENTITY_URL: &str = "https://identitytoolkit.googleapis.com/v1";

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid value for environment variable {var}: {reason}")]
    InvalidEnvValue { var: String, reason: String },
}

/// Endpoints and credentials baked into the client at build time.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    pub api_url: String,
    pub identity_url: String,
    pub identity_api_key: String,
}

impl ClientConfig {
    /// Read configuration captured from the build environment.
    ///
    /// The browser has no process environment, so values are embedded with `option_env!` when
    /// the bundle is compiled.
    pub fn from_build_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| {
            match var {
                API_URL_VAR => option_env!("TICKETMASTER_API_URL"),
                IDENTITY_API_KEY_VAR => option_env!("TICKETMASTER_IDENTITY_API_KEY"),
                IDENTITY_URL_VAR => option_env!("TICKETMASTER_IDENTITY_URL"),
                _ => None,
            }
            .map(str::to_string)
        })
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |var: &str| -> Result<String, ConfigError> {
            lookup(var)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
                .ok_or_else(|| ConfigError::MissingEnvVar(var.to_string()))
        };

        let api_url = validate_url(API_URL_VAR, required(API_URL_VAR)?)?;
        let identity_api_key = required(IDENTITY_API_KEY_VAR)?;
        let identity_url = match lookup(IDENTITY_URL_VAR).filter(|v| !v.trim().is_empty()) {
            Some(url) => validate_url(IDENTITY_URL_VAR, url.trim().to_string())?,
            None => DEFAULT_IDENTITY_URL.to_string(),
        };

        Ok(Self {
            api_url,
            identity_url,
            identity_api_key,
        })
    }
}

fn validate_url(var: &str, url: String) -> Result<String, ConfigError> {
    if !(url.starts_with("http://") || url.starts_with("https://")) {
        return Err(ConfigError::InvalidEnvValue {
            var: var.to_string(),
            reason: format!("expected an http(s) URL, got {url:?}"),
        });
    }

    Ok(url.trim_end_matches('/').to_string())
}
