use thiserror::Error;

const SJ_TOKEN_VAR: &str = "SJ_TOKEN";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("environment variable SJ_TOKEN is not set (register an app at api.superjob.ru to get one)")]
    MissingSjToken,
}

/// Values the clients need but must not read from global state themselves.
#[derive(Debug, Clone)]
pub struct Config {
    pub sj_token: String,
}

impl Config {
    /// Load configuration, picking up a local `.env` file when present.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let sj_token = std::env::var(SJ_TOKEN_VAR)
            .ok()
            .filter(|token| !token.trim().is_empty())
            .ok_or(ConfigError::MissingSjToken)?;

        Ok(Config { sj_token })
    }
}
