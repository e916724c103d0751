// src/config/mod.rs
// All runtime tunables come from the environment (.env supported).

use std::str::FromStr;
use std::time::Duration;

/// Process-wide configuration, loaded once at startup and passed down to the
/// components that need it. Nothing here is re-read after construction.
#[derive(Debug, Clone)]
pub struct NewtsConfig {
    // ── DeepSeek Configuration
    pub deepseek_api_key: String,
    pub deepseek_base_url: String,
    pub deepseek_model: String,
    pub rate_limit_delay_ms: u64,
    pub request_timeout_secs: u64,

    // ── Database Configuration
    pub database_url: String,

    // ── Server Configuration
    pub host: String,
    pub port: u16,
    pub cors_origin: String,

    // ── Logging Configuration
    pub log_level: String,
}

/// Parse an env var into `T`, falling back to `default` when the variable is
/// missing or unparseable. Values may carry trailing `#` comments.
fn env_var_or<T>(key: &str, default: T) -> T
where
    T: FromStr,
{
    match std::env::var(key) {
        Ok(val) => {
            let clean_val = val.split('#').next().unwrap_or("").trim();
            match clean_val.parse::<T>() {
                Ok(parsed) => parsed,
                Err(_) => {
                    eprintln!("Config: {} = '{}' (parse failed, using default)", key, val);
                    default
                }
            }
        }
        Err(_) => default,
    }
}

impl NewtsConfig {
    pub fn from_env() -> Self {
        // Best effort; a missing .env just means plain environment variables.
        let _ = dotenvy::dotenv();

        Self {
            deepseek_api_key: env_var_or("DEEPSEEK_API_KEY", String::new()),
            deepseek_base_url: env_var_or(
                "DEEPSEEK_BASE_URL",
                "https://api.deepseek.com/v1".to_string(),
            ),
            deepseek_model: env_var_or("DEEPSEEK_MODEL", "deepseek-chat".to_string()),
            rate_limit_delay_ms: env_var_or("NEWTS_RATE_LIMIT_DELAY_MS", 100),
            request_timeout_secs: env_var_or("NEWTS_REQUEST_TIMEOUT_SECS", 60),
            database_url: env_var_or("DATABASE_URL", "sqlite:./newts.db".to_string()),
            host: env_var_or("NEWTS_HOST", "0.0.0.0".to_string()),
            port: env_var_or("NEWTS_PORT", 3001),
            cors_origin: env_var_or("NEWTS_CORS_ORIGIN", "http://localhost:3000".to_string()),
            log_level: env_var_or("NEWTS_LOG_LEVEL", "info".to_string()),
        }
    }

    /// Server bind address
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn rate_limit_delay(&self) -> Duration {
        Duration::from_millis(self.rate_limit_delay_ms)
    }
}
