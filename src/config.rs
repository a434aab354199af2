use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub backend_url: String,
    pub environment: String,
    pub enable_logging: bool,
    pub network_timeout_ms: u32,
    pub logout_delay_ms: u32,
    pub toast_duration_ms: u32,
    pub auth_token_key: String,
    pub login_url: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            backend_url: "http://localhost:3000".to_string(),
            environment: "development".to_string(),
            enable_logging: true,
            network_timeout_ms: 15_000,
            logout_delay_ms: 2_000,
            toast_duration_ms: 3_000,
            auth_token_key: "authToken".to_string(),
            login_url: "/login".to_string(),
        }
    }
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            backend_url: option_env!("BACKEND_URL")
                .map(|s| s.trim_end_matches('/').to_string())
                .unwrap_or(defaults.backend_url),
            environment: option_env!("ENVIRONMENT")
                .map(str::to_string)
                .unwrap_or(defaults.environment),
            enable_logging: parse_or(option_env!("ENABLE_LOGGING"), defaults.enable_logging),
            network_timeout_ms: parse_or(option_env!("NETWORK_TIMEOUT_MS"), defaults.network_timeout_ms),
            logout_delay_ms: parse_or(option_env!("LOGOUT_DELAY_MS"), defaults.logout_delay_ms),
            toast_duration_ms: parse_or(option_env!("TOAST_DURATION_MS"), defaults.toast_duration_ms),
            auth_token_key: option_env!("AUTH_TOKEN_KEY")
                .map(str::to_string)
                .unwrap_or(defaults.auth_token_key),
            login_url: option_env!("LOGIN_URL")
                .map(str::to_string)
                .unwrap_or(defaults.login_url),
        }
    }

    /// Nivel de log para wasm-logger
    pub fn log_level(&self) -> log::Level {
        if self.enable_logging {
            log::Level::Info
        } else {
            log::Level::Warn
        }
    }
}

fn parse_or<T: std::str::FromStr>(raw: Option<&str>, default: T) -> T {
    raw.and_then(|value| value.trim().parse().ok()).unwrap_or(default)
}

// Configuración global estática
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_or_falls_back_on_missing_or_garbage() {
        assert_eq!(parse_or::<u32>(None, 5), 5);
        assert_eq!(parse_or::<u32>(Some("abc"), 5), 5);
        assert_eq!(parse_or::<u32>(Some(" 250 "), 5), 250);
        assert!(!parse_or::<bool>(Some("false"), true));
    }

    #[test]
    fn log_level_follows_enable_logging() {
        let mut config = AppConfig::default();
        assert_eq!(config.log_level(), log::Level::Info);
        config.enable_logging = false;
        assert_eq!(config.log_level(), log::Level::Warn);
    }
}
