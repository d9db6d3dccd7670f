use serde::{Deserialize, Serialize};

use crate::utils::constants::{
    BACKEND_URL, DEFAULT_PAGE_SIZE, LOGIN_PATH, LOGOUT_REDIRECT_DELAY_MS, TOKEN_STORAGE_KEY,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    pub backend_url: String,
    pub environment: String,
    pub enable_logging: bool,
    pub page_size: u32,
    pub token_storage_key: String,
    pub login_path: String,
    pub logout_redirect_delay_ms: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            backend_url: BACKEND_URL.to_string(),
            environment: "development".to_string(),
            enable_logging: true,
            page_size: DEFAULT_PAGE_SIZE,
            token_storage_key: TOKEN_STORAGE_KEY.to_string(),
            login_path: LOGIN_PATH.to_string(),
            logout_redirect_delay_ms: LOGOUT_REDIRECT_DELAY_MS,
        }
    }
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            backend_url: defaults.backend_url,
            environment: option_env!("ENVIRONMENT")
                .unwrap_or("development").to_string(),
            enable_logging: option_env!("ENABLE_LOGGING")
                .unwrap_or("true").parse().unwrap_or(true),
            page_size: option_env!("PAGE_SIZE")
                .and_then(|s| s.parse().ok())
                .filter(|size: &u32| *size > 0)
                .unwrap_or(DEFAULT_PAGE_SIZE),
            token_storage_key: option_env!("TOKEN_STORAGE_KEY")
                .unwrap_or(TOKEN_STORAGE_KEY).to_string(),
            login_path: defaults.login_path,
            logout_redirect_delay_ms: option_env!("LOGOUT_REDIRECT_DELAY_MS")
                .unwrap_or("100").parse().unwrap_or(LOGOUT_REDIRECT_DELAY_MS),
        }
    }

    /// Nivel para wasm-logger
    pub fn log_level(&self) -> log::Level {
        if !self.enable_logging {
            log::Level::Error
        } else if self.environment == "production" {
            log::Level::Info
        } else {
            log::Level::Debug
        }
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

// Configuración global estática
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_backend_contract() {
        let config = AppConfig::default();
        assert_eq!(config.page_size, 9);
        assert_eq!(config.token_storage_key, "token");
        assert_eq!(config.login_path, "/login");
        assert_eq!(config.logout_redirect_delay_ms, 100);
    }

    #[test]
    fn log_level_follows_environment() {
        let mut config = AppConfig::default();
        assert_eq!(config.log_level(), log::Level::Debug);

        config.environment = "production".to_string();
        assert!(config.is_production());
        assert_eq!(config.log_level(), log::Level::Info);

        config.enable_logging = false;
        assert_eq!(config.log_level(), log::Level::Error);
    }
}
