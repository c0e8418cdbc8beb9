// ============================================================================
// CONFIG - Configuración en tiempo de compilación (option_env!)
// ============================================================================

use serde::{Deserialize, Serialize};

/// Configuración de la app
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Prefijo de las llamadas a la API. Vacío = mismo origen.
    pub api_base_url: String,
    /// Ruta desde donde se sirven los fragmentos HTML
    pub templates_path: String,
    /// Nivel del logger ("error", "warn", "info", "debug", "trace")
    pub log_level: String,
    /// `false` desactiva el logger por completo
    pub enable_logging: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: String::new(),
            templates_path: "/static/pages".to_string(),
            log_level: "info".to_string(),
            enable_logging: true,
        }
    }
}

impl AppConfig {
    /// Cargar configuración desde variables de entorno en compilación
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            api_base_url: option_env!("API_BASE_URL")
                .map(|s| s.trim_end_matches('/').to_string())
                .unwrap_or(defaults.api_base_url),
            templates_path: option_env!("TEMPLATES_PATH")
                .map(|s| s.trim_end_matches('/').to_string())
                .unwrap_or(defaults.templates_path),
            log_level: option_env!("LOG_LEVEL")
                .unwrap_or("info").to_string(),
            enable_logging: option_env!("ENABLE_LOGGING")
                .unwrap_or("true").parse().unwrap_or(true),
        }
    }

    /// URL para una ruta de la API como `/api/accounts`
    pub fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.api_base_url, path)
    }

    /// URL de un fragmento de template por nombre
    pub fn template_url(&self, name: &str) -> String {
        format!("{}/{}.html", self.templates_path, name)
    }

    /// Verificar si hay que inicializar el logger
    pub fn is_logging_enabled(&self) -> bool {
        self.enable_logging
    }

    /// Nivel del logger de consola. Valores desconocidos caen en `Info`.
    pub fn log_level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Info)
    }
}

// Configuración global, resuelta en compilación
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_urls_are_same_origin() {
        let config = AppConfig::default();
        assert_eq!(config.api_url("/api/accounts"), "/api/accounts");
        assert_eq!(config.template_url("related-work"), "/static/pages/related-work.html");
    }

    #[test]
    fn base_url_is_prefixed() {
        let config = AppConfig {
            api_base_url: "https://observer.example".to_string(),
            ..AppConfig::default()
        };
        assert_eq!(config.api_url("/api/download"), "https://observer.example/api/download");
    }

    #[test]
    fn log_level_parsing() {
        let mut config = AppConfig::default();
        assert_eq!(config.log_level(), log::Level::Info);
        config.log_level = "debug".to_string();
        assert_eq!(config.log_level(), log::Level::Debug);
        config.log_level = "loud".to_string();
        assert_eq!(config.log_level(), log::Level::Info);
    }

    #[test]
    fn disabled_logging_is_reported_separately() {
        let config = AppConfig {
            enable_logging: false,
            log_level: "debug".to_string(),
            ..AppConfig::default()
        };
        assert!(!config.is_logging_enabled());
        assert_eq!(config.log_level(), log::Level::Debug);
        assert!(AppConfig::default().is_logging_enabled());
    }
}
