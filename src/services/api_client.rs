// ============================================================================
// API CLIENT - Solo HTTP (sin estado)
// ============================================================================

use gloo_net::http::{Request, Response};
use crate::config::{AppConfig, CONFIG};
use crate::models::{AccountsPage, AccountsQuery, AppError};
use crate::services::traits::AccountsBackend;
use crate::utils::constants::{ACCOUNTS_ENDPOINT, DOWNLOAD_ENDPOINT};

/// Cliente HTTP de la API de cuentas
#[derive(Clone)]
pub struct ApiClient {
    config: AppConfig,
}

impl ApiClient {
    /// Cliente con la configuración global
    pub fn new() -> Self {
        Self::with_config(CONFIG.clone())
    }

    /// Cliente con una configuración concreta
    pub fn with_config(config: AppConfig) -> Self {
        Self { config }
    }

    /// URL de `/api/accounts` con la query codificada
    pub fn accounts_url(&self, query: &AccountsQuery) -> String {
        let base = self.config.api_url(ACCOUNTS_ENDPOINT);
        let query_string = query.to_query_string();
        if query_string.is_empty() {
            base
        } else {
            format!("{}?{}", base, query_string)
        }
    }

    /// GET que convierte fallos de red y status no-2xx en `AppError`
    async fn get(&self, url: &str) -> Result<Response, AppError> {
        let response = Request::get(url)
            .send()
            .await
            .map_err(|e| AppError::Network(e.to_string()))?;

        if !response.ok() {
            return Err(AppError::Http {
                status: response.status(),
                status_text: response.status_text(),
            });
        }
        Ok(response)
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl AccountsBackend for ApiClient {
    async fn fetch_accounts(&self, query: &AccountsQuery) -> Result<AccountsPage, AppError> {
        let url = self.accounts_url(query);
        log::debug!("[API] GET {}", url);

        let body = self
            .get(&url)
            .await?
            .text()
            .await
            .map_err(|e| AppError::Network(e.to_string()))?;

        let page = parse_accounts_page(&body)?;

        log::info!(
            "[API] {} accounts (page {}/{}, {} total)",
            page.accounts.len(),
            page.current_page,
            page.total_pages,
            page.total_count
        );
        Ok(page)
    }

    async fn fetch_template(&self, name: &str) -> Result<String, AppError> {
        let url = self.config.template_url(name);
        log::debug!("[API] GET {}", url);

        self.get(&url)
            .await?
            .text()
            .await
            .map_err(|e| AppError::Network(e.to_string()))
    }

    fn download_url(&self) -> String {
        self.config.api_url(DOWNLOAD_ENDPOINT)
    }
}

/// Parsear el cuerpo de `/api/accounts`
pub fn parse_accounts_page(body: &str) -> Result<AccountsPage, AppError> {
    serde_json::from_str(body).map_err(|e| AppError::Parse(e.to_string()))
}
