// ============================================================================
// TRAITS - Abstracción del backend HTTP
// ============================================================================

use crate::models::{AccountsPage, AccountsQuery, AppError};

/// Todo lo que las vistas necesitan de la red.
/// `ApiClient` habla HTTP en el navegador; los tests usan un fake en memoria.
#[allow(async_fn_in_trait)]
pub trait AccountsBackend {
    /// `GET /api/accounts` con la query dada
    async fn fetch_accounts(&self, query: &AccountsQuery) -> Result<AccountsPage, AppError>;

    /// HTML crudo de un fragmento de template
    async fn fetch_template(&self, name: &str) -> Result<String, AppError>;

    /// Link de exportación CSV que se inserta en los templates (nunca se descarga)
    fn download_url(&self) -> String;
}
