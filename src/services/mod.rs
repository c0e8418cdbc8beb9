// ============================================================================
// SERVICES - Red (API y templates)
// ============================================================================

pub mod api_client;
pub mod template_service;
pub mod traits;

pub use api_client::{parse_accounts_page, ApiClient};
pub use template_service::load_templates;
pub use traits::AccountsBackend;
