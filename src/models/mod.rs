// ============================================================================
// MODELS - Datos de la app
// ============================================================================

pub mod account;
pub mod error;
pub mod filters;
pub mod view;

pub use account::{Account, AccountsPage};
pub use error::AppError;
pub use filters::{AccountsQuery, Filters};
pub use view::View;
