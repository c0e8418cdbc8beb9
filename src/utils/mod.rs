// ============================================================================
// UTILS - Utilidades compartidas
// ============================================================================

pub mod constants;
pub mod countries;
pub mod html;
pub mod time;

pub use constants::*;
pub use countries::{country_name, sort_by_name};
