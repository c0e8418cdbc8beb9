// ============================================================================
// STATE MODULE - Gestión de estado con Rc<RefCell>
// ============================================================================

pub mod app_state;
pub mod templates;

pub use app_state::AppState;
pub use templates::TemplateCache;
