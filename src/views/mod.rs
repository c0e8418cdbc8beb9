// ============================================================================
// VIEWS - Render puro a strings HTML (sin acceso al DOM)
// ============================================================================

pub mod dashboard;
pub mod error;
pub mod landing;
pub mod static_page;
pub mod template;

pub use dashboard::{render_dashboard, DashboardView};
pub use error::render_error;
pub use landing::render_landing;
pub use static_page::render_static;

use crate::models::View;

/// Resultado de un render; se monta entero en `#app`
#[derive(Debug, Clone, PartialEq)]
pub enum Screen {
    Page { view: View, html: String },
    Dashboard(DashboardView),
    Error { view: View, message: String, html: String },
}

impl Screen {
    /// Vista de error con el mensaje fijo de `view`
    pub fn error(view: View) -> Self {
        let message = view.failure_message().to_string();
        let html = render_error(&message);
        Screen::Error { view, message, html }
    }

    /// Vista para la que se renderizó
    pub fn view(&self) -> View {
        match self {
            Screen::Page { view, .. } | Screen::Error { view, .. } => *view,
            Screen::Dashboard(_) => View::Dashboard,
        }
    }

    /// Verificar si es la vista de error
    pub fn is_error(&self) -> bool {
        matches!(self, Screen::Error { .. })
    }

    /// HTML que se escribe en el contenedor raíz
    pub fn html(&self) -> &str {
        match self {
            Screen::Page { html, .. } | Screen::Error { html, .. } => html,
            Screen::Dashboard(dashboard) => &dashboard.html,
        }
    }
}
