// ============================================================================
// VIEW - Pantallas de la app, resueltas solo a partir de la ruta
// ============================================================================

use std::fmt;

/// Pantalla visible. Siempre hay exactamente una montada en `#app`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum View {
    Landing,
    Dashboard,
    About,
    RelatedWork,
    NotFound,
}

impl View {
    /// Resolver una ruta del navegador (coincidencia exacta)
    pub fn from_path(path: &str) -> Self {
        match path {
            "/" => View::Landing,
            "/dashboard" => View::Dashboard,
            "/about" => View::About,
            "/related-work" => View::RelatedWork,
            _ => View::NotFound,
        }
    }

    /// Nombre del template asociado a la vista
    pub fn template_name(&self) -> Option<&'static str> {
        match self {
            View::Landing => Some("landing"),
            View::Dashboard => Some("dashboard"),
            View::About => Some("about"),
            View::RelatedWork => Some("related-work"),
            View::NotFound => None,
        }
    }

    /// Mensaje fijo de la vista de error cuando esta vista falla
    pub fn failure_message(&self) -> &'static str {
        match self {
            View::Landing => "Failed to load landing page data",
            View::Dashboard => "Failed to load dashboard data",
            View::About => "Failed to load about page",
            View::RelatedWork => "Failed to load related work page",
            View::NotFound => "Page not found",
        }
    }

    /// Vistas con template, en orden de carga
    pub fn templated() -> [View; 4] {
        [View::Landing, View::Dashboard, View::About, View::RelatedWork]
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            View::Landing => "landing",
            View::Dashboard => "dashboard",
            View::About => "about",
            View::RelatedWork => "related-work",
            View::NotFound => "not-found",
        };
        write!(f, "{}", name)
    }
}
