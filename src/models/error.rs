// ============================================================================
// APP ERROR - Errores de red, parseo, templates y DOM
// ============================================================================

use wasm_bindgen::JsValue;

/// Error al renderizar una vista.
/// La UI convierte cualquiera de ellos en la vista de error genérica.
#[derive(Debug, Clone, PartialEq)]
pub enum AppError {
    Network(String),
    Http { status: u16, status_text: String },
    Parse(String),
    MissingTemplate(String),
    Dom(String),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Network(msg) => write!(f, "Network error: {}", msg),
            AppError::Http { status, status_text } => write!(f, "HTTP {}: {}", status, status_text),
            AppError::Parse(msg) => write!(f, "Parse error: {}", msg),
            AppError::MissingTemplate(name) => write!(f, "Template not loaded: {}", name),
            AppError::Dom(msg) => write!(f, "DOM error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

/// Errores de web-sys (registro de listeners, location, ...)
impl From<JsValue> for AppError {
    fn from(value: JsValue) -> Self {
        AppError::Dom(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}


#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    #[wasm_bindgen_test]
    fn js_errors_become_dom_errors() {
        let err: AppError = JsValue::from_str("listener failed").into();
        assert_eq!(err, AppError::Dom("listener failed".to_string()));
    }
}
