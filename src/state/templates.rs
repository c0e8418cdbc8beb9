// ============================================================================
// TEMPLATE CACHE - Fragmentos HTML por vista
// ============================================================================

use std::collections::HashMap;
use crate::models::{AppError, View};

/// Fragmentos de template indexados por la vista que renderizan
#[derive(Debug, Clone, Default)]
pub struct TemplateCache {
    templates: HashMap<View, String>,
}

impl TemplateCache {
    /// Guardar el HTML de una vista
    pub fn insert(&mut self, view: View, html: String) {
        self.templates.insert(view, html);
    }

    /// HTML de una vista, o `MissingTemplate` si no se cargó
    pub fn get(&self, view: View) -> Result<&str, AppError> {
        self.templates
            .get(&view)
            .map(String::as_str)
            .ok_or_else(|| AppError::MissingTemplate(view.to_string()))
    }

    /// Cantidad de templates cargados
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    /// Verificar si no se cargó ninguno
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}
