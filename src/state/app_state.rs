// ============================================================================
// APP STATE - Estado de sesión compartido entre ViewModel y App
// ============================================================================
// Un solo hilo: cada campo es Rc<RefCell<_>> y los clones lo comparten.
// Nunca se mantiene un borrow a través de un `.await`.
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;
use crate::models::{AppError, Filters, View};
use crate::state::TemplateCache;

/// Estado de la sesión (filtros, templates, vista y página actuales)
#[derive(Clone, Default)]
pub struct AppState {
    pub filters: Rc<RefCell<Filters>>,
    pub templates: Rc<RefCell<TemplateCache>>,
    pub current_view: Rc<RefCell<Option<View>>>,
    pub current_page: Rc<RefCell<u32>>,
}

impl AppState {
    /// Estado inicial: sin vista, página 1
    pub fn new() -> Self {
        Self {
            current_page: Rc::new(RefCell::new(1)),
            ..Self::default()
        }
    }

    /// Copia de los filtros actuales
    pub fn filters(&self) -> Filters {
        self.filters.borrow().clone()
    }

    /// Establecer filtro de país
    pub fn set_country(&self, country: &str) {
        self.filters.borrow_mut().country = country.to_string();
    }

    /// Establecer texto de búsqueda
    pub fn set_search(&self, search: &str) {
        self.filters.borrow_mut().search = search.to_string();
    }

    /// Resetear ambos filtros
    pub fn clear_filters(&self) {
        self.filters.borrow_mut().clear();
    }

    /// Reemplazar el cache de templates
    pub fn set_templates(&self, templates: TemplateCache) {
        *self.templates.borrow_mut() = templates;
    }

    /// Copia del template, para que ningún borrow sobreviva a la llamada
    pub fn template(&self, view: View) -> Result<String, AppError> {
        self.templates.borrow().get(view).map(str::to_string)
    }

    /// Registrar la vista y página que se acaban de renderizar
    pub fn set_current(&self, view: View, page: u32) {
        *self.current_view.borrow_mut() = Some(view);
        *self.current_page.borrow_mut() = page;
    }

    /// Vista montada actualmente, si hay alguna
    pub fn current_view(&self) -> Option<View> {
        *self.current_view.borrow()
    }

    /// Página actual del dashboard
    pub fn current_page(&self) -> u32 {
        *self.current_page.borrow()
    }
}
