// ============================================================================
// APP - Monta las pantallas en #app y conecta los eventos del DOM
// ============================================================================
// Los listeners de cada render se guardan en `listeners` y se sueltan antes
// del siguiente mount, así ningún closure sobrevive a su HTML.
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, KeyboardEvent, MouseEvent};
use crate::dom::{
    closest_from_target, current_path, get_element_by_id, has_class, input_value, on_change,
    on_click, on_keypress, on_popstate, select_value, set_inner_html, set_input_value,
    set_select_value, Listener,
};
use crate::models::{AppError, View};
use crate::services::ApiClient;
use crate::state::AppState;
use crate::utils::constants::*;
use crate::viewmodels::RouteViewModel;
use crate::views::{DashboardView, Screen};

/// Aplicación principal
#[derive(Clone)]
pub struct App {
    vm: Rc<RouteViewModel<ApiClient>>,
    root: Element,
    listeners: Rc<RefCell<Vec<Listener>>>,
}

impl App {
    /// Crear la app sobre el contenedor `#app`
    pub fn new() -> Result<Self, JsValue> {
        let root = get_element_by_id(ROOT_ID)
            .ok_or_else(|| JsValue::from_str("No #app element found"))?;

        let vm = RouteViewModel::new(ApiClient::new(), AppState::new());
        Ok(Self {
            vm: Rc::new(vm),
            root,
            listeners: Rc::new(RefCell::new(Vec::new())),
        })
    }

    /// Cargar templates, renderizar la ruta actual y seguir atrás/adelante
    pub fn start(&self) {
        let app = self.clone();
        spawn_local(async move {
            app.vm.load_templates().await;

            let on_nav = app.clone();
            if let Err(e) = on_popstate(move |_| on_nav.handle_route()) {
                log::error!("[APP] Error registering popstate listener: {:?}", e);
            }
            app.handle_route();
        });
    }

    /// Renderizar la vista de `location.pathname`
    pub fn handle_route(&self) {
        let path = match current_path() {
            Ok(path) => path,
            Err(e) => {
                log::error!("[APP] Could not read location: {:?}", e);
                return;
            }
        };

        let app = self.clone();
        spawn_local(async move {
            let screen = app.vm.render_path(&path).await;
            app.mount(screen);
        });
    }

    /// Repetir el último render (misma vista y página). Sin render previo, usa la ruta.
    pub fn rerender(&self) {
        let app = self.clone();
        spawn_local(async move {
            match app.vm.rerender_current().await {
                Some(screen) => app.mount(screen),
                None => app.handle_route(),
            }
        });
    }

    fn show_dashboard_page(&self, page: u32) {
        let app = self.clone();
        spawn_local(async move {
            let screen = app.vm.render_dashboard(page).await;
            app.mount(screen);
        });
    }

    fn select_country(&self, country: String) {
        let app = self.clone();
        spawn_local(async move {
            let screen = app.vm.select_country(&country).await;
            app.mount(screen);
        });
    }

    fn search(&self, term: String) {
        let app = self.clone();
        spawn_local(async move {
            let screen = app.vm.search(&term).await;
            app.mount(screen);
        });
    }

    fn clear_filters(&self) {
        let app = self.clone();
        spawn_local(async move {
            let screen = app.vm.clear_filters().await;
            app.mount(screen);
        });
    }

    /// Reemplazar el contenido del contenedor con `screen`
    fn mount(&self, screen: Screen) {
        log::debug!("[APP] Mounting {} (error: {})", screen.view(), screen.is_error());

        // Soltar los listeners del render anterior
        let previous = std::mem::take(&mut *self.listeners.borrow_mut());
        drop(previous);

        match screen {
            Screen::Dashboard(dashboard) => match self.mount_dashboard(&dashboard) {
                Ok(listeners) => *self.listeners.borrow_mut() = listeners,
                Err(e) => {
                    log::error!("[APP] Error mounting dashboard: {}", e);
                    set_inner_html(&self.root, Screen::error(View::Dashboard).html());
                }
            },
            other => set_inner_html(&self.root, other.html()),
        }
    }

    /// Montar el dashboard y devolver sus listeners
    fn mount_dashboard(&self, dashboard: &DashboardView) -> Result<Vec<Listener>, AppError> {
        set_inner_html(&self.root, &dashboard.html);

        if let Some(select) = get_element_by_id(COUNTRY_FILTER_ID) {
            set_inner_html(&select, &dashboard.country_options);
            set_select_value(COUNTRY_FILTER_ID, &dashboard.selected_country);
        }
        set_input_value(SEARCH_FILTER_ID, &dashboard.search_value);

        if let Some(list) = get_element_by_id(ACCOUNTS_LIST_ID) {
            set_inner_html(&list, &dashboard.account_rows);
        }

        let mut listeners = Vec::new();
        if let Some(controls) = get_element_by_id(PAGINATION_ID) {
            set_inner_html(&controls, &dashboard.pagination);
            listeners.push(self.bind_pagination(&controls)?);
        }

        self.bind_filters(&mut listeners)?;
        Ok(listeners)
    }

    /// Click delegado en `#paginationControls`
    fn bind_pagination(&self, controls: &Element) -> Result<Listener, JsValue> {
        let app = self.clone();
        on_click(controls, move |e: MouseEvent| {
            e.prevent_default();
            let Some(link) = closest_from_target(e.target(), &format!(".{}", PAGE_LINK_CLASS)) else {
                return;
            };
            if has_class(&link, DISABLED_CLASS) {
                return;
            }
            match link.get_attribute("data-page").and_then(|p| p.parse::<u32>().ok()) {
                Some(page) if page >= 1 => app.show_dashboard_page(page),
                _ => log::warn!("[APP] Ignoring page link without a valid data-page"),
            }
        })
    }

    /// País, búsqueda (Enter y botón) y botón de limpiar
    fn bind_filters(&self, listeners: &mut Vec<Listener>) -> Result<(), JsValue> {
        if let Some(country) = get_element_by_id(COUNTRY_FILTER_ID) {
            let app = self.clone();
            listeners.push(on_change(&country, move |_| {
                app.select_country(select_value(COUNTRY_FILTER_ID))
            })?);
        }

        if let Some(search) = get_element_by_id(SEARCH_FILTER_ID) {
            let app = self.clone();
            listeners.push(on_keypress(&search, move |e: KeyboardEvent| {
                if e.key() == "Enter" {
                    e.prevent_default();
                    app.search(input_value(SEARCH_FILTER_ID));
                }
            })?);
        }

        if let Some(button) = get_element_by_id(SEARCH_BUTTON_ID) {
            let app = self.clone();
            listeners.push(on_click(&button, move |_| app.search(input_value(SEARCH_FILTER_ID)))?);
        }

        if let Some(clear) = get_element_by_id(CLEAR_FILTERS_ID) {
            let app = self.clone();
            listeners.push(on_click(&clear, move |_| {
                set_select_value(COUNTRY_FILTER_ID, "");
                set_input_value(SEARCH_FILTER_ID, "");
                app.clear_filters();
            })?);
        }

        Ok(())
    }
}
