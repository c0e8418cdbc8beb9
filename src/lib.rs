// ============================================================================
// TAKEDOWN OBSERVER - WASM CLIENT
// ============================================================================
// - Views: funciones puras que generan HTML a partir de templates
// - ViewModels: despacho de rutas, una petición por render, errores a la vista de error
// - Services: solo HTTP
// - State: estado de sesión con Rc<RefCell> (filtros, templates, vista actual)
// - App: pegamento DOM alrededor de #app
// ============================================================================

pub mod config;
pub mod models;
pub mod services;
pub mod state;
pub mod utils;
pub mod viewmodels;
pub mod views;
mod app;
mod dom;

use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use crate::app::App;
use crate::config::CONFIG;

// Mantiene viva la App durante toda la página
thread_local! {
    static APP: RefCell<Option<App>> = RefCell::new(None);
}

/// Punto de entrada WASM
#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    if CONFIG.is_logging_enabled() {
        wasm_logger::init(wasm_logger::Config::new(CONFIG.log_level()));
    }
    log::info!("[APP] Takedown Observer client starting");

    let app = App::new()?;
    app.start();

    APP.with(|cell| {
        *cell.borrow_mut() = Some(app);
    });
    Ok(())
}

/// Volver a renderizar la vista actual (llamable desde JavaScript)
#[wasm_bindgen]
pub fn rerender_app() {
    APP.with(|cell| match cell.borrow().as_ref() {
        Some(app) => app.rerender(),
        None => log::warn!("[APP] App is not initialised"),
    });
}
