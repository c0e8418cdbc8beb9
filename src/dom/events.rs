// ============================================================================
// EVENT HANDLING - Sistema de eventos
// ============================================================================
// GESTIÓN DE MEMORIA:
// - Listeners en elementos de #app: se devuelven como `Listener`. Al hacer
//   drop se quita el listener del elemento y se libera el closure. La App
//   guarda los del render actual y los suelta antes del siguiente mount.
// - Listeners globales (window): solo se registran UNA VEZ al inicio, por eso
//   on_popstate usa closure.forget().
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, KeyboardEvent, MouseEvent, PopStateEvent};

/// Listener registrado en un elemento. Vive mientras viva este valor.
pub struct Listener {
    element: Element,
    event_type: &'static str,
    closure: Closure<dyn FnMut(Event)>,
}

impl Listener {
    /// Registrar un listener genérico
    pub fn new<F>(element: &Element, event_type: &'static str, handler: F) -> Result<Self, JsValue>
    where
        F: FnMut(Event) + 'static,
    {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        element.add_event_listener_with_callback(event_type, closure.as_ref().unchecked_ref())?;
        Ok(Self {
            element: element.clone(),
            event_type,
            closure,
        })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        // Si el elemento ya no está en el DOM esto no falla; solo libera el callback
        let _ = self
            .element
            .remove_event_listener_with_callback(self.event_type, self.closure.as_ref().unchecked_ref());
    }
}

/// Click (MouseEvent)
pub fn on_click<F>(element: &Element, mut handler: F) -> Result<Listener, JsValue>
where
    F: FnMut(MouseEvent) + 'static,
{
    Listener::new(element, "click", move |e: Event| {
        if let Ok(mouse) = e.dyn_into::<MouseEvent>() {
            handler(mouse);
        }
    })
}

/// Change de un `<select>` o `<input>`
pub fn on_change<F>(element: &Element, handler: F) -> Result<Listener, JsValue>
where
    F: FnMut(Event) + 'static,
{
    Listener::new(element, "change", handler)
}

/// Keypress (KeyboardEvent)
pub fn on_keypress<F>(element: &Element, mut handler: F) -> Result<Listener, JsValue>
where
    F: FnMut(KeyboardEvent) + 'static,
{
    Listener::new(element, "keypress", move |e: Event| {
        if let Ok(key) = e.dyn_into::<KeyboardEvent>() {
            handler(key);
        }
    })
}

/// Navegación atrás/adelante. Registrar UNA sola vez.
pub fn on_popstate<F>(handler: F) -> Result<(), JsValue>
where
    F: FnMut(PopStateEvent) + 'static,
{
    let win = web_sys::window().ok_or_else(|| JsValue::from_str("No window"))?;
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(PopStateEvent)>);
    win.add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref())?;
    // Nota: closure.forget() mantiene vivo el closure durante toda la página
    closure.forget();
    Ok(())
}
