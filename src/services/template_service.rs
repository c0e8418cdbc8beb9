// ============================================================================
// TEMPLATE SERVICE - Carga de los cuatro fragmentos al arrancar
// ============================================================================

use futures::join;
use crate::models::{AppError, View};
use crate::services::traits::AccountsBackend;
use crate::state::TemplateCache;

/// Descargar todos los templates en paralelo. Un fragmento que falla se
/// loguea y queda fuera del cache; esa vista mostrará la vista de error.
pub async fn load_templates<B: AccountsBackend>(backend: &B) -> TemplateCache {
    let [landing, dashboard, about, related_work] = View::templated();

    let (landing_html, dashboard_html, about_html, related_work_html) = join!(
        fetch_for(backend, landing),
        fetch_for(backend, dashboard),
        fetch_for(backend, about),
        fetch_for(backend, related_work),
    );

    let mut cache = TemplateCache::default();
    for (view, result) in [
        (landing, landing_html),
        (dashboard, dashboard_html),
        (about, about_html),
        (related_work, related_work_html),
    ] {
        match result {
            Ok(html) => cache.insert(view, html),
            Err(e) => log::error!("[TEMPLATES] Error loading {} template: {}", view, e),
        }
    }

    if cache.is_empty() {
        log::warn!("[TEMPLATES] No template loaded, every view will show the error page");
    } else {
        log::info!("[TEMPLATES] {} of 4 templates loaded", cache.len());
    }
    cache
}

/// Template de una vista concreta
async fn fetch_for<B: AccountsBackend>(backend: &B, view: View) -> Result<String, AppError> {
    let name = view
        .template_name()
        .ok_or_else(|| AppError::MissingTemplate(view.to_string()))?;
    backend.fetch_template(name).await
}
