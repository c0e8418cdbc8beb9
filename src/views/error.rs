// ERROR VIEW - Pantalla de error genérica

use crate::utils::html::escape;

/// Pantalla de error genérica. También se usa para rutas desconocidas.
pub fn render_error(message: &str) -> String {
    format!(
        r#"
        <div class="error-container">
            <div class="data-block">
                <div class="block-header">&gt;_ Error</div>
                <pre class="data-display">{}</pre>
                <a href="/" class="action-link">&gt;_ Return Home</a>
            </div>
        </div>
    "#,
        escape(message)
    )
}
