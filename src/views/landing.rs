// ============================================================================
// LANDING VIEW - Contadores de portada
// ============================================================================

use crate::models::AccountsPage;
use crate::utils::constants::NO_UPDATE;
use crate::utils::time::format_local;
use crate::views::template::fill;

/// Portada: contadores principales y hora del último reporte
pub fn render_landing(template: &str, page: &AccountsPage, download_url: &str) -> String {
    fill(
        template,
        &[
            ("totalAccounts", page.total_count.to_string()),
            ("totalCountries", page.unique_countries.len().to_string()),
            ("lastUpdate", last_update_label(page)),
            ("downloadUrl", download_url.to_string()),
        ],
    )
}

/// Hora formateada del último reporte, `N/A` si no hay ninguno
pub fn last_update_label(page: &AccountsPage) -> String {
    page.last_update()
        .map(|ts| format_local(&ts))
        .unwrap_or_else(|| NO_UPDATE.to_string())
}
