// ============================================================================
// DASHBOARD VIEW - Tabla de cuentas, filtros y paginación
// ============================================================================
// Primero se monta el template principal; después estos fragmentos se
// escriben en los elementos que declara (#countryFilter, #accountsList, ...).
// ============================================================================

use crate::models::{Account, AccountsPage, Filters};
use crate::utils::countries::{country_name, sort_by_name};
use crate::utils::html::escape;
use crate::utils::time::format_local;
use crate::utils::PAGE_LINK_CLASS;
use crate::views::landing::last_update_label;
use crate::views::template::fill;

/// Dashboard renderizado completo, listo para montar
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardView {
    /// Template con los placeholders ya sustituidos
    pub html: String,
    /// `<option>`s de `#countryFilter`
    pub country_options: String,
    /// Valor que se restaura en `#countryFilter`
    pub selected_country: String,
    /// Valor que se restaura en `#searchFilter`
    pub search_value: String,
    /// Filas de `#accountsList`
    pub account_rows: String,
    /// Cantidad de cuentas renderizadas
    pub row_count: usize,
    /// Links de `#paginationControls`
    pub pagination: String,
    pub current_page: u32,
    pub total_pages: u32,
}

/// Una entrada de la barra de paginación
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageLink {
    pub label: String,
    pub page: u32,
    pub active: bool,
    pub disabled: bool,
}

impl PageLink {
    fn new(label: String, page: u32) -> Self {
        Self { label, page, active: false, disabled: false }
    }
}

/// Renderizar el dashboard completo para una página de resultados
pub fn render_dashboard(
    template: &str,
    page: &AccountsPage,
    filters: &Filters,
    download_url: &str,
) -> DashboardView {
    let html = fill(
        template,
        &[
            ("lastUpdate", last_update_label(page)),
            ("totalAccounts", page.total_count.to_string()),
            ("totalCountries", page.unique_countries.len().to_string()),
            ("currentPage", page.current_page.to_string()),
            ("totalPages", page.total_pages.to_string()),
            ("downloadUrl", download_url.to_string()),
        ],
    );

    DashboardView {
        html,
        country_options: render_country_options(&page.unique_countries, &filters.country),
        selected_country: filters.country.clone(),
        search_value: filters.search.clone(),
        account_rows: render_account_rows(&page.accounts),
        row_count: page.accounts.len(),
        pagination: render_pagination(&pagination_links(page.current_page, page.total_pages)),
        current_page: page.current_page,
        total_pages: page.total_pages,
    }
}

/// Lista de `<option>` del select de país, ordenada por nombre
pub fn render_country_options(codes: &[String], selected: &str) -> String {
    let mut sorted = codes.to_vec();
    sort_by_name(&mut sorted);

    let mut html = String::from(r#"<option value="">All Countries</option>"#);
    for code in &sorted {
        let marker = if code == selected { " selected" } else { "" };
        html.push_str(&format!(
            r#"<option value="{}"{}>{}</option>"#,
            escape(code),
            marker,
            escape(country_name(code))
        ));
    }
    html
}

/// Una `<tr>` por cuenta, o una fila "No accounts found"
pub fn render_account_rows(accounts: &[Account]) -> String {
    if accounts.is_empty() {
        return r#"<tr><td colspan="3">No accounts found</td></tr>"#.to_string();
    }

    accounts
        .iter()
        .map(render_account_row)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Fila de una cuenta: usuario, países y fecha
fn render_account_row(account: &Account) -> String {
    let countries = account
        .countries
        .iter()
        .map(|code| format!(r#"<span class="country-item">{}</span>"#, escape(country_name(code))))
        .collect::<Vec<_>>()
        .join(" ");

    format!(
        r#"<tr>
    <td class="username-col">@{}</td>
    <td class="countries-col">{}</td>
    <td class="date-col">{}</td>
</tr>"#,
        escape(&account.name),
        countries,
        format_local(&account.last_reported_at)
    )
}

/// `[PREV] [n-1] [n] [n+1] [NEXT]`, vecinos solo cuando existen
pub fn pagination_links(current: u32, total: u32) -> Vec<PageLink> {
    let mut links = Vec::with_capacity(5);

    let mut prev = PageLink::new("[PREV]".to_string(), current.saturating_sub(1));
    prev.disabled = current <= 1;
    links.push(prev);

    if current > 1 {
        links.push(PageLink::new(format!("[{}]", current - 1), current - 1));
    }

    let mut active = PageLink::new(format!("[{}]", current), current);
    active.active = true;
    links.push(active);

    if current < total {
        links.push(PageLink::new(format!("[{}]", current + 1), current + 1));
    }

    let mut next = PageLink::new("[NEXT]".to_string(), current + 1);
    next.disabled = current >= total;
    links.push(next);

    links
}

/// HTML de los links de paginación, cada uno con `data-page`
pub fn render_pagination(links: &[PageLink]) -> String {
    links
        .iter()
        .map(|link| {
            let mut class = PAGE_LINK_CLASS.to_string();
            if link.active {
                class.push_str(" active");
            }
            if link.disabled {
                class.push_str(" disabled");
            }
            format!(
                r##"<a href="#" class="{}" data-page="{}">{}</a>"##,
                class, link.page, link.label
            )
        })
        .collect()
}
