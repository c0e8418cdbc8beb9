// ============================================================================
// ROUTE VIEWMODEL - Despacho de rutas y render por vista
// ============================================================================
// Cada render hace como máximo una petición y siempre devuelve un Screen
// completo: la vista o la vista de error, nunca algo a medias.
// ============================================================================

use crate::models::{AccountsQuery, AppError, View};
use crate::services::{load_templates, AccountsBackend};
use crate::state::AppState;
use crate::views::{render_dashboard, render_landing, render_static, Screen};

/// ViewModel del router: decide qué vista mostrar y la renderiza
pub struct RouteViewModel<B: AccountsBackend> {
    backend: B,
    state: AppState,
}

impl<B: AccountsBackend> RouteViewModel<B> {
    /// Crear ViewModel con su backend y el estado compartido
    pub fn new(backend: B, state: AppState) -> Self {
        Self { backend, state }
    }

    /// Estado de sesión compartido
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Cargar los templates en el estado compartido
    pub async fn load_templates(&self) {
        let templates = load_templates(&self.backend).await;
        self.state.set_templates(templates);
    }

    /// Renderizar la vista que corresponde a `path`
    pub async fn render_path(&self, path: &str) -> Screen {
        let view = View::from_path(path);
        log::info!("[ROUTER] {} -> {}", path, view);
        self.render_view(view, 1).await
    }

    /// Renderizar una vista; cualquier fallo termina en la vista de error
    pub async fn render_view(&self, view: View, page: u32) -> Screen {
        let result = match view {
            View::Landing => self.landing().await,
            View::Dashboard => self.dashboard(page).await,
            View::About | View::RelatedWork => self.static_page(view),
            View::NotFound => {
                log::warn!("[ROUTER] No view for this path");
                Ok(Screen::error(View::NotFound))
            }
        };

        self.state.set_current(view, page.max(1));
        result.unwrap_or_else(|e| {
            log::error!("[ROUTER] Error rendering {}: {}", view, e);
            Screen::error(view)
        })
    }

    /// Volver a renderizar la última vista en su página, `None` si aún no hay ninguna
    pub async fn rerender_current(&self) -> Option<Screen> {
        let view = self.state.current_view()?;
        let page = self.state.current_page();
        log::info!("[ROUTER] Re-rendering {} (page {})", view, page);
        Some(self.render_view(view, page).await)
    }

    /// Página del dashboard con los filtros actuales
    pub async fn render_dashboard(&self, page: u32) -> Screen {
        self.render_view(View::Dashboard, page).await
    }

    /// Cambio en `#countryFilter`: vuelve a la página 1
    pub async fn select_country(&self, country: &str) -> Screen {
        self.state.set_country(country);
        self.render_dashboard(1).await
    }

    /// Enter o botón de búsqueda: vuelve a la página 1
    pub async fn search(&self, term: &str) -> Screen {
        self.state.set_search(term);
        self.render_dashboard(1).await
    }

    /// Botón "clear": resetea filtros y vuelve a la página 1
    pub async fn clear_filters(&self) -> Screen {
        self.state.clear_filters();
        self.render_dashboard(1).await
    }

    async fn landing(&self) -> Result<Screen, AppError> {
        let template = self.state.template(View::Landing)?;
        let page = self.backend.fetch_accounts(&AccountsQuery::all()).await?;
        Ok(Screen::Page {
            view: View::Landing,
            html: render_landing(&template, &page, &self.backend.download_url()),
        })
    }

    async fn dashboard(&self, page: u32) -> Result<Screen, AppError> {
        let template = self.state.template(View::Dashboard)?;
        let filters = self.state.filters();
        let query = AccountsQuery::for_page(page, &filters);
        let result = self.backend.fetch_accounts(&query).await?;
        Ok(Screen::Dashboard(render_dashboard(
            &template,
            &result,
            &filters,
            &self.backend.download_url(),
        )))
    }

    fn static_page(&self, view: View) -> Result<Screen, AppError> {
        let template = self.state.template(view)?;
        Ok(Screen::Page { view, html: render_static(&template) })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Account, AccountsPage, Filters};
    use futures::executor::block_on;
    use std::cell::RefCell;
    use std::collections::HashMap;

    struct FakeBackend {
        page: Result<AccountsPage, AppError>,
        templates: HashMap<&'static str, String>,
        queries: RefCell<Vec<AccountsQuery>>,
        template_requests: RefCell<Vec<String>>,
    }

    impl FakeBackend {
        fn new(page: Result<AccountsPage, AppError>) -> Self {
            let templates = [
                ("landing", "<p>{{totalAccounts}}|{{totalCountries}}|{{lastUpdate}}</p><a href=\"{{downloadUrl}}\">CSV</a>"),
                ("dashboard", "<h2>{{currentPage}}/{{totalPages}}</h2><a href=\"{{downloadUrl}}\">CSV</a><tbody id=\"accountsList\"></tbody>"),
                ("about", "<h1>About</h1>"),
                ("related-work", "<h1>Related work</h1>"),
            ]
            .into_iter()
            .map(|(k, v)| (k, v.to_string()))
            .collect();

            Self {
                page,
                templates,
                queries: RefCell::new(Vec::new()),
                template_requests: RefCell::new(Vec::new()),
            }
        }

        fn without_template(mut self, name: &str) -> Self {
            self.templates.remove(name);
            self
        }
    }

    impl AccountsBackend for FakeBackend {
        async fn fetch_accounts(&self, query: &AccountsQuery) -> Result<AccountsPage, AppError> {
            self.queries.borrow_mut().push(query.clone());
            self.page.clone()
        }

        async fn fetch_template(&self, name: &str) -> Result<String, AppError> {
            self.template_requests.borrow_mut().push(name.to_string());
            self.templates
                .get(name)
                .cloned()
                .ok_or(AppError::Http { status: 404, status_text: "Not Found".to_string() })
        }

        fn download_url(&self) -> String {
            "https://csv.example/api/download".to_string()
        }
    }

    fn accounts(n: usize) -> Vec<Account> {
        (0..n)
            .map(|i| Account {
                id: i.to_string(),
                name: format!("user{}", i),
                countries: vec!["DE".to_string()],
                last_reported_at: "2024-06-01T00:00:00Z".parse().unwrap(),
                report_count: 1,
                data_format_version: "1.0".to_string(),
            })
            .collect()
    }

    fn page(n: usize, current: u32, total: u32) -> AccountsPage {
        AccountsPage {
            accounts: accounts(n),
            total_count: 20 * total as u64,
            unique_countries: vec!["DE".to_string(), "FR".to_string()],
            current_page: current,
            total_pages: total,
        }
    }

    fn ready(backend: FakeBackend) -> RouteViewModel<FakeBackend> {
        let vm = RouteViewModel::new(backend, AppState::new());
        block_on(vm.load_templates());
        vm
    }

    #[test]
    fn loads_all_four_templates() {
        let vm = ready(FakeBackend::new(Ok(page(0, 1, 0))));
        assert_eq!(vm.state().templates.borrow().len(), 4);
        let mut requested = vm.backend.template_requests.borrow().clone();
        requested.sort();
        assert_eq!(requested, vec!["about", "dashboard", "landing", "related-work"]);
    }

    #[test]
    fn unknown_path_renders_not_found() {
        let vm = ready(FakeBackend::new(Ok(page(1, 1, 1))));
        for path in ["/nope", "/dashboard/", "/api/accounts"] {
            let screen = block_on(vm.render_path(path));
            assert!(screen.is_error());
            assert_eq!(screen.view(), View::NotFound);
            assert!(screen.html().contains("Page not found"));
        }
        assert!(vm.backend.queries.borrow().is_empty());
    }

    #[test]
    fn landing_fills_counters_from_unfiltered_request() {
        let vm = ready(FakeBackend::new(Ok(page(3, 1, 2))));
        let screen = block_on(vm.render_path("/"));

        assert_eq!(screen.view(), View::Landing);
        assert!(screen.html().starts_with("<p>40|2|"));
        assert_eq!(*vm.backend.queries.borrow(), vec![AccountsQuery::all()]);
    }

    #[test]
    fn static_pages_need_no_request() {
        let vm = ready(FakeBackend::new(Ok(page(0, 1, 0))));
        assert_eq!(block_on(vm.render_path("/about")).html(), "<h1>About</h1>");
        assert_eq!(block_on(vm.render_path("/related-work")).html(), "<h1>Related work</h1>");
        assert!(vm.backend.queries.borrow().is_empty());
    }

    #[test]
    fn dashboard_shows_n_rows_and_p_pages() {
        let vm = ready(FakeBackend::new(Ok(page(7, 2, 3))));
        let screen = block_on(vm.render_dashboard(2));

        let Screen::Dashboard(dashboard) = screen else {
            panic!("expected dashboard");
        };
        assert_eq!(dashboard.row_count, 7);
        assert_eq!(dashboard.account_rows.matches("username-col").count(), 7);
        assert_eq!(dashboard.total_pages, 3);
        assert!(dashboard.html.contains("<h2>2/3</h2>"));
        assert!(dashboard.pagination.contains(r#"data-page="3">[3]</a>"#));
        assert!(!dashboard.pagination.contains("[4]"));
        assert_eq!(vm.backend.queries.borrow()[0].page, Some(2));
        assert_eq!(vm.state().current_page(), 2);
    }

    #[test]
    fn country_filter_is_sent_and_preserved() {
        let vm = ready(FakeBackend::new(Ok(page(2, 1, 1))));
        let screen = block_on(vm.select_country("FR"));

        let query = vm.backend.queries.borrow().last().cloned().unwrap();
        assert_eq!(query.country.as_deref(), Some("FR"));
        assert_eq!(query.page, Some(1));

        let Screen::Dashboard(dashboard) = screen else {
            panic!("expected dashboard");
        };
        assert_eq!(dashboard.selected_country, "FR");
        assert!(dashboard.country_options.contains(r#"<option value="FR" selected>France</option>"#));

        // Paging keeps the filter
        block_on(vm.render_dashboard(2));
        let query = vm.backend.queries.borrow().last().cloned().unwrap();
        assert_eq!(query.country.as_deref(), Some("FR"));
        assert_eq!(query.page, Some(2));
    }

    #[test]
    fn search_then_clear() {
        let vm = ready(FakeBackend::new(Ok(page(1, 1, 1))));
        block_on(vm.select_country("DE"));
        let screen = block_on(vm.search("bot farm"));
        if let Screen::Dashboard(dashboard) = &screen {
            assert_eq!(dashboard.search_value, "bot farm");
        } else {
            panic!("expected dashboard");
        }
        let query = vm.backend.queries.borrow().last().cloned().unwrap();
        assert_eq!(query.to_query_string(), "page=1&country=DE&search=bot%20farm");

        block_on(vm.clear_filters());
        assert_eq!(vm.state().filters(), Filters::default());
        let query = vm.backend.queries.borrow().last().cloned().unwrap();
        assert_eq!(query.to_query_string(), "page=1");
    }

    #[test]
    fn failed_fetch_renders_error_view_everywhere() {
        let vm = ready(FakeBackend::new(Err(AppError::Network("connection refused".to_string()))));

        let landing = block_on(vm.render_path("/"));
        assert!(landing.is_error());
        assert!(landing.html().contains("Failed to load landing page data"));

        let dashboard = block_on(vm.render_path("/dashboard"));
        assert!(dashboard.is_error());
        assert_eq!(dashboard.view(), View::Dashboard);
        assert!(dashboard.html().contains("Failed to load dashboard data"));
        assert!(!dashboard.html().contains("accountsList"));
    }

    #[test]
    fn download_link_comes_from_backend() {
        let vm = ready(FakeBackend::new(Ok(page(1, 1, 1))));

        let landing = block_on(vm.render_path("/"));
        assert!(landing.html().contains(r#"<a href="https://csv.example/api/download">CSV</a>"#));

        let dashboard = block_on(vm.render_path("/dashboard"));
        assert!(dashboard.html().contains(r#"<a href="https://csv.example/api/download">CSV</a>"#));
    }

    #[test]
    fn rerender_repeats_current_view_and_page() {
        let vm = ready(FakeBackend::new(Ok(page(2, 3, 4))));
        assert!(block_on(vm.rerender_current()).is_none());

        block_on(vm.select_country("DE"));
        block_on(vm.render_dashboard(3));
        let screen = block_on(vm.rerender_current()).unwrap();

        assert_eq!(screen.view(), View::Dashboard);
        let queries = vm.backend.queries.borrow();
        assert_eq!(queries.len(), 3);
        assert_eq!(queries[2].to_query_string(), "page=3&country=DE");
    }

    #[test]
    fn rerender_of_not_found_stays_not_found() {
        let vm = ready(FakeBackend::new(Ok(page(1, 1, 1))));
        block_on(vm.render_path("/missing"));

        let screen = block_on(vm.rerender_current()).unwrap();
        assert_eq!(screen.view(), View::NotFound);
        assert!(vm.backend.queries.borrow().is_empty());
    }

    #[test]
    fn malformed_response_renders_error_view() {
        let parse_error = crate::services::parse_accounts_page("<html>Bad Gateway</html>").unwrap_err();
        let vm = ready(FakeBackend::new(Err(parse_error)));

        let dashboard = block_on(vm.render_path("/dashboard"));
        assert!(dashboard.is_error());
        assert!(dashboard.html().contains("Failed to load dashboard data"));

        let landing = block_on(vm.render_path("/"));
        assert!(landing.is_error());
        assert!(landing.html().contains("Failed to load landing page data"));
    }

    #[test]
    fn http_error_renders_error_view() {
        let vm = ready(FakeBackend::new(Err(AppError::Http {
            status: 500,
            status_text: "Internal Server Error".to_string(),
        })));
        assert!(block_on(vm.render_dashboard(1)).is_error());
    }

    #[test]
    fn missing_template_renders_error_view() {
        let vm = ready(FakeBackend::new(Ok(page(1, 1, 1))).without_template("about").without_template("dashboard"));
        assert_eq!(vm.state().templates.borrow().len(), 2);

        let about = block_on(vm.render_path("/about"));
        assert!(about.is_error());
        assert!(about.html().contains("Failed to load about page"));

        let dashboard = block_on(vm.render_path("/dashboard"));
        assert!(dashboard.is_error());
        assert!(vm.backend.queries.borrow().is_empty());

        // The others still work
        assert!(!block_on(vm.render_path("/related-work")).is_error());
    }
}
