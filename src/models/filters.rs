// ============================================================================
// FILTERS - Filtros de sesión y parámetros de consulta
// ============================================================================

/// Filtros del dashboard. Solo viven durante la sesión, nunca se persisten.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filters {
    pub country: String,
    pub search: String,
}

impl Filters {
    /// Limpiar país y búsqueda (botón "clear")
    pub fn clear(&mut self) {
        self.country.clear();
        self.search.clear();
    }
}

/// Parámetros de `GET /api/accounts`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccountsQuery {
    pub page: Option<u32>,
    pub country: Option<String>,
    pub search: Option<String>,
}

impl AccountsQuery {
    /// Query sin filtros (landing)
    pub fn all() -> Self {
        Self::default()
    }

    /// Query del dashboard para `page` con los filtros actuales. Los vacíos se omiten.
    pub fn for_page(page: u32, filters: &Filters) -> Self {
        let non_empty = |s: &str| (!s.is_empty()).then(|| s.to_string());
        Self {
            page: Some(page.max(1)),
            country: non_empty(&filters.country),
            search: non_empty(&filters.search),
        }
    }

    /// Query string codificada, sin el `?` inicial
    pub fn to_query_string(&self) -> String {
        let mut params: Vec<String> = Vec::new();
        if let Some(page) = self.page {
            params.push(format!("page={}", page));
        }
        if let Some(country) = &self.country {
            params.push(format!("country={}", urlencoding::encode(country)));
        }
        if let Some(search) = &self.search {
            params.push(format!("search={}", urlencoding::encode(search)));
        }
        params.join("&")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn landing_query_has_no_parameters() {
        assert_eq!(AccountsQuery::all().to_query_string(), "");
    }

    #[test]
    fn empty_filters_are_omitted() {
        let query = AccountsQuery::for_page(3, &Filters::default());
        assert_eq!(query.to_query_string(), "page=3");
    }

    #[test]
    fn filters_are_encoded() {
        let filters = Filters {
            country: "DE".to_string(),
            search: "foo bar&baz".to_string(),
        };
        let query = AccountsQuery::for_page(1, &filters);
        assert_eq!(query.to_query_string(), "page=1&country=DE&search=foo%20bar%26baz");
    }

    #[test]
    fn page_zero_is_clamped() {
        assert_eq!(AccountsQuery::for_page(0, &Filters::default()).page, Some(1));
    }

    #[test]
    fn clear_resets_both_fields() {
        let mut filters = Filters {
            country: "IN".to_string(),
            search: "abc".to_string(),
        };
        filters.clear();
        assert_eq!(filters, Filters::default());
    }
}
