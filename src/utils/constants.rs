// ============================================================================
// CONSTANTS - Endpoints, IDs y clases
// ============================================================================

/// Endpoint del listado de cuentas
pub const ACCOUNTS_ENDPOINT: &str = "/api/accounts";

/// Exportación CSV de todas las cuentas, enlazada desde los templates
pub const DOWNLOAD_ENDPOINT: &str = "/api/download";

/// Contenedor donde se monta cada vista
pub const ROOT_ID: &str = "app";

// IDs de elementos del template del dashboard
pub const COUNTRY_FILTER_ID: &str = "countryFilter";
pub const SEARCH_FILTER_ID: &str = "searchFilter";
pub const SEARCH_BUTTON_ID: &str = "searchButton";
pub const CLEAR_FILTERS_ID: &str = "clearFilters";
pub const ACCOUNTS_LIST_ID: &str = "accountsList";
pub const PAGINATION_ID: &str = "paginationControls";

// Clases de la paginación
pub const PAGE_LINK_CLASS: &str = "page-link";
pub const DISABLED_CLASS: &str = "disabled";

/// Texto cuando no hay cuentas de las que sacar una fecha
pub const NO_UPDATE: &str = "N/A";
