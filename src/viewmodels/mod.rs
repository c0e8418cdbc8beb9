// ============================================================================
// VIEWMODELS - Lógica de presentación
// ============================================================================

pub mod route_viewmodel;

pub use route_viewmodel::RouteViewModel;
