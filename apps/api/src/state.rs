use crate::config::Config;
use crate::layout::PageConfig;

/// Shared application state injected into all route handlers via Axum extractors.
/// Read-only after startup; each render builds its own layout state.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Page geometry for every report. Defaults to A4 portrait.
    pub page_config: PageConfig,
}
