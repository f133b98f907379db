//! Shared application state for request handlers.

use std::sync::Arc;

use crate::config::AppConfig;
use crate::horoscope::HoroscopeService;

/// Shared application state, cloneable across handlers via Arc-wrapped fields.
///
/// Contains the application configuration and the horoscope service. All of
/// it is read-only after startup; requests never share mutable state.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub horoscopes: HoroscopeService,
}

impl AppState {
    /// Creates a new application state from the given configuration and service.
    pub fn new(config: AppConfig, horoscopes: HoroscopeService) -> Self {
        Self {
            config: Arc::new(config),
            horoscopes,
        }
    }
}
