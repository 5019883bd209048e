use crate::settings::Settings;
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub settings: Arc<Settings>,
}
