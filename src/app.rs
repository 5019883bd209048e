use std::sync::Arc;

use axum::{Router, handler::HandlerWithoutStateExt, routing::get};
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::error;
use crate::handlers;
use crate::routes;
use crate::settings::Settings;
use crate::state::AppState;

/// A fully wired application: the router plus the settings it was
/// built from.
pub struct App {
    state: AppState,
    router: Router,
}

impl App {
    /// Whether this application was built from the test settings.
    pub fn testing(&self) -> bool {
        self.state.settings.testing
    }

    pub fn settings(&self) -> &Settings {
        &self.state.settings
    }

    pub fn into_router(self) -> Router {
        self.router
    }
}

/// An application factory: build a complete application from a
/// settings object.
///
/// Wires the route table, the static-asset fallback chained into the
/// 404 page, request tracing, and shared state.
pub fn create_app(settings: Settings) -> App {
    let state = AppState {
        settings: Arc::new(settings),
    };

    // Static assets live at the web root; anything the directory does
    // not contain renders the 404 page.
    let static_files = ServeDir::new(&state.settings.static_dir)
        .not_found_service(error::not_found.into_service());

    let router = register_routes(Router::new())
        .fallback_service(static_files)
        .layer(TraceLayer::new_for_http())
        .with_state(state.clone());

    App { state, router }
}

/// Register every entry of the route table on the router.
fn register_routes(router: Router<AppState>) -> Router<AppState> {
    router.route(routes::HOME, get(handlers::home_handler))
}
