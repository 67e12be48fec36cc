use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

use crate::dispatcher::Dispatcher;

pub mod handlers;
pub mod models;
pub mod sessions;

use sessions::SessionStore;

pub struct AppState {
    pub dispatcher: Arc<Dispatcher>,
    pub sessions: SessionStore,
}

impl AppState {
    pub fn new(dispatcher: Arc<Dispatcher>) -> Self {
        Self::with_sessions(dispatcher, SessionStore::default())
    }

    pub fn with_sessions(dispatcher: Arc<Dispatcher>, sessions: SessionStore) -> Self {
        Self {
            dispatcher,
            sessions,
        }
    }
}

pub fn create_router(state: Arc<AppState>) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/search", post(handlers::search_handler))
        .route("/api/tools/:tool", post(handlers::tool_handler))
        .route("/api/sessions/:session_id", get(handlers::session_handler))
        .route("/api/agents", get(handlers::agents_handler))
        .with_state(state)
        .layer(cors)
}
