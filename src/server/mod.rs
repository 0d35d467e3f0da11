//! HTTP surface of the portfolio: public pages plus the admin panel.

pub mod admin;
pub mod auth;
pub mod error;
pub mod site;
pub mod views;

use axum::Router;
use std::sync::Arc;
use std::time::Duration;
use tower_http::trace::TraceLayer;

use crate::db::DataStore;

pub use auth::{hash_password, verify_credentials, SessionStore};
pub use error::AppError;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<DataStore>,
    pub sessions: Arc<SessionStore>,
}

impl AppState {
    pub fn new(store: DataStore, session_ttl: Duration) -> Self {
        Self {
            store: Arc::new(store),
            sessions: Arc::new(SessionStore::new(session_ttl)),
        }
    }
}

/// Builds the full application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .merge(site::routes())
        .nest("/admin", admin::routes(state.clone()))
        .fallback(site::not_found)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
