mod sensor {
    mod current;
    mod submission;
    mod submit;

    pub use current::current;
    pub use submit::submit;
}

mod history {
    mod clear;
    mod list;

    pub use clear::clear;
    pub use list::list;
}

mod health;

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};

use crate::storage::Storage;

pub fn router(storage: Arc<Storage>) -> Router {
    Router::new()
        .route("/api/data", get(sensor::current).post(sensor::submit))
        .route("/api/history", get(history::list))
        .route("/api/clear-history", post(history::clear))
        .route("/health", get(health::health))
        .layer(cors())
        .with_state(storage)
}

// Dashboards are served from other origins.
fn cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}
