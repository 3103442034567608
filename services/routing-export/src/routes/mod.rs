use axum::{routing::post, Router};

use crate::{handlers::export_routing, AppState};

pub fn create_api_routes() -> Router<AppState> {
    Router::new().route("/routing/export", post(export_routing))
}
