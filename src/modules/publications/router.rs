use crate::modules::publications::controller::publish_results;
use crate::state::AppState;
use axum::{Router, routing::post};

pub fn init_publications_router() -> Router<AppState> {
    Router::new().route("/", post(publish_results))
}
