use crate::modules::rankings::controller::calculate_rankings;
use crate::state::AppState;
use axum::{Router, routing::post};

pub fn init_rankings_router() -> Router<AppState> {
    Router::new().route("/", post(calculate_rankings))
}
