use crate::modules::analytics::controller::{
    generate_analytics, get_analytics, get_distribution,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

pub fn init_analytics_router() -> Router<AppState> {
    Router::new()
        .route("/", post(generate_analytics).get(get_analytics))
        .route("/distribution", get(get_distribution))
}
