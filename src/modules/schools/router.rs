use crate::modules::schools::controller::{create_school, get_school, get_schools};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

pub fn init_schools_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_school).get(get_schools))
        .route("/{school_id}", get(get_school))
}
