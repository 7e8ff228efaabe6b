use crate::modules::students::controller::{create_student, get_student, get_students};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

pub fn init_students_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_student).get(get_students))
        .route("/{student_id}", get(get_student))
}
