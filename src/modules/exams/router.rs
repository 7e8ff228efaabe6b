use crate::modules::exams::controller::{
    create_exam, create_exam_paper, get_exam, get_exam_papers, get_exams,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

pub fn init_exams_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_exam).get(get_exams))
        .route("/{exam_id}", get(get_exam))
        .route("/{exam_id}/papers", post(create_exam_paper).get(get_exam_papers))
}
