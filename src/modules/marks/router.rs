use crate::modules::marks::controller::{
    approve_mark, approve_paper_marks, get_paper_marks, reject_mark, submit_mark,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

pub fn init_marks_router() -> Router<AppState> {
    Router::new()
        .route("/", post(submit_mark))
        .route("/{mark_id}/approve", post(approve_mark))
        .route("/{mark_id}/reject", post(reject_mark))
}

pub fn init_paper_marks_router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_paper_marks))
        .route("/approve-all", post(approve_paper_marks))
}
