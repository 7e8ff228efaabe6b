use crate::docs::ApiDoc;
use crate::logging::logging_middleware;
use crate::modules::analytics::router::init_analytics_router;
use crate::modules::exams::router::init_exams_router;
use crate::modules::marks::router::{init_marks_router, init_paper_marks_router};
use crate::modules::publications::router::init_publications_router;
use crate::modules::rankings::router::init_rankings_router;
use crate::modules::results::router::init_results_router;
use crate::modules::schools::router::init_schools_router;
use crate::modules::students::router::init_students_router;
use crate::state::AppState;
use axum::http::{HeaderValue, Method};
use axum::{Router, middleware};
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable as _};

pub fn init_router(state: AppState) -> Router {
    Router::new()
        .merge(Scalar::with_url("/scalar", ApiDoc::openapi()))
        .nest("/api/schools", init_schools_router())
        .nest("/api/schools/{school_id}/students", init_students_router())
        .nest("/api/schools/{school_id}/exams", init_exams_router())
        .nest("/api/schools/{school_id}/marks", init_marks_router())
        .nest(
            "/api/schools/{school_id}/papers/{paper_id}/marks",
            init_paper_marks_router(),
        )
        .nest(
            "/api/schools/{school_id}/exams/{exam_id}/results",
            init_results_router(),
        )
        .nest(
            "/api/schools/{school_id}/exams/{exam_id}/rankings",
            init_rankings_router(),
        )
        .nest(
            "/api/schools/{school_id}/exams/{exam_id}/publish",
            init_publications_router(),
        )
        .nest(
            "/api/schools/{school_id}/exams/{exam_id}/analytics",
            init_analytics_router(),
        )
        .with_state(state.clone())
        .layer({
            let allowed_origins: Vec<HeaderValue> = state
                .cors_config
                .allowed_origins
                .iter()
                .filter_map(|origin| origin.parse().ok())
                .collect();

            CorsLayer::new()
                .allow_origin(allowed_origins)
                .allow_methods([
                    Method::GET,
                    Method::POST,
                    Method::PUT,
                    Method::PATCH,
                    Method::DELETE,
                    Method::OPTIONS,
                ])
                .allow_headers([
                    axum::http::header::AUTHORIZATION,
                    axum::http::header::CONTENT_TYPE,
                    axum::http::header::ACCEPT,
                ])
                .allow_credentials(true)
        })
        .layer(middleware::from_fn(logging_middleware))
}
