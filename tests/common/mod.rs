use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use gradecast::config::cors::CorsConfig;
use gradecast::config::grading::GradingConfig;
use gradecast::router::init_router;
use gradecast::state::AppState;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;
use uuid::Uuid;

#[allow(dead_code)]
pub fn setup_test_app(pool: PgPool) -> Router {
    dotenvy::dotenv().ok();
    let state = AppState {
        db: pool,
        grading: GradingConfig::default(),
        cors_config: CorsConfig::from_env(),
    };
    init_router(state)
}

/// Send a JSON POST and return the status plus parsed body.
#[allow(dead_code)]
pub async fn post_json(
    app: &Router,
    uri: &str,
    body: serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_string(&body).unwrap()))
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

/// Send a GET and return the status plus parsed body.
#[allow(dead_code)]
pub async fn get_json(app: &Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

#[allow(dead_code)]
pub async fn create_test_school(pool: &PgPool, name: &str) -> Uuid {
    sqlx::query_scalar::<_, Uuid>(
        "INSERT INTO schools (name, address) VALUES ($1, $2) RETURNING id",
    )
    .bind(name)
    .bind("Test Address")
    .fetch_one(pool)
    .await
    .unwrap()
}

#[allow(dead_code)]
pub async fn create_test_student(
    pool: &PgPool,
    school_id: Uuid,
    class_name: &str,
    section_name: &str,
) -> Uuid {
    sqlx::query_scalar::<_, Uuid>(
        r#"
        INSERT INTO students (school_id, first_name, last_name, class_name, section_name)
        VALUES ($1, 'Test', 'Student', $2, $3)
        RETURNING id
        "#,
    )
    .bind(school_id)
    .bind(class_name)
    .bind(section_name)
    .fetch_one(pool)
    .await
    .unwrap()
}

#[allow(dead_code)]
pub async fn create_test_exam(pool: &PgPool, school_id: Uuid, name: &str) -> Uuid {
    sqlx::query_scalar::<_, Uuid>(
        "INSERT INTO exams (school_id, name) VALUES ($1, $2) RETURNING id",
    )
    .bind(school_id)
    .bind(name)
    .fetch_one(pool)
    .await
    .unwrap()
}

#[allow(dead_code)]
pub async fn create_test_paper(
    pool: &PgPool,
    exam_id: Uuid,
    subject: &str,
    max_marks: f64,
) -> Uuid {
    sqlx::query_scalar::<_, Uuid>(
        "INSERT INTO exam_papers (exam_id, subject, max_marks) VALUES ($1, $2, $3) RETURNING id",
    )
    .bind(exam_id)
    .bind(subject)
    .bind(max_marks)
    .fetch_one(pool)
    .await
    .unwrap()
}

/// Seed a mark that has already been through approval.
#[allow(dead_code)]
pub async fn insert_approved_mark(
    pool: &PgPool,
    school_id: Uuid,
    exam_paper_id: Uuid,
    student_id: Uuid,
    marks_obtained: f64,
) {
    sqlx::query(
        r#"
        INSERT INTO marks (school_id, exam_paper_id, student_id, marks_obtained, status)
        VALUES ($1, $2, $3, $4, 'approved')
        "#,
    )
    .bind(school_id)
    .bind(exam_paper_id)
    .bind(student_id)
    .bind(marks_obtained)
    .execute(pool)
    .await
    .unwrap();
}

#[allow(dead_code)]
pub async fn insert_pending_mark(
    pool: &PgPool,
    school_id: Uuid,
    exam_paper_id: Uuid,
    student_id: Uuid,
    marks_obtained: f64,
) {
    sqlx::query(
        r#"
        INSERT INTO marks (school_id, exam_paper_id, student_id, marks_obtained, status)
        VALUES ($1, $2, $3, $4, 'pending')
        "#,
    )
    .bind(school_id)
    .bind(exam_paper_id)
    .bind(student_id)
    .bind(marks_obtained)
    .execute(pool)
    .await
    .unwrap();
}

#[allow(dead_code)]
pub fn generate_unique_school_name() -> String {
    format!("Test School {}", Uuid::new_v4())
}
