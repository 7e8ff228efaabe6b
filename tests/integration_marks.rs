mod common;

use axum::http::StatusCode;
use common::{
    create_test_exam, create_test_paper, create_test_school, create_test_student,
    generate_unique_school_name, get_json, post_json, setup_test_app,
};
use serde_json::json;
use sqlx::PgPool;

#[sqlx::test(migrations = "./migrations")]
async fn test_submit_mark_exceeding_max_is_rejected(pool: PgPool) {
    let school = create_test_school(&pool, &generate_unique_school_name()).await;
    let student = create_test_student(&pool, school, "Grade 8", "A").await;
    let exam = create_test_exam(&pool, school, "Mid-Term").await;
    let paper = create_test_paper(&pool, exam, "Mathematics", 50.0).await;

    let app = setup_test_app(pool.clone());
    let (status, body) = post_json(
        &app,
        &format!("/api/schools/{school}/marks"),
        json!({
            "exam_paper_id": paper,
            "student_id": student,
            "marks_obtained": 60.0
        }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("exceed"));
}

#[sqlx::test(migrations = "./migrations")]
async fn test_approval_flow(pool: PgPool) {
    let school = create_test_school(&pool, &generate_unique_school_name()).await;
    let student = create_test_student(&pool, school, "Grade 8", "A").await;
    let exam = create_test_exam(&pool, school, "Mid-Term").await;
    let paper = create_test_paper(&pool, exam, "Mathematics", 100.0).await;

    let app = setup_test_app(pool.clone());
    let (status, mark) = post_json(
        &app,
        &format!("/api/schools/{school}/marks"),
        json!({
            "exam_paper_id": paper,
            "student_id": student,
            "marks_obtained": 72.0
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(mark["status"], "pending");

    let mark_id = mark["id"].as_str().unwrap();
    let (status, approved) = post_json(
        &app,
        &format!("/api/schools/{school}/marks/{mark_id}/approve"),
        json!({}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(approved["status"], "approved");

    // Approving a non-pending mark is a client error.
    let (status, _) = post_json(
        &app,
        &format!("/api/schools/{school}/marks/{mark_id}/approve"),
        json!({}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_resubmission_resets_status(pool: PgPool) {
    let school = create_test_school(&pool, &generate_unique_school_name()).await;
    let student = create_test_student(&pool, school, "Grade 8", "A").await;
    let exam = create_test_exam(&pool, school, "Mid-Term").await;
    let paper = create_test_paper(&pool, exam, "Mathematics", 100.0).await;

    let app = setup_test_app(pool.clone());
    let submit_uri = format!("/api/schools/{school}/marks");
    let submit_body = |score: f64| {
        json!({
            "exam_paper_id": paper,
            "student_id": student,
            "marks_obtained": score
        })
    };

    let (_, mark) = post_json(&app, &submit_uri, submit_body(60.0)).await;
    let mark_id = mark["id"].as_str().unwrap().to_string();
    post_json(
        &app,
        &format!("/api/schools/{school}/marks/{mark_id}/approve"),
        json!({}),
    )
    .await;

    // Resubmitting the same (paper, student) overwrites and re-enters review.
    let (status, resubmitted) = post_json(&app, &submit_uri, submit_body(65.0)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(resubmitted["id"], mark["id"]);
    assert_eq!(resubmitted["status"], "pending");
    assert_eq!(resubmitted["marks_obtained"], 65.0);

    let mark_rows = sqlx::query_scalar::<_, i64>(
        "SELECT COUNT(*) FROM marks WHERE exam_paper_id = $1 AND student_id = $2",
    )
    .bind(paper)
    .bind(student)
    .fetch_one(&pool)
    .await
    .unwrap();
    assert_eq!(mark_rows, 1);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_absent_mark_scores_zero(pool: PgPool) {
    let school = create_test_school(&pool, &generate_unique_school_name()).await;
    let student = create_test_student(&pool, school, "Grade 8", "A").await;
    let exam = create_test_exam(&pool, school, "Mid-Term").await;
    let paper = create_test_paper(&pool, exam, "Mathematics", 100.0).await;

    let app = setup_test_app(pool.clone());
    let (status, mark) = post_json(
        &app,
        &format!("/api/schools/{school}/marks"),
        json!({
            "exam_paper_id": paper,
            "student_id": student,
            "marks_obtained": 50.0,
            "is_absent": true
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(mark["marks_obtained"], 0.0);
    assert_eq!(mark["is_absent"], true);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_bulk_approve_paper_marks(pool: PgPool) {
    let school = create_test_school(&pool, &generate_unique_school_name()).await;
    let exam = create_test_exam(&pool, school, "Mid-Term").await;
    let paper = create_test_paper(&pool, exam, "Mathematics", 100.0).await;

    let app = setup_test_app(pool.clone());
    for score in [40.0, 55.0, 70.0] {
        let student = create_test_student(&pool, school, "Grade 8", "A").await;
        let (status, _) = post_json(
            &app,
            &format!("/api/schools/{school}/marks"),
            json!({
                "exam_paper_id": paper,
                "student_id": student,
                "marks_obtained": score
            }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }

    let (status, body) = post_json(
        &app,
        &format!("/api/schools/{school}/papers/{paper}/marks/approve-all"),
        json!({}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["approved_count"], 3);

    let (status, marks) = get_json(
        &app,
        &format!("/api/schools/{school}/papers/{paper}/marks?status=approved"),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(marks.as_array().unwrap().len(), 3);
}
