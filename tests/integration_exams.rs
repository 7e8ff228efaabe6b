mod common;

use axum::http::StatusCode;
use common::{
    create_test_school, generate_unique_school_name, get_json, post_json, setup_test_app,
};
use serde_json::json;
use sqlx::PgPool;

#[sqlx::test(migrations = "./migrations")]
async fn test_create_exam_with_papers(pool: PgPool) {
    let school = create_test_school(&pool, &generate_unique_school_name()).await;

    let app = setup_test_app(pool.clone());
    let (status, exam) = post_json(
        &app,
        &format!("/api/schools/{school}/exams"),
        json!({ "name": "Mid-Term", "starts_on": "2025-10-06" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let exam_id = exam["id"].as_str().unwrap();

    let (status, _) = post_json(
        &app,
        &format!("/api/schools/{school}/exams/{exam_id}/papers"),
        json!({ "subject": "Mathematics", "max_marks": 100.0 }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = get_json(&app, &format!("/api/schools/{school}/exams/{exam_id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Mid-Term");
    assert_eq!(body["papers"].as_array().unwrap().len(), 1);
    assert_eq!(body["papers"][0]["subject"], "Mathematics");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_duplicate_subject_in_exam_rejected(pool: PgPool) {
    let school = create_test_school(&pool, &generate_unique_school_name()).await;

    let app = setup_test_app(pool.clone());
    let (_, exam) = post_json(
        &app,
        &format!("/api/schools/{school}/exams"),
        json!({ "name": "Mid-Term" }),
    )
    .await;
    let exam_id = exam["id"].as_str().unwrap();

    let papers_uri = format!("/api/schools/{school}/exams/{exam_id}/papers");
    let paper = json!({ "subject": "Mathematics", "max_marks": 100.0 });
    let (status, _) = post_json(&app, &papers_uri, paper.clone()).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = post_json(&app, &papers_uri, paper).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("already exists"));
}

#[sqlx::test(migrations = "./migrations")]
async fn test_paper_requires_positive_max_marks(pool: PgPool) {
    let school = create_test_school(&pool, &generate_unique_school_name()).await;

    let app = setup_test_app(pool.clone());
    let (_, exam) = post_json(
        &app,
        &format!("/api/schools/{school}/exams"),
        json!({ "name": "Mid-Term" }),
    )
    .await;
    let exam_id = exam["id"].as_str().unwrap();

    let (status, _) = post_json(
        &app,
        &format!("/api/schools/{school}/exams/{exam_id}/papers"),
        json!({ "subject": "Mathematics", "max_marks": 0.0 }),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_exam_scoped_to_school(pool: PgPool) {
    let school = create_test_school(&pool, &generate_unique_school_name()).await;
    let other_school = create_test_school(&pool, &generate_unique_school_name()).await;

    let app = setup_test_app(pool.clone());
    let (_, exam) = post_json(
        &app,
        &format!("/api/schools/{school}/exams"),
        json!({ "name": "Mid-Term" }),
    )
    .await;
    let exam_id = exam["id"].as_str().unwrap();

    // Another tenant cannot see this exam.
    let (status, _) = get_json(
        &app,
        &format!("/api/schools/{other_school}/exams/{exam_id}"),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
