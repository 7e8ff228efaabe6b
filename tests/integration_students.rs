mod common;

use axum::http::StatusCode;
use common::{generate_unique_school_name, get_json, post_json, setup_test_app};
use serde_json::json;
use sqlx::PgPool;

#[sqlx::test(migrations = "./migrations")]
async fn test_create_school_and_enroll_student(pool: PgPool) {
    let app = setup_test_app(pool.clone());

    let (status, school) = post_json(
        &app,
        "/api/schools",
        json!({ "name": generate_unique_school_name(), "address": "12 Harbor Road" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let school_id = school["id"].as_str().unwrap();

    let (status, student) = post_json(
        &app,
        &format!("/api/schools/{school_id}/students"),
        json!({
            "first_name": "Amina",
            "last_name": "Bello",
            "class_name": "Grade 8",
            "section_name": "A"
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(student["class_name"], "Grade 8");
    assert_eq!(student["school_id"], school["id"]);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_student_validation(pool: PgPool) {
    let app = setup_test_app(pool.clone());

    let (_, school) = post_json(
        &app,
        "/api/schools",
        json!({ "name": generate_unique_school_name() }),
    )
    .await;
    let school_id = school["id"].as_str().unwrap();

    let (status, _) = post_json(
        &app,
        &format!("/api/schools/{school_id}/students"),
        json!({
            "first_name": "",
            "last_name": "Bello",
            "class_name": "Grade 8",
            "section_name": "A"
        }),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_list_students_filtered_by_class(pool: PgPool) {
    let app = setup_test_app(pool.clone());

    let (_, school) = post_json(
        &app,
        "/api/schools",
        json!({ "name": generate_unique_school_name() }),
    )
    .await;
    let school_id = school["id"].as_str().unwrap();

    for (first, class) in [("Amina", "Grade 8"), ("Tunde", "Grade 8"), ("Chioma", "Grade 9")] {
        let (status, _) = post_json(
            &app,
            &format!("/api/schools/{school_id}/students"),
            json!({
                "first_name": first,
                "last_name": "Test",
                "class_name": class,
                "section_name": "A"
            }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }

    let (status, body) = get_json(
        &app,
        &format!("/api/schools/{school_id}/students?class_name=Grade%208"),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"].as_array().unwrap().len(), 2);
    assert_eq!(body["meta"]["total"], 2);

    let (status, body) = get_json(&app, &format!("/api/schools/{school_id}/students")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["meta"]["total"], 3);
}
