mod common;

use axum::http::StatusCode;
use common::{
    create_test_exam, create_test_paper, create_test_school, create_test_student,
    generate_unique_school_name, get_json, insert_approved_mark, post_json, setup_test_app,
};
use serde_json::json;
use sqlx::PgPool;
use uuid::Uuid;

async fn seed_class(
    pool: &PgPool,
    school: Uuid,
    exam: Uuid,
    paper: Uuid,
    class_name: &str,
    section_name: &str,
    scores: &[f64],
) -> Vec<Uuid> {
    let mut students = Vec::new();
    for score in scores {
        let student = create_test_student(pool, school, class_name, section_name).await;
        insert_approved_mark(pool, school, paper, student, *score).await;
        students.push(student);
    }
    students
}

#[sqlx::test(migrations = "./migrations")]
async fn test_competition_ranking_with_ties(pool: PgPool) {
    let school = create_test_school(&pool, &generate_unique_school_name()).await;
    let exam = create_test_exam(&pool, school, "Mid-Term").await;
    let paper = create_test_paper(&pool, exam, "Mathematics", 100.0).await;
    let students = seed_class(
        &pool,
        school,
        exam,
        paper,
        "Grade 8",
        "A",
        &[95.0, 90.0, 90.0, 80.0],
    )
    .await;

    let app = setup_test_app(pool.clone());
    let (status, body) = post_json(
        &app,
        &format!("/api/schools/{school}/exams/{exam}/results/calculate-all"),
        json!({}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["succeeded"], 4);

    let (status, body) = post_json(
        &app,
        &format!("/api/schools/{school}/exams/{exam}/rankings"),
        json!({}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["ranked_count"], 4);

    // Ranks follow the 1224 pattern: the two 90s tie at 2, the 80 takes 4.
    let expected = [(students[0], 1), (students[1], 2), (students[2], 2), (students[3], 4)];
    for (student, expected_rank) in expected {
        let (status, body) = get_json(
            &app,
            &format!("/api/schools/{school}/exams/{exam}/results/{student}"),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["class_rank"], expected_rank, "student scored rank mismatch");
        assert_eq!(body["section_rank"], expected_rank);
    }
}

#[sqlx::test(migrations = "./migrations")]
async fn test_ranking_scoped_to_one_class(pool: PgPool) {
    let school = create_test_school(&pool, &generate_unique_school_name()).await;
    let exam = create_test_exam(&pool, school, "Mid-Term").await;
    let paper = create_test_paper(&pool, exam, "Mathematics", 100.0).await;

    let ranked = seed_class(&pool, school, exam, paper, "Grade 8", "A", &[70.0, 60.0]).await;
    let untouched = seed_class(&pool, school, exam, paper, "Grade 9", "A", &[90.0]).await;

    let app = setup_test_app(pool.clone());
    let (status, _) = post_json(
        &app,
        &format!("/api/schools/{school}/exams/{exam}/results/calculate-all"),
        json!({}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = post_json(
        &app,
        &format!("/api/schools/{school}/exams/{exam}/rankings"),
        json!({ "class_name": "Grade 8" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["ranked_count"], 2);

    let (_, body) = get_json(
        &app,
        &format!("/api/schools/{school}/exams/{exam}/results/{}", ranked[0]),
    )
    .await;
    assert_eq!(body["class_rank"], 1);

    // The other class was outside the scope and keeps null ranks.
    let (_, body) = get_json(
        &app,
        &format!("/api/schools/{school}/exams/{exam}/results/{}", untouched[0]),
    )
    .await;
    assert!(body["class_rank"].is_null());
    assert!(body["section_rank"].is_null());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_ranking_rerun_overwrites(pool: PgPool) {
    let school = create_test_school(&pool, &generate_unique_school_name()).await;
    let exam = create_test_exam(&pool, school, "Mid-Term").await;
    let paper = create_test_paper(&pool, exam, "Mathematics", 100.0).await;
    let students = seed_class(&pool, school, exam, paper, "Grade 8", "A", &[50.0, 75.0]).await;

    let app = setup_test_app(pool.clone());
    let calc_uri = format!("/api/schools/{school}/exams/{exam}/results/calculate-all");
    let rank_uri = format!("/api/schools/{school}/exams/{exam}/rankings");

    post_json(&app, &calc_uri, json!({})).await;
    post_json(&app, &rank_uri, json!({})).await;

    let (_, body) = get_json(
        &app,
        &format!("/api/schools/{school}/exams/{exam}/results/{}", students[0]),
    )
    .await;
    assert_eq!(body["class_rank"], 2);

    // The trailing student improves past the leader; recalculate and re-rank.
    sqlx::query("UPDATE marks SET marks_obtained = 95 WHERE student_id = $1")
        .bind(students[0])
        .execute(&pool)
        .await
        .unwrap();

    post_json(&app, &calc_uri, json!({})).await;
    let (status, body) = post_json(&app, &rank_uri, json!({})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["ranked_count"], 2);

    let (_, body) = get_json(
        &app,
        &format!("/api/schools/{school}/exams/{exam}/results/{}", students[0]),
    )
    .await;
    assert_eq!(body["class_rank"], 1);
    let (_, body) = get_json(
        &app,
        &format!("/api/schools/{school}/exams/{exam}/results/{}", students[1]),
    )
    .await;
    assert_eq!(body["class_rank"], 2);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_section_ranks_within_section_groups(pool: PgPool) {
    let school = create_test_school(&pool, &generate_unique_school_name()).await;
    let exam = create_test_exam(&pool, school, "Mid-Term").await;
    let paper = create_test_paper(&pool, exam, "Mathematics", 100.0).await;

    // Same class, two sections: class ranks span both, section ranks reset.
    let section_a = seed_class(&pool, school, exam, paper, "Grade 8", "A", &[90.0]).await;
    let section_b = seed_class(&pool, school, exam, paper, "Grade 8", "B", &[80.0]).await;

    let app = setup_test_app(pool.clone());
    post_json(
        &app,
        &format!("/api/schools/{school}/exams/{exam}/results/calculate-all"),
        json!({}),
    )
    .await;
    post_json(
        &app,
        &format!("/api/schools/{school}/exams/{exam}/rankings"),
        json!({}),
    )
    .await;

    let (_, body) = get_json(
        &app,
        &format!("/api/schools/{school}/exams/{exam}/results/{}", section_a[0]),
    )
    .await;
    assert_eq!(body["class_rank"], 1);
    assert_eq!(body["section_rank"], 1);

    let (_, body) = get_json(
        &app,
        &format!("/api/schools/{school}/exams/{exam}/results/{}", section_b[0]),
    )
    .await;
    assert_eq!(body["class_rank"], 2);
    assert_eq!(body["section_rank"], 1);
}
