use crate::{
    modules::students::model::{CreateStudentDto, Student},
    utils::errors::AppError,
};
use anyhow::Context;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

pub struct StudentService;

impl StudentService {
    #[instrument(skip(db, dto))]
    pub async fn create_student(
        db: &PgPool,
        dto: CreateStudentDto,
        school_id: Uuid,
    ) -> Result<Student, AppError> {
        let student = sqlx::query_as::<_, Student>(
            r#"
            INSERT INTO students (school_id, first_name, last_name, class_name, section_name)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(school_id)
        .bind(&dto.first_name)
        .bind(&dto.last_name)
        .bind(&dto.class_name)
        .bind(&dto.section_name)
        .fetch_one(db)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db_err) = &e {
                if db_err.is_foreign_key_violation() {
                    return AppError::bad_request(anyhow::anyhow!("School does not exist"));
                }
            }
            AppError::database(anyhow::Error::from(e))
        })?;

        Ok(student)
    }

    #[instrument(skip(db))]
    pub async fn get_students_by_school(
        db: &PgPool,
        school_id: Uuid,
        class_name: Option<&str>,
        section_name: Option<&str>,
        limit: i64,
        offset: i64,
    ) -> Result<(Vec<Student>, i64), AppError> {
        let students = sqlx::query_as::<_, Student>(
            r#"
            SELECT * FROM students
            WHERE school_id = $1
              AND ($2::text IS NULL OR class_name = $2)
              AND ($3::text IS NULL OR section_name = $3)
            ORDER BY last_name, first_name
            LIMIT $4 OFFSET $5
            "#,
        )
        .bind(school_id)
        .bind(class_name)
        .bind(section_name)
        .bind(limit)
        .bind(offset)
        .fetch_all(db)
        .await
        .context("Failed to fetch students by school")
        .map_err(AppError::database)?;

        let total = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*) FROM students
            WHERE school_id = $1
              AND ($2::text IS NULL OR class_name = $2)
              AND ($3::text IS NULL OR section_name = $3)
            "#,
        )
        .bind(school_id)
        .bind(class_name)
        .bind(section_name)
        .fetch_one(db)
        .await
        .context("Failed to count students")
        .map_err(AppError::database)?;

        Ok((students, total))
    }

    #[instrument(skip(db))]
    pub async fn get_student_by_id(
        db: &PgPool,
        id: Uuid,
        school_id: Uuid,
    ) -> Result<Student, AppError> {
        let student = sqlx::query_as::<_, Student>(
            "SELECT * FROM students WHERE id = $1 AND school_id = $2",
        )
        .bind(id)
        .bind(school_id)
        .fetch_optional(db)
        .await
        .context("Failed to fetch student by ID")
        .map_err(AppError::database)?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Student not found")))?;

        Ok(student)
    }
}
