use crate::{
    modules::marks::model::{Mark, SubmitMarkDto, mark_status},
    utils::errors::AppError,
};
use anyhow::Context;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

pub struct MarkService;

impl MarkService {
    /// Submit or resubmit a student's mark for a paper.
    ///
    /// Resubmission overwrites the prior row and resets its status to
    /// pending, so an already-approved mark goes back through review.
    #[instrument(skip(db, dto))]
    pub async fn submit_mark(
        db: &PgPool,
        dto: SubmitMarkDto,
        school_id: Uuid,
    ) -> Result<Mark, AppError> {
        let max_marks = sqlx::query_scalar::<_, f64>(
            r#"
            SELECT p.max_marks FROM exam_papers p
            JOIN exams e ON e.id = p.exam_id
            WHERE p.id = $1 AND e.school_id = $2
            "#,
        )
        .bind(dto.exam_paper_id)
        .bind(school_id)
        .fetch_optional(db)
        .await
        .context("Failed to fetch exam paper")
        .map_err(AppError::database)?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Exam paper not found")))?;

        // An absent student scores zero regardless of the submitted value.
        let marks_obtained = if dto.is_absent { 0.0 } else { dto.marks_obtained };

        if marks_obtained > max_marks {
            return Err(AppError::bad_request(anyhow::anyhow!(
                "Marks obtained ({}) exceed the paper maximum ({})",
                marks_obtained,
                max_marks
            )));
        }

        let mark = sqlx::query_as::<_, Mark>(
            r#"
            INSERT INTO marks (school_id, exam_paper_id, student_id, marks_obtained, is_absent)
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT (exam_paper_id, student_id) DO UPDATE
            SET marks_obtained = EXCLUDED.marks_obtained,
                is_absent = EXCLUDED.is_absent,
                status = 'pending',
                updated_at = NOW()
            RETURNING *
            "#,
        )
        .bind(school_id)
        .bind(dto.exam_paper_id)
        .bind(dto.student_id)
        .bind(marks_obtained)
        .bind(dto.is_absent)
        .fetch_one(db)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db_err) = &e {
                if db_err.is_foreign_key_violation() {
                    return AppError::bad_request(anyhow::anyhow!(
                        "Student does not exist in this school"
                    ));
                }
            }
            AppError::database(anyhow::Error::from(e))
        })?;

        Ok(mark)
    }

    #[instrument(skip(db))]
    pub async fn approve_mark(db: &PgPool, id: Uuid, school_id: Uuid) -> Result<Mark, AppError> {
        Self::transition_mark(db, id, school_id, mark_status::APPROVED).await
    }

    #[instrument(skip(db))]
    pub async fn reject_mark(db: &PgPool, id: Uuid, school_id: Uuid) -> Result<Mark, AppError> {
        Self::transition_mark(db, id, school_id, mark_status::REJECTED).await
    }

    async fn transition_mark(
        db: &PgPool,
        id: Uuid,
        school_id: Uuid,
        to_status: &str,
    ) -> Result<Mark, AppError> {
        let updated = sqlx::query_as::<_, Mark>(
            r#"
            UPDATE marks
            SET status = $1, updated_at = NOW()
            WHERE id = $2 AND school_id = $3 AND status = 'pending'
            RETURNING *
            "#,
        )
        .bind(to_status)
        .bind(id)
        .bind(school_id)
        .fetch_optional(db)
        .await
        .context("Failed to update mark status")
        .map_err(AppError::database)?;

        match updated {
            Some(mark) => Ok(mark),
            None => {
                let exists = sqlx::query_scalar::<_, i64>(
                    "SELECT COUNT(*) FROM marks WHERE id = $1 AND school_id = $2",
                )
                .bind(id)
                .bind(school_id)
                .fetch_one(db)
                .await
                .context("Failed to check mark existence")
                .map_err(AppError::database)?;

                if exists > 0 {
                    Err(AppError::bad_request(anyhow::anyhow!(
                        "Only pending marks can be {}",
                        to_status
                    )))
                } else {
                    Err(AppError::not_found(anyhow::anyhow!("Mark not found")))
                }
            }
        }
    }

    /// Approve every pending mark of a paper in one statement.
    #[instrument(skip(db))]
    pub async fn approve_paper_marks(
        db: &PgPool,
        exam_paper_id: Uuid,
        school_id: Uuid,
    ) -> Result<u64, AppError> {
        let result = sqlx::query(
            r#"
            UPDATE marks
            SET status = 'approved', updated_at = NOW()
            WHERE exam_paper_id = $1 AND school_id = $2 AND status = 'pending'
            "#,
        )
        .bind(exam_paper_id)
        .bind(school_id)
        .execute(db)
        .await
        .context("Failed to bulk-approve marks")
        .map_err(AppError::database)?;

        Ok(result.rows_affected())
    }

    #[instrument(skip(db))]
    pub async fn get_paper_marks(
        db: &PgPool,
        exam_paper_id: Uuid,
        school_id: Uuid,
        status: Option<&str>,
    ) -> Result<Vec<Mark>, AppError> {
        if let Some(s) = status {
            if !mark_status::is_valid(s) {
                return Err(AppError::bad_request(anyhow::anyhow!(
                    "Invalid mark status: {}",
                    s
                )));
            }
        }

        let marks = sqlx::query_as::<_, Mark>(
            r#"
            SELECT * FROM marks
            WHERE exam_paper_id = $1 AND school_id = $2
              AND ($3::text IS NULL OR status = $3)
            ORDER BY created_at
            "#,
        )
        .bind(exam_paper_id)
        .bind(school_id)
        .bind(status)
        .fetch_all(db)
        .await
        .context("Failed to fetch paper marks")
        .map_err(AppError::database)?;

        Ok(marks)
    }
}
