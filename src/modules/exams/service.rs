use crate::{
    modules::exams::model::{CreateExamDto, CreateExamPaperDto, Exam, ExamPaper, ExamWithPapers},
    utils::errors::AppError,
};
use anyhow::Context;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

pub struct ExamService;

impl ExamService {
    #[instrument(skip(db, dto))]
    pub async fn create_exam(
        db: &PgPool,
        dto: CreateExamDto,
        school_id: Uuid,
    ) -> Result<Exam, AppError> {
        let exam = sqlx::query_as::<_, Exam>(
            r#"
            INSERT INTO exams (school_id, name, starts_on)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(school_id)
        .bind(&dto.name)
        .bind(dto.starts_on)
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

        Ok(exam)
    }

    #[instrument(skip(db))]
    pub async fn get_exams(
        db: &PgPool,
        school_id: Uuid,
        limit: i64,
        offset: i64,
    ) -> Result<(Vec<Exam>, i64), AppError> {
        let exams = sqlx::query_as::<_, Exam>(
            r#"
            SELECT * FROM exams
            WHERE school_id = $1
            ORDER BY created_at DESC
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(school_id)
        .bind(limit)
        .bind(offset)
        .fetch_all(db)
        .await
        .context("Failed to fetch exams")
        .map_err(AppError::database)?;

        let total =
            sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM exams WHERE school_id = $1")
                .bind(school_id)
                .fetch_one(db)
                .await
                .context("Failed to count exams")
                .map_err(AppError::database)?;

        Ok((exams, total))
    }

    #[instrument(skip(db))]
    pub async fn get_exam_by_id(db: &PgPool, id: Uuid, school_id: Uuid) -> Result<Exam, AppError> {
        let exam =
            sqlx::query_as::<_, Exam>("SELECT * FROM exams WHERE id = $1 AND school_id = $2")
                .bind(id)
                .bind(school_id)
                .fetch_optional(db)
                .await
                .context("Failed to fetch exam by ID")
                .map_err(AppError::database)?
                .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Exam not found")))?;

        Ok(exam)
    }

    #[instrument(skip(db))]
    pub async fn get_exam_with_papers(
        db: &PgPool,
        id: Uuid,
        school_id: Uuid,
    ) -> Result<ExamWithPapers, AppError> {
        let exam = Self::get_exam_by_id(db, id, school_id).await?;
        let papers = Self::get_exam_papers(db, id, school_id).await?;

        Ok(ExamWithPapers { exam, papers })
    }

    #[instrument(skip(db, dto))]
    pub async fn create_exam_paper(
        db: &PgPool,
        exam_id: Uuid,
        school_id: Uuid,
        dto: CreateExamPaperDto,
    ) -> Result<ExamPaper, AppError> {
        // Scope check: the exam must belong to this school.
        Self::get_exam_by_id(db, exam_id, school_id).await?;

        let paper = sqlx::query_as::<_, ExamPaper>(
            r#"
            INSERT INTO exam_papers (exam_id, subject, max_marks)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(exam_id)
        .bind(&dto.subject)
        .bind(dto.max_marks)
        .fetch_one(db)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db_err) = &e {
                if db_err.is_unique_violation() {
                    return AppError::bad_request(anyhow::anyhow!(
                        "Paper for subject {} already exists in this exam",
                        dto.subject
                    ));
                }
            }
            AppError::database(anyhow::Error::from(e))
        })?;

        Ok(paper)
    }

    #[instrument(skip(db))]
    pub async fn get_exam_papers(
        db: &PgPool,
        exam_id: Uuid,
        school_id: Uuid,
    ) -> Result<Vec<ExamPaper>, AppError> {
        let papers = sqlx::query_as::<_, ExamPaper>(
            r#"
            SELECT p.* FROM exam_papers p
            JOIN exams e ON e.id = p.exam_id
            WHERE p.exam_id = $1 AND e.school_id = $2
            ORDER BY p.subject
            "#,
        )
        .bind(exam_id)
        .bind(school_id)
        .fetch_all(db)
        .await
        .context("Failed to fetch exam papers")
        .map_err(AppError::database)?;

        Ok(papers)
    }
}
