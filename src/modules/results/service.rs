//! The result calculation workflow.
//!
//! Calculation reads a student's approved marks, derives the per-subject
//! breakdown and the overall outcome, and upserts one result row per
//! (exam, student) with its items replaced wholesale. Recalculation is
//! idempotent; an existing row keeps its status, publication timestamp, and
//! ranks.

use crate::config::grading::GradingConfig;
use crate::modules::exams::service::ExamService;
use crate::modules::results::model::{
    ApprovedMark, BatchCalculationResponse, ResultItem, StudentResult, StudentResultWithItems,
};
use crate::modules::students::service::StudentService;
use crate::utils::errors::AppError;
use crate::utils::retry::with_backoff;
use anyhow::Context;
use gradecast_core::grading::{Grade, percentage};
use sqlx::PgPool;
use tracing::{instrument, warn};
use uuid::Uuid;

pub struct ResultService;

impl ResultService {
    /// Calculate (or recalculate) one student's result for an exam.
    ///
    /// Requires at least one approved mark on a paper of the exam. The
    /// result row is upserted on (exam, student) and its items are replaced
    /// in the same transaction.
    #[instrument(skip(db, grading))]
    pub async fn calculate_student_result(
        db: &PgPool,
        exam_id: Uuid,
        student_id: Uuid,
        school_id: Uuid,
        grading: &GradingConfig,
    ) -> Result<StudentResultWithItems, AppError> {
        let student = StudentService::get_student_by_id(db, student_id, school_id).await?;
        ExamService::get_exam_by_id(db, exam_id, school_id).await?;

        let marks = with_backoff("load_approved_marks", 3, || {
            Self::load_approved_marks(db, exam_id, student_id, school_id)
        })
        .await
        .context("Failed to fetch approved marks")
        .map_err(AppError::database)?;

        if marks.is_empty() {
            return Err(AppError::unprocessable(anyhow::anyhow!(
                "Student has no approved marks for this exam"
            )));
        }

        let mut sum_obtained = 0.0;
        let mut sum_max = 0.0;
        let mut all_subjects_passed = true;

        struct ComputedItem {
            exam_paper_id: Uuid,
            subject: String,
            marks_obtained: f64,
            max_marks: f64,
            percentage: f64,
            grade: Grade,
            is_passed: bool,
        }

        let mut computed = Vec::with_capacity(marks.len());
        for mark in &marks {
            let obtained = if mark.is_absent { 0.0 } else { mark.marks_obtained };
            let pct = percentage(obtained, mark.max_marks);
            let is_passed = pct >= grading.subject_pass_mark;
            all_subjects_passed &= is_passed;
            sum_obtained += obtained;
            sum_max += mark.max_marks;
            computed.push(ComputedItem {
                exam_paper_id: mark.exam_paper_id,
                subject: mark.subject.clone(),
                marks_obtained: obtained,
                max_marks: mark.max_marks,
                percentage: pct,
                grade: Grade::from_percentage(pct),
                is_passed,
            });
        }

        let overall_percentage = percentage(sum_obtained, sum_max);
        let is_passed = all_subjects_passed && overall_percentage >= grading.overall_pass_mark;

        let mut tx = db
            .begin()
            .await
            .context("Failed to begin transaction")
            .map_err(AppError::database)?;

        let result = sqlx::query_as::<_, StudentResult>(
            r#"
            INSERT INTO student_results
                (school_id, exam_id, student_id, class_name, section_name,
                 overall_percentage, is_passed)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            ON CONFLICT (exam_id, student_id) DO UPDATE
            SET class_name = EXCLUDED.class_name,
                section_name = EXCLUDED.section_name,
                overall_percentage = EXCLUDED.overall_percentage,
                is_passed = EXCLUDED.is_passed,
                updated_at = NOW()
            RETURNING *
            "#,
        )
        .bind(school_id)
        .bind(exam_id)
        .bind(student_id)
        .bind(&student.class_name)
        .bind(&student.section_name)
        .bind(overall_percentage)
        .bind(is_passed)
        .fetch_one(&mut *tx)
        .await
        .context("Failed to upsert student result")
        .map_err(AppError::database)?;

        sqlx::query("DELETE FROM result_items WHERE result_id = $1")
            .bind(result.id)
            .execute(&mut *tx)
            .await
            .context("Failed to clear prior result items")
            .map_err(AppError::database)?;

        let mut items = Vec::with_capacity(computed.len());
        for item in computed {
            let row = sqlx::query_as::<_, ResultItem>(
                r#"
                INSERT INTO result_items
                    (result_id, exam_paper_id, subject, marks_obtained, max_marks,
                     percentage, grade, is_passed)
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
                RETURNING *
                "#,
            )
            .bind(result.id)
            .bind(item.exam_paper_id)
            .bind(&item.subject)
            .bind(item.marks_obtained)
            .bind(item.max_marks)
            .bind(item.percentage)
            .bind(item.grade.as_str())
            .bind(item.is_passed)
            .fetch_one(&mut *tx)
            .await
            .context("Failed to insert result item")
            .map_err(AppError::database)?;
            items.push(row);
        }

        tx.commit()
            .await
            .context("Failed to commit result calculation")
            .map_err(AppError::database)?;

        Ok(StudentResultWithItems { result, items })
    }

    /// Calculate results for every student with at least one approved mark
    /// in the exam.
    ///
    /// Students are processed independently; a failing student is logged
    /// and skipped, never aborting the batch.
    #[instrument(skip(db, grading))]
    pub async fn calculate_exam_results(
        db: &PgPool,
        exam_id: Uuid,
        school_id: Uuid,
        grading: &GradingConfig,
    ) -> Result<BatchCalculationResponse, AppError> {
        ExamService::get_exam_by_id(db, exam_id, school_id).await?;

        let roster = with_backoff("load_exam_roster", 3, || {
            Self::load_exam_roster(db, exam_id, school_id)
        })
        .await
        .context("Failed to discover exam roster")
        .map_err(AppError::database)?;

        let attempted = roster.len();
        let mut result_ids = Vec::with_capacity(attempted);
        for student_id in roster {
            match Self::calculate_student_result(db, exam_id, student_id, school_id, grading)
                .await
            {
                Ok(produced) => result_ids.push(produced.result.id),
                Err(failure) => {
                    warn!(
                        %student_id,
                        %exam_id,
                        error = %failure.error,
                        "Skipping student in batch calculation"
                    );
                }
            }
        }

        let succeeded = result_ids.len();
        Ok(BatchCalculationResponse {
            attempted,
            succeeded,
            failed: attempted - succeeded,
            result_ids,
        })
    }

    /// Fetch one result with its items; absent results are `None`, not an
    /// error.
    #[instrument(skip(db))]
    pub async fn get_result(
        db: &PgPool,
        exam_id: Uuid,
        student_id: Uuid,
        school_id: Uuid,
    ) -> Result<Option<StudentResultWithItems>, AppError> {
        let result = sqlx::query_as::<_, StudentResult>(
            r#"
            SELECT * FROM student_results
            WHERE exam_id = $1 AND student_id = $2 AND school_id = $3
            "#,
        )
        .bind(exam_id)
        .bind(student_id)
        .bind(school_id)
        .fetch_optional(db)
        .await
        .context("Failed to fetch student result")
        .map_err(AppError::database)?;

        let Some(result) = result else {
            return Ok(None);
        };

        let items = sqlx::query_as::<_, ResultItem>(
            "SELECT * FROM result_items WHERE result_id = $1 ORDER BY subject",
        )
        .bind(result.id)
        .fetch_all(db)
        .await
        .context("Failed to fetch result items")
        .map_err(AppError::database)?;

        Ok(Some(StudentResultWithItems { result, items }))
    }

    #[instrument(skip(db))]
    pub async fn get_results(
        db: &PgPool,
        exam_id: Uuid,
        school_id: Uuid,
        class_name: Option<&str>,
        section_name: Option<&str>,
        published_only: bool,
        limit: i64,
        offset: i64,
    ) -> Result<(Vec<StudentResult>, i64), AppError> {
        let results = sqlx::query_as::<_, StudentResult>(
            r#"
            SELECT * FROM student_results
            WHERE exam_id = $1 AND school_id = $2
              AND ($3::text IS NULL OR class_name = $3)
              AND ($4::text IS NULL OR section_name = $4)
              AND (NOT $5::bool OR status = 'published')
            ORDER BY overall_percentage DESC, created_at ASC
            LIMIT $6 OFFSET $7
            "#,
        )
        .bind(exam_id)
        .bind(school_id)
        .bind(class_name)
        .bind(section_name)
        .bind(published_only)
        .bind(limit)
        .bind(offset)
        .fetch_all(db)
        .await
        .context("Failed to fetch exam results")
        .map_err(AppError::database)?;

        let total = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*) FROM student_results
            WHERE exam_id = $1 AND school_id = $2
              AND ($3::text IS NULL OR class_name = $3)
              AND ($4::text IS NULL OR section_name = $4)
              AND (NOT $5::bool OR status = 'published')
            "#,
        )
        .bind(exam_id)
        .bind(school_id)
        .bind(class_name)
        .bind(section_name)
        .bind(published_only)
        .fetch_one(db)
        .await
        .context("Failed to count exam results")
        .map_err(AppError::database)?;

        Ok((results, total))
    }

    /// Top-N passed students, highest percentage first; ties keep insertion
    /// order.
    #[instrument(skip(db))]
    pub async fn get_top_performers(
        db: &PgPool,
        exam_id: Uuid,
        school_id: Uuid,
        limit: i64,
    ) -> Result<Vec<StudentResult>, AppError> {
        let results = sqlx::query_as::<_, StudentResult>(
            r#"
            SELECT * FROM student_results
            WHERE exam_id = $1 AND school_id = $2 AND is_passed = TRUE
            ORDER BY overall_percentage DESC, created_at ASC
            LIMIT $3
            "#,
        )
        .bind(exam_id)
        .bind(school_id)
        .bind(limit)
        .fetch_all(db)
        .await
        .context("Failed to fetch top performers")
        .map_err(AppError::database)?;

        Ok(results)
    }

    /// Per-subject breakdown for one student's result.
    #[instrument(skip(db))]
    pub async fn get_subject_performance(
        db: &PgPool,
        exam_id: Uuid,
        student_id: Uuid,
        school_id: Uuid,
    ) -> Result<Vec<ResultItem>, AppError> {
        let result = Self::get_result(db, exam_id, student_id, school_id)
            .await?
            .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Result not found")))?;

        Ok(result.items)
    }

    async fn load_approved_marks(
        db: &PgPool,
        exam_id: Uuid,
        student_id: Uuid,
        school_id: Uuid,
    ) -> Result<Vec<ApprovedMark>, sqlx::Error> {
        sqlx::query_as::<_, ApprovedMark>(
            r#"
            SELECT m.exam_paper_id, p.subject, m.marks_obtained, m.is_absent, p.max_marks
            FROM marks m
            JOIN exam_papers p ON p.id = m.exam_paper_id
            WHERE p.exam_id = $1 AND m.student_id = $2 AND m.school_id = $3
              AND m.status = 'approved'
            ORDER BY p.subject
            "#,
        )
        .bind(exam_id)
        .bind(student_id)
        .bind(school_id)
        .fetch_all(db)
        .await
    }

    async fn load_exam_roster(
        db: &PgPool,
        exam_id: Uuid,
        school_id: Uuid,
    ) -> Result<Vec<Uuid>, sqlx::Error> {
        sqlx::query_scalar::<_, Uuid>(
            r#"
            SELECT DISTINCT m.student_id
            FROM marks m
            JOIN exam_papers p ON p.id = m.exam_paper_id
            WHERE p.exam_id = $1 AND m.school_id = $2 AND m.status = 'approved'
            "#,
        )
        .bind(exam_id)
        .bind(school_id)
        .fetch_all(db)
        .await
    }
}
