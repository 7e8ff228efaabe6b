//! Exam analytics.
//!
//! Aggregates stored results into pass/fail counts and the fixed-band grade
//! distribution. Generation upserts one stored row per (exam, class?) scope;
//! the distribution endpoint computes the same numbers on the fly without
//! persisting them.

use crate::modules::analytics::model::{DistributionResponse, ResultAnalytics};
use crate::modules::exams::service::ExamService;
use crate::utils::errors::AppError;
use anyhow::Context;
use gradecast_core::{GradeDistribution, PassStats};
use sqlx::{FromRow, PgPool};
use tracing::instrument;
use uuid::Uuid;

#[derive(Debug, FromRow)]
struct OutcomeRow {
    overall_percentage: f64,
    is_passed: bool,
}

pub struct AnalyticsService;

impl AnalyticsService {
    #[instrument(skip(db))]
    pub async fn generate_analytics(
        db: &PgPool,
        exam_id: Uuid,
        school_id: Uuid,
        class_name: Option<&str>,
    ) -> Result<ResultAnalytics, AppError> {
        ExamService::get_exam_by_id(db, exam_id, school_id).await?;

        let outcomes = Self::load_outcomes(db, exam_id, school_id, class_name).await?;
        let stats = PassStats::from_outcomes(outcomes.iter().map(|o| o.is_passed));
        let dist =
            GradeDistribution::from_percentages(outcomes.iter().map(|o| o.overall_percentage));

        let mut tx = db
            .begin()
            .await
            .context("Failed to begin analytics transaction")
            .map_err(AppError::database)?;

        let existing = sqlx::query_as::<_, ResultAnalytics>(
            r#"
            UPDATE result_analytics
            SET total_students = $1, passed_count = $2, failed_count = $3,
                pass_percentage = $4,
                band_90_100 = $5, band_80_89 = $6, band_70_79 = $7, band_60_69 = $8,
                band_50_59 = $9, band_40_49 = $10, band_below_40 = $11,
                generated_at = NOW()
            WHERE exam_id = $12 AND school_id = $13
              AND class_name IS NOT DISTINCT FROM $14
            RETURNING *
            "#,
        )
        .bind(stats.total)
        .bind(stats.passed)
        .bind(stats.failed)
        .bind(stats.pass_percentage)
        .bind(dist.band_90_100)
        .bind(dist.band_80_89)
        .bind(dist.band_70_79)
        .bind(dist.band_60_69)
        .bind(dist.band_50_59)
        .bind(dist.band_40_49)
        .bind(dist.band_below_40)
        .bind(exam_id)
        .bind(school_id)
        .bind(class_name)
        .fetch_optional(&mut *tx)
        .await
        .context("Failed to refresh analytics")
        .map_err(AppError::database)?;

        let analytics = match existing {
            Some(analytics) => analytics,
            None => sqlx::query_as::<_, ResultAnalytics>(
                r#"
                INSERT INTO result_analytics
                    (school_id, exam_id, class_name, total_students, passed_count,
                     failed_count, pass_percentage, band_90_100, band_80_89, band_70_79,
                     band_60_69, band_50_59, band_40_49, band_below_40)
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)
                RETURNING *
                "#,
            )
            .bind(school_id)
            .bind(exam_id)
            .bind(class_name)
            .bind(stats.total)
            .bind(stats.passed)
            .bind(stats.failed)
            .bind(stats.pass_percentage)
            .bind(dist.band_90_100)
            .bind(dist.band_80_89)
            .bind(dist.band_70_79)
            .bind(dist.band_60_69)
            .bind(dist.band_50_59)
            .bind(dist.band_40_49)
            .bind(dist.band_below_40)
            .fetch_one(&mut *tx)
            .await
            .context("Failed to store analytics")
            .map_err(AppError::database)?,
        };

        tx.commit()
            .await
            .context("Failed to commit analytics")
            .map_err(AppError::database)?;

        Ok(analytics)
    }

    /// Fetch the stored analytics row for a scope; absent rows are `None`.
    #[instrument(skip(db))]
    pub async fn get_analytics(
        db: &PgPool,
        exam_id: Uuid,
        school_id: Uuid,
        class_name: Option<&str>,
    ) -> Result<Option<ResultAnalytics>, AppError> {
        let analytics = sqlx::query_as::<_, ResultAnalytics>(
            r#"
            SELECT * FROM result_analytics
            WHERE exam_id = $1 AND school_id = $2
              AND class_name IS NOT DISTINCT FROM $3
            "#,
        )
        .bind(exam_id)
        .bind(school_id)
        .bind(class_name)
        .fetch_optional(db)
        .await
        .context("Failed to fetch analytics")
        .map_err(AppError::database)?;

        Ok(analytics)
    }

    /// Pass/fail and grade-band distribution computed on the fly.
    #[instrument(skip(db))]
    pub async fn get_distribution(
        db: &PgPool,
        exam_id: Uuid,
        school_id: Uuid,
        class_name: Option<&str>,
    ) -> Result<DistributionResponse, AppError> {
        ExamService::get_exam_by_id(db, exam_id, school_id).await?;

        let outcomes = Self::load_outcomes(db, exam_id, school_id, class_name).await?;
        let stats = PassStats::from_outcomes(outcomes.iter().map(|o| o.is_passed));
        let distribution =
            GradeDistribution::from_percentages(outcomes.iter().map(|o| o.overall_percentage));

        Ok(DistributionResponse {
            stats,
            distribution,
        })
    }

    async fn load_outcomes(
        db: &PgPool,
        exam_id: Uuid,
        school_id: Uuid,
        class_name: Option<&str>,
    ) -> Result<Vec<OutcomeRow>, AppError> {
        sqlx::query_as::<_, OutcomeRow>(
            r#"
            SELECT overall_percentage, is_passed
            FROM student_results
            WHERE exam_id = $1 AND school_id = $2
              AND ($3::text IS NULL OR class_name = $3)
            "#,
        )
        .bind(exam_id)
        .bind(school_id)
        .bind(class_name)
        .fetch_all(db)
        .await
        .context("Failed to fetch result outcomes")
        .map_err(AppError::database)
    }
}
