//! The ranking pass.
//!
//! Orders in-scope results by overall percentage and writes competition
//! ranks back onto the result rows: class ranks within each class group,
//! section ranks within each (class, section) group. Re-running overwrites
//! prior ranks for the same scope.

use crate::modules::exams::service::ExamService;
use crate::utils::errors::AppError;
use anyhow::Context;
use gradecast_core::grading::competition_ranks;
use sqlx::{FromRow, PgPool};
use std::collections::BTreeMap;
use tracing::instrument;
use uuid::Uuid;

#[derive(Debug, FromRow)]
struct RankRow {
    id: Uuid,
    class_name: String,
    section_name: String,
    overall_percentage: f64,
}

pub struct RankingService;

impl RankingService {
    /// Run a ranking pass over an exam, optionally restricted to one class
    /// or one (class, section) group.
    ///
    /// Section ranks are always written for the included rows. Class ranks
    /// are only written when no section filter is given: a section-scoped
    /// pass sees a subset of the class and must not overwrite class-wide
    /// ranks with subset ranks.
    #[instrument(skip(db))]
    pub async fn calculate_rankings(
        db: &PgPool,
        exam_id: Uuid,
        school_id: Uuid,
        class_name: Option<&str>,
        section_name: Option<&str>,
    ) -> Result<usize, AppError> {
        ExamService::get_exam_by_id(db, exam_id, school_id).await?;

        let rows = sqlx::query_as::<_, RankRow>(
            r#"
            SELECT id, class_name, section_name, overall_percentage
            FROM student_results
            WHERE exam_id = $1 AND school_id = $2
              AND ($3::text IS NULL OR class_name = $3)
              AND ($4::text IS NULL OR section_name = $4)
            ORDER BY overall_percentage DESC, created_at ASC
            "#,
        )
        .bind(exam_id)
        .bind(school_id)
        .bind(class_name)
        .bind(section_name)
        .fetch_all(db)
        .await
        .context("Failed to fetch results for ranking")
        .map_err(AppError::database)?;

        let ranked_count = rows.len();

        // Groups preserve the descending percentage order of the fetch.
        let mut by_class: BTreeMap<String, Vec<(Uuid, f64)>> = BTreeMap::new();
        let mut by_section: BTreeMap<(String, String), Vec<(Uuid, f64)>> = BTreeMap::new();
        for row in &rows {
            by_class
                .entry(row.class_name.clone())
                .or_default()
                .push((row.id, row.overall_percentage));
            by_section
                .entry((row.class_name.clone(), row.section_name.clone()))
                .or_default()
                .push((row.id, row.overall_percentage));
        }

        let mut tx = db
            .begin()
            .await
            .context("Failed to begin ranking transaction")
            .map_err(AppError::database)?;

        if section_name.is_none() {
            for group in by_class.values() {
                let percentages: Vec<f64> = group.iter().map(|(_, pct)| *pct).collect();
                let ranks = competition_ranks(&percentages);
                for ((result_id, _), rank) in group.iter().zip(ranks) {
                    sqlx::query(
                        "UPDATE student_results SET class_rank = $1, updated_at = NOW() WHERE id = $2",
                    )
                    .bind(rank)
                    .bind(result_id)
                    .execute(&mut *tx)
                    .await
                    .context("Failed to write class rank")
                    .map_err(AppError::database)?;
                }
            }
        }

        for group in by_section.values() {
            let percentages: Vec<f64> = group.iter().map(|(_, pct)| *pct).collect();
            let ranks = competition_ranks(&percentages);
            for ((result_id, _), rank) in group.iter().zip(ranks) {
                sqlx::query(
                    "UPDATE student_results SET section_rank = $1, updated_at = NOW() WHERE id = $2",
                )
                .bind(rank)
                .bind(result_id)
                .execute(&mut *tx)
                .await
                .context("Failed to write section rank")
                .map_err(AppError::database)?;
            }
        }

        tx.commit()
            .await
            .context("Failed to commit ranking pass")
            .map_err(AppError::database)?;

        Ok(ranked_count)
    }
}
