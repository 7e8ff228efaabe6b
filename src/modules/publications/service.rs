//! Result publication.
//!
//! Publication flips every in-scope result to `published`, stamps
//! `published_at`, and upserts one publication row per scope. Republishing
//! the same scope refreshes the timestamp and notify flags; it never
//! creates a second row.

use crate::modules::exams::service::ExamService;
use crate::modules::publications::model::{
    PublishResultsDto, PublishResultsResponse, ResultPublication,
};
use crate::utils::errors::AppError;
use anyhow::Context;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

pub struct PublicationService;

impl PublicationService {
    #[instrument(skip(db, dto))]
    pub async fn publish_results(
        db: &PgPool,
        exam_id: Uuid,
        school_id: Uuid,
        dto: PublishResultsDto,
    ) -> Result<PublishResultsResponse, AppError> {
        ExamService::get_exam_by_id(db, exam_id, school_id).await?;

        let mut tx = db
            .begin()
            .await
            .context("Failed to begin publication transaction")
            .map_err(AppError::database)?;

        let updated = sqlx::query(
            r#"
            UPDATE student_results
            SET status = 'published', published_at = NOW(), updated_at = NOW()
            WHERE exam_id = $1 AND school_id = $2
              AND ($3::text IS NULL OR class_name = $3)
              AND ($4::text IS NULL OR section_name = $4)
            "#,
        )
        .bind(exam_id)
        .bind(school_id)
        .bind(dto.class_name.as_deref())
        .bind(dto.section_name.as_deref())
        .execute(&mut *tx)
        .await
        .context("Failed to publish results")
        .map_err(AppError::database)?;

        let existing = sqlx::query_as::<_, ResultPublication>(
            r#"
            UPDATE result_publications
            SET published_by = $1,
                notify_students = $2,
                notify_guardians = $3,
                published_at = NOW()
            WHERE exam_id = $4 AND school_id = $5
              AND class_name IS NOT DISTINCT FROM $6
              AND section_name IS NOT DISTINCT FROM $7
            RETURNING *
            "#,
        )
        .bind(dto.published_by)
        .bind(dto.notify_students)
        .bind(dto.notify_guardians)
        .bind(exam_id)
        .bind(school_id)
        .bind(dto.class_name.as_deref())
        .bind(dto.section_name.as_deref())
        .fetch_optional(&mut *tx)
        .await
        .context("Failed to refresh publication record")
        .map_err(AppError::database)?;

        let publication = match existing {
            Some(publication) => publication,
            None => sqlx::query_as::<_, ResultPublication>(
                r#"
                INSERT INTO result_publications
                    (school_id, exam_id, class_name, section_name, published_by,
                     notify_students, notify_guardians)
                VALUES ($1, $2, $3, $4, $5, $6, $7)
                RETURNING *
                "#,
            )
            .bind(school_id)
            .bind(exam_id)
            .bind(dto.class_name.as_deref())
            .bind(dto.section_name.as_deref())
            .bind(dto.published_by)
            .bind(dto.notify_students)
            .bind(dto.notify_guardians)
            .fetch_one(&mut *tx)
            .await
            .context("Failed to record publication")
            .map_err(AppError::database)?,
        };

        tx.commit()
            .await
            .context("Failed to commit publication")
            .map_err(AppError::database)?;

        Ok(PublishResultsResponse {
            publication,
            published_count: updated.rows_affected(),
        })
    }
}
