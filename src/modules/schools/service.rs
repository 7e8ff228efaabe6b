use crate::{modules::schools::model::{CreateSchoolDto, School}, utils::errors::AppError};
use anyhow::Context;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

pub struct SchoolService;

impl SchoolService {
    #[instrument(skip(db, dto))]
    pub async fn create_school(db: &PgPool, dto: CreateSchoolDto) -> Result<School, AppError> {
        let school = sqlx::query_as::<_, School>(
            r#"
            INSERT INTO schools (name, address)
            VALUES ($1, $2)
            RETURNING *
            "#,
        )
        .bind(&dto.name)
        .bind(&dto.address)
        .fetch_one(db)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db_err) = &e {
                if db_err.is_unique_violation() {
                    return AppError::bad_request(anyhow::anyhow!(
                        "School with name {} already exists",
                        dto.name
                    ));
                }
            }
            AppError::database(anyhow::Error::from(e))
        })?;

        Ok(school)
    }

    #[instrument(skip(db))]
    pub async fn get_schools(
        db: &PgPool,
        limit: i64,
        offset: i64,
    ) -> Result<(Vec<School>, i64), AppError> {
        let schools = sqlx::query_as::<_, School>(
            r#"
            SELECT * FROM schools
            ORDER BY name
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(db)
        .await
        .context("Failed to fetch schools")
        .map_err(AppError::database)?;

        let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM schools")
            .fetch_one(db)
            .await
            .context("Failed to count schools")
            .map_err(AppError::database)?;

        Ok((schools, total))
    }

    #[instrument(skip(db))]
    pub async fn get_school_by_id(db: &PgPool, id: Uuid) -> Result<School, AppError> {
        let school = sqlx::query_as::<_, School>("SELECT * FROM schools WHERE id = $1")
            .bind(id)
            .fetch_optional(db)
            .await
            .context("Failed to fetch school by ID")
            .map_err(AppError::database)?
            .ok_or_else(|| AppError::not_found(anyhow::anyhow!("School not found")))?;

        Ok(school)
    }
}
