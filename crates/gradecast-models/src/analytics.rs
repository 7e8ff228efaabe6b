//! Exam analytics models.
//!
//! Analytics are generated after results exist: pass/fail counts, a rounded
//! pass percentage, and a fixed-band grade distribution. One stored row per
//! (exam, class?) scope, upserted on regeneration.

use chrono::{DateTime, Utc};
use gradecast_core::{GradeDistribution, PassStats};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

/// Stored aggregate statistics for an exam scope.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct ResultAnalytics {
    pub id: Uuid,
    pub school_id: Uuid,
    pub exam_id: Uuid,
    /// Class scope; null means the whole exam
    pub class_name: Option<String>,
    pub total_students: i32,
    pub passed_count: i32,
    pub failed_count: i32,
    /// Rounded to the nearest integer; 0 when no results exist
    pub pass_percentage: f64,
    pub band_90_100: i32,
    pub band_80_89: i32,
    pub band_70_79: i32,
    pub band_60_69: i32,
    pub band_50_59: i32,
    pub band_40_49: i32,
    pub band_below_40: i32,
    pub generated_at: DateTime<Utc>,
}

/// DTO for generating analytics.
#[derive(Debug, Default, Deserialize, ToSchema, Validate)]
pub struct GenerateAnalyticsDto {
    #[validate(length(min = 1, max = 50))]
    pub class_name: Option<String>,
}

/// Query parameters for fetching analytics or distributions.
#[derive(Debug, Deserialize, IntoParams)]
pub struct AnalyticsQueryParams {
    pub class_name: Option<String>,
}

/// On-the-fly pass/fail and grade-band distribution for an exam scope.
#[derive(Debug, Serialize, ToSchema)]
pub struct DistributionResponse {
    #[serde(flatten)]
    pub stats: PassStats,
    pub distribution: GradeDistribution,
}
