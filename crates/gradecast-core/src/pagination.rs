//! Pagination parameters and response metadata for list endpoints.
//!
//! List endpoints accept `page` (1-indexed) and `limit` query parameters and
//! return a [`PaginationMeta`] alongside the data page.

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Metadata included in paginated responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PaginationMeta {
    /// Current page (1-indexed)
    pub page: i64,
    /// Items per page
    pub limit: i64,
    /// Total items across all pages
    pub total: i64,
    /// Total number of pages
    pub total_pages: i64,
}

impl PaginationMeta {
    /// Build metadata from the applied page/limit and the total row count.
    pub fn new(page: i64, limit: i64, total: i64) -> Self {
        let total_pages = if total == 0 {
            0
        } else {
            (total + limit - 1) / limit
        };
        Self {
            page,
            limit,
            total,
            total_pages,
        }
    }
}

/// Query parameters for paginating list endpoints.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
pub struct PaginationParams {
    /// Page number (1-indexed, default: 1)
    pub page: Option<i64>,
    /// Items per page (1-100, default: 20)
    pub limit: Option<i64>,
}

impl PaginationParams {
    /// Page number, defaulting to 1 and clamped to a minimum of 1.
    pub fn page(&self) -> i64 {
        self.page.unwrap_or(1).max(1)
    }

    /// Items per page, defaulting to 20 and clamped to [1, 100].
    pub fn limit(&self) -> i64 {
        self.limit.unwrap_or(20).clamp(1, 100)
    }

    /// Row offset derived from page and limit.
    pub fn offset(&self) -> i64 {
        (self.page() - 1) * self.limit()
    }
}
