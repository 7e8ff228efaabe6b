//! # Gradecast DB
//!
//! PostgreSQL connection pool initialization for the Gradecast API.
//!
//! The pool is created from the `DATABASE_URL` environment variable. Initial
//! connection attempts are retried with exponential backoff so the service
//! survives a database that comes up slightly after it does.
//!
//! # Example
//!
//! ```ignore
//! use gradecast_db::init_db_pool;
//!
//! #[tokio::main]
//! async fn main() {
//!     let pool = init_db_pool().await;
//!     // Use pool for database operations
//! }
//! ```

use sqlx::postgres::PgPoolOptions;
use std::env;
use std::time::Duration;
use tracing::warn;

const CONNECT_ATTEMPTS: u32 = 5;
const CONNECT_BASE_DELAY: Duration = Duration::from_millis(500);

/// Initializes a PostgreSQL connection pool.
///
/// Reads the connection string from `DATABASE_URL` and connects with up to
/// five attempts, doubling the delay between attempts. The returned pool is
/// cheaply cloneable and should be stored in the application state.
///
/// # Panics
///
/// Panics if `DATABASE_URL` is not set or if the database is still
/// unreachable after the final attempt.
pub async fn init_db_pool() -> sqlx::PgPool {
    let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set");

    let mut delay = CONNECT_BASE_DELAY;
    let mut attempt = 1;
    loop {
        match PgPoolOptions::new()
            .max_connections(10)
            .connect(&database_url)
            .await
        {
            Ok(pool) => return pool,
            Err(e) if attempt < CONNECT_ATTEMPTS => {
                warn!(
                    attempt,
                    error = %e,
                    "Database connection failed, retrying"
                );
                tokio::time::sleep(delay).await;
                delay *= 2;
                attempt += 1;
            }
            Err(e) => panic!("Failed to connect to database: {e}"),
        }
    }
}

// Re-export PgPool for convenience
pub use sqlx::PgPool;
