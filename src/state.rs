use sqlx::PgPool;

use crate::config::cors::CorsConfig;
use crate::config::database::init_db_pool;
use crate::config::grading::GradingConfig;

#[derive(Clone, Debug)]
pub struct AppState {
    pub db: PgPool,
    pub grading: GradingConfig,
    pub cors_config: CorsConfig,
}

pub async fn init_app_state() -> AppState {
    AppState {
        db: init_db_pool().await,
        grading: GradingConfig::from_env(),
        cors_config: CorsConfig::from_env(),
    }
}
