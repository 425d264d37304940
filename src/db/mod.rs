// Database module - provides data access layer

use color_eyre::Result;
use sqlx::postgres::PgPoolOptions;

// Re-export models for convenience
pub mod models;
pub use models::*;

// Internal modules
mod article;
mod migrations;
mod quiz;
mod subscriber;

// Main database handle
#[derive(Clone)]
pub struct Db {
    pool: sqlx::PgPool,
}

impl Db {
    pub async fn new(url: &str) -> Result<Self> {
        let pool = PgPoolOptions::new().max_connections(5).connect(url).await?;

        // Verify connection
        let one: i32 = sqlx::query_scalar("SELECT 1").fetch_one(&pool).await?;
        assert_eq!(one, 1);

        migrations::run(&pool).await?;

        tracing::info!("database connection has been verified");

        Ok(Self { pool })
    }
}
