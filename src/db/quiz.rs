use color_eyre::Result;

use super::models::{QuizRecord, QuizSummary};
use super::Db;
use crate::services::assessment::ResultStore;

impl Db {
    pub async fn published_quizzes(&self) -> Result<Vec<QuizSummary>> {
        let quizzes = sqlx::query_as::<_, QuizSummary>(
            r#"
            SELECT slug, title,
                   COALESCE(jsonb_array_length(definition->'questions'), 0)::INT AS question_count
            FROM quizzes
            WHERE published = TRUE
            ORDER BY title
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(quizzes)
    }

    /// Unpublished quizzes are invisible, not forbidden: lookups treat
    /// them the same as a slug that never existed.
    pub async fn quiz_by_slug(&self, slug: &str) -> Result<Option<QuizRecord>> {
        let quiz = sqlx::query_as::<_, QuizRecord>(
            "SELECT slug, title, definition, published FROM quizzes WHERE slug = $1 AND published = TRUE",
        )
        .bind(slug)
        .fetch_optional(&self.pool)
        .await?;

        Ok(quiz)
    }

}

impl ResultStore for Db {
    async fn record_result(&self, slug: &str, score: i32, band: &str) -> Result<()> {
        sqlx::query("INSERT INTO quiz_results (quiz_slug, score, band) VALUES ($1, $2, $3)")
            .bind(slug)
            .bind(score)
            .bind(band)
            .execute(&self.pool)
            .await?;

        tracing::info!("recorded quiz result: slug={slug}, score={score}, band={band}");
        Ok(())
    }

    async fn results_count(&self, slug: &str) -> Result<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM quiz_results WHERE quiz_slug = $1")
            .bind(slug)
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}
