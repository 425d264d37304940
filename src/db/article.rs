use color_eyre::Result;

use super::models::{Article, ArticleSummary};
use super::Db;

impl Db {
    /// Newest first. Articles scheduled in the future stay hidden.
    pub async fn published_articles(&self) -> Result<Vec<ArticleSummary>> {
        let articles = sqlx::query_as::<_, ArticleSummary>(
            r#"
            SELECT slug, title, summary, published_at
            FROM articles
            WHERE published_at <= NOW()
            ORDER BY published_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(articles)
    }

    pub async fn article_by_slug(&self, slug: &str) -> Result<Option<Article>> {
        let article = sqlx::query_as::<_, Article>(
            r#"
            SELECT slug, title, summary, body_html, published_at
            FROM articles
            WHERE slug = $1 AND published_at <= NOW()
            "#,
        )
        .bind(slug)
        .fetch_optional(&self.pool)
        .await?;

        Ok(article)
    }
}
