use color_eyre::Result;

use super::models::SubscriberStatus;
use super::Db;
use crate::services::newsletter::SubscriberRepository;

impl SubscriberRepository for Db {
    /// Create or reset a pending signup. An active subscriber is left
    /// untouched so a stray double signup cannot knock them back to
    /// pending.
    async fn upsert_pending(&self, email: &str) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO subscribers (email, status) VALUES ($1, 'pending')
            ON CONFLICT (email) DO UPDATE SET status = 'pending'
            WHERE subscribers.status <> 'active'
            "#,
        )
        .bind(email)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Activation trusts the signed token, so a missing row is created
    /// rather than rejected. The first confirmation timestamp wins.
    async fn activate(&self, email: &str) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO subscribers (email, status, confirmed_at) VALUES ($1, 'active', NOW())
            ON CONFLICT (email) DO UPDATE
            SET status = 'active',
                confirmed_at = COALESCE(subscribers.confirmed_at, NOW())
            "#,
        )
        .bind(email)
        .execute(&self.pool)
        .await?;

        tracing::info!("subscriber activated: {email}");
        Ok(())
    }

    async fn deactivate(&self, email: &str) -> Result<()> {
        sqlx::query(
            "UPDATE subscribers SET status = 'unsubscribed', unsubscribed_at = NOW() WHERE email = $1",
        )
        .bind(email)
        .execute(&self.pool)
        .await?;

        tracing::info!("subscriber unsubscribed: {email}");
        Ok(())
    }

    async fn status(&self, email: &str) -> Result<Option<SubscriberStatus>> {
        let status: Option<String> =
            sqlx::query_scalar("SELECT status FROM subscribers WHERE email = $1")
                .bind(email)
                .fetch_optional(&self.pool)
                .await?;

        Ok(status.as_deref().and_then(SubscriberStatus::parse))
    }
}
