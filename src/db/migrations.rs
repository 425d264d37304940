use color_eyre::Result;

// Applied versions are recorded in schema_migrations, so each file runs at
// most once per database.
const MIGRATIONS: &[(&str, &str)] = &[
    ("V1", include_str!("../../migrations/V1__init.sql")),
    ("V2", include_str!("../../migrations/V2__seed_content.sql")),
];

pub async fn run(pool: &sqlx::PgPool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS schema_migrations (
            version TEXT PRIMARY KEY,
            applied_at TIMESTAMPTZ NOT NULL DEFAULT CURRENT_TIMESTAMP
        )
        "#,
    )
    .execute(pool)
    .await?;

    let applied: Vec<String> = sqlx::query_scalar("SELECT version FROM schema_migrations")
        .fetch_all(pool)
        .await?;

    for &(version, sql) in MIGRATIONS {
        if applied.iter().any(|v| v == version) {
            continue;
        }

        // Migration files hold several statements, which needs raw_sql.
        sqlx::raw_sql(sql).execute(pool).await?;

        sqlx::query("INSERT INTO schema_migrations (version) VALUES ($1)")
            .bind(version)
            .execute(pool)
            .await?;

        tracing::info!(version, "applied database migration");
    }

    Ok(())
}
