//! Startup seeding of the platform catalog.

use slettmeg_core::catalog::PLATFORM_CATALOG;
use sqlx::PgPool;

/// Upsert the built-in platform catalog, keyed by slug.
///
/// Existing rows are refreshed with the current catalog copy so deploys
/// pick up edits; rows for slugs no longer in the catalog are left alone
/// (users may have requests pointing at them). Returns the number of
/// catalog entries applied.
pub async fn seed_platforms(pool: &PgPool) -> Result<usize, sqlx::Error> {
    for entry in PLATFORM_CATALOG {
        sqlx::query(
            "INSERT INTO platforms (name, slug, category, description, difficulty, estimated_time, guide_url)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             ON CONFLICT ON CONSTRAINT uq_platforms_slug DO UPDATE SET
                name = EXCLUDED.name,
                category = EXCLUDED.category,
                description = EXCLUDED.description,
                difficulty = EXCLUDED.difficulty,
                estimated_time = EXCLUDED.estimated_time,
                guide_url = EXCLUDED.guide_url",
        )
        .bind(entry.name)
        .bind(entry.slug)
        .bind(entry.category)
        .bind(entry.description)
        .bind(entry.difficulty.as_str())
        .bind(entry.estimated_time)
        .bind(entry.guide_url)
        .execute(pool)
        .await?;
    }
    tracing::info!(count = PLATFORM_CATALOG.len(), "platform catalog seeded");
    Ok(PLATFORM_CATALOG.len())
}
