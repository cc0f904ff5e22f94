use nairavest_core::{AppError, AppResult};
use nairavest_domain::State;
use sqlx::PgPool;
use tracing::info;

/// Idempotently seeds the `states` table with the canonical reference list.
pub async fn run(pool: &PgPool) -> AppResult<()> {
    let states = State::seed_list();
    let total = states.len();

    for (index, state) in states.iter().enumerate() {
        sqlx::query(
            r#"
            INSERT INTO states (code, name)
            VALUES ($1, $2)
            ON CONFLICT (code) DO UPDATE SET name = EXCLUDED.name
            "#,
        )
        .bind(&state.code)
        .bind(&state.name)
        .execute(pool)
        .await
        .map_err(|error| {
            AppError::Internal(format!("failed to seed state '{}': {error}", state.code))
        })?;

        info!(
            code = %state.code,
            name = %state.name,
            "seeded state {}/{total}",
            index + 1
        );
    }

    info!("state seeding complete");
    Ok(())
}
