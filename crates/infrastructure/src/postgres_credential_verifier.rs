//! PostgreSQL-backed credential verifier using the `users` table.
//!
//! Password hashes use Argon2id with OWASP-recommended parameters:
//! m=19456 (19 MiB), t=2, p=1.

use argon2::password_hash::SaltString;
use argon2::{Algorithm, Argon2, Params, PasswordHash, PasswordHasher, PasswordVerifier, Version};
use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use nairavest_application::{CredentialVerifier, VerifiedAccount};
use nairavest_core::{AppError, AppResult};
use nairavest_domain::{PhoneNumber, UserId};

fn argon2() -> Argon2<'static> {
    let params = Params::new(19456, 2, 1, None).unwrap_or_else(|_| Params::default());
    Argon2::new(Algorithm::Argon2id, Version::V0x13, params)
}

/// Hashes a plaintext password for storage in the `users` table.
pub fn hash_password(password: &str) -> AppResult<String> {
    let salt = SaltString::generate(&mut argon2::password_hash::rand_core::OsRng);

    let hash = argon2()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|error| AppError::Internal(format!("failed to hash password: {error}")))?;

    Ok(hash.to_string())
}

fn verify_password(password: &str, hash: &str) -> AppResult<bool> {
    let parsed_hash = PasswordHash::new(hash)
        .map_err(|error| AppError::Internal(format!("failed to parse password hash: {error}")))?;

    match argon2().verify_password(password.as_bytes(), &parsed_hash) {
        Ok(()) => Ok(true),
        Err(argon2::password_hash::Error::Password) => Ok(false),
        Err(error) => Err(AppError::Internal(format!(
            "password verification failed: {error}"
        ))),
    }
}

/// PostgreSQL implementation of the credential verifier port.
#[derive(Clone)]
pub struct PostgresCredentialVerifier {
    pool: PgPool,
    dummy_hash: String,
}

impl PostgresCredentialVerifier {
    /// Creates a verifier with the provided connection pool.
    ///
    /// A throwaway hash is precomputed so unknown identifiers still pay the
    /// full verification cost, keeping response timing flat.
    pub fn new(pool: PgPool) -> AppResult<Self> {
        let dummy_hash = hash_password(&Uuid::new_v4().to_string())?;

        Ok(Self { pool, dummy_hash })
    }
}

#[async_trait]
impl CredentialVerifier for PostgresCredentialVerifier {
    async fn verify(
        &self,
        phone: &PhoneNumber,
        password: &str,
    ) -> AppResult<Option<VerifiedAccount>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, phone, display_name, password_hash
            FROM users
            WHERE phone = $1
            LIMIT 1
            "#,
        )
        .bind(phone.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|error| AppError::Internal(format!("failed to find user by phone: {error}")))?;

        let Some(row) = row else {
            // Unknown identifier: verify against the throwaway hash anyway.
            let _ = verify_password(password, &self.dummy_hash);
            return Ok(None);
        };

        if !verify_password(password, &row.password_hash)? {
            return Ok(None);
        }

        Ok(Some(VerifiedAccount {
            id: UserId::from_uuid(row.id),
            phone: row.phone,
            display_name: row.display_name,
        }))
    }
}

#[derive(Debug, sqlx::FromRow)]
struct UserRow {
    id: Uuid,
    phone: String,
    display_name: Option<String>,
    password_hash: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_and_verify_correct_password() -> AppResult<()> {
        let hash = hash_password("my-secret-password")?;
        assert!(verify_password("my-secret-password", &hash)?);
        Ok(())
    }

    #[test]
    fn verify_wrong_password_returns_false() -> AppResult<()> {
        let hash = hash_password("correct-password")?;
        assert!(!verify_password("wrong-password", &hash)?);
        Ok(())
    }

    #[test]
    fn garbage_hash_is_an_internal_error() {
        assert!(verify_password("anything", "not-a-phc-string").is_err());
    }
}
