//! Password-reset token repository implementation.

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use roombook_core::error::{AppError, ErrorKind};
use roombook_core::result::AppResult;
use roombook_entity::reset::PasswordResetToken;

/// Repository for password-reset token issuance and consumption.
#[derive(Debug, Clone)]
pub struct ResetTokenRepository {
    pool: PgPool,
}

impl ResetTokenRepository {
    /// Create a new reset-token repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Issue a new token for the given user with the given expiry.
    pub async fn create(
        &self,
        user_id: Uuid,
        token: &str,
        expires_at: DateTime<Utc>,
    ) -> AppResult<PasswordResetToken> {
        sqlx::query_as::<_, PasswordResetToken>(
            "INSERT INTO password_reset_tokens (user_id, token, expires_at) \
             VALUES ($1, $2, $3) \
             RETURNING *",
        )
        .bind(user_id)
        .bind(token)
        .bind(expires_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create reset token", e))
    }

    /// Consume a token and rotate the owner's password in one transaction.
    ///
    /// The UPDATE matches only an unconsumed, unexpired token belonging to
    /// the given user; zero rows means the token is invalid, already used,
    /// expired, or issued for someone else, and those outcomes are
    /// deliberately indistinguishable to the caller.
    pub async fn consume_and_set_password(
        &self,
        token: &str,
        user_id: Uuid,
        new_password_hash: &str,
    ) -> AppResult<()> {
        let mut tx = self.pool.begin().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to begin transaction", e)
        })?;

        let consumed = sqlx::query_as::<_, PasswordResetToken>(
            "UPDATE password_reset_tokens SET used_at = NOW() \
             WHERE token = $1 AND user_id = $2 AND used_at IS NULL AND expires_at > NOW() \
             RETURNING *",
        )
        .bind(token)
        .bind(user_id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to consume reset token", e)
        })?;

        let Some(consumed) = consumed else {
            return Err(AppError::unauthorized("Invalid or expired reset token"));
        };

        let updated =
            sqlx::query("UPDATE users SET password_hash = $2, updated_at = NOW() WHERE id = $1")
                .bind(consumed.user_id)
                .bind(new_password_hash)
                .execute(&mut *tx)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to rotate password", e)
                })?;

        if updated.rows_affected() == 0 {
            return Err(AppError::not_found(format!(
                "User {} not found",
                consumed.user_id
            )));
        }

        tx.commit().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to commit transaction", e)
        })?;
        Ok(())
    }
}
