//! Password-reset token issuance and consumption.

use std::sync::Arc;

use chrono::{Duration, Utc};
use tracing::info;
use uuid::Uuid;

use roombook_auth::password::PasswordHasher;
use roombook_auth::AuthorizationGate;
use roombook_core::config::auth::AuthConfig;
use roombook_core::error::AppError;
use roombook_database::repositories::reset_token::ResetTokenRepository;
use roombook_database::repositories::user::UserRepository;
use roombook_entity::reset::PasswordResetToken;
use roombook_entity::user::UserRole;

use crate::context::RequestContext;

/// Handles the password-reset flow: authorized issuance of single-use
/// tokens and their atomic consumption.
#[derive(Debug, Clone)]
pub struct PasswordResetService {
    user_repo: Arc<UserRepository>,
    token_repo: Arc<ResetTokenRepository>,
    hasher: Arc<PasswordHasher>,
    gate: AuthorizationGate,
    auth_config: Arc<AuthConfig>,
}

impl PasswordResetService {
    pub fn new(
        user_repo: Arc<UserRepository>,
        token_repo: Arc<ResetTokenRepository>,
        hasher: Arc<PasswordHasher>,
        gate: AuthorizationGate,
        auth_config: Arc<AuthConfig>,
    ) -> Self {
        Self {
            user_repo,
            token_repo,
            hasher,
            gate,
            auth_config,
        }
    }

    /// Issues a reset token for the target user.
    ///
    /// ADMIN callers may only target STAFF accounts. The token value is an
    /// opaque random UUID, valid for the configured window (one hour by
    /// default) from issuance.
    pub async fn request_reset(
        &self,
        ctx: &RequestContext,
        target_user_id: Uuid,
    ) -> Result<PasswordResetToken, AppError> {
        self.gate.require_at_least(ctx.role, UserRole::Admin)?;

        let caller = self
            .user_repo
            .find_by_id(ctx.user_id)
            .await?
            .ok_or_else(|| AppError::unauthorized("Account no longer exists"))?;
        if caller.is_suspended {
            return Err(AppError::forbidden("Account is suspended"));
        }

        let target = self
            .user_repo
            .find_by_id(target_user_id)
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))?;

        self.gate.require_can_manage(caller.role, target.role)?;

        let token_value = Uuid::new_v4().to_string();
        let expires_at =
            Utc::now() + Duration::minutes(self.auth_config.reset_token_ttl_minutes as i64);

        let token = self
            .token_repo
            .create(target.id, &token_value, expires_at)
            .await?;

        info!(
            admin_id = %ctx.user_id,
            target_id = %target.id,
            expires_at = %expires_at,
            "Password-reset token issued"
        );

        Ok(token)
    }

    /// Consumes a reset token and sets the new password.
    ///
    /// No session is required: possession of a token issued for the target
    /// user is the credential. The consume-and-rotate happens in one
    /// transaction, so a token can never rotate a password twice even under
    /// concurrent submissions.
    pub async fn consume_reset(
        &self,
        target_user_id: Uuid,
        token: &str,
        new_password: &str,
    ) -> Result<(), AppError> {
        if token.trim().is_empty() {
            return Err(AppError::validation("Reset token is required"));
        }
        if new_password.len() < self.auth_config.password_min_length {
            return Err(AppError::validation(format!(
                "Password must be at least {} characters",
                self.auth_config.password_min_length
            )));
        }

        let new_hash = self.hasher.hash_password(new_password)?;
        self.token_repo
            .consume_and_set_password(token, target_user_id, &new_hash)
            .await?;

        info!("Password rotated via reset token");
        Ok(())
    }
}
