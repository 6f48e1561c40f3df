//! Sign-in: credential verification, suspension check, token issuance.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{info, warn};

use roombook_auth::password::PasswordHasher;
use roombook_auth::JwtEncoder;
use roombook_core::error::AppError;
use roombook_database::repositories::user::UserRepository;
use roombook_entity::user::{User, UserRole};

/// Result of a successful sign-in.
#[derive(Debug, Clone)]
pub struct SignInOutcome {
    /// The authenticated user.
    pub user: User,
    /// Signed session token.
    pub token: String,
    /// Absolute token expiry.
    pub expires_at: DateTime<Utc>,
    /// Role-specific landing page.
    pub redirect_to: &'static str,
}

/// Handles credential verification and session issuance.
#[derive(Debug, Clone)]
pub struct AuthService {
    user_repo: Arc<UserRepository>,
    hasher: Arc<PasswordHasher>,
    encoder: Arc<JwtEncoder>,
}

impl AuthService {
    pub fn new(
        user_repo: Arc<UserRepository>,
        hasher: Arc<PasswordHasher>,
        encoder: Arc<JwtEncoder>,
    ) -> Self {
        Self {
            user_repo,
            hasher,
            encoder,
        }
    }

    /// Verifies credentials and issues a session token.
    ///
    /// An unknown email and a wrong password produce the same error, so
    /// callers cannot probe which addresses are registered. Suspension is
    /// only revealed after the password check passes.
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<SignInOutcome, AppError> {
        if email.trim().is_empty() || password.is_empty() {
            return Err(AppError::validation("Email and password are required"));
        }

        let user = match self.user_repo.find_by_email(email).await? {
            Some(user) => user,
            None => {
                warn!(email = %email, "Sign-in attempt for unknown email");
                return Err(AppError::unauthorized("Invalid email or password"));
            }
        };

        let valid = self.hasher.verify_password(password, &user.password_hash)?;
        if !valid {
            warn!(user_id = %user.id, "Sign-in attempt with wrong password");
            return Err(AppError::unauthorized("Invalid email or password"));
        }

        if !user.can_sign_in() {
            warn!(user_id = %user.id, "Sign-in attempt on suspended account");
            return Err(AppError::forbidden("Account is suspended"));
        }

        let (token, expires_at) = self.encoder.issue(user.id, user.role, &user.email)?;

        info!(user_id = %user.id, role = %user.role, "User signed in");

        Ok(SignInOutcome {
            redirect_to: redirect_for_role(user.role),
            user,
            token,
            expires_at,
        })
    }
}

/// Role-specific landing page after sign-in.
pub fn redirect_for_role(role: UserRole) -> &'static str {
    match role {
        UserRole::SuperAdmin => "/super-admin",
        UserRole::Admin => "/admin",
        UserRole::Staff => "/staff",
    }
}
