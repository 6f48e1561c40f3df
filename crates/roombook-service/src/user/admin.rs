//! Administrative user management: CRUD, suspension, and role changes.

use std::sync::Arc;

use tracing::{info, warn};
use uuid::Uuid;

use roombook_auth::password::PasswordHasher;
use roombook_auth::AuthorizationGate;
use roombook_core::config::auth::AuthConfig;
use roombook_core::error::AppError;
use roombook_database::repositories::user::{UserFilter, UserRepository};
use roombook_entity::user::model::{CreateUser, UpdateUser};
use roombook_entity::user::{User, UserRole};

use crate::context::RequestContext;

/// Input for creating a new user.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct CreateUserInput {
    /// Display name.
    pub name: String,
    /// Email (unique).
    pub email: String,
    /// Initial password. When omitted for ADMIN or STAFF accounts, a
    /// role-specific default from configuration is assigned.
    pub password: Option<String>,
    /// Role assignment.
    pub role: UserRole,
}

/// Input for a partial user update. `None` fields are left unchanged.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct UpdateUserInput {
    pub name: Option<String>,
    pub email: Option<String>,
    pub role: Option<UserRole>,
    pub is_suspended: Option<bool>,
}

/// Handles administrative user management operations.
#[derive(Debug, Clone)]
pub struct AdminUserService {
    user_repo: Arc<UserRepository>,
    hasher: Arc<PasswordHasher>,
    gate: AuthorizationGate,
    auth_config: Arc<AuthConfig>,
}

impl AdminUserService {
    pub fn new(
        user_repo: Arc<UserRepository>,
        hasher: Arc<PasswordHasher>,
        gate: AuthorizationGate,
        auth_config: Arc<AuthConfig>,
    ) -> Self {
        Self {
            user_repo,
            hasher,
            gate,
            auth_config,
        }
    }

    /// Re-checks the caller's live account record.
    ///
    /// Session tokens are stateless, so a caller suspended or deleted
    /// after issuance still holds a verifiable token. Mutating operations
    /// consult the live record and use its role, not the token's.
    async fn require_live_caller(&self, ctx: &RequestContext) -> Result<User, AppError> {
        let caller = self
            .user_repo
            .find_by_id(ctx.user_id)
            .await?
            .ok_or_else(|| AppError::unauthorized("Account no longer exists"))?;

        if caller.is_suspended {
            return Err(AppError::forbidden("Account is suspended"));
        }
        Ok(caller)
    }

    /// Lists users visible to the caller.
    ///
    /// ADMIN callers are implicitly restricted to STAFF accounts; an
    /// explicit role filter is ANDed with that restriction, so an ADMIN
    /// asking for role=ADMIN gets an empty list rather than an error.
    pub async fn list_users(
        &self,
        ctx: &RequestContext,
        role: Option<UserRole>,
        is_suspended: Option<bool>,
    ) -> Result<Vec<User>, AppError> {
        self.gate.require_at_least(ctx.role, UserRole::Admin)?;

        let effective_role = match (self.gate.visible_role_filter(ctx.role), role) {
            (Some(implicit), Some(requested)) if implicit != requested => return Ok(Vec::new()),
            (Some(implicit), _) => Some(implicit),
            (None, requested) => requested,
        };

        self.user_repo
            .list(UserFilter {
                role: effective_role,
                is_suspended,
            })
            .await
    }

    /// Gets a single user, subject to the caller's management scope.
    pub async fn get_user(&self, ctx: &RequestContext, user_id: Uuid) -> Result<User, AppError> {
        self.gate.require_at_least(ctx.role, UserRole::Admin)?;

        let user = self
            .user_repo
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))?;

        self.gate.require_can_manage(ctx.role, user.role)?;
        Ok(user)
    }

    /// Creates a new user. SUPER_ADMIN only.
    pub async fn create_user(
        &self,
        ctx: &RequestContext,
        input: CreateUserInput,
    ) -> Result<User, AppError> {
        let caller = self.require_live_caller(ctx).await?;
        self.gate.require_super_admin(caller.role)?;

        if input.name.trim().is_empty() {
            return Err(AppError::validation("Name is required"));
        }
        if !input.email.contains('@') {
            return Err(AppError::validation("Invalid email format"));
        }

        // Pre-check only; the unique constraint is the authoritative guard
        // and a violation maps to the same Conflict.
        if self.user_repo.find_by_email(&input.email).await?.is_some() {
            return Err(AppError::conflict("Email already in use"));
        }

        let password = self.resolve_initial_password(&input)?;
        let password_hash = self.hasher.hash_password(&password)?;

        let user = self
            .user_repo
            .create(&CreateUser {
                name: input.name,
                email: input.email,
                password_hash,
                role: input.role,
            })
            .await?;

        info!(
            admin_id = %ctx.user_id,
            new_user_id = %user.id,
            role = %user.role,
            "User created"
        );

        Ok(user)
    }

    /// Picks the initial password: explicit if given, otherwise the
    /// role-specific default. SUPER_ADMIN accounts never get a default.
    fn resolve_initial_password(&self, input: &CreateUserInput) -> Result<String, AppError> {
        if let Some(ref password) = input.password {
            if password.len() < self.auth_config.password_min_length {
                return Err(AppError::validation(format!(
                    "Password must be at least {} characters",
                    self.auth_config.password_min_length
                )));
            }
            return Ok(password.clone());
        }

        let default = match input.role {
            UserRole::Admin => &self.auth_config.default_admin_password,
            UserRole::Staff => &self.auth_config.default_staff_password,
            UserRole::SuperAdmin => {
                return Err(AppError::validation(
                    "An explicit password is required for SUPER_ADMIN accounts",
                ));
            }
        };

        warn!(role = %input.role, "Assigning role-specific default password");
        Ok(default.clone())
    }

    /// Applies a partial update to a user.
    ///
    /// ADMIN callers may only touch STAFF targets; only SUPER_ADMIN may
    /// change the role field. Unsupplied fields keep their current value.
    pub async fn update_user(
        &self,
        ctx: &RequestContext,
        user_id: Uuid,
        input: UpdateUserInput,
    ) -> Result<User, AppError> {
        let caller = self.require_live_caller(ctx).await?;
        self.gate.require_at_least(caller.role, UserRole::Admin)?;

        let target = self
            .user_repo
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))?;

        self.gate.require_can_manage(caller.role, target.role)?;

        if input.role.is_some() {
            self.gate.require_super_admin(caller.role).map_err(|_| {
                AppError::forbidden("Only a SUPER_ADMIN may change a user's role")
            })?;
        }

        if let Some(ref email) = input.email {
            if !email.contains('@') {
                return Err(AppError::validation("Invalid email format"));
            }
            if let Some(existing) = self.user_repo.find_by_email(email).await? {
                if existing.id != user_id {
                    return Err(AppError::conflict("Email already in use"));
                }
            }
        }

        let updated = self
            .user_repo
            .update(
                user_id,
                &UpdateUser {
                    name: input.name,
                    email: input.email,
                    role: input.role,
                    is_suspended: input.is_suspended,
                },
            )
            .await?;

        info!(admin_id = %ctx.user_id, target_id = %user_id, "User updated");

        Ok(updated)
    }

    /// Sets or clears a user's suspension flag.
    pub async fn set_suspended(
        &self,
        ctx: &RequestContext,
        user_id: Uuid,
        suspended: bool,
    ) -> Result<User, AppError> {
        let caller = self.require_live_caller(ctx).await?;
        self.gate.require_at_least(caller.role, UserRole::Admin)?;

        if user_id == ctx.user_id {
            return Err(AppError::forbidden("Cannot change your own suspension"));
        }

        let target = self
            .user_repo
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))?;

        self.gate.require_can_manage(caller.role, target.role)?;

        let updated = self.user_repo.set_suspended(user_id, suspended).await?;

        info!(
            admin_id = %ctx.user_id,
            target_id = %user_id,
            suspended,
            "User suspension changed"
        );

        Ok(updated)
    }

    /// Deletes a user. SUPER_ADMIN only.
    pub async fn delete_user(&self, ctx: &RequestContext, user_id: Uuid) -> Result<(), AppError> {
        let caller = self.require_live_caller(ctx).await?;
        self.gate.require_super_admin(caller.role)?;

        if user_id == ctx.user_id {
            return Err(AppError::forbidden("Cannot delete your own account"));
        }

        let deleted = self.user_repo.delete(user_id).await?;
        if !deleted {
            return Err(AppError::not_found("User not found"));
        }

        info!(admin_id = %ctx.user_id, target_id = %user_id, "User deleted");
        Ok(())
    }
}
