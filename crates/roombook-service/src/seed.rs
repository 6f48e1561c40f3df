//! Bootstrap seeding of the initial SUPER_ADMIN account.

use std::sync::Arc;

use tracing::{info, warn};

use roombook_auth::password::PasswordHasher;
use roombook_core::config::auth::SeedConfig;
use roombook_core::error::AppError;
use roombook_database::repositories::user::{UserFilter, UserRepository};
use roombook_entity::user::model::CreateUser;
use roombook_entity::user::UserRole;

/// Seeds the bootstrap SUPER_ADMIN when no SUPER_ADMIN account exists
/// yet, regardless of email. Idempotent: safe to run on every startup.
pub async fn seed_super_admin(
    config: &SeedConfig,
    user_repo: &Arc<UserRepository>,
    hasher: &Arc<PasswordHasher>,
) -> Result<(), AppError> {
    if !config.enabled {
        return Ok(());
    }

    let existing = user_repo
        .list(UserFilter {
            role: Some(UserRole::SuperAdmin),
            is_suspended: None,
        })
        .await?;
    if !existing.is_empty() {
        return Ok(());
    }

    let password_hash = hasher.hash_password(&config.password)?;
    let user = user_repo
        .create(&CreateUser {
            name: config.name.clone(),
            email: config.email.clone(),
            password_hash,
            role: UserRole::SuperAdmin,
        })
        .await?;

    info!(user_id = %user.id, email = %user.email, "Seeded bootstrap SUPER_ADMIN");
    warn!("Bootstrap SUPER_ADMIN created with the configured password; change it");
    Ok(())
}
