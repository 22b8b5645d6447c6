//! Startup bootstrap for the initial admin account.

use persistence::repositories::UserRepository;
use sqlx::PgPool;
use tracing::{info, warn};
use uuid::Uuid;

use crate::config::BootstrapConfig;

/// Create the configured admin account if it does not exist yet.
///
/// A no-op when no admin credentials are configured. Existing accounts are
/// never modified, so rotating the configured password has no effect on an
/// already-bootstrapped deployment.
pub async fn ensure_admin_user(pool: &PgPool, config: &BootstrapConfig) -> anyhow::Result<()> {
    if config.admin_username.is_empty() || config.admin_password.is_empty() {
        return Ok(());
    }

    let repo = UserRepository::new(pool.clone());

    if repo.username_exists(&config.admin_username).await? {
        info!(username = %config.admin_username, "Admin user already exists");
        return Ok(());
    }

    if config.admin_password.len() < 8 {
        warn!("Configured admin password is shorter than 8 characters; refusing to create it");
        return Ok(());
    }

    let password_hash = shared::password::hash_password(&config.admin_password)
        .map_err(|e| anyhow::anyhow!("Failed to hash admin password: {}", e))?;

    repo.create(
        Uuid::new_v4(),
        &config.admin_username,
        &password_hash,
        &config.admin_email,
        Some("Admin"),
        None,
        true,
    )
    .await?;

    info!(username = %config.admin_username, "Admin user created");
    Ok(())
}
