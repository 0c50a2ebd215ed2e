// ============================================================================
// Luxe Core - Admin Authentication Service
// File: crates/luxe-core/src/services/admin_auth_service.rs
// ============================================================================
//! Session guard for the single storefront administrator: login, session
//! validation, logout and password change over the admin store.

use chrono::{Duration, Utc};
use std::sync::Arc;
use tracing::{error, info, warn};

use luxe_security::{generate_session_token, PasswordService};
use luxe_shared::constants::{DEFAULT_SESSION_TTL_HOURS, MIN_PASSWORD_LENGTH};

use crate::domain::admin::parse_expiry;
use crate::domain::{AdminCredential, AdminKey, AdminSession};
use crate::error::{AuthFailure, DomainError};
use crate::repositories::AdminStore;

/// Session lifetime and password rules.
#[derive(Debug, Clone, Copy)]
pub struct AdminPolicy {
    pub session_ttl: Duration,
    pub min_password_length: usize,
}

impl Default for AdminPolicy {
    fn default() -> Self {
        Self {
            session_ttl: Duration::hours(DEFAULT_SESSION_TTL_HOURS),
            min_password_length: MIN_PASSWORD_LENGTH,
        }
    }
}

/// Admin session guard. The store is the only source of truth; nothing is
/// cached in process so several server instances see the same session.
pub struct AdminAuthService {
    store: Arc<dyn AdminStore>,
    policy: AdminPolicy,
}

impl AdminAuthService {
    pub fn new(store: Arc<dyn AdminStore>, policy: AdminPolicy) -> Self {
        Self { store, policy }
    }

    /// Validate a presented token against the stored session.
    pub async fn authorize(&self, token: &str) -> Result<AdminSession, DomainError> {
        // 1. Load the single session record
        let value = self
            .store
            .get(AdminKey::Session)
            .await?
            .filter(|v| !v.is_null())
            .ok_or(AuthFailure::NoActiveSession)?;

        // 2. Exact token match
        let stored_token = value.get("token").and_then(|t| t.as_str());
        if stored_token != Some(token) {
            warn!("Admin authorization failed: token does not match active session");
            return Err(AuthFailure::InvalidSession.into());
        }

        // 3. Parse expiry; corrupt data denies access
        let expires_at = value
            .get("expiresAt")
            .and_then(|e| e.as_str())
            .and_then(parse_expiry)
            .ok_or_else(|| {
                warn!("Admin authorization failed: stored session expiry is missing or malformed");
                AuthFailure::InvalidSessionExpiry
            })?;

        let session = AdminSession {
            token: token.to_string(),
            expires_at,
        };

        // 4. Lazy expiry check
        if session.is_expired_at(Utc::now()) {
            info!("Admin session expired at {}", session.expires_at_iso());
            return Err(AuthFailure::SessionExpired.into());
        }

        Ok(session)
    }

    /// Succeeds iff `authorize` succeeds.
    pub async fn verify(&self, token: &str) -> Result<bool, DomainError> {
        self.authorize(token).await.map(|_| true)
    }

    /// Exchange the admin password for a fresh session, replacing any
    /// session issued before.
    pub async fn login(&self, password: &str) -> Result<AdminSession, DomainError> {
        info!("Admin login attempt");

        // 1. Load the bootstrapped credential
        let credential = self.load_credential().await?;

        // 2. Verify password
        if !PasswordService::verify(password, &credential.password_hash) {
            warn!("Admin login failed: invalid password");
            return Err(AuthFailure::InvalidPassword.into());
        }

        // 3. Issue and store the new session (overwrites the previous one)
        let session = AdminSession::issue(generate_session_token(), self.policy.session_ttl);
        self.store.set(AdminKey::Session, session.to_value()).await?;

        info!("Admin login successful, session expires at {}", session.expires_at_iso());
        Ok(session)
    }

    /// End the caller's session.
    pub async fn logout(&self, _session: &AdminSession) -> Result<(), DomainError> {
        self.store.delete(AdminKey::Session).await?;
        info!("Admin logged out");
        Ok(())
    }

    /// Replace the admin password and end the current session, forcing a
    /// fresh login.
    pub async fn change_password(
        &self,
        _session: &AdminSession,
        current_password: &str,
        new_password: &str,
    ) -> Result<(), DomainError> {
        // 1. Load the stored credential
        let credential = self.load_credential().await?;

        // 2. Verify current password
        if !PasswordService::verify(current_password, &credential.password_hash) {
            warn!("Admin password change failed: current password incorrect");
            return Err(AuthFailure::CurrentPasswordIncorrect.into());
        }

        // 3. Enforce the minimum length
        PasswordService::check_length(new_password, self.policy.min_password_length).map_err(|_| {
            DomainError::InvalidInput(format!(
                "New password must be at least {} characters",
                self.policy.min_password_length
            ))
        })?;

        // 4. Store the new hash, then drop the session
        let updated = AdminCredential::new(PasswordService::hash(new_password));
        self.store.set(AdminKey::Password, updated.to_value()).await?;
        self.store.delete(AdminKey::Session).await?;

        info!("Admin password changed; session invalidated");
        Ok(())
    }

    async fn load_credential(&self) -> Result<AdminCredential, DomainError> {
        let value = self.store.get(AdminKey::Password).await?;
        value
            .as_ref()
            .and_then(AdminCredential::from_value)
            .ok_or_else(|| {
                error!("Admin password not initialized; set it once in the admin store");
                DomainError::AdminPasswordNotInitialized
            })
    }
}
