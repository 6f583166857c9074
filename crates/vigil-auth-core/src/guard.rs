//! Session guard - the per-request authentication state machine
//!
//! Orchestrates a user provider and the request-scoped stores to decide
//! whether the current request is authenticated, and as whom.

use std::sync::Arc;

use vigil_store::{ClientTokenStore, Identity, SessionStore, UserProvider};
use vigil_types::{Credentials, UserId};

use crate::config::GuardConfig;
use crate::error::AuthError;
use crate::remember::{RememberMe, RememberPolicy};
use crate::token::RememberToken;

/// Per-request session authentication guard
///
/// One instance is scoped to exactly one request. Collaborator calls run
/// strictly in sequence; all state other than what passes through the
/// stores lives in memory and dies with the request.
pub struct SessionGuard<P, S, C>
where
    P: UserProvider,
    S: SessionStore,
    C: ClientTokenStore,
{
    config: GuardConfig,
    provider: Arc<P>,
    session: Arc<S>,
    tokens: Arc<C>,
    user: Option<P::User>,
    via_remember: bool,
    remember: RememberPolicy,
}

impl<P, S, C> SessionGuard<P, S, C>
where
    P: UserProvider,
    S: SessionStore,
    C: ClientTokenStore,
{
    /// Create a guard over a provider and the request's stores
    pub fn new(config: GuardConfig, provider: Arc<P>, session: Arc<S>, tokens: Arc<C>) -> Self {
        Self {
            config,
            provider,
            session,
            tokens,
            user: None,
            via_remember: false,
            remember: RememberPolicy::new(),
        }
    }

    // =========================================================================
    // Credential validation
    // =========================================================================

    /// Look up a user by uid and verify the password.
    ///
    /// Stateless: does not touch the guard state or the stores. Failure is
    /// always an error, never a quiet `false`.
    pub async fn validate(&self, credentials: &Credentials) -> Result<P::User, AuthError> {
        let user = self
            .provider
            .find_by_uid(&credentials.uid)
            .await?
            .ok_or_else(|| AuthError::UserNotFound {
                field: "uid",
                value: credentials.uid.clone(),
            })?;

        if !self
            .provider
            .verify_password(&user, &credentials.password)
            .await?
        {
            tracing::debug!(uid = %credentials.uid, "password verification failed");
            return Err(AuthError::PasswordMismatch);
        }

        Ok(user)
    }

    /// Validate credentials and log the resolved user in
    pub async fn attempt(&mut self, credentials: &Credentials) -> Result<P::User, AuthError> {
        let user = self.validate(credentials).await?;
        self.login(user).await
    }

    // =========================================================================
    // Session lifecycle
    // =========================================================================

    /// Arm the next login with a remember request
    pub fn remember(&mut self, request: impl Into<RememberMe>) -> &mut Self {
        self.remember.set(request.into());
        self
    }

    /// Log a resolved user in: set the guard state, mint a remember token
    /// if one was requested, and persist the session key.
    ///
    /// The only place guard state is mutated and the only place tokens are
    /// minted.
    pub async fn login(&mut self, user: P::User) -> Result<P::User, AuthError> {
        // Consume the pending remember request before anything can fail,
        // so no request survives into a later login through any return
        // path of this call.
        let pending = self.remember.take_and_reset();

        if self.user.is_some() {
            return Err(AuthError::AlreadyAuthenticated);
        }
        let id = user.id().ok_or(AuthError::MissingIdentifier)?;

        self.user = Some(user.clone());
        self.via_remember = false;

        let minted = match pending.duration(self.config.default_remember_ttl) {
            Some(ttl) => {
                let token = RememberToken::mint(self.config.token_bytes, ttl);
                self.provider
                    .save_remember_token(&user, &token.value)
                    .await?;
                Some(token)
            }
            None => None,
        };

        self.session
            .put(&self.config.session_key, &id.to_string())
            .await?;
        if let Some(token) = &minted {
            self.tokens
                .set(&self.config.token_key, &token.value, token.ttl)
                .await?;
        }

        tracing::debug!(user = %id, remembered = minted.is_some(), "user logged in");
        Ok(user)
    }

    /// Resolve a user by primary key and log them in
    pub async fn login_via_id(&mut self, id: UserId) -> Result<P::User, AuthError> {
        let user = self
            .provider
            .find_by_id(id)
            .await?
            .ok_or_else(|| AuthError::UserNotFound {
                field: "id",
                value: id.to_string(),
            })?;

        self.login(user).await
    }

    /// Clear the authenticated state and drop both persisted keys.
    ///
    /// Idempotent: a no-op on an anonymous guard.
    pub async fn logout(&mut self) -> Result<(), AuthError> {
        self.user = None;
        self.via_remember = false;

        self.session.forget(&self.config.session_key).await?;
        self.tokens.clear(&self.config.token_key).await?;

        Ok(())
    }

    // =========================================================================
    // Re-authentication
    // =========================================================================

    /// Establish whether the request is authenticated.
    ///
    /// Resolves, in order: the user already set this request, the session
    /// key, the client-held remember token. Absence is `false`, never an
    /// error.
    pub async fn check(&mut self) -> Result<bool, AuthError> {
        if self.user.is_some() {
            return Ok(true);
        }

        if let Some(raw) = self.session.get(&self.config.session_key).await? {
            let found = match UserId::parse(&raw) {
                Ok(id) => self.provider.find_by_id(id).await?,
                Err(_) => {
                    tracing::warn!(value = %raw, "session key holds an unparsable user id");
                    None
                }
            };
            let authenticated = found.is_some();
            self.user = found;
            return Ok(authenticated);
        }

        if let Some(token) = self.tokens.get(&self.config.token_key).await? {
            if let Some(user) = self.provider.find_by_remember_token(&token).await? {
                // A real re-login: fresh session-key write. No remember
                // request is armed on this path, so the client token keeps
                // its original expiry.
                self.login(user).await?;
                self.via_remember = true;
                return Ok(true);
            }
            return Ok(false);
        }

        Ok(false)
    }

    /// Resolve and return the current user, if any
    pub async fn user(&mut self) -> Result<Option<&P::User>, AuthError> {
        self.check().await?;
        Ok(self.user.as_ref())
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// The user resolved so far this request, without triggering lookups
    pub fn current_user(&self) -> Option<&P::User> {
        self.user.as_ref()
    }

    /// Whether the current authentication was re-established from a
    /// remember token rather than the session key
    pub fn via_remember(&self) -> bool {
        self.via_remember
    }
}

impl<P, S, C> std::fmt::Debug for SessionGuard<P, S, C>
where
    P: UserProvider,
    S: SessionStore,
    C: ClientTokenStore,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionGuard")
            .field("config", &self.config)
            .field("authenticated", &self.user.is_some())
            .field("via_remember", &self.via_remember)
            .finish_non_exhaustive()
    }
}
