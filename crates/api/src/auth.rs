// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Session-based authentication.
//!
//! Users log in with a username and password and receive an opaque session
//! token that stays valid for 30 days. Every other operation is performed
//! on behalf of the user resolved from that token.

use time::format_description::well_known::Rfc3339;
use time::{Duration, OffsetDateTime};
use tracing::{debug, info, warn};

use larder_domain::UserId;
use larder_persistence::{Persistence, SessionData, UserData};

use crate::error::AuthError;

/// A user resolved from a valid session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    /// The user's identifier.
    pub user_id: UserId,
    /// The user's username.
    pub username: String,
}

impl AuthenticatedUser {
    fn from_data(user: &UserData) -> Result<Self, AuthError> {
        let user_id: UserId = user.id().map_err(|e| AuthError::AuthenticationFailed {
            reason: format!("Stored user is unreadable: {e}"),
        })?;
        Ok(Self {
            user_id,
            username: user.username.clone(),
        })
    }
}

/// A freshly created session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssuedSession {
    /// The bearer token.
    pub session_token: String,
    /// When the token stops being accepted (RFC 3339, UTC).
    pub expires_at: String,
    /// The user the session belongs to.
    pub user: AuthenticatedUser,
}

/// Formats an instant for storage, truncated to whole seconds.
///
/// Session expiries are compared as text, so every stored timestamp must
/// use this one format.
///
/// # Errors
///
/// Returns an error if the instant cannot be formatted.
pub fn format_timestamp(at: OffsetDateTime) -> Result<String, AuthError> {
    at.replace_nanosecond(0)
        .map_err(|e| e.to_string())
        .and_then(|at| at.format(&Rfc3339).map_err(|e| e.to_string()))
        .map_err(|e| AuthError::AuthenticationFailed {
            reason: format!("Failed to format timestamp: {e}"),
        })
}

/// Authentication service for session-based authentication.
pub struct AuthenticationService;

impl AuthenticationService {
    /// Default session expiration duration (30 days).
    const DEFAULT_SESSION_EXPIRATION: Duration = Duration::days(30);

    /// Verifies credentials and creates a session.
    ///
    /// Unknown usernames and wrong passwords produce the same error.
    ///
    /// # Errors
    ///
    /// Returns an error if the credentials are wrong or a database
    /// operation fails.
    pub fn login(
        persistence: &mut Persistence,
        username: &str,
        password: &str,
    ) -> Result<IssuedSession, AuthError> {
        let user: Option<UserData> = persistence
            .get_user_by_username(username)
            .map_err(Self::map_persistence_error)?;

        let Some(user) = user else {
            warn!(username, "Login attempt for unknown user");
            return Err(Self::invalid_credentials());
        };

        let password_matches: bool = persistence
            .verify_password(&user, password)
            .map_err(Self::map_persistence_error)?;
        if !password_matches {
            warn!(username, "Login attempt with wrong password");
            return Err(Self::invalid_credentials());
        }

        let authenticated: AuthenticatedUser = AuthenticatedUser::from_data(&user)?;

        let now: OffsetDateTime = OffsetDateTime::now_utc();
        Self::purge_expired_sessions(persistence, now)?;

        let session_token: String = Self::generate_session_token(now);
        let expires_at: String = format_timestamp(now + Self::DEFAULT_SESSION_EXPIRATION)?;

        persistence
            .create_session(&session_token, authenticated.user_id, &expires_at)
            .map_err(|e| AuthError::AuthenticationFailed {
                reason: format!("Failed to create session: {e}"),
            })?;

        persistence
            .update_last_login(authenticated.user_id)
            .map_err(|e| AuthError::AuthenticationFailed {
                reason: format!("Failed to update last login: {e}"),
            })?;

        info!(username, "User logged in");

        Ok(IssuedSession {
            session_token,
            expires_at,
            user: authenticated,
        })
    }

    /// Validates a session token and returns its user.
    ///
    /// # Errors
    ///
    /// Returns an error if the session is unknown or expired, or its user
    /// no longer exists.
    pub fn validate_session(
        persistence: &mut Persistence,
        session_token: &str,
    ) -> Result<AuthenticatedUser, AuthError> {
        let session: SessionData = persistence
            .get_session_by_token(session_token)
            .map_err(Self::map_persistence_error)?
            .ok_or_else(|| AuthError::AuthenticationFailed {
                reason: String::from("Invalid session token"),
            })?;

        let expires_at: OffsetDateTime = OffsetDateTime::parse(&session.expires_at, &Rfc3339)
            .map_err(|e| AuthError::AuthenticationFailed {
                reason: format!("Failed to parse session expiration: {e}"),
            })?;

        if OffsetDateTime::now_utc() > expires_at {
            debug!(session_id = session.session_id, "Session expired");
            return Err(AuthError::AuthenticationFailed {
                reason: String::from("Session expired"),
            });
        }

        let user_id: UserId = session.user_id.parse().map_err(|_| AuthError::AuthenticationFailed {
            reason: String::from("Session refers to an unreadable user"),
        })?;

        let user: UserData = persistence
            .get_user_by_id(user_id)
            .map_err(Self::map_persistence_error)?
            .ok_or_else(|| AuthError::AuthenticationFailed {
                reason: String::from("User not found"),
            })?;

        persistence
            .update_session_activity(session.session_id)
            .map_err(Self::map_persistence_error)?;

        AuthenticatedUser::from_data(&user)
    }

    /// Logs out by deleting the session.
    ///
    /// # Errors
    ///
    /// Returns an error if the logout fails.
    pub fn logout(persistence: &mut Persistence, session_token: &str) -> Result<(), AuthError> {
        persistence
            .delete_session(session_token)
            .map_err(|e| AuthError::AuthenticationFailed {
                reason: format!("Failed to delete session: {e}"),
            })?;

        Ok(())
    }

    /// Deletes every session that expired before `now`.
    ///
    /// # Errors
    ///
    /// Returns an error if the database delete fails.
    pub fn purge_expired_sessions(
        persistence: &mut Persistence,
        now: OffsetDateTime,
    ) -> Result<usize, AuthError> {
        let now: String = format_timestamp(now)?;
        persistence
            .delete_expired_sessions(&now)
            .map_err(Self::map_persistence_error)
    }

    /// Generates an opaque session token.
    fn generate_session_token(now: OffsetDateTime) -> String {
        format!(
            "session_{}_{:016x}{:016x}",
            now.unix_timestamp_nanos(),
            rand::random::<u64>(),
            rand::random::<u64>()
        )
    }

    fn invalid_credentials() -> AuthError {
        AuthError::AuthenticationFailed {
            reason: String::from("Invalid username or password"),
        }
    }

    fn map_persistence_error(err: larder_persistence::PersistenceError) -> AuthError {
        AuthError::AuthenticationFailed {
            reason: format!("Database error: {err}"),
        }
    }
}
