// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! User and session queries.

use diesel::SqliteConnection;
use diesel::prelude::*;
use tracing::debug;

use larder_domain::UserId;

use crate::data_models::{SessionData, UserData};
use crate::diesel_schema::{sessions, users};
use crate::error::PersistenceError;

/// Retrieves a user by username.
///
/// Usernames are matched exactly.
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if the user is not found.
pub fn get_user_by_username(
    conn: &mut SqliteConnection,
    username: &str,
) -> Result<Option<UserData>, PersistenceError> {
    debug!("Looking up user by username: {}", username);

    users::table
        .filter(users::username.eq(username))
        .select(UserData::as_select())
        .first(conn)
        .optional()
        .map_err(PersistenceError::from)
}

/// Retrieves a user by ID.
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if the user is not found.
pub fn get_user_by_id(
    conn: &mut SqliteConnection,
    user_id: UserId,
) -> Result<Option<UserData>, PersistenceError> {
    debug!(%user_id, "Looking up user by ID");

    users::table
        .filter(users::user_id.eq(user_id.to_string()))
        .select(UserData::as_select())
        .first(conn)
        .optional()
        .map_err(PersistenceError::from)
}

/// Retrieves a session by token.
///
/// Expired sessions are still returned; the caller decides whether the
/// expiry has passed.
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if the session is not found.
pub fn get_session_by_token(
    conn: &mut SqliteConnection,
    session_token: &str,
) -> Result<Option<SessionData>, PersistenceError> {
    debug!("Looking up session by token");

    sessions::table
        .filter(sessions::session_token.eq(session_token))
        .select(SessionData::as_select())
        .first(conn)
        .optional()
        .map_err(PersistenceError::from)
}

/// Verifies a plain-text password against a stored bcrypt hash.
///
/// # Errors
///
/// Returns an error if the hash cannot be parsed.
pub fn verify_password(password: &str, password_hash: &str) -> Result<bool, PersistenceError> {
    bcrypt::verify(password, password_hash)
        .map_err(|e| PersistenceError::Other(format!("Failed to verify password: {e}")))
}
