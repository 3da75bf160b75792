// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! User and session mutations.

use diesel::SqliteConnection;
use diesel::prelude::*;
use tracing::{debug, info};

use larder_domain::UserId;

use crate::diesel_schema::{sessions, users};
use crate::error::PersistenceError;

/// Creates a new user.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `username` - The username, unique across users
/// * `password` - The plain-text password (will be hashed)
///
/// # Errors
///
/// Returns `Conflict` if the username is taken, or an error if hashing or
/// the insert fails.
pub fn create_user(
    conn: &mut SqliteConnection,
    username: &str,
    password: &str,
) -> Result<UserId, PersistenceError> {
    info!("Creating user with username: {}", username);

    let password_hash: String = bcrypt::hash(password, bcrypt::DEFAULT_COST)
        .map_err(|e| PersistenceError::Other(format!("Failed to hash password: {e}")))?;

    let user_id: UserId = UserId::new();

    diesel::insert_into(users::table)
        .values((
            users::user_id.eq(user_id.to_string()),
            users::username.eq(username),
            users::password_hash.eq(&password_hash),
        ))
        .execute(conn)?;

    info!(%user_id, "User created successfully");
    Ok(user_id)
}

/// Updates the last login timestamp for a user.
///
/// # Errors
///
/// Returns an error if the database update fails.
pub fn update_last_login(
    conn: &mut SqliteConnection,
    user_id: UserId,
) -> Result<(), PersistenceError> {
    debug!(%user_id, "Updating last_login_at");

    diesel::update(users::table)
        .filter(users::user_id.eq(user_id.to_string()))
        .set(users::last_login_at.eq(diesel::dsl::sql::<
            diesel::sql_types::Nullable<diesel::sql_types::Text>,
        >("CURRENT_TIMESTAMP")))
        .execute(conn)?;

    Ok(())
}

/// Creates a new session for a user.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `session_token` - The unique session token
/// * `user_id` - The owning user
/// * `expires_at` - The expiration timestamp (RFC 3339, UTC)
///
/// # Errors
///
/// Returns an error if the session cannot be created.
pub fn create_session(
    conn: &mut SqliteConnection,
    session_token: &str,
    user_id: UserId,
    expires_at: &str,
) -> Result<i64, PersistenceError> {
    debug!(%user_id, expires_at, "Creating session");

    let session_id: i64 = diesel::insert_into(sessions::table)
        .values((
            sessions::session_token.eq(session_token),
            sessions::user_id.eq(user_id.to_string()),
            sessions::expires_at.eq(expires_at),
        ))
        .returning(sessions::session_id)
        .get_result(conn)?;

    debug!(session_id, %user_id, "Session created");
    Ok(session_id)
}

/// Updates the last activity timestamp for a session.
///
/// # Errors
///
/// Returns an error if the database update fails.
pub fn update_session_activity(
    conn: &mut SqliteConnection,
    session_id: i64,
) -> Result<(), PersistenceError> {
    debug!(session_id, "Updating last_activity_at");

    diesel::update(sessions::table)
        .filter(sessions::session_id.eq(session_id))
        .set(
            sessions::last_activity_at.eq(diesel::dsl::sql::<diesel::sql_types::Text>(
                "CURRENT_TIMESTAMP",
            )),
        )
        .execute(conn)?;

    Ok(())
}

/// Deletes a session by token. Used for logout.
///
/// # Errors
///
/// Returns an error if the database delete fails.
pub fn delete_session(
    conn: &mut SqliteConnection,
    session_token: &str,
) -> Result<(), PersistenceError> {
    debug!("Deleting session by token");

    diesel::delete(sessions::table)
        .filter(sessions::session_token.eq(session_token))
        .execute(conn)?;

    Ok(())
}

/// Deletes every session whose expiry lies before `now`.
///
/// `now` must use the same RFC 3339 UTC format as the stored expiries so
/// that text ordering matches time ordering.
///
/// # Errors
///
/// Returns an error if the database delete fails.
pub fn delete_expired_sessions(
    conn: &mut SqliteConnection,
    now: &str,
) -> Result<usize, PersistenceError> {
    let rows_affected: usize = diesel::delete(sessions::table)
        .filter(sessions::expires_at.lt(now))
        .execute(conn)?;

    info!("Deleted {} expired sessions", rows_affected);
    Ok(rows_affected)
}
