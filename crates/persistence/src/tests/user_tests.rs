// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Tests for user and session persistence.

use larder_domain::UserId;

use crate::{Persistence, PersistenceError};

#[test]
fn test_create_user_hashes_password() {
    let mut persistence = Persistence::new_in_memory().unwrap();

    let user_id = persistence.create_user("alice", "correct horse").unwrap();
    let user = persistence.get_user_by_username("alice").unwrap().unwrap();

    assert_eq!(user.id().unwrap(), user_id);
    assert_ne!(user.password_hash, "correct horse");
    assert!(persistence.verify_password(&user, "correct horse").unwrap());
    assert!(!persistence.verify_password(&user, "wrong horse").unwrap());
}

#[test]
fn test_duplicate_username_conflicts() {
    let mut persistence = Persistence::new_in_memory().unwrap();
    persistence.create_user("alice", "password1").unwrap();

    assert!(matches!(
        persistence.create_user("alice", "password2"),
        Err(PersistenceError::Conflict(_))
    ));
}

#[test]
fn test_unknown_user_is_none() {
    let mut persistence = Persistence::new_in_memory().unwrap();

    assert!(persistence.get_user_by_username("nobody").unwrap().is_none());
    assert!(persistence.get_user_by_id(UserId::new()).unwrap().is_none());
}

#[test]
fn test_session_lifecycle() {
    let mut persistence = Persistence::new_in_memory().unwrap();
    let user_id = persistence.create_user("alice", "password1").unwrap();

    let session_id = persistence
        .create_session("token-1", user_id, "2099-01-01T00:00:00Z")
        .unwrap();
    let session = persistence.get_session_by_token("token-1").unwrap().unwrap();
    assert_eq!(session.session_id, session_id);
    assert_eq!(session.user_id, user_id.to_string());

    persistence.update_session_activity(session_id).unwrap();
    persistence.delete_session("token-1").unwrap();
    assert!(persistence.get_session_by_token("token-1").unwrap().is_none());
}

#[test]
fn test_delete_expired_sessions_keeps_live_ones() {
    let mut persistence = Persistence::new_in_memory().unwrap();
    let user_id = persistence.create_user("alice", "password1").unwrap();

    persistence
        .create_session("old", user_id, "2020-01-01T00:00:00Z")
        .unwrap();
    persistence
        .create_session("live", user_id, "2099-01-01T00:00:00Z")
        .unwrap();

    let removed = persistence
        .delete_expired_sessions("2026-03-01T12:00:00Z")
        .unwrap();

    assert_eq!(removed, 1);
    assert!(persistence.get_session_by_token("old").unwrap().is_none());
    assert!(persistence.get_session_by_token("live").unwrap().is_some());
}
