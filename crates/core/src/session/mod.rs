// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

//! The authenticated user and the predicates that gate
//! owner-only and like controls.

use crate::{
    track::Track,
    user::{LikeRelation, UserId, UserRef},
};

/// The currently authenticated user
///
/// Read-only for clients. Refreshed by querying the remote
/// side again after likes have been added.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub id: UserId,
    pub username: String,
    pub likes: Vec<LikeRelation>,
}

impl Session {
    #[must_use]
    pub fn user_ref(&self) -> UserRef {
        let Self { id, username, .. } = self;
        UserRef {
            id: *id,
            username: username.clone(),
        }
    }
}

/// Checks if the session's user has posted the track.
///
/// Tracks without an owner are not owned by anyone.
#[must_use]
pub fn is_owner(session: &Session, track: &Track) -> bool {
    track
        .owner
        .as_ref()
        .is_some_and(|owner| owner.id == session.id)
}

/// Checks if the session's user has already liked the track.
#[must_use]
pub fn has_liked(session: &Session, track: &Track) -> bool {
    session
        .likes
        .iter()
        .any(|like| like.track_id == track.id)
}
