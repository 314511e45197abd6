// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use crate::{
    prelude::*,
    track::{Track, TrackPayload, parse_timestamp, try_into_tracks},
};

mod _core {
    pub(super) use tracklet_core::{
        session::Session,
        user::{LikeRelation, UserProfile, UserRef},
    };
}

#[derive(Debug, Deserialize)]
pub struct UserRef {
    pub id: Id,
    pub username: String,
}

impl From<UserRef> for _core::UserRef {
    fn from(from: UserRef) -> Self {
        let UserRef { id, username } = from;
        Self {
            id: id.into(),
            username,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct LikedTrack {
    pub id: Id,
}

/// A like relation as embedded into users
#[derive(Debug, Deserialize)]
pub struct Like {
    pub id: Id,
    pub track: LikedTrack,
}

impl From<Like> for _core::LikeRelation {
    fn from(from: Like) -> Self {
        let Like { id, track } = from;
        Self {
            id: id.into(),
            track_id: track.id.into(),
        }
    }
}

/// The authenticated user as returned by the `me` query
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Me {
    pub id: Id,

    pub username: String,

    #[serde(default)]
    pub like_set: Vec<Like>,
}

impl From<Me> for _core::Session {
    fn from(from: Me) -> Self {
        let Me {
            id,
            username,
            like_set,
        } = from;
        Self {
            id: id.into(),
            username,
            likes: like_set.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: Id,

    pub username: String,

    #[serde(default)]
    pub date_joined: Option<String>,

    #[serde(default)]
    pub track_set: Vec<Track>,

    #[serde(default)]
    pub like_set: Vec<Like>,
}

impl TryFrom<UserProfile> for _core::UserProfile {
    type Error = anyhow::Error;

    fn try_from(from: UserProfile) -> anyhow::Result<Self> {
        let UserProfile {
            id,
            username,
            date_joined,
            track_set,
            like_set,
        } = from;
        let user = _core::UserRef {
            id: id.into(),
            username,
        };
        let mut tracks = try_into_tracks(track_set)?;
        // All tracks of a profile have been posted by its user
        for track in &mut tracks {
            if track.owner.is_none() {
                track.owner = Some(user.clone());
            }
        }
        let into = Self {
            user,
            date_joined: parse_timestamp(date_joined.as_deref()),
            tracks,
            likes: like_set.into_iter().map(Into::into).collect(),
        };
        Ok(into)
    }
}

///////////////////////////////////////////////////////////////////////
// Variables
///////////////////////////////////////////////////////////////////////

#[derive(Debug, Serialize)]
pub struct UserVariables {
    pub id: Id,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateLikeVariables {
    pub track_id: Id,
}

///////////////////////////////////////////////////////////////////////
// Results
///////////////////////////////////////////////////////////////////////

/// Result of the `me` query
///
/// The user is `null` if not authenticated.
#[derive(Debug, Deserialize)]
pub struct MeData {
    pub me: Option<Me>,
}

/// Result of the `user` query
#[derive(Debug, Deserialize)]
pub struct UserData {
    pub user: Option<UserProfile>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateLikeData {
    pub create_like: TrackPayload,
}

#[cfg(test)]
mod tests;
