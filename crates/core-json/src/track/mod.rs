// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use anyhow::Context as _;
use url::Url;

use crate::{prelude::*, user::UserRef};

mod _core {
    pub(super) use tracklet_core::track::{NewTrack, Track, TrackUpdate};
}

/// Parses an optional timestamp in RFC 3339 format.
///
/// Invalid timestamps are logged and ignored.
pub(crate) fn parse_timestamp(input: Option<&str>) -> Option<jiff::Timestamp> {
    let input = input?;
    match input.parse() {
        Ok(timestamp) => Some(timestamp),
        Err(err) => {
            log::warn!("Ignoring invalid timestamp \"{input}\": {err}");
            None
        }
    }
}

///////////////////////////////////////////////////////////////////////
// Track
///////////////////////////////////////////////////////////////////////

/// A like relation as embedded into tracks
#[derive(Debug, Deserialize)]
pub struct TrackLike {
    pub id: Id,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Track {
    pub id: Id,

    pub title: String,

    #[serde(default)]
    pub description: String,

    pub url: String,

    #[serde(default)]
    pub posted_by: Option<UserRef>,

    /// Only used for counting
    #[serde(default)]
    pub likes: Option<Vec<TrackLike>>,

    #[serde(default)]
    pub created_at: Option<String>,
}

impl TryFrom<Track> for _core::Track {
    type Error = anyhow::Error;

    fn try_from(from: Track) -> anyhow::Result<Self> {
        let Track {
            id,
            title,
            description,
            url,
            posted_by,
            likes,
            created_at,
        } = from;
        let url = url
            .parse::<Url>()
            .with_context(|| format!("invalid URL \"{url}\" of track {}", id.value()))?;
        let created_at = parse_timestamp(created_at.as_deref());
        let into = Self {
            id: id.into(),
            title,
            description,
            url,
            owner: posted_by.map(Into::into),
            like_count: likes.as_ref().map_or(0, Vec::len),
            created_at,
        };
        Ok(into)
    }
}

/// Converts a list of tracks, failing on the first invalid entry.
pub fn try_into_tracks(from: Vec<Track>) -> anyhow::Result<Vec<_core::Track>> {
    from.into_iter().map(TryInto::try_into).collect()
}

///////////////////////////////////////////////////////////////////////
// Variables
///////////////////////////////////////////////////////////////////////

#[derive(Debug, Default, Serialize)]
pub struct TracksVariables {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CreateTrackVariables {
    pub title: String,
    pub description: String,
    pub url: Url,
}

impl From<_core::NewTrack> for CreateTrackVariables {
    fn from(from: _core::NewTrack) -> Self {
        let _core::NewTrack {
            title,
            description,
            url,
        } = from;
        Self {
            title,
            description,
            url,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTrackVariables {
    pub track_id: Id,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<Url>,
}

impl From<_core::TrackUpdate> for UpdateTrackVariables {
    fn from(from: _core::TrackUpdate) -> Self {
        let _core::TrackUpdate {
            id,
            title,
            description,
            url,
        } = from;
        Self {
            track_id: id.into(),
            title,
            description,
            url,
        }
    }
}

///////////////////////////////////////////////////////////////////////
// Results
///////////////////////////////////////////////////////////////////////

#[derive(Debug, Deserialize)]
pub struct TracksData {
    pub tracks: Vec<Track>,
}

/// Payload of both the create and update mutation
#[derive(Debug, Deserialize)]
pub struct TrackPayload {
    pub track: Track,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTrackData {
    pub create_track: TrackPayload,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTrackData {
    pub update_track: TrackPayload,
}

#[cfg(test)]
mod tests;
