// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::{fmt, str::FromStr};

use jiff::Timestamp;
use semval::prelude::*;
use url::Url;

use crate::user::UserRef;

/// Server-assigned identifier of a track
///
/// Opaque for clients. The remote API happens to encode it as
/// a positive integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TrackId(u64);

impl TrackId {
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    #[must_use]
    pub const fn value(self) -> u64 {
        let Self(value) = self;
        value
    }
}

impl From<u64> for TrackId {
    fn from(from: u64) -> Self {
        Self::new(from)
    }
}

impl fmt::Display for TrackId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.value().fmt(f)
    }
}

impl FromStr for TrackId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(Self::new)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Track {
    pub id: TrackId,

    pub title: String,

    pub description: String,

    /// Public URL of the uploaded audio file
    pub url: Url,

    /// The user who posted the track
    ///
    /// Might be missing for tracks whose owner has been removed.
    pub owner: Option<UserRef>,

    /// Number of likes, derived from the like relations of the track
    pub like_count: usize,

    pub created_at: Option<Timestamp>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TrackInvalidity {
    TitleEmpty,
    DescriptionEmpty,
}

/// Input of the create mutation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTrack {
    pub title: String,
    pub description: String,
    pub url: Url,
}

impl Validate for NewTrack {
    type Invalidity = TrackInvalidity;

    fn validate(&self) -> ValidationResult<Self::Invalidity> {
        let Self {
            title,
            description,
            url: _,
        } = self;
        ValidationContext::new()
            .invalidate_if(is_blank(title), Self::Invalidity::TitleEmpty)
            .invalidate_if(is_blank(description), Self::Invalidity::DescriptionEmpty)
            .into()
    }
}

/// Input of the update mutation
///
/// Fields that are `None` are sent as absent and the remote
/// side decides how to treat them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackUpdate {
    pub id: TrackId,
    pub title: Option<String>,
    pub description: Option<String>,
    pub url: Option<Url>,
}

impl Validate for TrackUpdate {
    type Invalidity = TrackInvalidity;

    fn validate(&self) -> ValidationResult<Self::Invalidity> {
        let Self {
            title,
            description,
            id: _,
            url: _,
        } = self;
        ValidationContext::new()
            .invalidate_if(
                title.as_deref().is_some_and(is_blank),
                Self::Invalidity::TitleEmpty,
            )
            .invalidate_if(
                description.as_deref().is_some_and(is_blank),
                Self::Invalidity::DescriptionEmpty,
            )
            .into()
    }
}

pub(crate) fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}
