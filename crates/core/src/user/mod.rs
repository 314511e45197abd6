// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::{fmt, str::FromStr};

use jiff::Timestamp;

use crate::track::{Track, TrackId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UserId(u64);

impl UserId {
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

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.value().fmt(f)
    }
}

impl FromStr for UserId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(Self::new)
    }
}

/// Reference to a user as embedded in other entities
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRef {
    pub id: UserId,
    pub username: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LikeId(u64);

impl LikeId {
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

/// A user's approval of a track
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LikeRelation {
    pub id: LikeId,
    pub track_id: TrackId,
}

/// Public profile of a user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserProfile {
    pub user: UserRef,

    pub date_joined: Option<Timestamp>,

    /// Tracks posted by the user
    pub tracks: Vec<Track>,

    /// Tracks liked by the user
    pub likes: Vec<LikeRelation>,
}
