// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Domain model of shared audio tracks, their owners and likes.
//!
//! Everything in this crate is free of I/O. Remote operations are
//! implemented by `tracklet-client`.

pub mod media;
pub use self::media::{FILE_SIZE_LIMIT_BYTES, FileTooLarge, MediaFile, validate_file};

pub mod session;
pub use self::session::{Session, has_liked, is_owner};

pub mod submission;
pub use self::submission::{Draft, SubmissionMode, SubmitPolicy};

pub mod track;
pub use self::track::{NewTrack, Track, TrackId, TrackUpdate};

pub mod user;
pub use self::user::{LikeId, LikeRelation, UserId, UserProfile, UserRef};
