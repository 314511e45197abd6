// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Unsaved edits of a track while creating or updating it.

use semval::prelude::*;
use url::Url;

use crate::{
    media::{FileTooLarge, MediaFile, validate_file},
    track::{NewTrack, Track, TrackId, TrackUpdate, is_blank},
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmissionMode {
    #[default]
    Create,
    Update { track_id: TrackId },
}

/// Rules that decide when a draft could be submitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmitPolicy {
    /// Require a new audio file when updating an existing track.
    ///
    /// Creating a track always requires a file.
    pub file_required_on_update: bool,

    /// Files larger than this are rejected when selected.
    pub file_size_limit_bytes: u64,
}

impl SubmitPolicy {
    #[must_use]
    pub const fn is_file_required(&self, mode: SubmissionMode) -> bool {
        match mode {
            SubmissionMode::Create => true,
            SubmissionMode::Update { .. } => self.file_required_on_update,
        }
    }
}

impl Default for SubmitPolicy {
    fn default() -> Self {
        Self {
            file_required_on_update: true,
            file_size_limit_bytes: crate::media::FILE_SIZE_LIMIT_BYTES,
        }
    }
}

/// Transient state of a create or update dialog
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    pub title: String,

    pub description: String,

    pub file: Option<MediaFile>,

    /// The last rejected file selection
    pub file_error: Option<FileTooLarge>,

    /// A submission is pending
    pub in_flight: bool,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum DraftInvalidity {
    TitleEmpty,
    DescriptionEmpty,
    FileMissing,
    InFlight,
}

impl Draft {
    /// A draft seeded from an existing track.
    ///
    /// The audio file is never seeded. It must be selected again.
    #[must_use]
    pub fn from_track(track: &Track) -> Self {
        let Track {
            title, description, ..
        } = track;
        Self {
            title: title.clone(),
            description: description.clone(),
            ..Default::default()
        }
    }

    /// Select a new file or clear the selection.
    ///
    /// A file exceeding the size limit is rejected and the previous
    /// selection is kept. Otherwise the selection is replaced and the
    /// last file error is cleared.
    pub fn select_file(
        &mut self,
        file: Option<MediaFile>,
        limit_bytes: u64,
    ) -> Result<(), &FileTooLarge> {
        match validate_file(file, limit_bytes) {
            Ok(file) => {
                self.file = file;
                self.file_error = None;
                Ok(())
            }
            Err(err) => Err(&*self.file_error.insert(err)),
        }
    }

    pub fn validate_for(
        &self,
        mode: SubmissionMode,
        policy: &SubmitPolicy,
    ) -> ValidationResult<DraftInvalidity> {
        let Self {
            title,
            description,
            file,
            file_error: _,
            in_flight,
        } = self;
        ValidationContext::new()
            .invalidate_if(*in_flight, DraftInvalidity::InFlight)
            .invalidate_if(is_blank(title), DraftInvalidity::TitleEmpty)
            .invalidate_if(is_blank(description), DraftInvalidity::DescriptionEmpty)
            .invalidate_if(
                file.is_none() && policy.is_file_required(mode),
                DraftInvalidity::FileMissing,
            )
            .into()
    }

    /// Checks if the submit control should be enabled.
    #[must_use]
    pub fn is_ready_for(&self, mode: SubmissionMode, policy: &SubmitPolicy) -> bool {
        self.validate_for(mode, policy).is_ok()
    }

    #[must_use]
    pub fn to_new_track(&self, url: Url) -> NewTrack {
        let Self {
            title, description, ..
        } = self;
        NewTrack {
            title: title.clone(),
            description: description.clone(),
            url,
        }
    }

    #[must_use]
    pub fn to_track_update(&self, track_id: TrackId, url: Option<Url>) -> TrackUpdate {
        let Self {
            title, description, ..
        } = self;
        TrackUpdate {
            id: track_id,
            title: Some(title.clone()),
            description: Some(description.clone()),
            url,
        }
    }
}
