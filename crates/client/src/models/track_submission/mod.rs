// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Creating and updating tracks.
//!
//! A submission uploads the selected audio file first and then runs
//! the create or update mutation with the URL of the uploaded file.

use infect::ModelChanged;
use tracklet_core::{Draft, FileTooLarge, MediaFile, SubmissionMode, SubmitPolicy, Track};
use url::Url;

pub mod intent;
pub use self::intent::Intent;

pub mod effect;
pub use self::effect::Effect;

pub mod task;
pub use self::task::Task;

pub type IntentRejected = Intent;
pub type IntentHandled = infect::IntentHandled<IntentRejected, Effect, Task, ModelChanged>;
pub type EffectApplied = infect::EffectApplied<Effect, Task, ModelChanged>;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum State {
    /// The dialog is closed
    #[default]
    Idle,

    /// The draft could be edited
    Editing,

    /// The audio file is being uploaded
    Uploading,

    /// The create or update mutation is pending
    Mutating,
}

#[derive(Debug, thiserror::Error)]
pub enum SubmissionError {
    #[error(transparent)]
    FileTooLarge(#[from] FileTooLarge),

    #[error("failed to upload file: {0:#}")]
    UploadFailed(anyhow::Error),

    #[error("failed to submit track: {0:#}")]
    MutationFailed(anyhow::Error),
}

#[derive(Debug, Default)]
pub struct Model {
    policy: SubmitPolicy,
    state: State,
    mode: SubmissionMode,
    draft: Draft,
    last_error: Option<SubmissionError>,
    last_submitted: Option<Track>,
    listing_invalidated: bool,
}

impl Model {
    #[must_use]
    pub fn new(policy: SubmitPolicy) -> Self {
        Self {
            policy,
            ..Default::default()
        }
    }

    #[must_use]
    pub const fn policy(&self) -> &SubmitPolicy {
        &self.policy
    }

    #[must_use]
    pub const fn state(&self) -> State {
        self.state
    }

    /// The dialog is open
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.state != State::Idle
    }

    #[must_use]
    pub const fn is_in_flight(&self) -> bool {
        matches!(self.state, State::Uploading | State::Mutating)
    }

    /// Creating or updating, only available while open
    #[must_use]
    pub fn mode(&self) -> Option<SubmissionMode> {
        self.is_open().then_some(self.mode)
    }

    #[must_use]
    pub const fn draft(&self) -> &Draft {
        &self.draft
    }

    #[must_use]
    pub const fn last_error(&self) -> Option<&SubmissionError> {
        self.last_error.as_ref()
    }

    pub fn take_last_error(&mut self) -> Option<SubmissionError> {
        self.last_error.take()
    }

    /// The track returned by the last successful mutation
    #[must_use]
    pub const fn last_submitted(&self) -> Option<&Track> {
        self.last_submitted.as_ref()
    }

    /// Consumes the signal that listings need to be refreshed
    /// after a track has been created or updated.
    pub fn take_listing_invalidated(&mut self) -> bool {
        std::mem::take(&mut self.listing_invalidated)
    }

    /// Controls if the submit button is enabled
    #[must_use]
    pub fn can_submit(&self) -> bool {
        self.state == State::Editing && self.draft.is_ready_for(self.mode, &self.policy)
    }

    pub fn handle_intent(&self, intent: Intent) -> IntentHandled {
        intent.handle_on(self)
    }

    pub fn apply_effect(&mut self, effect: Effect) -> EffectApplied {
        effect.apply_on(self)
    }

    fn open(&mut self, mode: SubmissionMode, draft: Draft) {
        debug_assert_eq!(State::Idle, self.state);
        self.state = State::Editing;
        self.mode = mode;
        self.draft = draft;
        self.last_error = None;
    }

    fn close(&mut self) {
        self.state = State::Idle;
        self.mode = SubmissionMode::default();
        self.draft = Draft::default();
    }

    fn select_file(&mut self, file: Option<MediaFile>) {
        debug_assert_eq!(State::Editing, self.state);
        let limit_bytes = self.policy.file_size_limit_bytes;
        match self.draft.select_file(file, limit_bytes) {
            Ok(()) => {
                if matches!(self.last_error, Some(SubmissionError::FileTooLarge(_))) {
                    self.last_error = None;
                }
            }
            Err(err) => {
                log::warn!("{err}");
                self.last_error = Some(err.clone().into());
            }
        }
    }

    /// Starts the submission with either uploading the file or,
    /// if no file is required, the mutation.
    fn start_submission(&mut self) -> Option<Task> {
        if !self.can_submit() {
            return None;
        }
        let task = if let Some(file) = &self.draft.file {
            self.state = State::Uploading;
            Task::UploadFile(file.clone())
        } else {
            let SubmissionMode::Update { track_id } = self.mode else {
                return None;
            };
            self.state = State::Mutating;
            Task::UpdateTrack(self.draft.to_track_update(track_id, None))
        };
        self.draft.in_flight = true;
        self.last_error = None;
        Some(task)
    }

    fn finish_upload(&mut self, url: Url) -> Task {
        debug_assert_eq!(State::Uploading, self.state);
        let task = match self.mode {
            SubmissionMode::Create => Task::CreateTrack(self.draft.to_new_track(url)),
            SubmissionMode::Update { track_id } => {
                Task::UpdateTrack(self.draft.to_track_update(track_id, Some(url)))
            }
        };
        self.state = State::Mutating;
        task
    }

    fn abort_submission(&mut self, err: SubmissionError) {
        debug_assert!(self.is_in_flight());
        log::warn!("{err}");
        self.state = State::Editing;
        self.draft.in_flight = false;
        self.last_error = Some(err);
    }

    fn finish_submission(&mut self, track: Track) {
        debug_assert_eq!(State::Mutating, self.state);
        self.close();
        self.last_submitted = Some(track);
        self.listing_invalidated = true;
    }
}
