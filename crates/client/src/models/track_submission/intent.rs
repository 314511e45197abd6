// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use tracklet_core::{Draft, MediaFile, Session, SubmissionMode, Track, is_owner};

use super::{Effect, EffectApplied, IntentHandled, Model, State};

#[derive(Debug)]
pub enum Intent {
    /// Open the dialog for posting a new track
    OpenCreate,

    /// Open the dialog for editing a track of the session's user
    OpenEdit { session: Session, track: Track },

    ChangeTitle(String),

    ChangeDescription(String),

    /// Select a new audio file or clear the selection
    SelectFile(Option<MediaFile>),

    /// Close the dialog and discard the draft
    Cancel,

    Submit,
}

impl Intent {
    pub fn handle_on(self, model: &Model) -> IntentHandled {
        log::trace!("Handling intent {self:?} on {model:?}");
        match self {
            Self::OpenCreate => {
                if model.is_open() {
                    return IntentHandled::Rejected(self);
                }
                EffectApplied::unchanged_next(Effect::Opened {
                    mode: SubmissionMode::Create,
                    draft: Draft::default(),
                }).into()
            }
            Self::OpenEdit { session, track } => {
                if model.is_open() || !is_owner(&session, &track) {
                    return IntentHandled::Rejected(Self::OpenEdit { session, track });
                }
                EffectApplied::unchanged_next(Effect::Opened {
                    mode: SubmissionMode::Update { track_id: track.id },
                    draft: Draft::from_track(&track),
                }).into()
            }
            Self::ChangeTitle(title) => {
                if model.state() != State::Editing {
                    return IntentHandled::Rejected(Self::ChangeTitle(title));
                }
                EffectApplied::unchanged_next(Effect::TitleChanged(title)).into()
            }
            Self::ChangeDescription(description) => {
                if model.state() != State::Editing {
                    return IntentHandled::Rejected(Self::ChangeDescription(description));
                }
                EffectApplied::unchanged_next(Effect::DescriptionChanged(description)).into()
            }
            Self::SelectFile(file) => {
                if model.state() != State::Editing {
                    return IntentHandled::Rejected(Self::SelectFile(file));
                }
                EffectApplied::unchanged_next(Effect::FileSelected(file)).into()
            }
            Self::Cancel => {
                if model.state() != State::Editing {
                    return IntentHandled::Rejected(self);
                }
                EffectApplied::unchanged_next(Effect::Cancelled).into()
            }
            Self::Submit => {
                if !model.can_submit() {
                    return IntentHandled::Rejected(self);
                }
                EffectApplied::unchanged_next(Effect::SubmitAccepted).into()
            }
        }
    }
}
