// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use tracklet_client::models::{session, track_list, track_submission};

use super::{EffectApplied, IntentHandled, Model};

#[derive(Debug)]
pub(crate) enum Intent {
    TrackList(track_list::Intent),
    TrackSubmission(track_submission::Intent),
    Session(session::Intent),

    /// Render the model without changing it
    RenderModel,
}

impl From<track_list::Intent> for Intent {
    fn from(intent: track_list::Intent) -> Self {
        Self::TrackList(intent)
    }
}

impl From<track_submission::Intent> for Intent {
    fn from(intent: track_submission::Intent) -> Self {
        Self::TrackSubmission(intent)
    }
}

impl From<session::Intent> for Intent {
    fn from(intent: session::Intent) -> Self {
        Self::Session(intent)
    }
}

impl Intent {
    pub(crate) fn handle_on(self, model: &Model) -> IntentHandled {
        match self {
            Self::TrackList(intent) => model.track_list.handle_intent(intent).map_into(),
            Self::TrackSubmission(intent) => {
                model.track_submission.handle_intent(intent).map_into()
            }
            Self::Session(intent) => model.session.handle_intent(intent).map_into(),
            Self::RenderModel => EffectApplied::maybe_changed().into(),
        }
    }

    /// Explains to the user why this intent has been rejected.
    pub(crate) fn rejection_message(&self) -> String {
        match self {
            Self::TrackList(_) => "Tracks are already being fetched".to_owned(),
            Self::TrackSubmission(track_submission::Intent::OpenEdit { track, .. }) => {
                format!("Track {id} is not yours to edit", id = track.id)
            }
            Self::TrackSubmission(track_submission::Intent::Submit) => {
                "The track has not been submitted, it is incomplete or not editable".to_owned()
            }
            Self::TrackSubmission(intent) => {
                format!("The track cannot be edited: {intent:?}")
            }
            Self::Session(session::Intent::LikeTrack { track }) => {
                format!("Track {id} cannot be liked (again)", id = track.id)
            }
            Self::Session(intent) => format!("Rejected {intent:?}"),
            Self::RenderModel => "Rendering rejected".to_owned(),
        }
    }
}
