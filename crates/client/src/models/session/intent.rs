// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use tracklet_core::{Track, UserId};

use super::{Effect, EffectApplied, IntentHandled, Model};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    FetchMe,
    LikeTrack { track: Track },
    FetchProfile { user_id: UserId },
}

impl Intent {
    pub fn handle_on(self, model: &Model) -> IntentHandled {
        log::trace!("Handling intent {self:?} on {model:?}");
        match self {
            Self::FetchMe => EffectApplied::unchanged_next(Effect::FetchMeAccepted).into(),
            Self::LikeTrack { track } => {
                if !model.can_like(&track) {
                    log::warn!(
                        "Cannot like track {track_id}",
                        track_id = track.id.value()
                    );
                    return IntentHandled::Rejected(Self::LikeTrack { track });
                }
                let effect = Effect::LikeTrackAccepted { track_id: track.id };
                EffectApplied::unchanged_next(effect).into()
            }
            Self::FetchProfile { user_id } => {
                EffectApplied::unchanged_next(Effect::FetchProfileAccepted { user_id }).into()
            }
        }
    }
}
