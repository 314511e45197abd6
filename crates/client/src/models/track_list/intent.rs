// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use super::{Effect, EffectApplied, IntentHandled, Model};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// Fetch all tracks that match the search term
    FetchTracks { search: Option<String> },

    /// Repeat the last fetch, e.g. after tracks have been modified
    Refresh,
}

impl Intent {
    pub fn handle_on(self, model: &Model) -> IntentHandled {
        log::trace!("Handling intent {self:?} on {model:?}");
        match self {
            Self::FetchTracks { search } => {
                if !model.can_fetch() {
                    return IntentHandled::Rejected(Self::FetchTracks { search });
                }
                EffectApplied::unchanged_next(Effect::FetchTracksAccepted { search }).into()
            }
            Self::Refresh => {
                if model.is_pending() {
                    return EffectApplied::unchanged_next(Effect::RefreshDeferred).into();
                }
                EffectApplied::unchanged_next(Effect::FetchTracksAccepted {
                    search: model.search.clone(),
                }).into()
            }
        }
    }
}
