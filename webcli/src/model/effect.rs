// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use tracklet_client::models::{session, track_list, track_submission};

use super::{EffectApplied, IntentHandled, Model};

#[derive(Debug)]
pub(crate) enum Effect {
    TrackList(track_list::Effect),
    TrackSubmission(track_submission::Effect),
    Session(session::Effect),
    RefreshTrackList,

    /// The outcome of a spawned task
    TaskFinished(Box<Effect>),
}

impl From<track_list::Effect> for Effect {
    fn from(effect: track_list::Effect) -> Self {
        Self::TrackList(effect)
    }
}

impl From<track_submission::Effect> for Effect {
    fn from(effect: track_submission::Effect) -> Self {
        Self::TrackSubmission(effect)
    }
}

impl From<session::Effect> for Effect {
    fn from(effect: session::Effect) -> Self {
        Self::Session(effect)
    }
}

impl Effect {
    pub(crate) fn apply_on(self, model: &mut Model) -> EffectApplied {
        log::trace!("Applying effect {self:?}");
        let mut effect_applied: EffectApplied = match self {
            Self::TrackList(effect) => model.track_list.apply_effect(effect).map_into(),
            Self::TrackSubmission(effect) => {
                model.track_submission.apply_effect(effect).map_into()
            }
            Self::Session(effect) => model.session.apply_effect(effect).map_into(),
            Self::RefreshTrackList => {
                let intent_handled: IntentHandled = model
                    .track_list
                    .handle_intent(track_list::Intent::Refresh)
                    .map_into();
                return match intent_handled {
                    IntentHandled::Accepted(effect_applied) => effect_applied,
                    IntentHandled::Rejected(intent) => {
                        log::debug!("Refreshing rejected: {intent:?}");
                        EffectApplied::unchanged()
                    }
                };
            }
            Self::TaskFinished(effect) => {
                model.task_finished();
                return (*effect).apply_on(model);
            }
        };
        // Follow-up effects take precedence. The invalidation is
        // picked up again after they have been applied.
        if effect_applied.next_effect.is_none() && model.take_listing_invalidated() {
            log::debug!("Refreshing invalidated track list");
            effect_applied.next_effect = Some(Self::RefreshTrackList);
        }
        effect_applied
    }
}
