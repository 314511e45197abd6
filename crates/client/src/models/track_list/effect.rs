// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use tracklet_core::Track;

use crate::util::roundtrip::PendingToken;

use super::{EffectApplied, Model};

#[derive(Debug)]
pub enum Effect {
    FetchTracksAccepted {
        search: Option<String>,
    },
    RefreshDeferred,
    FetchTracksFinished {
        token: PendingToken,
        result: anyhow::Result<Vec<Track>>,
    },
}

impl Effect {
    pub fn apply_on(self, model: &mut Model) -> EffectApplied {
        log::trace!("Applying effect {self:?} on {model:?}");
        match self {
            Self::FetchTracksAccepted { search } => {
                debug_assert!(model.can_fetch());
                let task = model.start_fetching(search);
                EffectApplied::maybe_changed_task(task)
            }
            Self::RefreshDeferred => {
                debug_assert!(model.is_pending());
                model.refresh_requested = true;
                EffectApplied::unchanged()
            }
            Self::FetchTracksFinished { token, result } => {
                match result {
                    Ok(tracks) => {
                        log::debug!("Fetched {num_tracks} track(s)", num_tracks = tracks.len());
                        if let Err(tracks) = model.tracks.finish_pending_with_value_now(token, tracks)
                        {
                            log::debug!(
                                "Discarding {num_tracks} outdated track(s)",
                                num_tracks = tracks.len()
                            );
                            return EffectApplied::unchanged();
                        }
                    }
                    Err(err) => {
                        if !model.tracks.finish_pending(token) {
                            log::debug!("Discarding outdated error: {err:#}");
                            return EffectApplied::unchanged();
                        }
                        log::warn!("Failed to fetch tracks: {err:#}");
                        model.last_error = Some(err);
                    }
                }
                if model.refresh_requested {
                    log::debug!("Refreshing after fetching finished");
                    return EffectApplied::maybe_changed_next(Self::FetchTracksAccepted {
                        search: model.search.clone(),
                    });
                }
                EffectApplied::maybe_changed()
            }
        }
    }
}
