// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use tracklet_core::{Session, Track, TrackId, UserId, UserProfile};

use crate::util::roundtrip::PendingToken;

use super::{EffectApplied, Model, Task};

#[derive(Debug)]
pub enum Effect {
    FetchMeAccepted,
    FetchMeFinished {
        token: PendingToken,
        result: anyhow::Result<Option<Session>>,
    },
    LikeTrackAccepted {
        track_id: TrackId,
    },
    LikeTrackFinished {
        track_id: TrackId,
        result: anyhow::Result<Track>,
    },
    FetchProfileAccepted {
        user_id: UserId,
    },
    FetchProfileFinished {
        token: PendingToken,
        result: anyhow::Result<Option<UserProfile>>,
    },
}

impl Effect {
    pub fn apply_on(self, model: &mut Model) -> EffectApplied {
        log::trace!("Applying effect {self:?} on {model:?}");
        match self {
            Self::FetchMeAccepted => {
                let token = model.me.start_pending_now();
                EffectApplied::maybe_changed_task(Task::FetchMe { token })
            }
            Self::FetchMeFinished { token, result } => match result {
                Ok(session) => {
                    if session.is_none() {
                        log::debug!("Not authenticated");
                    }
                    if model
                        .me
                        .finish_pending_with_value_now(token, session)
                        .is_err()
                    {
                        log::debug!("Discarding outdated session");
                        return EffectApplied::unchanged();
                    }
                    EffectApplied::maybe_changed()
                }
                Err(err) => {
                    if !model.me.finish_pending(token) {
                        log::debug!("Discarding outdated error: {err:#}");
                        return EffectApplied::unchanged();
                    }
                    log::warn!("Failed to fetch session: {err:#}");
                    model.last_error = Some(err);
                    EffectApplied::maybe_changed()
                }
            },
            Self::LikeTrackAccepted { track_id } => {
                debug_assert!(model.pending_like.is_none());
                model.pending_like = Some(track_id);
                EffectApplied::maybe_changed_task(Task::CreateLike { track_id })
            }
            Self::LikeTrackFinished { track_id, result } => {
                if model.pending_like != Some(track_id) {
                    log::warn!(
                        "Discarding unexpected like result for track {track_id}",
                        track_id = track_id.value()
                    );
                    return EffectApplied::unchanged();
                }
                model.pending_like = None;
                match result {
                    Ok(track) => {
                        log::info!(
                            "Liked track \"{title}\" ({like_count} like(s))",
                            title = track.title,
                            like_count = track.like_count
                        );
                        model.listing_invalidated = true;
                        // The like relations of the session have changed
                        EffectApplied::maybe_changed_next(Self::FetchMeAccepted)
                    }
                    Err(err) => {
                        log::warn!("Failed to like track: {err:#}");
                        model.last_error = Some(err);
                        EffectApplied::maybe_changed()
                    }
                }
            }
            Self::FetchProfileAccepted { user_id } => {
                if model.profile_user_id != Some(user_id) {
                    model.profile.reset();
                    model.profile_user_id = Some(user_id);
                }
                let token = model.profile.start_pending_now();
                EffectApplied::maybe_changed_task(Task::FetchProfile {
                    token,
                    user_id,
                })
            }
            Self::FetchProfileFinished { token, result } => match result {
                Ok(profile) => {
                    if profile.is_none() {
                        log::debug!("User profile not found");
                    }
                    if model
                        .profile
                        .finish_pending_with_value_now(token, profile)
                        .is_err()
                    {
                        log::debug!("Discarding outdated user profile");
                        return EffectApplied::unchanged();
                    }
                    EffectApplied::maybe_changed()
                }
                Err(err) => {
                    if !model.profile.finish_pending(token) {
                        log::debug!("Discarding outdated error: {err:#}");
                        return EffectApplied::unchanged();
                    }
                    log::warn!("Failed to fetch user profile: {err:#}");
                    model.last_error = Some(err);
                    EffectApplied::maybe_changed()
                }
            },
        }
    }
}
