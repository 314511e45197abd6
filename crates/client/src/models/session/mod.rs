// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

//! The current session, liking of tracks and user profiles.

use infect::ModelChanged;
use tracklet_core::{Session, Track, TrackId, UserId, UserProfile, has_liked};

use crate::util::remote::RemoteData;

pub mod intent;
pub use self::intent::Intent;

pub mod effect;
pub use self::effect::Effect;

pub mod task;
pub use self::task::Task;

pub type IntentRejected = Intent;
pub type IntentHandled = infect::IntentHandled<IntentRejected, Effect, Task, ModelChanged>;
pub type EffectApplied = infect::EffectApplied<Effect, Task, ModelChanged>;

#[derive(Debug, Default)]
pub struct Model {
    /// `None` if not authenticated
    me: RemoteData<Option<Session>>,
    profile_user_id: Option<UserId>,
    profile: RemoteData<Option<UserProfile>>,
    pending_like: Option<TrackId>,
    listing_invalidated: bool,
    last_error: Option<anyhow::Error>,
}

impl Model {
    #[must_use]
    pub const fn me(&self) -> &RemoteData<Option<Session>> {
        &self.me
    }

    /// The session of the authenticated user, if available.
    #[must_use]
    pub fn session(&self) -> Option<&Session> {
        self.me.last_value().and_then(Option::as_ref)
    }

    #[must_use]
    pub const fn profile(&self) -> &RemoteData<Option<UserProfile>> {
        &self.profile
    }

    #[must_use]
    pub const fn profile_user_id(&self) -> Option<UserId> {
        self.profile_user_id
    }

    #[must_use]
    pub const fn pending_like(&self) -> Option<TrackId> {
        self.pending_like
    }

    /// Checks if the like control of the track is enabled.
    #[must_use]
    pub fn can_like(&self, track: &Track) -> bool {
        self.pending_like.is_none()
            && self
                .session()
                .is_some_and(|session| !has_liked(session, track))
    }

    #[must_use]
    pub const fn last_error(&self) -> Option<&anyhow::Error> {
        self.last_error.as_ref()
    }

    pub fn take_last_error(&mut self) -> Option<anyhow::Error> {
        self.last_error.take()
    }

    /// Consumes the notification that the track listing needs to be refreshed.
    pub fn take_listing_invalidated(&mut self) -> bool {
        std::mem::take(&mut self.listing_invalidated)
    }

    pub fn handle_intent(&self, intent: Intent) -> IntentHandled {
        intent.handle_on(self)
    }

    pub fn apply_effect(&mut self, effect: Effect) -> EffectApplied {
        effect.apply_on(self)
    }
}
