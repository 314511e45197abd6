// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

//! The listing of all tracks, optionally filtered by a search term.

use infect::ModelChanged;
use tracklet_core::Track;

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
    search: Option<String>,
    tracks: RemoteData<Vec<Track>>,
    refresh_requested: bool,
    last_error: Option<anyhow::Error>,
}

impl Model {
    /// The search term of the last fetch
    #[must_use]
    pub fn search(&self) -> Option<&str> {
        self.search.as_deref()
    }

    #[must_use]
    pub const fn tracks(&self) -> &RemoteData<Vec<Track>> {
        &self.tracks
    }

    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.tracks.is_pending()
    }

    #[must_use]
    pub const fn last_error(&self) -> Option<&anyhow::Error> {
        self.last_error.as_ref()
    }

    pub fn take_last_error(&mut self) -> Option<anyhow::Error> {
        self.last_error.take()
    }

    #[must_use]
    pub const fn can_fetch(&self) -> bool {
        !self.is_pending()
    }

    pub fn handle_intent(&self, intent: Intent) -> IntentHandled {
        intent.handle_on(self)
    }

    pub fn apply_effect(&mut self, effect: Effect) -> EffectApplied {
        effect.apply_on(self)
    }

    fn start_fetching(&mut self, search: Option<String>) -> Task {
        let search = search
            .map(|search| search.trim().to_owned())
            .filter(|search| !search.is_empty());
        self.search.clone_from(&search);
        self.refresh_requested = false;
        let token = self.tracks.start_pending_now();
        Task::FetchTracks { token, search }
    }
}

#[cfg(test)]
mod tests;
