// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use tracklet_client::{
    models::{session, track_list, track_submission},
    webapi::ClientEnvironment,
};

use super::Effect;

#[derive(Debug)]
pub(crate) enum Task {
    TrackList(track_list::Task),
    TrackSubmission(track_submission::Task),
    Session(session::Task),
}

impl From<track_list::Task> for Task {
    fn from(task: track_list::Task) -> Self {
        Self::TrackList(task)
    }
}

impl From<track_submission::Task> for Task {
    fn from(task: track_submission::Task) -> Self {
        Self::TrackSubmission(task)
    }
}

impl From<session::Task> for Task {
    fn from(task: session::Task) -> Self {
        Self::Session(task)
    }
}

impl Task {
    pub(crate) async fn execute<E: ClientEnvironment>(self, env: &E) -> Effect {
        match self {
            Self::TrackList(task) => task.execute(env).await.into(),
            Self::TrackSubmission(task) => task.execute(env).await.into(),
            Self::Session(task) => task.execute(env).await.into(),
        }
    }
}
