// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use tracklet_core::Track;
use tracklet_core_json::track::{TracksData, TracksVariables, try_into_tracks};

use crate::webapi::{ClientEnvironment, graphql};

use super::{super::Effect, Task};

const TRACKS_QUERY: &str = r"
query ($search: String) {
  tracks(search: $search) {
    id
    title
    description
    url
    createdAt
    postedBy {
      id
      username
    }
    likes {
      id
    }
  }
}
";

impl Task {
    pub async fn execute<E: ClientEnvironment>(self, env: &E) -> Effect {
        log::debug!("Executing task {self:?}");
        match self {
            Self::FetchTracks { token, search } => {
                let result = fetch_tracks(env, search).await;
                Effect::FetchTracksFinished { token, result }
            }
        }
    }
}

async fn fetch_tracks<E: ClientEnvironment>(
    env: &E,
    search: Option<String>,
) -> anyhow::Result<Vec<Track>> {
    let variables = TracksVariables { search };
    let TracksData { tracks } = graphql::execute(env, TRACKS_QUERY, variables).await?;
    try_into_tracks(tracks)
}
