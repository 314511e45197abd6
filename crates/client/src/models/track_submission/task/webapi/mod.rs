// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use semval::prelude::*;
use tracklet_core::{NewTrack, Track, TrackUpdate};
use tracklet_core_json::track::{
    CreateTrackData, CreateTrackVariables, TrackPayload, UpdateTrackData, UpdateTrackVariables,
};

use crate::webapi::{ClientEnvironment, graphql, upload::upload_media_file};

use super::{super::Effect, Task};

const CREATE_TRACK_MUTATION: &str = r"
mutation ($title: String!, $description: String!, $url: String!) {
  createTrack(title: $title, description: $description, url: $url) {
    track {
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
}
";

const UPDATE_TRACK_MUTATION: &str = r"
mutation ($trackId: Int!, $title: String, $description: String, $url: String) {
  updateTrack(trackId: $trackId, title: $title, description: $description, url: $url) {
    track {
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
}
";

impl Task {
    pub async fn execute<E: ClientEnvironment>(self, env: &E) -> Effect {
        log::debug!("Executing task {self:?}");
        match self {
            Self::UploadFile(file) => {
                let res = upload_media_file(env, env.upload_config(), file).await;
                Effect::UploadFinished(res)
            }
            Self::CreateTrack(new_track) => {
                let res = create_track(env, new_track).await;
                Effect::MutationFinished(res)
            }
            Self::UpdateTrack(track_update) => {
                let res = update_track(env, track_update).await;
                Effect::MutationFinished(res)
            }
        }
    }
}

/// Rejects blank fields before they reach the remote API.
fn check_valid<V: Validate>(input: &V) -> anyhow::Result<()> {
    input.validate().map_err(|invalidity_context| {
        let invalidities = invalidity_context.into_iter().collect::<Vec<_>>();
        anyhow::anyhow!("invalid input: {invalidities:?}")
    })
}

async fn create_track<E: ClientEnvironment>(env: &E, new_track: NewTrack) -> anyhow::Result<Track> {
    check_valid(&new_track)?;
    let variables = CreateTrackVariables::from(new_track);
    let CreateTrackData {
        create_track: TrackPayload { track },
    } = graphql::execute(env, CREATE_TRACK_MUTATION, variables).await?;
    track.try_into()
}

async fn update_track<E: ClientEnvironment>(
    env: &E,
    track_update: TrackUpdate,
) -> anyhow::Result<Track> {
    check_valid(&track_update)?;
    let variables = UpdateTrackVariables::from(track_update);
    let UpdateTrackData {
        update_track: TrackPayload { track },
    } = graphql::execute(env, UPDATE_TRACK_MUTATION, variables).await?;
    track.try_into()
}

#[cfg(test)]
mod tests;
