// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use tracklet_core::{Session, Track, TrackId, UserId, UserProfile};
use tracklet_core_json::{
    track::TrackPayload,
    user::{CreateLikeData, CreateLikeVariables, MeData, UserData, UserVariables},
};

use crate::webapi::{ClientEnvironment, graphql};

use super::{super::Effect, Task};

const ME_QUERY: &str = r"
{
  me {
    id
    username
    likeSet {
      id
      track {
        id
      }
    }
  }
}
";

const USER_QUERY: &str = r"
query ($id: Int!) {
  user(id: $id) {
    id
    username
    dateJoined
    likeSet {
      id
      track {
        id
      }
    }
    trackSet {
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

const CREATE_LIKE_MUTATION: &str = r"
mutation ($trackId: Int!) {
  createLike(trackId: $trackId) {
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

/// Empty variables for queries without parameters
#[derive(Debug, serde::Serialize)]
struct NoVariables {}

impl Task {
    pub async fn execute<E: ClientEnvironment>(self, env: &E) -> Effect {
        log::debug!("Executing task {self:?}");
        match self {
            Self::FetchMe { token } => {
                let result = fetch_me(env).await;
                Effect::FetchMeFinished { token, result }
            }
            Self::CreateLike { track_id } => {
                let result = create_like(env, track_id).await;
                Effect::LikeTrackFinished { track_id, result }
            }
            Self::FetchProfile { token, user_id } => {
                let result = fetch_profile(env, user_id).await;
                Effect::FetchProfileFinished { token, result }
            }
        }
    }
}

async fn fetch_me<E: ClientEnvironment>(env: &E) -> anyhow::Result<Option<Session>> {
    let MeData { me } = graphql::execute(env, ME_QUERY, NoVariables {}).await?;
    Ok(me.map(Into::into))
}

async fn create_like<E: ClientEnvironment>(env: &E, track_id: TrackId) -> anyhow::Result<Track> {
    let variables = CreateLikeVariables {
        track_id: track_id.into(),
    };
    let CreateLikeData {
        create_like: TrackPayload { track },
    } = graphql::execute(env, CREATE_LIKE_MUTATION, variables).await?;
    track.try_into()
}

async fn fetch_profile<E: ClientEnvironment>(
    env: &E,
    user_id: UserId,
) -> anyhow::Result<Option<UserProfile>> {
    let variables = UserVariables { id: user_id.into() };
    let UserData { user } = graphql::execute(env, USER_QUERY, variables).await?;
    user.map(UserProfile::try_from).transpose()
}
