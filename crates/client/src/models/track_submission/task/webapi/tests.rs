// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use tracklet_core::TrackId;

use crate::webapi::testing::TestEnvironment;

use super::*;

fn assert_rejected_as_invalid(effect: &Effect) {
    let Effect::MutationFinished(Err(err)) = effect else {
        panic!("unexpected effect {effect:?}");
    };
    assert!(err.to_string().starts_with("invalid input"));
}

#[tokio::test]
async fn blank_new_track_is_not_sent() {
    // No request is sent, i.e. no server needs to be available
    let env = TestEnvironment::new();
    let task = Task::CreateTrack(NewTrack {
        title: " ".to_owned(),
        description: "Desc".to_owned(),
        url: "https://host/a.mp3".parse().unwrap(),
    });
    assert_rejected_as_invalid(&task.execute(&env).await);
}

#[tokio::test]
async fn track_update_with_blank_description_is_not_sent() {
    let env = TestEnvironment::new();
    let task = Task::UpdateTrack(TrackUpdate {
        id: TrackId::new(3),
        title: None,
        description: Some("\n".to_owned()),
        url: None,
    });
    assert_rejected_as_invalid(&task.execute(&env).await);
}

#[test]
fn valid_inputs_pass() {
    let new_track = NewTrack {
        title: "Song A".to_owned(),
        description: "Desc".to_owned(),
        url: "https://host/a.mp3".parse().unwrap(),
    };
    assert!(check_valid(&new_track).is_ok());
    let track_update = TrackUpdate {
        id: TrackId::new(3),
        title: Some("New title".to_owned()),
        description: None,
        url: None,
    };
    assert!(check_valid(&track_update).is_ok());
}
