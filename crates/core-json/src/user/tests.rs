// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use tracklet_core::{LikeId, TrackId, UserId};

use super::*;

#[test]
fn session_from_me() {
    let json = r#"{
        "me": {
            "id": "5",
            "username": "alice",
            "likeSet": [
                { "id": "11", "track": { "id": "1" } },
                { "id": "12", "track": { "id": "3" } }
            ]
        }
    }"#;
    let MeData { me } = serde_json::from_str(json).unwrap();
    let session = _core::Session::from(me.unwrap());
    assert_eq!(UserId::new(5), session.id);
    assert_eq!("alice", session.username);
    assert_eq!(
        vec![
            _core::LikeRelation {
                id: LikeId::new(11),
                track_id: TrackId::new(1),
            },
            _core::LikeRelation {
                id: LikeId::new(12),
                track_id: TrackId::new(3),
            },
        ],
        session.likes
    );
}

#[test]
fn unauthenticated_me() {
    let MeData { me } = serde_json::from_str(r#"{"me":null}"#).unwrap();
    assert!(me.is_none());
}

#[test]
fn profile_from_user() {
    let json = r#"{
        "user": {
            "id": "5",
            "username": "alice",
            "dateJoined": "2019-01-02T03:04:05+00:00",
            "trackSet": [
                {
                    "id": "1",
                    "title": "Song A",
                    "description": "Desc",
                    "url": "https://host/a.mp3",
                    "likes": [{ "id": "11" }]
                }
            ],
            "likeSet": [
                { "id": "11", "track": { "id": "1" } }
            ]
        }
    }"#;
    let UserData { user } = serde_json::from_str(json).unwrap();
    let profile = _core::UserProfile::try_from(user.unwrap()).unwrap();
    assert_eq!("alice", profile.user.username);
    assert!(profile.date_joined.is_some());
    assert_eq!(1, profile.tracks.len());
    assert_eq!(1, profile.tracks[0].like_count);
    assert_eq!(Some(&profile.user), profile.tracks[0].owner.as_ref());
    assert_eq!(1, profile.likes.len());
}

#[test]
fn profile_tracks_keep_posted_by() {
    let json = r#"{
        "user": {
            "id": "5",
            "username": "alice",
            "dateJoined": "last week",
            "trackSet": [
                {
                    "id": "1",
                    "title": "Song A",
                    "url": "https://host/a.mp3",
                    "postedBy": { "id": "5", "username": "alice" }
                }
            ]
        }
    }"#;
    let UserData { user } = serde_json::from_str(json).unwrap();
    let profile = _core::UserProfile::try_from(user.unwrap()).unwrap();
    assert!(profile.date_joined.is_none());
    let owner = profile.tracks[0].owner.as_ref().unwrap();
    assert_eq!(UserId::new(5), owner.id);
    assert_eq!("alice", owner.username);
}

#[test]
fn unknown_user() {
    let UserData { user } = serde_json::from_str(r#"{"user":null}"#).unwrap();
    assert!(user.is_none());
}

#[test]
fn serialize_variables() {
    assert_eq!(
        serde_json::json!({ "trackId": 3 }),
        serde_json::to_value(CreateLikeVariables {
            track_id: Id::new(3)
        })
        .unwrap()
    );
    assert_eq!(
        serde_json::json!({ "id": 5 }),
        serde_json::to_value(UserVariables { id: Id::new(5) }).unwrap()
    );
}

#[test]
fn deserialize_create_like_payload() {
    let json = r#"{"createLike":{"track":{"id":"1","title":"T","description":"D","url":"https://host/t.mp3","likes":[{"id":"2"}]}}}"#;
    let CreateLikeData {
        create_like: TrackPayload { track },
    } = serde_json::from_str(json).unwrap();
    assert_eq!(1, track.id.value());
}
