// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use tracklet_core::{TrackId, UserId};

use super::*;

const TRACKS_JSON: &str = r#"{
    "tracks": [
        {
            "id": "1",
            "title": "Song A",
            "description": "Desc",
            "url": "https://host/a.mp3",
            "createdAt": "2019-03-04T12:30:00.123456+00:00",
            "postedBy": {
                "id": "5",
                "username": "alice"
            },
            "likes": [
                { "id": "11" },
                { "id": "12" }
            ]
        },
        {
            "id": "2",
            "title": "Song B",
            "description": "",
            "url": "https://host/b.wav",
            "postedBy": null
        }
    ]
}"#;

#[test]
fn deserialize_and_convert_tracks() {
    let TracksData { tracks } = serde_json::from_str(TRACKS_JSON).unwrap();
    let tracks = try_into_tracks(tracks).unwrap();
    assert_eq!(2, tracks.len());

    let first = &tracks[0];
    assert_eq!(TrackId::new(1), first.id);
    assert_eq!("Song A", first.title);
    assert_eq!("https://host/a.mp3", first.url.as_str());
    assert_eq!(2, first.like_count);
    assert_eq!(
        Some(UserId::new(5)),
        first.owner.as_ref().map(|owner| owner.id)
    );
    assert_eq!(
        Some("2019-03-04T12:30:00.123456Z"),
        first.created_at.map(|ts| ts.to_string()).as_deref()
    );

    let second = &tracks[1];
    assert!(second.owner.is_none());
    assert_eq!(0, second.like_count);
    assert!(second.created_at.is_none());
}

#[test]
fn reject_track_with_invalid_url() {
    let track: Track = serde_json::from_str(
        r#"{"id":"3","title":"Song","description":"Desc","url":"not a url"}"#,
    )
    .unwrap();
    assert!(_core::Track::try_from(track).is_err());
}

#[test]
fn ignore_invalid_timestamp_of_track() {
    let tracks: Vec<Track> = serde_json::from_str(
        r#"[
            {"id":"3","title":"Song","description":"Desc","url":"https://host/a.mp3","createdAt":"yesterday"},
            {"id":"4","title":"Other","description":"","url":"https://host/b.mp3","createdAt":"2019-03-04T12:30:00+00:00"}
        ]"#,
    )
    .unwrap();
    let tracks = try_into_tracks(tracks).unwrap();
    assert_eq!(2, tracks.len());
    assert_eq!("Song", tracks[0].title);
    assert!(tracks[0].created_at.is_none());
    assert!(tracks[1].created_at.is_some());
}

#[test]
fn serialize_create_track_variables() {
    let new_track = _core::NewTrack {
        title: "Song A".to_owned(),
        description: "Desc".to_owned(),
        url: "https://host/a.mp3".parse().unwrap(),
    };
    let variables = CreateTrackVariables::from(new_track);
    assert_eq!(
        serde_json::json!({
            "title": "Song A",
            "description": "Desc",
            "url": "https://host/a.mp3",
        }),
        serde_json::to_value(&variables).unwrap()
    );
}

#[test]
fn serialize_update_track_variables_without_url() {
    let update = _core::TrackUpdate {
        id: TrackId::new(7),
        title: Some("Song A".to_owned()),
        description: Some("Desc".to_owned()),
        url: None,
    };
    let variables = UpdateTrackVariables::from(update);
    assert_eq!(
        serde_json::json!({
            "trackId": 7,
            "title": "Song A",
            "description": "Desc",
        }),
        serde_json::to_value(&variables).unwrap()
    );
}

#[test]
fn serialize_tracks_variables() {
    assert_eq!(
        serde_json::json!({}),
        serde_json::to_value(TracksVariables::default()).unwrap()
    );
    assert_eq!(
        serde_json::json!({ "search": "alice" }),
        serde_json::to_value(TracksVariables {
            search: Some("alice".to_owned())
        })
        .unwrap()
    );
}

#[test]
fn deserialize_mutation_payloads() {
    let json = r#"{"createTrack":{"track":{"id":"9","title":"T","description":"D","url":"https://host/t.mp3"}}}"#;
    let CreateTrackData {
        create_track: TrackPayload { track },
    } = serde_json::from_str(json).unwrap();
    assert_eq!(9, track.id.value());

    let json = r#"{"updateTrack":{"track":{"id":"9","title":"T2","description":"D","url":"https://host/t.mp3"}}}"#;
    let UpdateTrackData {
        update_track: TrackPayload { track },
    } = serde_json::from_str(json).unwrap();
    assert_eq!("T2", track.title);
}
