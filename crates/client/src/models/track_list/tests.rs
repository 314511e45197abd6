// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use tracklet_core::{TrackId, UserId, UserRef};

use crate::util::roundtrip::PendingToken;

use super::*;

fn track(id: u64, title: &str) -> Track {
    Track {
        id: TrackId::new(id),
        title: title.to_owned(),
        description: String::new(),
        url: format!("https://host/{id}.mp3").parse().unwrap(),
        owner: Some(UserRef {
            id: UserId::new(1),
            username: "alice".to_owned(),
        }),
        like_count: 0,
        created_at: None,
    }
}

fn handle(model: &mut Model, intent: Intent) -> Result<Option<Task>, Intent> {
    match model.handle_intent(intent) {
        IntentHandled::Rejected(intent) => Err(intent),
        IntentHandled::Accepted(effect_applied) => Ok(follow(model, effect_applied)),
    }
}

fn apply(model: &mut Model, effect: Effect) -> Option<Task> {
    let effect_applied = model.apply_effect(effect);
    follow(model, effect_applied)
}

/// Applies all follow-up effects and returns the spawned task, if any.
fn follow(model: &mut Model, effect_applied: EffectApplied) -> Option<Task> {
    let EffectApplied {
        mut task,
        mut next_effect,
        render_hint: _,
    } = effect_applied;
    while let Some(effect) = next_effect.take() {
        let effect_applied = model.apply_effect(effect);
        assert!(task.is_none() || effect_applied.task.is_none());
        task = task.or(effect_applied.task);
        next_effect = effect_applied.next_effect;
    }
    task
}

fn fetch(model: &mut Model, search: Option<&str>) -> (PendingToken, Option<String>) {
    let Some(Task::FetchTracks { token, search }) = handle(
        model,
        Intent::FetchTracks {
            search: search.map(ToOwned::to_owned),
        },
    )
    .unwrap() else {
        panic!("no task dispatched");
    };
    (token, search)
}

#[test]
fn fetch_and_finish() {
    let mut model = Model::default();
    assert!(model.tracks().last_value().is_none());
    let (token, search) = fetch(&mut model, None);
    assert!(search.is_none());
    assert!(model.is_pending());
    assert!(
        apply(
            &mut model,
            Effect::FetchTracksFinished {
                token,
                result: Ok(vec![track(1, "One"), track(2, "Two")]),
            },
        )
        .is_none()
    );
    assert!(!model.is_pending());
    assert_eq!(2, model.tracks().last_value().unwrap().len());
    assert!(model.last_error().is_none());
}

#[test]
fn search_term_is_trimmed_and_empty_is_omitted() {
    let mut model = Model::default();
    let (token, search) = fetch(&mut model, Some("  rock "));
    assert_eq!(Some("rock"), search.as_deref());
    assert_eq!(Some("rock"), model.search());
    apply(
        &mut model,
        Effect::FetchTracksFinished {
            token,
            result: Ok(vec![]),
        },
    );
    let (_, search) = fetch(&mut model, Some("   "));
    assert!(search.is_none());
    assert!(model.search().is_none());
}

#[test]
fn fetch_while_pending_is_rejected() {
    let mut model = Model::default();
    fetch(&mut model, None);
    assert!(
        handle(
            &mut model,
            Intent::FetchTracks {
                search: Some("x".to_owned())
            }
        )
        .is_err()
    );
}

#[test]
fn failed_fetch_keeps_previous_tracks() {
    let mut model = Model::default();
    let (token, _) = fetch(&mut model, None);
    apply(
        &mut model,
        Effect::FetchTracksFinished {
            token,
            result: Ok(vec![track(1, "One")]),
        },
    );
    let (token, _) = fetch(&mut model, None);
    apply(
        &mut model,
        Effect::FetchTracksFinished {
            token,
            result: Err(anyhow::anyhow!("offline")),
        },
    );
    assert!(!model.is_pending());
    assert_eq!(1, model.tracks().last_value().unwrap().len());
    assert_eq!("offline", model.take_last_error().unwrap().to_string());
    assert!(model.last_error().is_none());
}

#[test]
fn refresh_repeats_last_search() {
    let mut model = Model::default();
    let (token, _) = fetch(&mut model, Some("rock"));
    apply(
        &mut model,
        Effect::FetchTracksFinished {
            token,
            result: Ok(vec![]),
        },
    );
    let Some(Task::FetchTracks { search, .. }) = handle(&mut model, Intent::Refresh).unwrap()
    else {
        panic!("no task dispatched");
    };
    assert_eq!(Some("rock"), search.as_deref());
}

#[test]
fn refresh_while_pending_is_deferred() {
    let mut model = Model::default();
    let (token, _) = fetch(&mut model, None);
    assert!(handle(&mut model, Intent::Refresh).unwrap().is_none());
    assert!(model.is_pending());
    let Some(Task::FetchTracks {
        token: next_token, ..
    }) = apply(
        &mut model,
        Effect::FetchTracksFinished {
            token,
            result: Ok(vec![track(1, "One")]),
        },
    )
    else {
        panic!("no refresh dispatched");
    };
    assert!(model.is_pending());
    assert_ne!(token, next_token);
    assert_eq!(1, model.tracks().last_value().unwrap().len());
    // No further refresh after the deferred one finished
    assert!(
        apply(
            &mut model,
            Effect::FetchTracksFinished {
                token: next_token,
                result: Ok(vec![track(1, "One"), track(2, "Two")]),
            },
        )
        .is_none()
    );
    assert_eq!(2, model.tracks().last_value().unwrap().len());
}

#[test]
fn outdated_response_is_discarded() {
    let mut model = Model::default();
    let (token, _) = fetch(&mut model, None);
    apply(
        &mut model,
        Effect::FetchTracksFinished {
            token,
            result: Ok(vec![track(1, "One")]),
        },
    );
    // The same token must not be accepted twice
    let applied = model.apply_effect(Effect::FetchTracksFinished {
        token,
        result: Ok(vec![]),
    });
    assert_eq!(ModelChanged::Unchanged, applied.render_hint);
    assert_eq!(1, model.tracks().last_value().unwrap().len());
}
