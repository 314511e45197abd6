// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use super::*;

#[test]
fn finish_pending_with_value() {
    let mut data = RemoteData::<u32>::default();
    assert!(data.last_value().is_none());
    let token = data.start_pending_now();
    assert!(data.is_pending());
    assert_eq!(Ok(None), data.finish_pending_with_value_now(token, 1u32));
    assert!(!data.is_pending());
    assert_eq!(Some(&1), data.last_value());
}

#[test]
fn discard_value_of_outdated_request() {
    let mut data = RemoteData::<u32>::default();
    let outdated = data.start_pending_now();
    let current = data.start_pending_now();
    assert_eq!(Err(1), data.finish_pending_with_value_now(outdated, 1u32));
    assert!(data.last_value().is_none());
    assert!(data.is_pending());
    let previous = data.finish_pending_with_value_now(current, 2u32).unwrap();
    assert!(previous.is_none());
    assert_eq!(Some(&2), data.last_value());
}

#[test]
fn reset_returns_last_snapshot() {
    let mut data = RemoteData::<u32>::default();
    let token = data.start_pending_now();
    assert!(data.finish_pending_with_value_now(token, 3u32).is_ok());
    let pending = data.start_pending_now();
    assert_eq!(Some(3), data.reset().map(|snapshot| snapshot.value));
    assert!(!data.is_pending());
    assert!(data.last_value().is_none());
    assert!(!data.finish_pending(pending));
}
