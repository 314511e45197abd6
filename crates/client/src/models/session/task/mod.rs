// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use tracklet_core::{TrackId, UserId};

use crate::util::roundtrip::PendingToken;

#[derive(Debug)]
pub enum Task {
    FetchMe {
        token: PendingToken,
    },
    CreateLike {
        track_id: TrackId,
    },
    FetchProfile {
        token: PendingToken,
        user_id: UserId,
    },
}

#[cfg(feature = "webapi-backend")]
mod webapi;
