// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use crate::util::roundtrip::PendingToken;

#[derive(Debug)]
pub enum Task {
    FetchTracks {
        token: PendingToken,
        search: Option<String>,
    },
}

#[cfg(feature = "webapi-backend")]
mod webapi;
