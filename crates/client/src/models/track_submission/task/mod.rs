// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use tracklet_core::{MediaFile, NewTrack, TrackUpdate};

#[derive(Debug)]
pub enum Task {
    UploadFile(MediaFile),
    CreateTrack(NewTrack),
    UpdateTrack(TrackUpdate),
}

#[cfg(feature = "webapi-backend")]
mod webapi;
