// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Facade that re-exports the public crates of the workspace.

pub use tracklet_core::*;

#[cfg(feature = "json")]
pub use tracklet_core_json as json;

#[cfg(feature = "client")]
pub use tracklet_client as client;
