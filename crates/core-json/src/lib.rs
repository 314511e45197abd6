// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

//! JSON representation of the remote GraphQL schema.
//!
//! Field names follow the camelCase convention of the schema.
//! Response types convert into `tracklet-core` types with
//! `TryFrom`, request variables are created from them with `From`.

pub mod prelude {
    pub(crate) use serde::{Deserialize, Serialize};

    pub(crate) use crate::entity::Id;
}

pub mod entity;
pub mod track;
pub mod user;
