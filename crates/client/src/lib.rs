// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Client components following a unidirectional dataflow.
//!
//! Each model is only mutated by applying effects. Intents are checked
//! against the current model and are either rejected or accepted
//! with a follow-up effect. Asynchronous tasks produce exactly one
//! effect that is sent back to the message loop, which is driven
//! by [`infect`].

pub mod models;
pub mod util;

#[cfg(feature = "webapi-backend")]
pub mod webapi;
