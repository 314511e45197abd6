// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::fmt;

use serde::{
    Deserializer, Serializer,
    de::{self, Visitor as SerdeDeserializeVisitor},
};

use crate::prelude::*;

mod _core {
    pub(super) use tracklet_core::{LikeId, TrackId, UserId};
}

/// Numeric identifier of a remote entity
///
/// The schema declares object identifiers as `ID` which are
/// transmitted as strings while arguments of type `Int` are
/// transmitted as numbers. Both encodings are accepted when
/// deserializing. Serialized as a number for use in variables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Id(u64);

impl Id {
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    #[must_use]
    pub const fn value(self) -> u64 {
        let Self(value) = self;
        value
    }
}

impl Serialize for Id {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u64(self.value())
    }
}

struct IdDeserializeVisitor;

impl SerdeDeserializeVisitor<'_> for IdDeserializeVisitor {
    type Value = Id;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("non-negative integer or string of decimal digits")
    }

    fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(Id(value))
    }

    fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        u64::try_from(value)
            .map(Id)
            .map_err(|_| E::invalid_value(de::Unexpected::Signed(value), &self))
    }

    fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        value
            .trim()
            .parse()
            .map(Id)
            .map_err(|_| E::invalid_value(de::Unexpected::Str(value), &self))
    }
}

impl<'de> Deserialize<'de> for Id {
    fn deserialize<D>(deserializer: D) -> Result<Id, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(IdDeserializeVisitor)
    }
}

impl From<Id> for _core::TrackId {
    fn from(from: Id) -> Self {
        Self::new(from.value())
    }
}

impl From<_core::TrackId> for Id {
    fn from(from: _core::TrackId) -> Self {
        Self::new(from.value())
    }
}

impl From<Id> for _core::UserId {
    fn from(from: Id) -> Self {
        Self::new(from.value())
    }
}

impl From<_core::UserId> for Id {
    fn from(from: _core::UserId) -> Self {
        Self::new(from.value())
    }
}

impl From<Id> for _core::LikeId {
    fn from(from: Id) -> Self {
        Self::new(from.value())
    }
}
