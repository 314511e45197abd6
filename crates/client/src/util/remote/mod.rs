// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::time::Instant;

use crate::util::roundtrip::{PendingToken, Watermark};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DataSnapshot<T> {
    pub value: T,
    pub since: Instant,
}

impl<T> DataSnapshot<T> {
    #[must_use]
    pub fn new(value: impl Into<T>, since: impl Into<Instant>) -> Self {
        Self {
            value: value.into(),
            since: since.into(),
        }
    }

    #[must_use]
    pub fn now(value: impl Into<T>) -> Self {
        Self::new(value, Instant::now())
    }
}

/// Data that is fetched from a remote source
///
/// Keeps the last value that has been received together with
/// the state of the request that is currently pending.
#[derive(Debug)]
pub struct RemoteData<T> {
    watermark: Watermark,
    last_snapshot: Option<DataSnapshot<T>>,
}

impl<T> RemoteData<T> {
    #[must_use]
    pub const fn default() -> Self {
        Self {
            watermark: Watermark::INITIAL,
            last_snapshot: None,
        }
    }

    #[must_use]
    pub fn last_snapshot(&self) -> Option<&DataSnapshot<T>> {
        self.last_snapshot.as_ref()
    }

    #[must_use]
    pub fn last_value(&self) -> Option<&T> {
        self.last_snapshot.as_ref().map(|snapshot| &snapshot.value)
    }

    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.watermark.is_pending()
    }

    /// Discard both the last value and the pending request
    pub fn reset(&mut self) -> Option<DataSnapshot<T>> {
        self.watermark.reset();
        self.last_snapshot.take()
    }

    /// Start the next request
    ///
    /// A request that is still pending will be discarded when finished.
    pub fn start_pending_now(&mut self) -> PendingToken {
        self.watermark.start_pending()
    }

    /// Finish a pending request without updating the data
    ///
    /// Returns `false` if the request is outdated.
    pub fn finish_pending(&mut self, token: PendingToken) -> bool {
        self.watermark.finish_pending(token)
    }

    /// Finish a pending request with the received value
    ///
    /// Returns the previous snapshot if accepted or the given value
    /// if the request is outdated.
    pub fn finish_pending_with_value_now(
        &mut self,
        token: PendingToken,
        value: impl Into<T>,
    ) -> Result<Option<DataSnapshot<T>>, T> {
        if !self.finish_pending(token) {
            return Err(value.into());
        }
        Ok(self.last_snapshot.replace(DataSnapshot::now(value)))
    }
}

impl<T> Default for RemoteData<T> {
    fn default() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests;
