// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

type EpochNumber = usize;

const INITIAL_EPOCH_NUMBER: EpochNumber = 0;

type SequenceNumber = usize;

const INITIAL_SEQUENCE_NUMBER: SequenceNumber = 0;

/// Identifies a single request
///
/// Passed to the task that performs the request and returned
/// together with its result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingToken {
    epoch: EpochNumber,
    sequence: SequenceNumber,
}

static_assertions::assert_impl_all!(PendingToken: Send, Sync);

/// Tracks the most recent request
///
/// Only the response of the most recent request is accepted.
/// Responses of outdated requests are discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Watermark {
    epoch: EpochNumber,
    sequence: SequenceNumber,
    pending: bool,
}

impl Watermark {
    pub const INITIAL: Self = Self {
        epoch: INITIAL_EPOCH_NUMBER,
        sequence: INITIAL_SEQUENCE_NUMBER,
        pending: false,
    };

    #[must_use]
    pub const fn new() -> Self {
        Self::INITIAL
    }

    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.pending
    }

    /// Start a new request.
    ///
    /// Outdates the request that might still be pending.
    pub fn start_pending(&mut self) -> PendingToken {
        self.sequence = self.sequence.wrapping_add(1);
        self.pending = true;
        self.current_token()
    }

    /// Finish a pending request.
    ///
    /// Returns `false` if the request has been outdated in the meantime.
    pub fn finish_pending(&mut self, token: PendingToken) -> bool {
        if !self.pending || token != self.current_token() {
            return false;
        }
        self.pending = false;
        true
    }

    /// Outdate all requests, both pending and finished.
    pub fn reset(&mut self) {
        self.epoch = self.epoch.wrapping_add(1);
        self.sequence = INITIAL_SEQUENCE_NUMBER;
        self.pending = false;
    }

    const fn current_token(&self) -> PendingToken {
        let Self {
            epoch, sequence, ..
        } = *self;
        PendingToken { epoch, sequence }
    }
}

impl Default for Watermark {
    fn default() -> Self {
        Self::new()
    }
}
