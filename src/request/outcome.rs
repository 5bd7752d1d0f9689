//! Transfer outcomes and batch reports.

use super::request::FileRequest;
use std::time::Duration;

/// Terminal status of a single transfer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    /// Transfer completed and passed size verification.
    Success,
    /// Transfer failed on every attempt; carries the last error message.
    Fail(String),
}

/// The terminal result of one [`FileRequest`].
///
/// Produced exactly once per request, after the attempt loop has run its
/// course. There are no intermediate states.
#[derive(Debug, Clone)]
pub struct TransferOutcome {
    /// The request this outcome belongs to.
    request: FileRequest,
    /// Terminal status.
    status: Status,
    /// Bytes written to disk by the final attempt.
    bytes: u64,
    /// Number of attempts performed.
    attempts: u32,
}

impl TransferOutcome {
    /// Create a successful outcome.
    pub fn success(request: FileRequest, bytes: u64, attempts: u32) -> Self {
        Self {
            request,
            status: Status::Success,
            bytes,
            attempts,
        }
    }

    /// Create a failed outcome carrying the last error message.
    pub fn failure(request: FileRequest, attempts: u32, msg: impl std::fmt::Display) -> Self {
        Self {
            request,
            status: Status::Fail(format!("{}", msg)),
            bytes: 0,
            attempts,
        }
    }

    /// Get a reference to the outcome's request.
    pub fn request(&self) -> &FileRequest {
        &self.request
    }

    /// Get a reference to the outcome's status.
    pub fn status(&self) -> &Status {
        &self.status
    }

    /// Bytes written to disk by the final attempt.
    pub fn bytes(&self) -> u64 {
        self.bytes
    }

    /// Number of attempts performed.
    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    /// Whether the transfer ultimately succeeded.
    pub fn succeeded(&self) -> bool {
        matches!(self.status, Status::Success)
    }
}

/// Aggregate result of a batch, derived once every transfer has resolved.
#[derive(Debug, Clone)]
pub struct BatchReport {
    successful: usize,
    total: usize,
    elapsed: Duration,
}

impl BatchReport {
    /// Aggregate a set of outcomes.
    pub fn from_outcomes(outcomes: &[TransferOutcome], elapsed: Duration) -> Self {
        let successful = outcomes.iter().filter(|o| o.succeeded()).count();
        Self {
            successful,
            total: outcomes.len(),
            elapsed,
        }
    }

    /// Number of transfers that succeeded.
    pub fn successful(&self) -> usize {
        self.successful
    }

    /// Total number of transfers in the batch.
    pub fn total(&self) -> usize {
        self.total
    }

    /// Wall-clock duration of the batch.
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Wall-clock duration of the batch in seconds.
    pub fn elapsed_secs(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }
}
