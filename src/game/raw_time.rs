//! Finite millisecond time of the game chart.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::util::MillisKey;

/// Raw play time in milliseconds; finite by construction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct RawTime(f64);

impl Eq for RawTime {}

impl PartialOrd for RawTime {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for RawTime {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.0.total_cmp(&other.0)
    }
}

/// Error type for `RawTime::try_from`.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[error("finite millisecond value expected: {0}")]
pub struct RawTimeError(pub(crate) f64);

impl TryFrom<f64> for RawTime {
    type Error = RawTimeError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        value
            .is_finite()
            .then_some(Self(value))
            .ok_or(RawTimeError(value))
    }
}

impl From<RawTime> for f64 {
    fn from(value: RawTime) -> Self {
        value.millis()
    }
}

impl RawTime {
    /// Creates a new `RawTime` if `millis` is finite, otherwise `None`.
    #[inline]
    #[must_use]
    pub fn new(millis: f64) -> Option<Self> {
        Self::try_from(millis).ok()
    }

    /// Gets the millisecond value.
    #[inline]
    #[must_use]
    pub const fn millis(self) -> f64 {
        self.0
    }

    /// Absolute distance to another time, in milliseconds.
    #[must_use]
    pub fn abs_diff(self, other: Self) -> f64 {
        (self.0 - other.0).abs()
    }
}

impl MillisKey for RawTime {
    fn from_millis(ms: f64) -> Option<Self> {
        Self::new(ms)
    }

    fn millis(&self) -> f64 {
        self.0
    }
}
