//! Time identity and the quantization grid of the editor chart.
//!
//! Game-side times are raw float milliseconds; the editor keys everything
//! by [`TimeWrapper`], which carries the raw value together with a derived
//! integer key. Equality, ordering and hashing all go through the key, so
//! two values that differ by sub-epsilon error from repeated conversion
//! still name the same moment in the track.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::util::MillisKey;

/// Grid resolution: quantization steps per beat.
pub const STEPS_PER_BEAT: f64 = 64.0;

/// Step fraction under which a candidate grid point counts as the input
/// itself.
const STEP_EPSILON: f64 = 0.1;

/// A moment in the track.
///
/// The derived key buckets the raw value to the nearest microsecond; two
/// wrappers are equal iff their keys match, even when the raw values have
/// accumulated float error. The key is never persisted, it is rebuilt on
/// deserialization.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(from = "f64", into = "f64")]
pub struct TimeWrapper {
    value: f64,
    key: i64,
}

impl TimeWrapper {
    /// Wraps a raw millisecond value. Times entering from a game chart are
    /// validated finite by [`crate::game::raw_time::RawTime`] first.
    #[must_use]
    pub fn new(millis: f64) -> Self {
        Self {
            value: millis,
            key: derive_key(millis),
        }
    }

    /// The raw millisecond value.
    #[must_use]
    pub const fn millis(self) -> f64 {
        self.value
    }

    /// The derived identity key.
    #[must_use]
    pub const fn key(self) -> i64 {
        self.key
    }
}

fn derive_key(millis: f64) -> i64 {
    (millis * 1_000.0).round() as i64
}

impl PartialEq for TimeWrapper {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for TimeWrapper {}

impl PartialOrd for TimeWrapper {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for TimeWrapper {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.key.cmp(&other.key)
    }
}

impl std::hash::Hash for TimeWrapper {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.key.hash(state);
    }
}

impl From<f64> for TimeWrapper {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl From<TimeWrapper> for f64 {
    fn from(value: TimeWrapper) -> Self {
        value.value
    }
}

impl MillisKey for TimeWrapper {
    fn from_millis(ms: f64) -> Option<Self> {
        ms.is_finite().then(|| Self::new(ms))
    }

    fn millis(&self) -> f64 {
        self.value
    }
}

/// Error for a BPM that cannot define a step grid.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[error("BPM must be a positive finite number: {0}")]
pub struct InvalidBpmError(pub f64);

/// The 1/64-beat quantization grid of one chart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepGrid {
    ms_per_step: f64,
}

impl StepGrid {
    /// Builds the grid for a BPM.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidBpmError`] unless `bpm` is finite and positive.
    pub fn new(bpm: f64) -> Result<Self, InvalidBpmError> {
        if !bpm.is_finite() || bpm <= 0.0 {
            return Err(InvalidBpmError(bpm));
        }
        Ok(Self {
            ms_per_step: 60_000.0 / bpm / STEPS_PER_BEAT,
        })
    }

    /// Milliseconds between two adjacent grid points.
    #[must_use]
    pub const fn ms_per_step(&self) -> f64 {
        self.ms_per_step
    }

    /// The grid point after `t`.
    ///
    /// When `t` sits within 10% of a step of point `n + 1` (float drift
    /// just below a grid point), skips ahead to `n + 2`.
    #[must_use]
    pub fn next_step_point(&self, t: f64) -> f64 {
        let step = self.ms_per_step;
        let n = (t / step).floor();
        if ((n + 1.0) * step - t).abs() / step > STEP_EPSILON {
            (n + 1.0) * step
        } else {
            (n + 2.0) * step
        }
    }

    /// The grid point before `t`.
    ///
    /// When `t` sits on point `n` itself, skips behind to `n - 1`.
    #[must_use]
    pub fn prev_step_point(&self, t: f64) -> f64 {
        let step = self.ms_per_step;
        let n = (t / step).floor();
        let base = n * step;
        if base - t < 0.0 && (t - base) / step > STEP_EPSILON {
            base
        } else {
            (n - 1.0) * step
        }
    }

    /// Snaps a raw time onto the grid.
    ///
    /// A time already on a grid point, or drifted from one by less than the
    /// key resolution, is kept as-is so repeated snapping is idempotent.
    /// Everything else moves to the numerically closer of the neighboring
    /// points, ties ahead.
    #[must_use]
    pub fn snap(&self, t: f64) -> TimeWrapper {
        let key = TimeWrapper::new(t);
        let next = TimeWrapper::new(self.next_step_point(t));
        let prev = TimeWrapper::new(self.prev_step_point(t));
        // Walking forward from `prev` recovers the grid point the input
        // sits on, if any; that comparison is what detects on-grid input.
        let repeat = TimeWrapper::new(self.next_step_point(prev.millis()));
        if repeat != key && key != next && key != prev {
            if (next.millis() - t).abs() <= (t - prev.millis()).abs() {
                next
            } else {
                prev
            }
        } else {
            key
        }
    }
}

#[test]
fn grid_rejects_unusable_bpm() {
    assert!(StepGrid::new(0.0).is_err());
    assert!(StepGrid::new(-120.0).is_err());
    assert!(StepGrid::new(f64::NAN).is_err());
    assert!(StepGrid::new(f64::INFINITY).is_err());
    assert_eq!(StepGrid::new(120.0).unwrap().ms_per_step(), 7.8125);
}

#[test]
fn step_points_at_bpm_120() {
    let grid = StepGrid::new(120.0).unwrap();

    // off-grid input: plain neighbors
    assert_eq!(grid.next_step_point(1001.0), 1007.8125);
    assert_eq!(grid.prev_step_point(1001.0), 1000.0);

    // on-grid input: both directions skip past the point itself
    assert_eq!(grid.next_step_point(1000.0), 1007.8125);
    assert_eq!(grid.prev_step_point(1000.0), 992.1875);

    // drift just below a grid point takes the skip-ahead branch
    assert_eq!(grid.next_step_point(1000.0 - 1e-9), 1007.8125);
}

#[test]
fn snap_keeps_on_grid_and_drifted_times() {
    let grid = StepGrid::new(120.0).unwrap();

    // 1000 / 7.8125 == 128 exactly: the value is kept untouched
    assert_eq!(grid.snap(1000.0).millis(), 1000.0);

    // sub-epsilon drift keeps the derived key of the grid point
    assert_eq!(grid.snap(1000.0 + 1e-7).key(), TimeWrapper::new(1000.0).key());
    assert_eq!(grid.snap(1000.0 - 1e-7).key(), TimeWrapper::new(1000.0).key());
}

#[test]
fn snap_moves_off_grid_times_to_the_closest_point() {
    let grid = StepGrid::new(120.0).unwrap();

    assert_eq!(grid.snap(1001.0).millis(), 1000.0);
    assert_eq!(grid.snap(1006.0).millis(), 1007.8125);

    // equidistant input favors the later point
    assert_eq!(grid.snap(1003.90625).millis(), 1007.8125);
}

#[test]
fn wrapper_identity_goes_through_the_key() {
    let a = TimeWrapper::new(1000.0);
    let b = TimeWrapper::new(1000.0 + 1e-9);
    assert_eq!(a, b);
    assert_eq!(a.cmp(&b), std::cmp::Ordering::Equal);
    assert!(TimeWrapper::new(1000.0) < TimeWrapper::new(1007.8125));
}
