//! Bidirectional conversion between the editor and game chart documents.
//!
//! Conversion is single-pass and full-replace: each call builds a fresh
//! destination chart with every per-tier collection allocated, never
//! merging into a prior document. Sparse source tiers convert to empty
//! collections; entries that cannot be represented on the destination side
//! are skipped with a [`ConvertWarning`] and counted in the tier's
//! [`TierReport`]. The only hard failure is an unusable BPM, rejected
//! before any quantization happens.
//!
//! Tiers are independent of each other: nothing in a tier's conversion,
//! including combo-group reconstruction, reads another tier's state.

use thiserror::Error;

use crate::editor::model::{EditorChart, Tier};
use crate::editor::time::InvalidBpmError;
use crate::game::Chart;

pub mod combo;
mod editor_to_game;
mod game_to_editor;
pub mod rail;

/// Error aborting a conversion before any output is produced.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[non_exhaustive]
pub enum ConvertError {
    /// The source BPM cannot define a quantization grid.
    #[error("BPM must be a positive finite number: {0}")]
    InvalidBpm(f64),
}

impl From<InvalidBpmError> for ConvertError {
    fn from(error: InvalidBpmError) -> Self {
        Self::InvalidBpm(error.0)
    }
}

/// Recoverable conditions hit during conversion.
///
/// The conversion still structurally completes when these occur.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ConvertWarning {
    /// A rail with no notes was skipped.
    #[error("empty rail on {tier} was skipped")]
    EmptyRail {
        /// Tier the rail was on.
        tier: Tier,
    },
    /// A game slide whose hand type has no editor equivalent was skipped.
    #[error("slide with unmappable hand type on {tier} was skipped")]
    UnmappableSlide {
        /// Tier the slide was on.
        tier: Tier,
    },
    /// A game drum whose hand type has no editor equivalent was skipped.
    #[error("drum with unmappable hand type on {tier} was skipped")]
    UnmappableDrum {
        /// Tier the drum was on.
        tier: Tier,
    },
}

/// Per-tier summary of converted versus skipped content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TierReport {
    /// Tier the report covers.
    pub tier: Tier,
    /// Flat notes converted.
    pub notes: usize,
    /// Rails converted.
    pub rails: usize,
    /// Slides converted.
    pub slides: usize,
    /// Drums converted.
    pub drums: usize,
    /// Entries skipped with a warning.
    pub skipped: usize,
}

impl TierReport {
    /// An empty report for `tier`.
    #[must_use]
    pub const fn new(tier: Tier) -> Self {
        Self {
            tier,
            notes: 0,
            rails: 0,
            slides: 0,
            drums: 0,
            skipped: 0,
        }
    }
}

/// Output of [`EditorChart::to_game`].
#[derive(Debug, Clone, PartialEq)]
#[must_use]
pub struct EditorToGameOutput {
    /// The converted game chart.
    pub chart: Chart,
    /// Warnings that occurred during the conversion.
    pub warnings: Vec<ConvertWarning>,
    /// Per-tier conversion summaries, in [`Tier::ALL`] order.
    pub reports: Vec<TierReport>,
}

/// Output of [`Chart::to_editor`].
#[derive(Debug, Clone, PartialEq)]
#[must_use]
pub struct GameToEditorOutput {
    /// The converted editor chart.
    pub chart: EditorChart,
    /// Warnings that occurred during the conversion.
    pub warnings: Vec<ConvertWarning>,
    /// Per-tier conversion summaries, in [`Tier::ALL`] order.
    pub reports: Vec<TierReport>,
}
