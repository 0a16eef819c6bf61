//! Prelude module for the editor chart model.
//!
//! Re-exports all editor-side types for convenient access. You can use
//! `use notechart_rs::editor::prelude::*;` to import them at once.

pub use super::{
    model::{
        Direction, DrumKind, EditorBookmark, EditorChart, EditorDrum, EditorNote, EditorSlide,
        HandType, PerTier, Position, SlideKind, Tier,
    },
    rail::Rail,
    time::{InvalidBpmError, STEPS_PER_BEAT, StepGrid, TimeWrapper},
};

// Re-export conversion types since `EditorChart::to_game` lives there.
pub use crate::convert::{
    ConvertError, ConvertWarning, EditorToGameOutput, GameToEditorOutput, TierReport,
};

pub use crate::util::{MillisKey, TimeMap};
