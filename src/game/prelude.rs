//! Prelude module for the game chart model.
//!
//! Re-exports all game-side types for convenient access, along with the
//! editor types they embed. You can use
//! `use notechart_rs::game::prelude::*;` to import them at once.

pub use super::{
    Bookmark, Chart, Drum, GameNote, Slide,
    parse::{ChartParseError, ChartWriteError, chart_to_json, parse_chart},
    raw_time::{RawTime, RawTimeError},
};

// Re-export conversion types since `Chart::to_editor` lives there.
pub use crate::convert::{
    ConvertError, ConvertWarning, EditorToGameOutput, GameToEditorOutput, TierReport,
};

// Editor types embedded in the game document.
pub use crate::editor::model::{Direction, HandType, PerTier, Position, Tier};
