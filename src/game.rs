//! The game-side chart document.
//!
//! This is the shape a game runtime loads: every event keyed by raw float
//! milliseconds, rails flattened into the leader note's [`GameNote::segments`]
//! array rather than kept as object chains. Trailing rail notes have no
//! identity of their own here; they are reconstructible only from the
//! leader, the BPM and the segment coordinates.
//!
//! # Order of processing
//!
//! When converting into the editor representation, flat notes and rail
//! leaders on the same tier merge into one time-keyed dictionary before
//! combo groups are derived, so coincident events resolve the same way in
//! both directions.

use serde::{Deserialize, Serialize};

use crate::editor::model::{Direction, HandType, PerTier, Position};
use crate::util::TimeMap;

use self::raw_time::RawTime;

pub mod parse;
pub mod prelude;
pub mod raw_time;

/// A strikeable event in the game chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GameNote {
    /// Identity carried over from the editor document.
    pub id: String,
    /// Combo group id; `-1` is ungrouped.
    #[serde(default = "crate::editor::model::ungrouped")]
    pub combo_id: i32,
    /// Where the note sits; `z` is the time-derived depth.
    pub position: Position,
    /// Hand assignment.
    pub hand_type: HandType,
    /// Optional strike direction.
    #[serde(default)]
    pub direction: Option<Direction>,
    /// Coordinate triples of the trailing rail notes, one per note in time
    /// order. Empty means the note is not a rail leader.
    #[serde(default, deserialize_with = "crate::util::null_as_default")]
    pub segments: Vec<Position>,
}

impl GameNote {
    /// Whether this note heads a rail.
    #[must_use]
    pub fn is_rail_leader(&self) -> bool {
        !self.segments.is_empty()
    }
}

/// A timed slide modifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Slide {
    /// When the slide fires.
    pub time: RawTime,
    /// Hand type the slide maps to.
    pub hand_type: HandType,
    /// Whether the editor had initialized the slide.
    #[serde(default)]
    pub initialized: bool,
}

/// A timed drum hit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Drum {
    /// When the drum fires.
    pub time: RawTime,
    /// Hand type the drum maps to.
    pub hand_type: HandType,
    /// Whether the editor had initialized the drum.
    #[serde(default)]
    pub initialized: bool,
}

/// A named time marker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Bookmark {
    /// Where the marker sits.
    pub time: RawTime,
    /// Marker label.
    pub name: String,
}

/// The game-side chart document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Chart {
    /// Song title.
    pub name: Option<String>,
    /// Song artist.
    pub author: Option<String>,
    /// Artwork file name.
    pub artwork: Option<String>,
    /// Base64-encoded artwork payload.
    pub artwork_bytes: Option<String>,
    /// Audio clip name.
    pub audio_name: Option<String>,
    /// Base64-encoded audio payload.
    pub audio_data: Option<String>,
    /// Audio sample rate in hertz.
    pub audio_frequency: u32,
    /// Audio channel count.
    pub audio_channels: u32,
    /// Beats per minute; must be positive to convert.
    #[serde(rename = "BPM")]
    pub bpm: f64,
    /// Milliseconds between audio start and the first beat.
    pub offset: f64,
    /// Source file path, if the chart has one.
    pub file_path: Option<String>,
    /// Whether the chart is restricted to admin accounts.
    pub is_admin_only: bool,
    /// Version of the editor that wrote the chart.
    pub editor_version: Option<String>,
    /// Chart author.
    pub beatmapper: Option<String>,
    /// Display name of the custom tier.
    pub custom_difficulty_name: Option<String>,
    /// Playback speed multiplier of the custom tier.
    pub custom_difficulty_speed: f64,
    /// Free-form search tags.
    pub tags: Vec<String>,
    /// Notes per tier, keyed by raw milliseconds.
    #[serde(rename = "Track")]
    pub notes: PerTier<TimeMap<RawTime, Vec<GameNote>>>,
    /// Slides per tier.
    pub slides: PerTier<Vec<Slide>>,
    /// Effect trigger times per tier.
    pub effects: PerTier<Vec<RawTime>>,
    /// Jump trigger times per tier.
    pub jumps: PerTier<Vec<RawTime>>,
    /// Crouch trigger times per tier.
    pub crouchs: PerTier<Vec<RawTime>>,
    /// Light trigger times per tier.
    pub lights: PerTier<Vec<RawTime>>,
    /// Drum hits per tier.
    pub drums: PerTier<Vec<Drum>>,
    /// Named time markers.
    pub bookmarks: Vec<Bookmark>,
}

impl Default for Chart {
    fn default() -> Self {
        Self {
            name: None,
            author: None,
            artwork: None,
            artwork_bytes: None,
            audio_name: None,
            audio_data: None,
            audio_frequency: 44_100,
            audio_channels: 2,
            bpm: 120.0,
            offset: 0.0,
            file_path: None,
            is_admin_only: false,
            editor_version: None,
            beatmapper: None,
            custom_difficulty_name: None,
            custom_difficulty_speed: 1.0,
            tags: Vec::new(),
            notes: PerTier::default(),
            slides: PerTier::default(),
            effects: PerTier::default(),
            jumps: PerTier::default(),
            crouchs: PerTier::default(),
            lights: PerTier::default(),
            drums: PerTier::default(),
            bookmarks: Vec::new(),
        }
    }
}
