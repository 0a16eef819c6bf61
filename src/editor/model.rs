//! Definitions of the editor chart schema.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::util::TimeMap;

use super::rail::Rail;
use super::time::TimeWrapper;

/// One of the six difficulty tiers of a chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Tier {
    /// The entry-level tier.
    Easy,
    /// The standard tier.
    Normal,
    /// The challenging tier.
    Hard,
    /// The advanced tier.
    Expert,
    /// The top fixed tier.
    Master,
    /// The freely-named tier with its own playback speed.
    Custom,
}

impl Tier {
    /// All tiers, in ascending difficulty order.
    pub const ALL: [Self; 6] = [
        Self::Easy,
        Self::Normal,
        Self::Hard,
        Self::Expert,
        Self::Master,
        Self::Custom,
    ];
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Easy => "Easy",
            Self::Normal => "Normal",
            Self::Hard => "Hard",
            Self::Expert => "Expert",
            Self::Master => "Master",
            Self::Custom => "Custom",
        })
    }
}

/// Per-tier storage.
///
/// Every tier is always allocated; the empty value means "no content",
/// never absence. A tier missing from a serialized document deserializes
/// to the default.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(
    rename_all = "PascalCase",
    bound(deserialize = "T: serde::Deserialize<'de> + Default")
)]
pub struct PerTier<T> {
    /// Easy tier content.
    #[serde(default)]
    pub easy: T,
    /// Normal tier content.
    #[serde(default)]
    pub normal: T,
    /// Hard tier content.
    #[serde(default)]
    pub hard: T,
    /// Expert tier content.
    #[serde(default)]
    pub expert: T,
    /// Master tier content.
    #[serde(default)]
    pub master: T,
    /// Custom tier content.
    #[serde(default)]
    pub custom: T,
}

impl<T> PerTier<T> {
    /// Shared access by tier.
    #[must_use]
    pub const fn get(&self, tier: Tier) -> &T {
        match tier {
            Tier::Easy => &self.easy,
            Tier::Normal => &self.normal,
            Tier::Hard => &self.hard,
            Tier::Expert => &self.expert,
            Tier::Master => &self.master,
            Tier::Custom => &self.custom,
        }
    }

    /// Mutable access by tier.
    pub fn get_mut(&mut self, tier: Tier) -> &mut T {
        match tier {
            Tier::Easy => &mut self.easy,
            Tier::Normal => &mut self.normal,
            Tier::Hard => &mut self.hard,
            Tier::Expert => &mut self.expert,
            Tier::Master => &mut self.master,
            Tier::Custom => &mut self.custom,
        }
    }

    /// Iterates tiers with their content, in [`Tier::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = (Tier, &T)> {
        Tier::ALL.into_iter().map(move |tier| (tier, self.get(tier)))
    }
}

/// The hand assignment of a note.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HandType {
    /// Struck with the right hand.
    RightHanded,
    /// Struck with the left hand.
    LeftHanded,
    /// Special note playable with either single hand.
    OneHandSpecial,
    /// Special note requiring both hands together.
    BothHandsSpecial,
    /// Special note requiring both hands on separate targets.
    SeparateHandSpecial,
    /// Not bound to a hand.
    NoHand,
}

impl HandType {
    /// Whether this hand type participates in combo grouping.
    #[must_use]
    pub const fn is_special(self) -> bool {
        matches!(
            self,
            Self::OneHandSpecial | Self::BothHandsSpecial | Self::SeparateHandSpecial
        )
    }
}

/// A point in track space.
///
/// In the game document `z` carries the time-derived depth of the note.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 3]", into = "[f64; 3]")]
pub struct Position {
    /// Lateral coordinate.
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
    /// Depth coordinate.
    pub z: f64,
}

impl From<[f64; 3]> for Position {
    fn from([x, y, z]: [f64; 3]) -> Self {
        Self { x, y, z }
    }
}

impl From<Position> for [f64; 3] {
    fn from(position: Position) -> Self {
        [position.x, position.y, position.z]
    }
}

/// A strike direction in the track plane.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct Direction {
    /// Lateral component.
    pub x: f64,
    /// Vertical component.
    pub y: f64,
}

impl From<[f64; 2]> for Direction {
    fn from([x, y]: [f64; 2]) -> Self {
        Self { x, y }
    }
}

impl From<Direction> for [f64; 2] {
    fn from(direction: Direction) -> Self {
        [direction.x, direction.y]
    }
}

pub(crate) fn ungrouped() -> i32 {
    -1
}

/// A strikeable event in the editor chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct EditorNote {
    /// Identity of the note within its chart.
    pub id: String,
    /// Combo group id; `-1` is ungrouped.
    #[serde(default = "crate::editor::model::ungrouped")]
    pub combo_id: i32,
    /// Where the note sits.
    pub position: Position,
    /// Hand assignment.
    pub hand_type: HandType,
    /// Optional strike direction.
    #[serde(default)]
    pub direction: Option<Direction>,
}

/// The shape family of an editor slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SlideKind {
    /// Right-hand slide.
    RightHanded,
    /// Left-hand slide.
    LeftHanded,
    /// Either-hand slide.
    OneHand,
    /// Both-hands slide.
    BothHands,
    /// Separate-hands slide.
    SeparateHands,
}

impl SlideKind {
    /// The game-side hand type of this slide kind.
    #[must_use]
    pub const fn hand_type(self) -> HandType {
        match self {
            Self::RightHanded => HandType::RightHanded,
            Self::LeftHanded => HandType::LeftHanded,
            Self::OneHand => HandType::OneHandSpecial,
            Self::BothHands => HandType::BothHandsSpecial,
            Self::SeparateHands => HandType::SeparateHandSpecial,
        }
    }

    /// The slide kind for a game-side hand type; [`HandType::NoHand`] has
    /// none.
    #[must_use]
    pub const fn from_hand_type(hand_type: HandType) -> Option<Self> {
        match hand_type {
            HandType::RightHanded => Some(Self::RightHanded),
            HandType::LeftHanded => Some(Self::LeftHanded),
            HandType::OneHandSpecial => Some(Self::OneHand),
            HandType::BothHandsSpecial => Some(Self::BothHands),
            HandType::SeparateHandSpecial => Some(Self::SeparateHands),
            HandType::NoHand => None,
        }
    }
}

/// A timed slide modifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct EditorSlide {
    /// When the slide fires.
    pub time: TimeWrapper,
    /// Shape family.
    pub kind: SlideKind,
    /// Whether the editor has initialized the slide.
    #[serde(default)]
    pub initialized: bool,
}

/// The side of an editor drum hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DrumKind {
    /// Left drum.
    Left,
    /// Right drum.
    Right,
}

impl DrumKind {
    /// The game-side hand type of this drum kind.
    #[must_use]
    pub const fn hand_type(self) -> HandType {
        match self {
            Self::Left => HandType::LeftHanded,
            Self::Right => HandType::RightHanded,
        }
    }

    /// The drum kind for a game-side hand type, if one exists.
    #[must_use]
    pub const fn from_hand_type(hand_type: HandType) -> Option<Self> {
        match hand_type {
            HandType::LeftHanded => Some(Self::Left),
            HandType::RightHanded => Some(Self::Right),
            _ => None,
        }
    }
}

/// A timed drum hit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct EditorDrum {
    /// When the drum fires.
    pub time: TimeWrapper,
    /// Which drum.
    pub kind: DrumKind,
    /// Whether the editor has initialized the drum.
    #[serde(default)]
    pub initialized: bool,
}

/// A named time marker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct EditorBookmark {
    /// Where the marker sits.
    pub time: TimeWrapper,
    /// Marker label.
    pub name: String,
}

/// The editor-side chart document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct EditorChart {
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
    /// Notes per tier, keyed by quantized time.
    #[serde(rename = "Track")]
    pub notes: PerTier<TimeMap<TimeWrapper, Vec<EditorNote>>>,
    /// Rails per tier.
    pub rails: PerTier<Vec<Rail>>,
    /// Slides per tier.
    pub slides: PerTier<Vec<EditorSlide>>,
    /// Effect trigger times per tier.
    pub effects: PerTier<Vec<TimeWrapper>>,
    /// Jump trigger times per tier.
    pub jumps: PerTier<Vec<TimeWrapper>>,
    /// Crouch trigger times per tier.
    pub crouchs: PerTier<Vec<TimeWrapper>>,
    /// Light trigger times per tier.
    pub lights: PerTier<Vec<TimeWrapper>>,
    /// Drum hits per tier.
    pub drums: PerTier<Vec<EditorDrum>>,
    /// Named time markers.
    pub bookmarks: Vec<EditorBookmark>,
}

impl Default for EditorChart {
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
            rails: PerTier::default(),
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
