//! Rail chains of the editor chart.

use std::ops::Bound;

use serde::{Deserialize, Serialize};

use crate::util::TimeMap;

use super::model::EditorNote;
use super::time::TimeWrapper;

/// A time-ordered chain of notes traversed as one continuous stroke.
///
/// The chain is an ordered map with neighbor queries; the earliest entry
/// is the leader, an invariant that holds by construction.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Rail {
    notes: TimeMap<TimeWrapper, EditorNote>,
}

impl Rail {
    /// Creates an empty rail.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of notes in the chain.
    #[must_use]
    pub fn len(&self) -> usize {
        self.notes.len()
    }

    /// Whether the chain has no notes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Adds a note to the chain, replacing any note already at `time`.
    pub fn insert(&mut self, time: TimeWrapper, note: EditorNote) {
        self.notes.insert(time, note);
    }

    /// Removes the note at `time` from the chain.
    pub fn remove(&mut self, time: TimeWrapper) -> Option<EditorNote> {
        self.notes.remove(&time)
    }

    /// The earliest note of the chain.
    #[must_use]
    pub fn leader(&self) -> Option<(TimeWrapper, &EditorNote)> {
        self.notes.iter().next().map(|(&time, note)| (time, note))
    }

    /// All notes after the leader, in time order.
    pub fn trailing(&self) -> impl Iterator<Item = (TimeWrapper, &EditorNote)> {
        self.notes.iter().skip(1).map(|(&time, note)| (time, note))
    }

    /// The note directly after `time` in the chain.
    #[must_use]
    pub fn next_after(&self, time: TimeWrapper) -> Option<(TimeWrapper, &EditorNote)> {
        self.notes
            .range((Bound::Excluded(time), Bound::Unbounded))
            .next()
            .map(|(&t, note)| (t, note))
    }

    /// The note directly before `time` in the chain.
    #[must_use]
    pub fn prev_before(&self, time: TimeWrapper) -> Option<(TimeWrapper, &EditorNote)> {
        self.notes
            .range((Bound::Unbounded, Bound::Excluded(time)))
            .next_back()
            .map(|(&t, note)| (t, note))
    }

    /// Iterates the chain in time order.
    pub fn iter(&self) -> impl Iterator<Item = (TimeWrapper, &EditorNote)> {
        self.notes.iter().map(|(&time, note)| (time, note))
    }
}

impl FromIterator<(TimeWrapper, EditorNote)> for Rail {
    fn from_iter<I: IntoIterator<Item = (TimeWrapper, EditorNote)>>(iter: I) -> Self {
        Self {
            notes: iter.into_iter().collect(),
        }
    }
}
