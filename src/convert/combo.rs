//! Combo group reconstruction.
//!
//! Combo ids are not stored in either document; they are derived after the
//! flat notes and the rail leaders of a tier merge. A combo group is a run
//! of consecutive special-hand-type notes sitting alone on their time
//! slots.

use std::collections::BTreeMap;

use crate::editor::model::{EditorNote, HandType};
use crate::game::GameNote;

/// A note that can carry a combo group id.
pub trait ComboNote {
    /// Hand type of the note.
    fn hand_type(&self) -> HandType;

    /// Stamps the combo group id.
    fn set_combo_id(&mut self, id: i32);
}

impl ComboNote for EditorNote {
    fn hand_type(&self) -> HandType {
        self.hand_type
    }

    fn set_combo_id(&mut self, id: i32) {
        self.combo_id = id;
    }
}

impl ComboNote for GameNote {
    fn hand_type(&self) -> HandType {
        self.hand_type
    }

    fn set_combo_id(&mut self, id: i32) {
        self.combo_id = id;
    }
}

/// Walks the time slots in ascending order, stamping incrementing group
/// ids onto runs of consecutive special notes.
///
/// Only slots holding exactly one note participate; a slot with
/// simultaneous notes never receives an id and breaks the current run.
pub fn assign_combo_ids<K: Ord, N: ComboNote>(slots: &mut BTreeMap<K, Vec<N>>) {
    let mut next_id: i32 = 0;
    let mut run_id: Option<i32> = None;
    for notes in slots.values_mut() {
        match notes.as_mut_slice() {
            [note] if note.hand_type().is_special() => {
                let id = run_id.unwrap_or_else(|| {
                    let id = next_id;
                    next_id += 1;
                    id
                });
                note.set_combo_id(id);
                run_id = Some(id);
            }
            _ => run_id = None,
        }
    }
}
