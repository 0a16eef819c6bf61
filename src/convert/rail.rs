//! Flattening and rebuilding of rails across the two models.

use itertools::Itertools;

use crate::editor::model::EditorNote;
use crate::editor::rail::Rail;
use crate::editor::time::StepGrid;
use crate::game::GameNote;
use crate::game::raw_time::RawTime;

/// Flattens a rail into its leader game note.
///
/// The note carries the leader's coordinates and one segment row per
/// trailing note, in time order. Returns `None` for a rail with no notes.
#[must_use]
pub fn flatten_rail(rail: &Rail) -> Option<(RawTime, GameNote)> {
    let (leader_time, leader) = rail.leader()?;
    let segments = rail.trailing().map(|(_, note)| note.position).collect_vec();
    let note = GameNote {
        id: leader.id.clone(),
        combo_id: -1,
        position: leader.position,
        hand_type: leader.hand_type,
        direction: leader.direction,
        segments,
    };
    let time = RawTime::new(leader_time.millis()).expect("editor chart times are finite");
    Some((time, note))
}

/// Rebuilds a rail from a segmented leader note.
///
/// Trailing timestamps are derived, not recovered: only the leader time
/// and the BPM survive flattening, so trailing note `i` lands one grid
/// step after its predecessor, snapped onto the grid. Coordinates are
/// exact. Returns `None` when the note carries no segments, which means
/// it is not a rail.
#[must_use]
pub fn rebuild_rail(time: RawTime, leader: &GameNote, grid: &StepGrid) -> Option<Rail> {
    if leader.segments.is_empty() {
        return None;
    }
    let mut rail = Rail::new();
    rail.insert(
        grid.snap(time.millis()),
        EditorNote {
            id: leader.id.clone(),
            combo_id: -1,
            position: leader.position,
            hand_type: leader.hand_type,
            direction: leader.direction,
        },
    );
    let step = grid.ms_per_step();
    for (index, &position) in leader.segments.iter().enumerate() {
        let millis = time.millis() + (index as f64 + 1.0) * step;
        rail.insert(
            grid.snap(millis),
            EditorNote {
                id: format!("{}-{}", leader.id, index + 1),
                combo_id: -1,
                position,
                hand_type: leader.hand_type,
                direction: None,
            },
        );
    }
    Some(rail)
}

#[cfg(test)]
mod tests {
    use crate::editor::model::{HandType, Position};
    use crate::editor::time::{StepGrid, TimeWrapper};
    use crate::game::GameNote;
    use crate::game::raw_time::RawTime;

    use super::{flatten_rail, rebuild_rail};

    fn position(x: f64) -> Position {
        Position { x, y: 1.0, z: 0.0 }
    }

    #[test]
    fn empty_segments_are_not_a_rail() {
        let grid = StepGrid::new(120.0).unwrap();
        let leader = GameNote {
            id: "n".into(),
            combo_id: -1,
            position: position(0.0),
            hand_type: HandType::RightHanded,
            direction: None,
            segments: vec![],
        };
        assert!(rebuild_rail(RawTime::new(1000.0).unwrap(), &leader, &grid).is_none());
    }

    #[test]
    fn rebuilt_trailing_notes_land_one_step_apart() {
        let grid = StepGrid::new(120.0).unwrap();
        let leader = GameNote {
            id: "lead".into(),
            combo_id: -1,
            position: position(0.0),
            hand_type: HandType::LeftHanded,
            direction: None,
            segments: vec![position(0.5), position(1.0)],
        };

        let rail = rebuild_rail(RawTime::new(1000.0).unwrap(), &leader, &grid).unwrap();

        assert_eq!(rail.len(), 3);
        let times: Vec<TimeWrapper> = rail.iter().map(|(time, _)| time).collect();
        assert_eq!(times[0], TimeWrapper::new(1000.0));
        assert_eq!(times[1], TimeWrapper::new(1007.8125));
        assert_eq!(times[2], TimeWrapper::new(1015.625));

        let (_, flattened) = flatten_rail(&rail).unwrap();
        assert_eq!(flattened.segments, leader.segments);
    }
}
