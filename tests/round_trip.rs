//! Round-trip properties across the two documents.

use notechart_rs::editor::prelude::*;
use notechart_rs::game::Chart;
use notechart_rs::game::raw_time::RawTime;
use pretty_assertions::assert_eq;

fn note(id: &str, hand_type: HandType, x: f64) -> EditorNote {
    EditorNote {
        id: id.into(),
        combo_id: -1,
        position: Position { x, y: 1.0, z: 0.0 },
        hand_type,
        direction: None,
    }
}

#[test]
fn snapping_is_idempotent_after_the_first_pass() {
    // Raw keys deliberately off-grid and drifted; the first game->editor
    // pass snaps them, after which every further round trip keeps the
    // derived keys.
    let mut game = Chart::default();
    let track = game.notes.get_mut(Tier::Hard);
    for (i, millis) in [1000.0, 1001.0, 1500.37, 2000.0 + 1e-7].into_iter().enumerate() {
        track.insert(
            RawTime::new(millis).unwrap(),
            vec![notechart_rs::game::GameNote {
                id: format!("n{i}"),
                combo_id: -1,
                position: Position {
                    x: 0.0,
                    y: 0.0,
                    z: 0.0,
                },
                hand_type: HandType::RightHanded,
                direction: None,
                segments: vec![],
            }],
        );
    }

    let first = game.to_editor().unwrap().chart;
    let second = first.to_game().unwrap().chart.to_editor().unwrap().chart;

    let first_keys: Vec<i64> = first
        .notes
        .get(Tier::Hard)
        .keys()
        .map(|time| time.key())
        .collect();
    let second_keys: Vec<i64> = second
        .notes
        .get(Tier::Hard)
        .keys()
        .map(|time| time.key())
        .collect();
    assert_eq!(first_keys, second_keys);
}

#[test]
fn rails_survive_a_round_trip() {
    let mut editor = EditorChart::default();
    let mut rail = Rail::new();
    rail.insert(TimeWrapper::new(2000.0), note("lead", HandType::LeftHanded, 1.0));
    rail.insert(
        TimeWrapper::new(2007.8125),
        note("t1", HandType::LeftHanded, 1.5),
    );
    rail.insert(
        TimeWrapper::new(2015.625),
        note("t2", HandType::LeftHanded, 2.0),
    );
    editor.rails.get_mut(Tier::Master).push(rail);

    let back = editor
        .to_game()
        .unwrap()
        .chart
        .to_editor()
        .unwrap()
        .chart;

    let rails = back.rails.get(Tier::Master);
    assert_eq!(rails.len(), 1);
    let rail = &rails[0];
    assert_eq!(rail.len(), 3);

    let (leader_time, leader) = rail.leader().unwrap();
    assert_eq!(leader_time, TimeWrapper::new(2000.0));
    assert!((leader.position.x - 1.0).abs() < 1e-4);

    let original = [1.5, 2.0];
    for ((_, trailing), expected) in rail.trailing().zip(original) {
        assert!((trailing.position.x - expected).abs() < 1e-4);
        assert!((trailing.position.y - 1.0).abs() < 1e-4);
    }
}

#[test]
fn bookmarks_and_slides_pass_through_both_directions() {
    let mut editor = EditorChart::default();
    editor.bookmarks.push(EditorBookmark {
        time: TimeWrapper::new(125.0),
        name: "intro".into(),
    });
    editor.slides.get_mut(Tier::Normal).push(EditorSlide {
        time: TimeWrapper::new(500.0),
        kind: SlideKind::OneHand,
        initialized: true,
    });

    let back = editor
        .to_game()
        .unwrap()
        .chart
        .to_editor()
        .unwrap()
        .chart;

    assert_eq!(back.bookmarks.len(), 1);
    assert_eq!(back.bookmarks[0].name, "intro");
    assert_eq!(back.bookmarks[0].time, TimeWrapper::new(125.0));

    let slides = back.slides.get(Tier::Normal);
    assert_eq!(slides.len(), 1);
    assert_eq!(slides[0].kind, SlideKind::OneHand);
    assert!(slides[0].initialized);
}

#[test]
fn slide_and_drum_kind_mappings_round_trip_exhaustively() {
    for kind in [
        SlideKind::RightHanded,
        SlideKind::LeftHanded,
        SlideKind::OneHand,
        SlideKind::BothHands,
        SlideKind::SeparateHands,
    ] {
        assert_eq!(SlideKind::from_hand_type(kind.hand_type()), Some(kind));
    }
    assert_eq!(SlideKind::from_hand_type(HandType::NoHand), None);

    for kind in [DrumKind::Left, DrumKind::Right] {
        assert_eq!(DrumKind::from_hand_type(kind.hand_type()), Some(kind));
    }
    assert_eq!(DrumKind::from_hand_type(HandType::NoHand), None);
}
