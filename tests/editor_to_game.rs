//! Conversion tests from the editor document to the game document.

use notechart_rs::editor::prelude::*;
use notechart_rs::game::raw_time::RawTime;
use pretty_assertions::assert_eq;

fn note(id: &str, hand_type: HandType) -> EditorNote {
    EditorNote {
        id: id.into(),
        combo_id: -1,
        position: Position {
            x: 0.5,
            y: 1.0,
            z: 0.0,
        },
        hand_type,
        direction: None,
    }
}

#[test]
fn converts_metadata_notes_and_rails() {
    let mut editor = EditorChart {
        name: Some("Test Song".into()),
        author: Some("Test Artist".into()),
        beatmapper: Some("Test Mapper".into()),
        bpm: 120.0,
        offset: 50.0,
        is_admin_only: true,
        tags: vec!["test".into()],
        ..EditorChart::default()
    };
    editor
        .notes
        .get_mut(Tier::Hard)
        .insert(TimeWrapper::new(1000.0), vec![note("n1", HandType::RightHanded)]);

    let mut rail = Rail::new();
    rail.insert(TimeWrapper::new(2000.0), note("r1", HandType::LeftHanded));
    rail.insert(
        TimeWrapper::new(2007.8125),
        EditorNote {
            position: Position {
                x: 1.5,
                y: 0.25,
                z: 0.0,
            },
            ..note("r2", HandType::LeftHanded)
        },
    );
    editor.rails.get_mut(Tier::Hard).push(rail);

    let output = editor.to_game().unwrap();

    assert_eq!(output.chart.name.as_deref(), Some("Test Song"));
    assert_eq!(output.chart.author.as_deref(), Some("Test Artist"));
    assert_eq!(output.chart.beatmapper.as_deref(), Some("Test Mapper"));
    assert_eq!(output.chart.bpm, 120.0);
    assert_eq!(output.chart.offset, 50.0);
    assert!(output.chart.is_admin_only);
    assert_eq!(output.chart.tags, vec!["test".to_string()]);
    assert!(output.warnings.is_empty());

    let notes = output.chart.notes.get(Tier::Hard);
    let flat = &notes[&RawTime::new(1000.0).unwrap()];
    assert_eq!(flat.len(), 1);
    assert_eq!(flat[0].id, "n1");
    assert!(flat[0].segments.is_empty());

    let leader = &notes[&RawTime::new(2000.0).unwrap()][0];
    assert_eq!(leader.id, "r1");
    assert!(leader.is_rail_leader());
    assert_eq!(
        leader.segments,
        vec![Position {
            x: 1.5,
            y: 0.25,
            z: 0.0
        }]
    );

    let report = output.reports[2];
    assert_eq!(report.tier, Tier::Hard);
    assert_eq!(report.notes, 1);
    assert_eq!(report.rails, 1);
    assert_eq!(report.skipped, 0);
}

#[test]
fn absent_metadata_leaves_destination_defaults() {
    let editor = EditorChart::default();
    let output = editor.to_game().unwrap();
    assert_eq!(output.chart.name, None);
    assert_eq!(output.chart.audio_frequency, 44_100);
    assert_eq!(output.chart.custom_difficulty_speed, 1.0);
}

#[test]
fn unwraps_slides_drums_and_time_lists() {
    let mut editor = EditorChart::default();
    editor.slides.get_mut(Tier::Expert).push(EditorSlide {
        time: TimeWrapper::new(500.0),
        kind: SlideKind::BothHands,
        initialized: true,
    });
    editor.drums.get_mut(Tier::Expert).push(EditorDrum {
        time: TimeWrapper::new(750.0),
        kind: DrumKind::Left,
        initialized: false,
    });
    editor
        .effects
        .get_mut(Tier::Expert)
        .push(TimeWrapper::new(250.0));
    editor.bookmarks.push(EditorBookmark {
        time: TimeWrapper::new(125.0),
        name: "drop".into(),
    });

    let output = editor.to_game().unwrap();

    let slides = output.chart.slides.get(Tier::Expert);
    assert_eq!(slides.len(), 1);
    assert_eq!(slides[0].time.millis(), 500.0);
    assert_eq!(slides[0].hand_type, HandType::BothHandsSpecial);
    assert!(slides[0].initialized);

    let drums = output.chart.drums.get(Tier::Expert);
    assert_eq!(drums.len(), 1);
    assert_eq!(drums[0].hand_type, HandType::LeftHanded);

    assert_eq!(output.chart.effects.get(Tier::Expert)[0].millis(), 250.0);
    assert!(output.chart.effects.get(Tier::Easy).is_empty());

    assert_eq!(output.chart.bookmarks.len(), 1);
    assert_eq!(output.chart.bookmarks[0].time.millis(), 125.0);
    assert_eq!(output.chart.bookmarks[0].name, "drop");
}

#[test]
fn reconstructs_combo_groups_per_tier() {
    let mut editor = EditorChart::default();
    let track = editor.notes.get_mut(Tier::Master);
    let sequence = [
        HandType::NoHand,
        HandType::BothHandsSpecial,
        HandType::BothHandsSpecial,
        HandType::RightHanded,
        HandType::OneHandSpecial,
    ];
    for (i, hand_type) in sequence.into_iter().enumerate() {
        track.insert(
            TimeWrapper::new(1000.0 + i as f64 * 125.0),
            vec![note(&format!("n{i}"), hand_type)],
        );
    }

    let output = editor.to_game().unwrap();

    let combo_ids: Vec<i32> = output
        .chart
        .notes
        .get(Tier::Master)
        .values()
        .map(|slot| slot[0].combo_id)
        .collect();
    assert_eq!(combo_ids, vec![-1, 0, 0, -1, 1]);
}

#[test]
fn custom_tier_keeps_combo_ids_ungrouped() {
    let mut editor = EditorChart::default();
    editor.notes.get_mut(Tier::Custom).insert(
        TimeWrapper::new(1000.0),
        vec![note("n1", HandType::BothHandsSpecial)],
    );

    let output = editor.to_game().unwrap();

    let slot = output.chart.notes.get(Tier::Custom).values().next().unwrap();
    assert_eq!(slot[0].combo_id, -1);
}

#[test]
fn simultaneous_notes_never_receive_combo_ids() {
    let mut editor = EditorChart::default();
    editor.notes.get_mut(Tier::Easy).insert(
        TimeWrapper::new(1000.0),
        vec![
            note("a", HandType::OneHandSpecial),
            note("b", HandType::OneHandSpecial),
        ],
    );

    let output = editor.to_game().unwrap();

    let slot = &output.chart.notes.get(Tier::Easy)[&RawTime::new(1000.0).unwrap()];
    assert!(slot.iter().all(|note| note.combo_id == -1));
}

#[test]
fn empty_rails_are_skipped_with_a_warning() {
    let mut editor = EditorChart::default();
    editor.rails.get_mut(Tier::Normal).push(Rail::new());

    let output = editor.to_game().unwrap();

    assert_eq!(
        output.warnings,
        vec![ConvertWarning::EmptyRail { tier: Tier::Normal }]
    );
    assert_eq!(output.reports[1].skipped, 1);
    assert_eq!(output.reports[1].rails, 0);
}

#[test]
fn rejects_unusable_bpm() {
    for bpm in [0.0, -60.0, f64::NAN] {
        let editor = EditorChart {
            bpm,
            ..EditorChart::default()
        };
        assert!(matches!(
            editor.to_game(),
            Err(ConvertError::InvalidBpm(_))
        ));
    }
}
