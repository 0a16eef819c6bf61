//! Part: Convert `Chart` to `EditorChart`.

use crate::editor::model::{
    DrumKind, EditorBookmark, EditorChart, EditorDrum, EditorNote, EditorSlide, SlideKind, Tier,
};
use crate::editor::time::{StepGrid, TimeWrapper};
use crate::game::Chart;
use crate::game::raw_time::RawTime;

use super::combo::assign_combo_ids;
use super::rail::rebuild_rail;
use super::{ConvertError, ConvertWarning, GameToEditorOutput, TierReport};

impl Chart {
    /// Converts this game chart into a fresh editor chart.
    ///
    /// Every incoming note key is snapped onto the 1/64-beat grid; keys
    /// whose snapped identities collide merge into one time slot. A note
    /// carrying segments is rebuilt into a [`crate::editor::rail::Rail`]
    /// on the tier's rail list instead of entering the flat note
    /// dictionary. Combo groups are derived per tier, except on
    /// [`Tier::Custom`].
    ///
    /// # Errors
    ///
    /// Returns [`ConvertError::InvalidBpm`] unless the BPM is finite and
    /// positive.
    pub fn to_editor(&self) -> Result<GameToEditorOutput, ConvertError> {
        let grid = StepGrid::new(self.bpm)?;

        let mut warnings = Vec::new();
        let mut reports = Vec::with_capacity(Tier::ALL.len());

        let mut chart = EditorChart {
            bpm: self.bpm,
            offset: self.offset,
            is_admin_only: self.is_admin_only,
            audio_frequency: self.audio_frequency,
            audio_channels: self.audio_channels,
            custom_difficulty_speed: self.custom_difficulty_speed,
            tags: self.tags.clone(),
            bookmarks: self
                .bookmarks
                .iter()
                .map(|bookmark| EditorBookmark {
                    time: wrap_time(bookmark.time),
                    name: bookmark.name.clone(),
                })
                .collect(),
            ..EditorChart::default()
        };

        if let Some(name) = &self.name {
            chart.name = Some(name.clone());
        }
        if let Some(author) = &self.author {
            chart.author = Some(author.clone());
        }
        if let Some(artwork) = &self.artwork {
            chart.artwork = Some(artwork.clone());
        }
        if let Some(artwork_bytes) = &self.artwork_bytes {
            chart.artwork_bytes = Some(artwork_bytes.clone());
        }
        if let Some(audio_name) = &self.audio_name {
            chart.audio_name = Some(audio_name.clone());
        }
        if let Some(audio_data) = &self.audio_data {
            chart.audio_data = Some(audio_data.clone());
        }
        if let Some(file_path) = &self.file_path {
            chart.file_path = Some(file_path.clone());
        }
        if let Some(editor_version) = &self.editor_version {
            chart.editor_version = Some(editor_version.clone());
        }
        if let Some(beatmapper) = &self.beatmapper {
            chart.beatmapper = Some(beatmapper.clone());
        }
        if let Some(custom_difficulty_name) = &self.custom_difficulty_name {
            chart.custom_difficulty_name = Some(custom_difficulty_name.clone());
        }

        for tier in Tier::ALL {
            let mut report = TierReport::new(tier);

            *chart.effects.get_mut(tier) = wrap_times(self.effects.get(tier));
            *chart.jumps.get_mut(tier) = wrap_times(self.jumps.get(tier));
            *chart.crouchs.get_mut(tier) = wrap_times(self.crouchs.get(tier));
            *chart.lights.get_mut(tier) = wrap_times(self.lights.get(tier));

            let slides = chart.slides.get_mut(tier);
            for slide in self.slides.get(tier) {
                match SlideKind::from_hand_type(slide.hand_type) {
                    Some(kind) => {
                        slides.push(EditorSlide {
                            time: wrap_time(slide.time),
                            kind,
                            initialized: slide.initialized,
                        });
                        report.slides += 1;
                    }
                    None => {
                        warnings.push(ConvertWarning::UnmappableSlide { tier });
                        report.skipped += 1;
                    }
                }
            }

            let drums = chart.drums.get_mut(tier);
            for drum in self.drums.get(tier) {
                match DrumKind::from_hand_type(drum.hand_type) {
                    Some(kind) => {
                        drums.push(EditorDrum {
                            time: wrap_time(drum.time),
                            kind,
                            initialized: drum.initialized,
                        });
                        report.drums += 1;
                    }
                    None => {
                        warnings.push(ConvertWarning::UnmappableDrum { tier });
                        report.skipped += 1;
                    }
                }
            }

            let destination = chart.notes.get_mut(tier);
            let rails = chart.rails.get_mut(tier);
            for (&time, notes) in self.notes.get(tier).iter() {
                for note in notes {
                    match rebuild_rail(time, note, &grid) {
                        Some(rail) => {
                            rails.push(rail);
                            report.rails += 1;
                        }
                        None => {
                            let key = grid.snap(time.millis());
                            destination.entry(key).or_default().push(EditorNote {
                                id: note.id.clone(),
                                combo_id: -1,
                                position: note.position,
                                hand_type: note.hand_type,
                                direction: note.direction,
                            });
                            report.notes += 1;
                        }
                    }
                }
            }

            if tier != Tier::Custom {
                assign_combo_ids(destination);
            }
            reports.push(report);
        }

        Ok(GameToEditorOutput {
            chart,
            warnings,
            reports,
        })
    }
}

fn wrap_time(time: RawTime) -> TimeWrapper {
    TimeWrapper::new(time.millis())
}

fn wrap_times(times: &[RawTime]) -> Vec<TimeWrapper> {
    times.iter().map(|&time| wrap_time(time)).collect()
}
