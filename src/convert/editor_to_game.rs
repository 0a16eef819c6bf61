//! Part: Convert `EditorChart` to `Chart`.

use crate::editor::model::{EditorChart, Tier};
use crate::editor::time::{StepGrid, TimeWrapper};
use crate::game::raw_time::RawTime;
use crate::game::{Bookmark, Chart, Drum, GameNote, Slide};

use super::combo::assign_combo_ids;
use super::rail::flatten_rail;
use super::{ConvertError, ConvertWarning, EditorToGameOutput, TierReport};

impl EditorChart {
    /// Converts this editor chart into a fresh game chart.
    ///
    /// The conversion always structurally completes: sparse tiers convert
    /// to empty collections, and problem entries are skipped with a
    /// warning and counted in the tier's report. Combo groups are derived
    /// per tier, except on [`Tier::Custom`], after flat notes and rail
    /// leaders merge.
    ///
    /// # Errors
    ///
    /// Returns [`ConvertError::InvalidBpm`] unless the BPM is finite and
    /// positive.
    pub fn to_game(&self) -> Result<EditorToGameOutput, ConvertError> {
        // The output document feeds back through the snapping grid, so an
        // unusable BPM is rejected in this direction too.
        StepGrid::new(self.bpm)?;

        let mut warnings = Vec::new();
        let mut reports = Vec::with_capacity(Tier::ALL.len());

        let mut chart = Chart {
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
                .map(|bookmark| Bookmark {
                    time: raw_time(bookmark.time),
                    name: bookmark.name.clone(),
                })
                .collect(),
            ..Chart::default()
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

            *chart.effects.get_mut(tier) = unwrap_times(self.effects.get(tier));
            *chart.jumps.get_mut(tier) = unwrap_times(self.jumps.get(tier));
            *chart.crouchs.get_mut(tier) = unwrap_times(self.crouchs.get(tier));
            *chart.lights.get_mut(tier) = unwrap_times(self.lights.get(tier));

            *chart.slides.get_mut(tier) = self
                .slides
                .get(tier)
                .iter()
                .map(|slide| Slide {
                    time: raw_time(slide.time),
                    hand_type: slide.kind.hand_type(),
                    initialized: slide.initialized,
                })
                .collect();
            report.slides = self.slides.get(tier).len();

            *chart.drums.get_mut(tier) = self
                .drums
                .get(tier)
                .iter()
                .map(|drum| Drum {
                    time: raw_time(drum.time),
                    hand_type: drum.kind.hand_type(),
                    initialized: drum.initialized,
                })
                .collect();
            report.drums = self.drums.get(tier).len();

            let destination = chart.notes.get_mut(tier);
            for (&time, notes) in self.notes.get(tier).iter() {
                let key = raw_time(time);
                for note in notes {
                    destination.entry(key).or_default().push(GameNote {
                        id: note.id.clone(),
                        combo_id: -1,
                        position: note.position,
                        hand_type: note.hand_type,
                        direction: note.direction,
                        segments: Vec::new(),
                    });
                    report.notes += 1;
                }
            }

            for rail in self.rails.get(tier) {
                match flatten_rail(rail) {
                    Some((key, leader)) => {
                        destination.entry(key).or_default().push(leader);
                        report.rails += 1;
                    }
                    None => {
                        warnings.push(ConvertWarning::EmptyRail { tier });
                        report.skipped += 1;
                    }
                }
            }

            if tier != Tier::Custom {
                assign_combo_ids(destination);
            }
            reports.push(report);
        }

        Ok(EditorToGameOutput {
            chart,
            warnings,
            reports,
        })
    }
}

fn raw_time(time: TimeWrapper) -> RawTime {
    RawTime::new(time.millis()).expect("editor chart times are finite")
}

fn unwrap_times(times: &[TimeWrapper]) -> Vec<RawTime> {
    times.iter().map(|&time| raw_time(time)).collect()
}
