/*!
 * Pipeline orchestration.
 *
 * Runs reconciliation, sentence splitting, width splitting and time
 * allocation over every segment of a transcript, in original order, and
 * numbers the resulting cues sequentially.
 */

use std::collections::HashSet;

use log::debug;

use crate::app_config::SegmentationConfig;
use crate::cue::Cue;
use crate::segmentation::allocator::allocate_times;
use crate::segmentation::grouping::group_words;
use crate::segmentation::linewidth::split_width;
use crate::segmentation::sentence::split_sentences;
use crate::segmentation::timing::{reconcile_segment, TimingTable};
use crate::transcript::{Segment, Transcript};

/// Segmentation engine for one transcript at a time.
///
/// Holds only immutable configuration; every intermediate structure lives
/// for the duration of a single `build_cues` call. Segments are processed
/// strictly in original order because timing-table consumption is
/// order-sensitive.
pub struct SegmentationEngine {
    max_line_width: Option<usize>,
    min_cue_duration: f64,
    abbreviations: HashSet<String>,
}

impl SegmentationEngine {
    /// Create an engine with default configuration
    pub fn new() -> Self {
        Self::with_config(&SegmentationConfig::default())
    }

    /// Create an engine from a segmentation configuration
    pub fn with_config(config: &SegmentationConfig) -> Self {
        SegmentationEngine {
            max_line_width: config.max_line_width,
            min_cue_duration: config.min_cue_duration_secs,
            abbreviations: config.abbreviations.iter().cloned().collect(),
        }
    }

    /// Build the standard cue list for a transcript.
    ///
    /// An empty transcript yields an empty cue list, never an error.
    pub fn build_cues(&self, transcript: &Transcript) -> Vec<Cue> {
        let mut table = TimingTable::from_words(&transcript.words);

        // No segment list: fall back to grouping the word timings into
        // provisional segments
        let grouped;
        let segments: &[Segment] =
            if transcript.segments.is_empty() && !transcript.words.is_empty() {
                grouped = group_words(&transcript.words);
                debug!("No segments in transcript, grouped {} word(s) into {}", transcript.words.len(), grouped.len());
                &grouped
            } else {
                &transcript.segments
            };

        let mut cues = Vec::new();
        for segment in segments {
            let tokens = reconcile_segment(segment, &mut table);
            if tokens.is_empty() {
                continue;
            }

            let mut chunks = Vec::new();
            for unit in split_sentences(&tokens, &self.abbreviations) {
                chunks.extend(split_width(&tokens[unit], self.max_line_width));
            }

            allocate_times(&mut chunks, segment, self.min_cue_duration);

            for chunk in chunks {
                cues.push(Cue::new(cues.len() + 1, chunk.start, chunk.end, chunk.text));
            }
        }

        debug!(
            "Built {} cue(s) from {} segment(s), {} timing entr(ies) unconsumed",
            cues.len(),
            segments.len(),
            table.remaining()
        );

        cues
    }
}

impl Default for SegmentationEngine {
    fn default() -> Self {
        Self::new()
    }
}
