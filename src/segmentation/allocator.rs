/*!
 * Time-budget allocation.
 *
 * Distributes a segment's time budget across its chunks proportionally to
 * word count, with a per-cue duration floor and a hard ceiling at the
 * segment's end time.
 */

use crate::segmentation::linewidth::Chunk;
use crate::transcript::Segment;

/// Allocate final cue times for one segment's chunks, in place.
///
/// The first chunk starts at `segment.start`; the last chunk ends at or
/// before `segment.end`; chunks are time-ordered and non-overlapping. The
/// duration floor applies to every chunk except the last. A segment with
/// `end <= start` yields zero-duration chunks rather than an error.
pub fn allocate_times(chunks: &mut [Chunk], segment: &Segment, min_cue_duration: f64) {
    if chunks.is_empty() {
        return;
    }

    let segment_duration = segment.duration();
    let total_words: usize = chunks.iter().map(|c| c.word_count).sum();
    let chunk_count = chunks.len();
    let mut clock = segment.start;

    for (i, chunk) in chunks.iter_mut().enumerate() {
        let duration = if total_words > 0 {
            let word_ratio = chunk.word_count as f64 / total_words as f64;
            let mut duration = segment_duration * word_ratio;

            if i < chunk_count - 1 {
                duration = duration.max(min_cue_duration);
            }

            // Floor inflation may exhaust the budget; the remaining time is
            // clamped at zero so later chunks degrade to zero-duration cues
            duration.min((segment.end - clock).max(0.0))
        } else {
            segment_duration / chunk_count as f64
        };

        chunk.start = clock;
        chunk.end = clock + duration;
        clock = chunk.end;
    }
}
