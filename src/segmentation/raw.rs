/*!
 * Raw cue building.
 *
 * Diagnostic bypass path: one cue per transcribed word, using precise word
 * timestamps when available, or an even subdivision of each segment's
 * duration when only segment-level timing exists.
 */

use crate::cue::Cue;
use crate::transcript::Transcript;

/// Build the raw per-word cue list for a whole transcript.
///
/// Cues are numbered sequentially from 1 across the transcript regardless
/// of which timing source produced them.
pub fn build_raw_cues(transcript: &Transcript) -> Vec<Cue> {
    let mut cues = Vec::new();

    if !transcript.words.is_empty() {
        for word in &transcript.words {
            cues.push(Cue::new(
                cues.len() + 1,
                word.start,
                word.end,
                word.text.clone(),
            ));
        }
        return cues;
    }

    for segment in &transcript.segments {
        let tokens: Vec<&str> = segment.text.split_whitespace().collect();
        if tokens.is_empty() {
            continue;
        }

        let word_duration = segment.duration() / tokens.len() as f64;
        for (i, token) in tokens.iter().enumerate() {
            let start = segment.start + i as f64 * word_duration;
            cues.push(Cue::new(
                cues.len() + 1,
                start,
                start + word_duration,
                (*token).to_string(),
            ));
        }
    }

    cues
}
