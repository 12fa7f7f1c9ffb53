/*!
 * Word grouping fallback.
 *
 * When a transcript carries word-level timings but no segment list, this
 * stage synthesizes provisional segments from the words so the standard
 * pipeline still has something to segment.
 */

use crate::transcript::{Segment, Word};

/// Silence gap that forces a new segment, in seconds
const PAUSE_SPLIT_SECS: f64 = 1.2;

/// Hard cap on words per grouped segment
const MAX_WORDS_PER_GROUP: usize = 12;

/// Group word timings into provisional segments.
///
/// A group closes on, in priority order: the last word, a word carrying
/// sentence-ending punctuation, an uppercase-initial next word (once the
/// group holds at least two words), a pause longer than `PAUSE_SPLIT_SECS`
/// before the next word, or the word cap.
pub fn group_words(words: &[Word]) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut group_start_index = 0;

    for (i, word) in words.iter().enumerate() {
        let group_len = i - group_start_index + 1;

        let closes = if i == words.len() - 1 {
            true
        } else if has_sentence_ending(&word.text) {
            true
        } else if group_len >= 2 && starts_sentence(&words[i + 1].text) {
            true
        } else if words[i + 1].start - word.end > PAUSE_SPLIT_SECS {
            true
        } else {
            group_len >= MAX_WORDS_PER_GROUP
        };

        if closes {
            let group = &words[group_start_index..=i];
            let text = group
                .iter()
                .map(|w| w.text.as_str())
                .collect::<Vec<_>>()
                .join(" ");
            segments.push(Segment::new(text, group[0].start, word.end));
            group_start_index = i + 1;
        }
    }

    segments
}

/// True when the word carries sentence-ending punctuation anywhere
fn has_sentence_ending(text: &str) -> bool {
    text.contains(['.', '!', '?'])
}

/// True when the word looks like a sentence opener: uppercase initial,
/// more than one character (filters stray "I"-like fragments and initials)
fn starts_sentence(text: &str) -> bool {
    text.chars().next().is_some_and(char::is_uppercase) && text.chars().count() > 1
}
