/*!
 * Word-timing reconciliation.
 *
 * Assigns a precise (start, end) to every whitespace token of a segment's
 * text by consuming unused entries from a table of word-level timings.
 * Tokens with no matching entry fall back to a proportional estimate over
 * the segment's duration.
 */

use std::collections::{HashMap, VecDeque};

use once_cell::sync::Lazy;
use regex::Regex;

use crate::transcript::{Segment, Word};

// @const: Edge punctuation stripped when building timing match keys
static EDGE_PUNCTUATION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"^[.,!?;:"()\[\]]+|[.,!?;:"()\[\]]+$"#).unwrap()
});

/// Timing span of one physical word occurrence
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WordSpan {
    /// Start time in seconds
    pub start: f64,
    /// End time in seconds
    pub end: f64,
}

/// One token of segment text with its reconciled timing
#[derive(Debug, Clone, PartialEq)]
pub struct TimedToken {
    /// Token text, punctuation included
    pub text: String,
    /// Start time in seconds
    pub start: f64,
    /// End time in seconds
    pub end: f64,
}

/// FIFO table of unconsumed word-timing entries keyed by normalized text.
///
/// A lookup removes the head entry for its key, so the same physical word is
/// never assigned to two logical occurrences. Insertion follows transcript
/// word order and consumption follows segment traversal order; both must be
/// preserved for results to be deterministic across runs.
#[derive(Debug, Default)]
pub struct TimingTable {
    entries: HashMap<String, VecDeque<WordSpan>>,
}

impl TimingTable {
    /// Build the table from the transcript's word list, in order
    pub fn from_words(words: &[Word]) -> Self {
        let mut entries: HashMap<String, VecDeque<WordSpan>> = HashMap::new();
        for word in words {
            let key = normalize_key(&word.text);
            if key.is_empty() {
                // Punctuation-only entries can never match a token key
                continue;
            }
            entries.entry(key).or_default().push_back(WordSpan {
                start: word.start,
                end: word.end,
            });
        }
        TimingTable { entries }
    }

    /// Consume the oldest unused timing entry for the given key
    pub fn consume(&mut self, key: &str) -> Option<WordSpan> {
        let queue = self.entries.get_mut(key)?;
        let span = queue.pop_front();
        if queue.is_empty() {
            self.entries.remove(key);
        }
        span
    }

    /// Number of timing entries not yet consumed
    pub fn remaining(&self) -> usize {
        self.entries.values().map(VecDeque::len).sum()
    }
}

/// Strip leading and trailing punctuation to obtain the timing match key
pub fn normalize_key(token: &str) -> String {
    EDGE_PUNCTUATION.replace_all(token.trim(), "").to_string()
}

/// Reconcile one segment's text against the timing table.
///
/// Returns one timed token per whitespace token of the segment text, in
/// order. Matched tokens carry the exact span from the table; the rest are
/// estimated by evenly dividing the segment duration across its tokens, so
/// an all-estimated segment covers the full span with no gaps.
pub fn reconcile_segment(segment: &Segment, table: &mut TimingTable) -> Vec<TimedToken> {
    let tokens: Vec<&str> = segment.text.split_whitespace().collect();
    if tokens.is_empty() {
        return Vec::new();
    }

    let word_duration = segment.duration() / tokens.len() as f64;

    tokens
        .iter()
        .enumerate()
        .map(|(index, token)| {
            let key = normalize_key(token);
            let matched = if key.is_empty() {
                None
            } else {
                table.consume(&key)
            };

            match matched {
                Some(span) => TimedToken {
                    text: (*token).to_string(),
                    start: span.start,
                    end: span.end,
                },
                None => {
                    let start = segment.start + index as f64 * word_duration;
                    TimedToken {
                        text: (*token).to_string(),
                        start,
                        end: start + word_duration,
                    }
                }
            }
        })
        .collect()
}
