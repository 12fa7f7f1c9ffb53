/*!
 * Sentence-boundary splitting.
 *
 * Splits a reconciled token sequence into sentence-like units at terminal
 * punctuation, skipping configured abbreviations. The final token always
 * closes a unit regardless of punctuation.
 */

use std::collections::HashSet;
use std::ops::Range;

use crate::segmentation::timing::TimedToken;

/// Punctuation that can close a sentence
const TERMINAL_PUNCTUATION: &[char] = &['.', '!', '?'];

/// Split tokens into sentence units, returned as token sub-ranges.
///
/// A boundary falls after token `i` when the token ends with terminal
/// punctuation, the next token starts with an uppercase letter, and the
/// token is not a configured abbreviation ("Dr.", "St.", ...).
pub fn split_sentences(tokens: &[TimedToken], abbreviations: &HashSet<String>) -> Vec<Range<usize>> {
    let mut units = Vec::new();
    let mut unit_start = 0;

    for (i, token) in tokens.iter().enumerate() {
        let closes = if i == tokens.len() - 1 {
            true
        } else {
            token.text.ends_with(TERMINAL_PUNCTUATION)
                && starts_uppercase(&tokens[i + 1].text)
                && !abbreviations.contains(&token.text)
        };

        if closes {
            units.push(unit_start..i + 1);
            unit_start = i + 1;
        }
    }

    units
}

fn starts_uppercase(text: &str) -> bool {
    text.chars().next().is_some_and(char::is_uppercase)
}
