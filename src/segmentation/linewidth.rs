/*!
 * Width-bounded chunk splitting.
 *
 * Greedily packs timed tokens into chunks whose rendered text never exceeds
 * the configured maximum character width. Words are never broken: a single
 * token longer than the width is emitted as its own chunk, unsplit.
 */

use crate::segmentation::timing::TimedToken;

/// Cue-sized group of tokens.
///
/// `start`/`end` hold the provisional span (first token's start, last
/// token's end) until the allocator assigns the final budgeted times.
#[derive(Debug, Clone, PartialEq)]
pub struct Chunk {
    /// Chunk text, tokens joined by single spaces
    pub text: String,
    /// Number of tokens in the chunk
    pub word_count: usize,
    /// Start time in seconds
    pub start: f64,
    /// End time in seconds
    pub end: f64,
}

/// Split a sentence unit's tokens into width-bounded chunks.
///
/// Width is counted in characters, not bytes. `None` disables width
/// splitting and the whole unit becomes one chunk.
pub fn split_width(tokens: &[TimedToken], max_width: Option<usize>) -> Vec<Chunk> {
    if tokens.is_empty() {
        return Vec::new();
    }

    let Some(width) = max_width else {
        return vec![make_chunk(tokens)];
    };

    let mut chunks = Vec::new();
    let mut chunk_start = 0;
    let mut current_len = 0;

    for (i, token) in tokens.iter().enumerate() {
        let token_len = token.text.chars().count();
        let candidate_len = if i == chunk_start {
            token_len
        } else {
            current_len + 1 + token_len
        };

        if candidate_len > width && i > chunk_start {
            chunks.push(make_chunk(&tokens[chunk_start..i]));
            chunk_start = i;
            current_len = token_len;
        } else {
            current_len = candidate_len;
        }
    }

    chunks.push(make_chunk(&tokens[chunk_start..]));
    chunks
}

fn make_chunk(tokens: &[TimedToken]) -> Chunk {
    let text = tokens
        .iter()
        .map(|t| t.text.as_str())
        .collect::<Vec<_>>()
        .join(" ");

    Chunk {
        text,
        word_count: tokens.len(),
        start: tokens[0].start,
        end: tokens[tokens.len() - 1].end,
    }
}
