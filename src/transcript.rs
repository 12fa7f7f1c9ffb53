use std::fmt;
use log::{debug, warn};
use serde_json::Value;

use crate::errors::TranscriptError;

// @module: Canonical transcript model and normalization

// @struct: Single transcribed word with precise timing
#[derive(Debug, Clone, PartialEq)]
pub struct Word {
    // @field: Word text as transcribed
    pub text: String,

    // @field: Start time in seconds
    pub start: f64,

    // @field: End time in seconds
    pub end: f64,
}

impl Word {
    /// Creates a new word timing entry
    pub fn new(text: impl Into<String>, start: f64, end: f64) -> Self {
        Word {
            text: text.into(),
            start,
            end,
        }
    }
}

// @struct: Contiguous span of transcribed text
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    // @field: Segment text as transcribed
    pub text: String,

    // @field: Start time in seconds
    pub start: f64,

    // @field: End time in seconds
    pub end: f64,
}

impl Segment {
    /// Creates a new segment
    pub fn new(text: impl Into<String>, start: f64, end: f64) -> Self {
        Segment {
            text: text.into(),
            start,
            end,
        }
    }

    /// Segment duration in seconds, clamped at zero for noisy upstream timing
    pub fn duration(&self) -> f64 {
        (self.end - self.start).max(0.0)
    }
}

/// Canonical transcript: two ordered sequences normalized from whatever
/// shape the transcription service returned. Either sequence may be empty;
/// no later stage branches on the input shape again.
#[derive(Debug, Clone, Default)]
pub struct Transcript {
    /// Word-level timing entries, in transcript order
    pub words: Vec<Word>,

    /// Segment-level entries, in transcript order
    pub segments: Vec<Segment>,
}

impl Transcript {
    /// Build a transcript from already-typed parts. Segments that are empty
    /// after trimming are dropped here so the engine never sees them.
    pub fn new(words: Vec<Word>, segments: Vec<Segment>) -> Self {
        let segments = segments
            .into_iter()
            .filter(|s| !s.text.trim().is_empty())
            .collect();
        Transcript { words, segments }
    }

    /// Parse a transcript from a JSON document.
    ///
    /// Only the JSON syntax itself can fail here; shape mismatches inside a
    /// syntactically valid document degrade to empty sequences.
    pub fn from_json_str(content: &str) -> Result<Self, TranscriptError> {
        let value: Value = serde_json::from_str(content)?;
        Ok(Self::from_value(&value))
    }

    /// Normalize an arbitrary transcript value.
    ///
    /// The value may expose a `words` array, a `segments` array, neither, or
    /// both. Word entries carry their text under `word` (hosted-API shape) or
    /// `text`. Absent, null, or malformed data yields empty sequences - this
    /// function is total over any JSON input.
    pub fn from_value(value: &Value) -> Self {
        let words = normalize_words(value);
        let segments = normalize_segments(value);

        debug!(
            "Normalized transcript: {} word timing(s), {} segment(s)",
            words.len(),
            segments.len()
        );

        Transcript { words, segments }
    }

    /// True when the transcript carries no usable data at all
    pub fn is_empty(&self) -> bool {
        self.words.is_empty() && self.segments.is_empty()
    }

    /// Plain transcript text: one line per segment, trimmed
    pub fn plain_text(&self) -> String {
        let mut out = String::new();
        for segment in &self.segments {
            out.push_str(segment.text.trim());
            out.push('\n');
        }
        out
    }
}

impl fmt::Display for Transcript {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Transcript")?;
        writeln!(f, "Words: {}", self.words.len())?;
        writeln!(f, "Segments: {}", self.segments.len())?;
        Ok(())
    }
}

/// Extract word timing entries from the `words` array, if any
fn normalize_words(value: &Value) -> Vec<Word> {
    let Some(entries) = value.get("words").and_then(Value::as_array) else {
        return Vec::new();
    };

    let mut words = Vec::with_capacity(entries.len());
    for (i, entry) in entries.iter().enumerate() {
        // Hosted APIs put word text under "word"; some local pipelines use "text"
        let text = entry
            .get("word")
            .and_then(Value::as_str)
            .or_else(|| entry.get("text").and_then(Value::as_str));

        let start = entry.get("start").and_then(Value::as_f64);
        let end = entry.get("end").and_then(Value::as_f64);

        match (text, start, end) {
            (Some(text), Some(start), Some(end)) => {
                let trimmed = text.trim();
                if trimmed.is_empty() {
                    warn!("Skipping word entry {} with empty text", i);
                    continue;
                }
                words.push(Word::new(trimmed, start, end));
            }
            _ => {
                warn!("Skipping malformed word entry {}", i);
            }
        }
    }

    words
}

/// Extract segment entries from the `segments` array, if any
fn normalize_segments(value: &Value) -> Vec<Segment> {
    let Some(entries) = value.get("segments").and_then(Value::as_array) else {
        return Vec::new();
    };

    let mut segments = Vec::with_capacity(entries.len());
    for (i, entry) in entries.iter().enumerate() {
        let text = entry.get("text").and_then(Value::as_str);
        let start = entry.get("start").and_then(Value::as_f64);
        let end = entry.get("end").and_then(Value::as_f64);

        match (text, start, end) {
            (Some(text), Some(start), Some(end)) => {
                let trimmed = text.trim();
                if trimmed.is_empty() {
                    // Empty segments are dropped here so no downstream
                    // ratio ever divides by a zero token count
                    continue;
                }
                segments.push(Segment::new(trimmed, start, end));
            }
            _ => {
                warn!("Skipping malformed segment entry {}", i);
            }
        }
    }

    segments
}
