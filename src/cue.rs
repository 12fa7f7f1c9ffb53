use std::fmt;
use std::fmt::Write as _;

use crate::app_config::SubtitleFormat;

// @module: Cue model and SRT/VTT serialization

// @struct: One subtitle display unit
#[derive(Debug, Clone, PartialEq)]
pub struct Cue {
    // @field: Sequence number, 1-based
    pub index: usize,

    // @field: Start time in seconds
    pub start: f64,

    // @field: End time in seconds
    pub end: f64,

    // @field: Cue text
    pub text: String,
}

impl Cue {
    /// Creates a new cue
    pub fn new(index: usize, start: f64, end: f64, text: String) -> Self {
        Cue {
            index,
            start,
            end,
            text,
        }
    }

    /// Convert start time to a formatted timestamp
    pub fn format_start_time(&self, fractional_separator: char) -> String {
        format_timestamp(self.start, fractional_separator)
    }

    /// Convert end time to a formatted timestamp
    pub fn format_end_time(&self, fractional_separator: char) -> String {
        format_timestamp(self.end, fractional_separator)
    }
}

// The Display form is the SRT block: index, timing line, text, blank line
impl fmt::Display for Cue {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{}", self.index)?;
        writeln!(
            f,
            "{} --> {}",
            self.format_start_time(','),
            self.format_end_time(',')
        )?;
        writeln!(f, "{}", sanitize_cue_text(&self.text))?;
        writeln!(f)
    }
}

/// Format a timestamp in seconds as HH:MM:SS?mmm, rounded to the millisecond.
/// The hour field is always present; the fractional separator is ',' for SRT
/// and '.' for VTT.
pub fn format_timestamp(seconds: f64, fractional_separator: char) -> String {
    let total_ms = (seconds.max(0.0) * 1000.0).round() as u64;

    let hours = total_ms / 3_600_000;
    let minutes = (total_ms % 3_600_000) / 60_000;
    let secs = (total_ms % 60_000) / 1_000;
    let millis = total_ms % 1_000;

    format!(
        "{:02}:{:02}:{:02}{}{:03}",
        hours, minutes, secs, fractional_separator, millis
    )
}

/// A literal "-->" inside cue text would corrupt the timing line delimiter
fn sanitize_cue_text(text: &str) -> String {
    text.replace("-->", "->")
}

/// Render cues in the requested format
pub fn render(cues: &[Cue], format: SubtitleFormat) -> String {
    match format {
        SubtitleFormat::Srt => render_srt(cues),
        SubtitleFormat::Vtt => render_vtt(cues),
    }
}

/// Render cues as SRT. An empty cue list renders as empty string content.
pub fn render_srt(cues: &[Cue]) -> String {
    let mut out = String::new();
    for cue in cues {
        // Infallible: writing into a String cannot fail
        let _ = write!(out, "{}", cue);
    }
    out
}

/// Render cues as WebVTT: header line, no index lines, dot separator.
/// An empty cue list renders as the header alone.
pub fn render_vtt(cues: &[Cue]) -> String {
    let mut out = String::from("WEBVTT\n\n");
    for cue in cues {
        let _ = writeln!(
            out,
            "{} --> {}",
            cue.format_start_time('.'),
            cue.format_end_time('.')
        );
        let _ = writeln!(out, "{}", sanitize_cue_text(&cue.text));
        let _ = writeln!(out);
    }
    out
}
