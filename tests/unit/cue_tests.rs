/*!
 * Tests for cue formatting and SRT/VTT serialization
 */

use std::fmt::Write;
use subcue::app_config::SubtitleFormat;
use subcue::cue::{format_timestamp, render, render_srt, render_vtt, Cue};

/// Test timestamp formatting with both separators
#[test]
fn test_formatTimestamp_withBothSeparators_shouldFormat() {
    assert_eq!(format_timestamp(5025.678, ','), "01:23:45,678");
    assert_eq!(format_timestamp(5025.678, '.'), "01:23:45.678");
}

/// Test that the hour field is always present
#[test]
fn test_formatTimestamp_withSubHourTime_shouldIncludeHours() {
    assert_eq!(format_timestamp(61.234, ','), "00:01:01,234");
    assert_eq!(format_timestamp(0.0, '.'), "00:00:00.000");
}

/// Test millisecond rounding
#[test]
fn test_formatTimestamp_shouldRoundToMillisecond() {
    assert_eq!(format_timestamp(1.0005, ','), "00:00:01,001");
    assert_eq!(format_timestamp(0.9994, ','), "00:00:00,999");
}

/// Test that negative timing noise clamps to zero instead of panicking
#[test]
fn test_formatTimestamp_withNegativeSeconds_shouldClampToZero() {
    assert_eq!(format_timestamp(-0.5, ','), "00:00:00,000");
}

/// Test the SRT block form of a single cue
#[test]
fn test_cue_display_shouldFormatSrtBlock() {
    let cue = Cue::new(1, 5.0, 10.0, "Test subtitle".to_string());
    let mut output = String::new();
    write!(output, "{}", cue).unwrap();

    assert_eq!(output, "1\n00:00:05,000 --> 00:00:10,000\nTest subtitle\n\n");
}

/// Test SRT rendering of multiple cues
#[test]
fn test_renderSrt_withTwoCues_shouldNumberAndSeparate() {
    let cues = vec![
        Cue::new(1, 0.0, 1.5, "First".to_string()),
        Cue::new(2, 1.5, 3.0, "Second".to_string()),
    ];

    let srt = render_srt(&cues);

    assert_eq!(
        srt,
        "1\n00:00:00,000 --> 00:00:01,500\nFirst\n\n2\n00:00:01,500 --> 00:00:03,000\nSecond\n\n"
    );
}

/// Test VTT rendering: header, dot separator, no index lines
#[test]
fn test_renderVtt_withTwoCues_shouldUseVttConventions() {
    let cues = vec![
        Cue::new(1, 0.0, 1.5, "First".to_string()),
        Cue::new(2, 1.5, 3.0, "Second".to_string()),
    ];

    let vtt = render_vtt(&cues);

    assert!(vtt.starts_with("WEBVTT\n\n"));
    assert!(vtt.contains("00:00:00.000 --> 00:00:01.500\nFirst\n"));
    assert!(!vtt.contains("\n1\n"));
    assert!(!vtt.contains(','));
}

/// Test empty documents: SRT is empty content, VTT is header-only
#[test]
fn test_render_withNoCues_shouldEmitEmptyDocuments() {
    assert_eq!(render_srt(&[]), "");
    assert_eq!(render_vtt(&[]), "WEBVTT\n\n");
}

/// Test that a literal arrow in cue text cannot corrupt the timing line
#[test]
fn test_render_withArrowInText_shouldSanitize() {
    let cues = vec![Cue::new(1, 0.0, 1.0, "go --> stop".to_string())];

    let srt = render_srt(&cues);
    let vtt = render_vtt(&cues);

    assert!(srt.contains("go -> stop"));
    assert!(vtt.contains("go -> stop"));
    // The only remaining arrows are timing delimiters
    assert_eq!(srt.matches("-->").count(), 1);
    assert_eq!(vtt.matches("-->").count(), 1);
}

/// Test the format dispatch entry point
#[test]
fn test_render_shouldDispatchOnFormat() {
    let cues = vec![Cue::new(1, 0.0, 1.0, "text".to_string())];

    assert_eq!(render(&cues, SubtitleFormat::Srt), render_srt(&cues));
    assert_eq!(render(&cues, SubtitleFormat::Vtt), render_vtt(&cues));
}
