/*!
 * Tests for the segmentation engine across its stages
 */

use subcue::app_config::SegmentationConfig;
use subcue::segmentation::timing::{reconcile_segment, TimingTable};
use subcue::segmentation::SegmentationEngine;
use subcue::transcript::{Segment, Transcript, Word};

use crate::common;

fn engine_with_width(max_line_width: Option<usize>) -> SegmentationEngine {
    let config = SegmentationConfig {
        max_line_width,
        ..SegmentationConfig::default()
    };
    SegmentationEngine::with_config(&config)
}

/// Test that every standard cue respects the width bound
#[test]
fn test_buildCues_withLongSegment_shouldRespectWidthBound() {
    let transcript = Transcript::new(
        Vec::new(),
        vec![Segment::new(
            "the quick brown fox jumps over the lazy dog and then some more words to force splitting",
            0.0,
            10.0,
        )],
    );

    let cues = engine_with_width(Some(26)).build_cues(&transcript);

    assert!(cues.len() > 1);
    for cue in &cues {
        assert!(
            cue.text.chars().count() <= 26 || !cue.text.contains(' '),
            "cue exceeds width and is not a single word: {:?}",
            cue.text
        );
    }
}

/// Test that concatenating cue texts reproduces the segment text exactly
#[test]
fn test_buildCues_shouldPreserveSegmentText() {
    let original = "the quick brown fox jumps over the lazy dog and then some more words to force splitting";
    let transcript = Transcript::new(Vec::new(), vec![Segment::new(original, 0.0, 10.0)]);

    let cues = engine_with_width(Some(26)).build_cues(&transcript);

    let joined = cues
        .iter()
        .map(|c| c.text.as_str())
        .collect::<Vec<_>>()
        .join(" ");
    assert_eq!(joined, original);
}

/// Test the duration floor on short non-final chunks
#[test]
fn test_buildCues_withShortFirstSentence_shouldEnforceDurationFloor() {
    let transcript = Transcript::new(
        Vec::new(),
        vec![Segment::new(
            "Go. Then we continue talking for a while longer.",
            0.0,
            4.0,
        )],
    );

    let cues = engine_with_width(Some(26)).build_cues(&transcript);

    assert_eq!(cues[0].text, "Go.");
    // One word of nine would get ~0.44 s proportionally; the floor lifts it
    assert!((cues[0].end - cues[0].start - 0.8).abs() < 1e-9);
    // The segment's last cue is clamped to the segment end
    assert!((cues.last().unwrap().end - 4.0).abs() < 1e-9);
}

/// Test that cue spans stay inside the segment budget and stay ordered
#[test]
fn test_buildCues_shouldStayWithinSegmentBudget() {
    let transcript = common::segments_only_transcript();

    let cues = engine_with_width(Some(26)).build_cues(&transcript);

    assert!(cues[0].start >= 0.0);
    for window in cues.windows(2) {
        assert!(window[0].end <= window[1].start + 1e-9);
    }
    assert!(cues.last().unwrap().end <= 7.5 + 1e-9);
}

/// Test that an abbreviation does not open a new cue
#[test]
fn test_buildCues_withAbbreviation_shouldNotSplitAfterIt() {
    let transcript = Transcript::new(
        Vec::new(),
        vec![Segment::new("Dr. Smith arrived today.", 0.0, 3.0)],
    );

    let cues = engine_with_width(Some(26)).build_cues(&transcript);

    assert_eq!(cues.len(), 1);
    assert_eq!(cues[0].text, "Dr. Smith arrived today.");
}

/// Test that an oversized single word passes through unsplit
#[test]
fn test_buildCues_withOversizedWord_shouldEmitItWhole() {
    let transcript = Transcript::new(
        Vec::new(),
        vec![Segment::new(
            "pneumonoultramicroscopicsilicovolcanoconiosis is long",
            0.0,
            3.0,
        )],
    );

    let cues = engine_with_width(Some(20)).build_cues(&transcript);

    assert_eq!(cues[0].text, "pneumonoultramicroscopicsilicovolcanoconiosis");
}

/// Test that disabling width splitting leaves sentence units whole
#[test]
fn test_buildCues_withoutWidthSplitting_shouldSplitOnSentencesOnly() {
    let transcript = Transcript::new(
        Vec::new(),
        vec![Segment::new(
            "This first sentence is much longer than any line width. Short tail.",
            0.0,
            6.0,
        )],
    );

    let cues = engine_with_width(None).build_cues(&transcript);

    assert_eq!(cues.len(), 2);
    assert_eq!(
        cues[0].text,
        "This first sentence is much longer than any line width."
    );
    assert_eq!(cues[1].text, "Short tail.");
}

/// Test that timing entries are consumed in segment traversal order
#[test]
fn test_reconcile_acrossSegments_shouldConsumeTimingsInOrder() {
    let words = vec![
        Word::new("yes", 0.1, 0.4),
        Word::new("yes", 2.1, 2.4),
    ];
    let mut table = TimingTable::from_words(&words);

    let first = reconcile_segment(&Segment::new("yes", 0.0, 1.0), &mut table);
    let second = reconcile_segment(&Segment::new("yes", 2.0, 3.0), &mut table);

    // The earlier physical occurrence goes to the earlier segment
    assert_eq!(first[0].start, 0.1);
    assert_eq!(second[0].start, 2.1);
    assert_eq!(table.remaining(), 0);
}

/// Test a zero-duration segment degrades to zero-width cues
#[test]
fn test_buildCues_withZeroDurationSegment_shouldEmitZeroWidthCues() {
    let transcript = Transcript::new(
        Vec::new(),
        vec![Segment::new("Some words here. More words follow.", 5.0, 5.0)],
    );

    let cues = engine_with_width(Some(26)).build_cues(&transcript);

    assert!(!cues.is_empty());
    for cue in &cues {
        assert_eq!(cue.start, 5.0);
        assert_eq!(cue.end, 5.0);
    }
}
