/*!
 * Tests for application configuration functionality
 */

use std::str::FromStr;
use anyhow::Result;
use subcue::app_config::{Config, SubtitleFormat, MAX_LINE_WIDTH, MIN_LINE_WIDTH};
use subcue::errors::ConfigError;

/// Test default configuration values
#[test]
fn test_default_config_shouldHaveDocumentedDefaults() {
    let config = Config::default();

    assert_eq!(config.format, SubtitleFormat::Srt);
    assert_eq!(config.segmentation.max_line_width, Some(26));
    assert!((config.segmentation.min_cue_duration_secs - 0.8).abs() < f64::EPSILON);
    assert!(config.segmentation.abbreviations.contains(&"Dr.".to_string()));
    assert!(config.segmentation.abbreviations.contains(&"etc.".to_string()));
    assert!(!config.output.raw_srt);
    assert!(!config.output.plain_text);
}

/// Test that the default configuration validates
#[test]
fn test_validate_withDefaultConfig_shouldPass() -> Result<()> {
    let config = Config::default();
    config.validate()?;
    Ok(())
}

/// Test line width validation bounds
#[test]
fn test_validate_withLineWidthOutOfRange_shouldFail() {
    let mut config = Config::default();

    config.segmentation.max_line_width = Some(MIN_LINE_WIDTH - 1);
    assert!(matches!(
        config.validate(),
        Err(ConfigError::InvalidLineWidth(_))
    ));

    config.segmentation.max_line_width = Some(MAX_LINE_WIDTH + 1);
    assert!(matches!(
        config.validate(),
        Err(ConfigError::InvalidLineWidth(_))
    ));

    // Boundary values are accepted
    config.segmentation.max_line_width = Some(MIN_LINE_WIDTH);
    assert!(config.validate().is_ok());
    config.segmentation.max_line_width = Some(MAX_LINE_WIDTH);
    assert!(config.validate().is_ok());
}

/// Test that disabling width splitting skips the range check
#[test]
fn test_validate_withNoLineWidth_shouldPass() {
    let mut config = Config::default();
    config.segmentation.max_line_width = None;

    assert!(config.validate().is_ok());
}

/// Test cue duration validation
#[test]
fn test_validate_withBadCueDuration_shouldFail() {
    let mut config = Config::default();

    config.segmentation.min_cue_duration_secs = 0.0;
    assert!(matches!(
        config.validate(),
        Err(ConfigError::InvalidCueDuration(_))
    ));

    config.segmentation.min_cue_duration_secs = f64::NAN;
    assert!(matches!(
        config.validate(),
        Err(ConfigError::InvalidCueDuration(_))
    ));
}

/// Test format parsing from strings
#[test]
fn test_subtitleFormat_fromStr_withKnownValues_shouldParse() -> Result<()> {
    assert_eq!(SubtitleFormat::from_str("srt")?, SubtitleFormat::Srt);
    assert_eq!(SubtitleFormat::from_str("vtt")?, SubtitleFormat::Vtt);
    assert_eq!(SubtitleFormat::from_str("SRT")?, SubtitleFormat::Srt);
    Ok(())
}

/// Test that an unknown format is a configuration error, not a default
#[test]
fn test_subtitleFormat_fromStr_withUnknownValue_shouldFail() {
    let result = SubtitleFormat::from_str("ass");

    match result {
        Err(ConfigError::UnknownFormat(requested)) => assert_eq!(requested, "ass"),
        other => panic!("Expected UnknownFormat error, got {:?}", other),
    }
}

/// Test config serialization round trip
#[test]
fn test_config_serde_shouldRoundTrip() -> Result<()> {
    let mut config = Config::default();
    config.format = SubtitleFormat::Vtt;
    config.segmentation.max_line_width = Some(42);
    config.output.raw_srt = true;

    let json = serde_json::to_string_pretty(&config)?;
    let loaded: Config = serde_json::from_str(&json)?;

    assert_eq!(loaded.format, SubtitleFormat::Vtt);
    assert_eq!(loaded.segmentation.max_line_width, Some(42));
    assert!(loaded.output.raw_srt);
    Ok(())
}

/// Test that a minimal config file fills in defaults
#[test]
fn test_config_serde_withMinimalJson_shouldUseDefaults() -> Result<()> {
    let loaded: Config = serde_json::from_str("{}")?;

    assert_eq!(loaded.format, SubtitleFormat::Srt);
    assert_eq!(loaded.segmentation.max_line_width, Some(26));
    Ok(())
}

/// Test format display names and extensions
#[test]
fn test_subtitleFormat_displayAndExtension_shouldMatch() {
    assert_eq!(SubtitleFormat::Srt.display_name(), "SRT");
    assert_eq!(SubtitleFormat::Vtt.display_name(), "VTT");
    assert_eq!(SubtitleFormat::Srt.extension(), "srt");
    assert_eq!(SubtitleFormat::Vtt.to_string(), "vtt");
}
