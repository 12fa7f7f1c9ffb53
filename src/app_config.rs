use serde::{Deserialize, Serialize};
use std::default::Default;

use crate::errors::ConfigError;

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and saving configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Output subtitle format
    #[serde(default)]
    pub format: SubtitleFormat,

    /// Segmentation config
    #[serde(default)]
    pub segmentation: SegmentationConfig,

    /// Output config
    #[serde(default)]
    pub output: OutputConfig,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Subtitle serialization format
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum SubtitleFormat {
    // @format: SubRip (indexed entries, comma decimal separator)
    #[default]
    Srt,
    // @format: WebVTT (header line, dot decimal separator)
    Vtt,
}

impl SubtitleFormat {
    // @returns: Capitalized format name
    pub fn display_name(&self) -> &str {
        match self {
            Self::Srt => "SRT",
            Self::Vtt => "VTT",
        }
    }

    // @returns: File extension without the leading dot
    pub fn extension(&self) -> &str {
        match self {
            Self::Srt => "srt",
            Self::Vtt => "vtt",
        }
    }
}

// Implement Display trait for SubtitleFormat
impl std::fmt::Display for SubtitleFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.extension())
    }
}

// Implement FromStr trait for SubtitleFormat
// Any value outside the {srt, vtt} enumeration is a configuration error,
// never a silent default.
impl std::str::FromStr for SubtitleFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, ConfigError> {
        match s.to_lowercase().as_str() {
            "srt" => Ok(Self::Srt),
            "vtt" => Ok(Self::Vtt),
            _ => Err(ConfigError::UnknownFormat(s.to_string())),
        }
    }
}

/// Segmentation engine configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct SegmentationConfig {
    /// Maximum characters per cue line; None disables width splitting
    #[serde(default = "default_max_line_width")]
    pub max_line_width: Option<usize>,

    /// Minimum duration of a non-final cue within a segment, in seconds
    #[serde(default = "default_min_cue_duration_secs")]
    pub min_cue_duration_secs: f64,

    /// Tokens that end with terminal punctuation but never close a sentence
    #[serde(default = "default_abbreviations")]
    pub abbreviations: Vec<String>,
}

impl Default for SegmentationConfig {
    fn default() -> Self {
        Self {
            max_line_width: default_max_line_width(),
            min_cue_duration_secs: default_min_cue_duration_secs(),
            abbreviations: default_abbreviations(),
        }
    }
}

/// Output artifact configuration
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct OutputConfig {
    /// Also emit the per-word raw SRT artifact
    #[serde(default)]
    pub raw_srt: bool,

    /// Also emit the plain transcript text artifact
    #[serde(default)]
    pub plain_text: bool,
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

/// Smallest accepted max line width
pub const MIN_LINE_WIDTH: usize = 20;

/// Largest accepted max line width
pub const MAX_LINE_WIDTH: usize = 100;

fn default_max_line_width() -> Option<usize> {
    Some(26)
}

fn default_min_cue_duration_secs() -> f64 {
    0.8
}

fn default_abbreviations() -> Vec<String> {
    [
        "Dr.", "Mr.", "Mrs.", "Ms.", "Prof.", "St.", "Ave.", "etc.", "vs.", "Inc.", "Ltd.", "Co.",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

impl Config {
    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<(), ConfigError> {
        // Validate line width bounds when width splitting is enabled
        if let Some(width) = self.segmentation.max_line_width {
            if !(MIN_LINE_WIDTH..=MAX_LINE_WIDTH).contains(&width) {
                return Err(ConfigError::InvalidLineWidth(width));
            }
        }

        // Validate cue duration floor
        let floor = self.segmentation.min_cue_duration_secs;
        if !floor.is_finite() || floor <= 0.0 {
            return Err(ConfigError::InvalidCueDuration(floor));
        }

        Ok(())
    }
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Config {
            format: SubtitleFormat::default(),
            segmentation: SegmentationConfig::default(),
            output: OutputConfig::default(),
            log_level: LogLevel::default(),
        }
    }
}
