// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]
// Add other lints specific to this module that you want to allow but not auto-fix

use anyhow::{Result, anyhow, Context};
use log::{warn, LevelFilter, Log, Metadata, Record, Level, SetLoggerError};
use std::path::{Path, PathBuf};
use std::io::Write;
use std::fs::File;
use std::io::BufReader;
use clap::{Parser, ValueEnum, CommandFactory, Subcommand};
use clap_complete::{generate, Shell};

use crate::app_config::{Config, SubtitleFormat};
use app_controller::Controller;

mod app_config;
mod app_controller;
mod cue;
mod errors;
mod file_utils;
mod segmentation;
mod transcript;

/// CLI Wrapper for SubtitleFormat to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliSubtitleFormat {
    Srt,
    Vtt,
}

impl From<CliSubtitleFormat> for SubtitleFormat {
    fn from(cli_format: CliSubtitleFormat) -> Self {
        match cli_format {
            CliSubtitleFormat::Srt => SubtitleFormat::Srt,
            CliSubtitleFormat::Vtt => SubtitleFormat::Vtt,
        }
    }
}

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for app_config::LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => app_config::LogLevel::Error,
            CliLogLevel::Warn => app_config::LogLevel::Warn,
            CliLogLevel::Info => app_config::LogLevel::Info,
            CliLogLevel::Debug => app_config::LogLevel::Debug,
            CliLogLevel::Trace => app_config::LogLevel::Trace,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate subtitle files from transcript JSON (default command)
    #[command(alias = "gen")]
    Generate(GenerateArgs),

    /// Generate shell completions for subcue
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Parser, Debug)]
struct GenerateArgs {
    /// Input transcript JSON file or directory to process
    #[arg(value_name = "INPUT_PATH")]
    input_path: PathBuf,

    /// Output directory (defaults to the input file's directory)
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Force overwrite of existing output files
    #[arg(short, long)]
    force_overwrite: bool,

    /// Subtitle format to generate
    #[arg(long, value_enum)]
    format: Option<CliSubtitleFormat>,

    /// Maximum characters per cue line
    #[arg(short = 'w', long)]
    max_line_width: Option<usize>,

    /// Disable width-based splitting entirely
    #[arg(long, conflicts_with = "max_line_width")]
    no_width_split: bool,

    /// Minimum duration of a non-final cue, in seconds
    #[arg(long)]
    min_cue_duration: Option<f64>,

    /// Also emit the per-word raw SRT artifact
    #[arg(short, long)]
    raw: bool,

    /// Also emit the plain transcript text artifact
    #[arg(long)]
    plain_text: bool,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

/// subcue - Subtitle Cue Segmentation & Timestamp Alignment
///
/// Converts speech-to-text transcript JSON into well-formed SRT/VTT subtitle
/// files with width-bounded, sentence-aware cue segmentation.
#[derive(Parser, Debug)]
#[command(name = "subcue")]
#[command(author = "subcue contributors")]
#[command(version = "0.1.0")]
#[command(about = "Subtitle generation from speech-to-text transcripts")]
#[command(long_about = "subcue converts transcript JSON (word and/or segment timing) into subtitle files.

EXAMPLES:
    subcue talk.json                         # Generate talk.srt using default config
    subcue --format vtt talk.json            # Generate WebVTT instead
    subcue -w 40 talk.json                   # Wider cue lines
    subcue --raw talk.json                   # Also write talk.raw.srt (one cue per word)
    subcue --no-width-split talk.json        # Sentence splitting only
    subcue -f /transcripts/                  # Process a whole directory, overwriting
    subcue completions bash > subcue.bash    # Generate bash completions

CONFIGURATION:
    Configuration is stored in conf.json by default. You can specify a different
    config file with --config-path. If the config file doesn't exist, a default
    one will be created automatically.

INPUT:
    A JSON object optionally exposing \"words\" ({word, start, end}) and/or
    \"segments\" ({text, start, end}). Any combination is accepted; missing
    timing data degrades to proportional estimates, never an error.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Input transcript JSON file or directory to process
    #[arg(value_name = "INPUT_PATH")]
    input_path: Option<PathBuf>,

    /// Output directory (defaults to the input file's directory)
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Force overwrite of existing output files
    #[arg(short, long)]
    force_overwrite: bool,

    /// Subtitle format to generate
    #[arg(long, value_enum)]
    format: Option<CliSubtitleFormat>,

    /// Maximum characters per cue line
    #[arg(short = 'w', long)]
    max_line_width: Option<usize>,

    /// Disable width-based splitting entirely
    #[arg(long, conflicts_with = "max_line_width")]
    no_width_split: bool,

    /// Minimum duration of a non-final cue, in seconds
    #[arg(long)]
    min_cue_duration: Option<f64>,

    /// Also emit the per-word raw SRT artifact
    #[arg(short, long)]
    raw: bool,

    /// Also emit the plain transcript text artifact
    #[arg(long)]
    plain_text: bool,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @creates: New logger with specified level
    fn new(level: LevelFilter) -> Self {
        CustomLogger { level }
    }

    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        let logger = Box::new(CustomLogger::new(level));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: ANSI color code for log level
    fn color_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "\x1B[1;31m",
            Level::Warn => "\x1B[1;33m",
            Level::Info => "\x1B[1;32m",
            Level::Debug => "\x1B[1;36m",
            Level::Trace => "\x1B[1;35m",
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S.%3f");
            let color = Self::color_for_level(record.level());

            let mut stderr = std::io::stderr();
            let _ = writeln!(stderr, "{}{} {}\x1B[0m", color, now, record.args());
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize the logger once with info level by default
    // We'll update the level after loading the config if needed
    CustomLogger::init(LevelFilter::Info)?;

    // Parse command line arguments using clap
    let cli = CommandLineOptions::parse();

    // Handle subcommands
    match cli.command {
        Some(Commands::Completions { shell }) => {
            let mut cmd = CommandLineOptions::command();
            generate(shell, &mut cmd, "subcue", &mut std::io::stdout());
            Ok(())
        }
        Some(Commands::Generate(args)) => run_generate(args).await,
        None => {
            // Default behavior - use top-level args for backwards compatibility
            let input_path = cli.input_path.ok_or_else(|| {
                anyhow!("INPUT_PATH is required when no subcommand is specified")
            })?;

            let generate_args = GenerateArgs {
                input_path,
                output_dir: cli.output_dir,
                force_overwrite: cli.force_overwrite,
                format: cli.format,
                max_line_width: cli.max_line_width,
                no_width_split: cli.no_width_split,
                min_cue_duration: cli.min_cue_duration,
                raw: cli.raw,
                plain_text: cli.plain_text,
                config_path: cli.config_path,
                log_level: cli.log_level,
            };
            run_generate(generate_args).await
        }
    }
}

async fn run_generate(options: GenerateArgs) -> Result<()> {
    // If log level is set via command line, apply it immediately
    if let Some(cmd_log_level) = &options.log_level {
        let config_log_level: app_config::LogLevel = cmd_log_level.clone().into();
        log::set_max_level(to_level_filter(&config_log_level));
    }

    // Load or create configuration
    let config_path = &options.config_path;
    let mut config = if Path::new(config_path).exists() {
        // Load existing configuration
        let file = File::open(config_path)
            .context(format!("Failed to open config file: {}", config_path))?;

        let reader = BufReader::new(file);
        serde_json::from_reader(reader)
            .context(format!("Failed to parse config file: {}", config_path))?
    } else {
        // Create default configuration if not exists
        warn!("Config file not found at '{}', creating default config.", config_path);

        let config = Config::default();
        let config_json = serde_json::to_string_pretty(&config)
            .context("Failed to serialize default config to JSON")?;

        std::fs::write(config_path, config_json)
            .context(format!("Failed to write default config to file: {}", config_path))?;

        config
    };

    // Override config with CLI options if provided
    apply_cli_overrides(&mut config, &options);

    // If log level was not set via command line, update it from config now
    if options.log_level.is_none() {
        log::set_max_level(to_level_filter(&config.log_level));
    }

    // Create controller; configuration is validated here
    let controller = Controller::with_config(config)?;

    // Run the controller with the input file(s) and output directory
    if options.input_path.is_file() {
        let output_dir = options.output_dir.clone().unwrap_or_else(|| {
            options
                .input_path
                .parent()
                .unwrap_or(Path::new("."))
                .to_path_buf()
        });
        controller.run(options.input_path.clone(), output_dir, options.force_overwrite).await
    } else if options.input_path.is_dir() {
        controller.run_folder(options.input_path.clone(), options.force_overwrite).await
    } else {
        Err(anyhow!("Input path does not exist: {:?}", options.input_path))
    }
}

/// Fold command-line overrides into the loaded configuration
fn apply_cli_overrides(config: &mut Config, options: &GenerateArgs) {
    if let Some(format) = &options.format {
        config.format = format.clone().into();
    }

    if options.no_width_split {
        config.segmentation.max_line_width = None;
    } else if let Some(width) = options.max_line_width {
        config.segmentation.max_line_width = Some(width);
    }

    if let Some(floor) = options.min_cue_duration {
        config.segmentation.min_cue_duration_secs = floor;
    }

    if options.raw {
        config.output.raw_srt = true;
    }

    if options.plain_text {
        config.output.plain_text = true;
    }

    if let Some(log_level) = &options.log_level {
        config.log_level = log_level.clone().into();
    }
}

fn to_level_filter(level: &app_config::LogLevel) -> LevelFilter {
    match level {
        app_config::LogLevel::Error => LevelFilter::Error,
        app_config::LogLevel::Warn => LevelFilter::Warn,
        app_config::LogLevel::Info => LevelFilter::Info,
        app_config::LogLevel::Debug => LevelFilter::Debug,
        app_config::LogLevel::Trace => LevelFilter::Trace,
    }
}
