use anyhow::{anyhow, Result};
use log::{error, warn, info, debug};
use std::path::PathBuf;
use std::time::Instant;
use indicatif::{ProgressBar, ProgressStyle, MultiProgress};

use crate::app_config::{Config, SubtitleFormat};
use crate::cue;
use crate::file_utils::FileManager;
use crate::segmentation::{build_raw_cues, SegmentationEngine};
use crate::transcript::Transcript;

/// Main application controller.
///
/// Drives the whole workflow for one transcript file or a folder of them:
/// load the transcript JSON, run the segmentation engine, and write the
/// requested subtitle artifacts next to the input.
pub struct Controller {
    /// Application configuration
    config: Config,
}

impl Controller {
    /// Create a controller with the provided configuration
    pub fn with_config(config: Config) -> Result<Self> {
        config.validate()?;
        Ok(Controller { config })
    }

    /// Process a single transcript file and write its artifacts to the
    /// output directory
    pub async fn run(&self, input_file: PathBuf, output_dir: PathBuf, force_overwrite: bool) -> Result<()> {
        let start_time = Instant::now();

        if !FileManager::file_exists(&input_file) {
            return Err(anyhow!("Input file does not exist: {:?}", input_file));
        }

        // The primary artifact decides whether this file is skipped
        let format = self.config.format;
        let output_path =
            FileManager::generate_output_path(&input_file, &output_dir, None, format.extension());
        if output_path.exists() && !force_overwrite {
            warn!("Output file already exists: {:?}. Use -f to force overwrite.", output_path);
            return Ok(());
        }

        let content = tokio::fs::read_to_string(&input_file)
            .await
            .map_err(|e| anyhow!("Failed to read transcript file {:?}: {}", input_file, e))?;
        let transcript = Transcript::from_json_str(&content)?;

        if transcript.is_empty() {
            warn!("Transcript {:?} carries no words or segments; output will be empty", input_file);
        }

        let engine = SegmentationEngine::with_config(&self.config.segmentation);
        let cues = engine.build_cues(&transcript);
        debug!("Generated {} {} cue(s) for {:?}", cues.len(), format.display_name(), input_file);

        FileManager::write_to_file(&output_path, &cue::render(&cues, format))?;
        info!("Wrote {} ({} cues)", output_path.display(), cues.len());

        if self.config.output.raw_srt {
            let raw_path = FileManager::generate_output_path(
                &input_file,
                &output_dir,
                Some("raw"),
                SubtitleFormat::Srt.extension(),
            );
            self.write_artifact(&raw_path, &cue::render_srt(&build_raw_cues(&transcript)), force_overwrite)?;
        }

        if self.config.output.plain_text {
            let text_path =
                FileManager::generate_output_path(&input_file, &output_dir, None, "txt");
            self.write_artifact(&text_path, &transcript.plain_text(), force_overwrite)?;
        }

        debug!("Processed {:?} in {}", input_file, Self::format_duration(start_time.elapsed()));
        Ok(())
    }

    /// Process every transcript JSON file under a directory
    pub async fn run_folder(&self, input_dir: PathBuf, force_overwrite: bool) -> Result<()> {
        let start_time = Instant::now();

        if !FileManager::dir_exists(&input_dir) {
            return Err(anyhow!("Input directory does not exist: {:?}", input_dir));
        }

        let transcript_files = FileManager::find_files(&input_dir, "json")?;
        if transcript_files.is_empty() {
            return Err(anyhow!("No transcript files found in directory: {:?}", input_dir));
        }

        // Folder-level progress bar over the file list
        let multi_progress = MultiProgress::new();
        let folder_pb = multi_progress.add(ProgressBar::new(transcript_files.len() as u64));
        let style = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files ({percent}%) {msg} {eta}")
            .or_else(|_| ProgressStyle::default_bar().template("{spinner} [{elapsed_precise}] [{bar:40}] {pos}/{len} ({percent}%) {msg}"))
            .unwrap_or_else(|_| ProgressStyle::default_bar());
        folder_pb.set_style(style.progress_chars("█▓▒░"));
        folder_pb.set_message("Processing files");

        let mut success_count = 0;
        let mut error_count = 0;

        for transcript_file in transcript_files.iter() {
            let file_name = transcript_file
                .file_name()
                .map(|f| f.to_string_lossy().to_string())
                .unwrap_or_else(|| "unknown".to_string());
            folder_pb.set_message(format!("Processing: {}", file_name));

            let output_dir = match transcript_file.parent() {
                Some(parent) => parent.to_path_buf(),
                None => input_dir.clone(),
            };

            match self.run(transcript_file.clone(), output_dir, force_overwrite).await {
                Ok(()) => success_count += 1,
                Err(e) => {
                    error!("Error processing {:?}: {}", transcript_file, e);
                    error_count += 1;
                }
            }

            folder_pb.inc(1);
        }

        folder_pb.finish_with_message("Done");
        info!(
            "Finished folder: {} succeeded, {} failed in {}",
            success_count,
            error_count,
            Self::format_duration(start_time.elapsed())
        );

        Ok(())
    }

    /// Write a secondary artifact, honoring the overwrite rule
    fn write_artifact(&self, path: &std::path::Path, content: &str, force_overwrite: bool) -> Result<()> {
        if path.exists() && !force_overwrite {
            warn!("Output file already exists: {:?}. Use -f to force overwrite.", path);
            return Ok(());
        }
        FileManager::write_to_file(path, content)?;
        info!("Wrote {}", path.display());
        Ok(())
    }

    /// Human-readable duration for log lines
    fn format_duration(duration: std::time::Duration) -> String {
        let seconds = duration.as_secs();
        if seconds >= 60 {
            let minutes = seconds / 60;
            let seconds = seconds % 60;
            format!("{}m {}s", minutes, seconds)
        } else {
            format!("{}.{:03}s", seconds, duration.subsec_millis())
        }
    }
}
