/*!
 * Segmentation engine: turns a normalized transcript into cue-sized,
 * time-aligned subtitle chunks.
 *
 * The pipeline runs strictly left to right; no stage mutates a prior
 * stage's output:
 *
 * - `timing`: reconciles word-level timestamps against segment text
 * - `sentence`: splits segment text into sentence-like units
 * - `linewidth`: splits sentence units into width-bounded word groups
 * - `allocator`: distributes each segment's time budget across its chunks
 * - `grouping`: synthesizes segments from word timings when none exist
 * - `raw`: the bypass path emitting one cue per transcribed word
 * - `engine`: orchestrates the stages over a whole transcript
 */

pub mod allocator;
pub mod engine;
pub mod grouping;
pub mod linewidth;
pub mod raw;
pub mod sentence;
pub mod timing;

// Re-export main types
pub use engine::SegmentationEngine;
pub use raw::build_raw_cues;
pub use timing::{TimedToken, TimingTable};
