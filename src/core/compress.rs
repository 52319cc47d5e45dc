use std::path::{Path, PathBuf};

use once_cell::sync::Lazy;
use regex::Regex;

use crate::core::error::{FfkError, Result};
use crate::core::runner;
use crate::util;

/// Default used by the menu and the folder watcher. The standalone
/// `compress` subcommand defaults to 128k instead; both values are
/// long-standing and intentionally different.
pub const DEFAULT_BITRATE: &str = "384k";

/// Folder batch threshold: files at or below this size are left alone.
pub const SIZE_THRESHOLD_GB: f64 = 1.5;

/// Containers the folder batch and the watcher look for.
pub const VIDEO_EXTENSIONS: [&str; 3] = ["mkv", "mp4", "mov"];

static RE_BITRATE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]+[kKmM]?$").unwrap());

pub fn args(input: &Path, output: &Path, bitrate: &str) -> Vec<String> {
    vec![
        "-i".into(),
        input.display().to_string(),
        "-map".into(),
        "0".into(),
        "-c:v".into(),
        "copy".into(),
        "-c:a".into(),
        "aac".into(),
        "-b:a".into(),
        bitrate.to_string(),
        "-c:s".into(),
        "copy".into(),
        "-y".into(),
        output.display().to_string(),
    ]
}

/// Re-encodes only the audio stream; video and subtitles are copied
/// bit-exact.
pub fn run_to(input: &Path, output: &Path, bitrate: &str) -> Result<PathBuf> {
    if !RE_BITRATE.is_match(bitrate) {
        return Err(FfkError::InvalidInput(format!(
            "bad bitrate '{bitrate}' (expected e.g. 128k)"
        )));
    }
    tracing::info!(input = %input.display(), bitrate, "compressing audio");
    runner::run(runner::FFMPEG, &args(input, output, bitrate))?;
    Ok(output.to_path_buf())
}

pub fn run(input: &Path, bitrate: &str) -> Result<PathBuf> {
    let output = util::with_suffix(input, "_compressed", Some("mkv"));
    run_to(input, &output, bitrate)
}
