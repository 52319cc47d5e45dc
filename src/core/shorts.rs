use std::path::{Path, PathBuf};

use crate::core::error::Result;
use crate::core::runner;
use crate::util;

/// 1080x1920 vertical layout: a blurred, cropped copy of the source
/// fills the frame, with an aspect-preserved copy centered on top.
pub const FILTER: &str = "split[a][b];\
[a]scale=1080:1920:force_original_aspect_ratio=increase,boxblur=20:20[bg];\
[b]scale=1080:-1[fg];\
[bg][fg]overlay=(W-w)/2:(H-h)/2";

pub fn args(input: &Path, output: &Path) -> Vec<String> {
    vec![
        "-i".into(),
        input.display().to_string(),
        "-vf".into(),
        FILTER.to_string(),
        "-c:v".into(),
        "libx264".into(),
        "-preset".into(),
        "fast".into(),
        "-crf".into(),
        "23".into(),
        "-c:a".into(),
        "copy".into(),
        "-y".into(),
        output.display().to_string(),
    ]
}

pub fn run(input: &Path) -> Result<PathBuf> {
    let output = util::with_suffix(input, "_shorts", Some("mp4"));
    tracing::info!(input = %input.display(), "building 9:16 layout");
    runner::run(runner::FFMPEG, &args(input, &output))?;
    Ok(output)
}
