use std::path::{Path, PathBuf};

use crate::core::error::Result;
use crate::core::runner;
use crate::util;

/// Restoration chain for old footage: hqdn3d denoise (tuned for film
/// grain), unsharp sharpening, a saturation/contrast boost for faded
/// color, then a lanczos upscale to 1920-wide.
pub const FILTER_CHAIN: &str = "hqdn3d=1.5:1.5:6:6,\
unsharp=5:5:1.0:5:5:0.0,\
eq=saturation=1.2:contrast=1.1,\
scale=1920:-2:flags=lanczos";

pub fn args(input: &Path, output: &Path) -> Vec<String> {
    vec![
        "-i".into(),
        input.display().to_string(),
        "-vf".into(),
        FILTER_CHAIN.to_string(),
        "-c:v".into(),
        "libx264".into(),
        "-preset".into(),
        "medium".into(),
        "-crf".into(),
        "20".into(),
        "-c:a".into(),
        "copy".into(),
        "-y".into(),
        output.display().to_string(),
    ]
}

pub fn run(input: &Path) -> Result<PathBuf> {
    let output = util::with_suffix(input, "_remastered", Some("mp4"));
    tracing::info!(input = %input.display(), "remastering");
    runner::run(runner::FFMPEG, &args(input, &output))?;
    Ok(output)
}
