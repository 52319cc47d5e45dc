use std::path::{Path, PathBuf};

use crate::core::error::Result;
use crate::core::runner;

pub const DEFAULT_DURATION: u32 = 5;
pub const DEFAULT_WIDTH: u32 = 480;

/// Two-pass palette pipeline in one filter graph: the stream is split,
/// one branch feeds palettegen, the other is quantized against the
/// resulting 256-color palette. 15fps is plenty for a GIF.
pub fn filter(width: u32) -> String {
    format!(
        "fps=15,scale={width}:-1:flags=lanczos,split[s0][s1];[s0]palettegen[p];[s1][p]paletteuse"
    )
}

pub fn args(input: &Path, output: &Path, start: u32, duration: u32, width: u32) -> Vec<String> {
    vec![
        // clip before the input so only the subclip is decoded
        "-ss".into(),
        start.to_string(),
        "-t".into(),
        duration.to_string(),
        "-i".into(),
        input.display().to_string(),
        "-vf".into(),
        filter(width),
        "-y".into(),
        output.display().to_string(),
    ]
}

pub fn run(input: &Path, start: u32, duration: u32, width: u32) -> Result<PathBuf> {
    let output = input.with_extension("gif");
    tracing::info!(input = %input.display(), start, duration, width, "rendering gif");
    runner::run(runner::FFMPEG, &args(input, &output, start, duration, width))?;
    Ok(output)
}
