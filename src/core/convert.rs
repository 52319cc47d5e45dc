use std::path::{Path, PathBuf};

use crate::core::error::Result;
use crate::core::runner;

/// Copy-first container rewrap: mkv carries every stream as-is, mp4
/// converts subtitles to mov_text (the only text codec mp4 accepts),
/// anything else falls back to a plain stream copy.
pub fn args(input: &Path, output: &Path, format: &str) -> Vec<String> {
    let mut args = vec!["-i".to_string(), input.display().to_string()];
    match format {
        "mkv" => args.extend(["-map", "0", "-c", "copy"].map(String::from)),
        "mp4" => args.extend(["-c:v", "copy", "-c:a", "copy", "-c:s", "mov_text"].map(String::from)),
        _ => args.extend(["-c", "copy"].map(String::from)),
    }
    args.extend(["-y".to_string(), output.display().to_string()]);
    args
}

pub fn run(input: &Path, format: &str) -> Result<PathBuf> {
    let output = input.with_extension(format);
    tracing::info!(input = %input.display(), format, "rewrapping container");
    runner::run(runner::FFMPEG, &args(input, &output, format))?;
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mkv_copies_every_stream() {
        let args = args(Path::new("in.mp4"), Path::new("in.mkv"), "mkv");
        assert_eq!(
            args,
            vec!["-i", "in.mp4", "-map", "0", "-c", "copy", "-y", "in.mkv"]
        );
    }

    #[test]
    fn mp4_converts_subtitles_to_mov_text() {
        let args = args(Path::new("in.mkv"), Path::new("in.mp4"), "mp4");
        assert_eq!(
            args,
            vec![
                "-i", "in.mkv", "-c:v", "copy", "-c:a", "copy", "-c:s", "mov_text", "-y",
                "in.mp4",
            ]
        );
    }

    #[test]
    fn unknown_target_stream_copies() {
        let args = args(Path::new("in.mkv"), Path::new("in.avi"), "avi");
        assert_eq!(args, vec!["-i", "in.mkv", "-c", "copy", "-y", "in.avi"]);
    }
}
