use std::path::{Path, PathBuf};

use crate::core::error::Result;
use crate::core::runner;
use crate::util;

pub fn chunk_args(input: &Path, pattern: &Path, seconds: u32) -> Vec<String> {
    vec![
        "-i".into(),
        input.display().to_string(),
        "-c".into(),
        "copy".into(),
        "-f".into(),
        "segment".into(),
        "-segment_time".into(),
        seconds.to_string(),
        "-reset_timestamps".into(),
        "1".into(),
        "-y".into(),
        pattern.display().to_string(),
    ]
}

/// Stream-copied chunks of `seconds` each, named `{stem}_part000.mp4`
/// onward. Cut points land on keyframes, so chunk lengths are
/// approximate.
pub fn split_chunks(input: &Path, seconds: u32) -> Result<PathBuf> {
    let pattern = util::with_suffix(input, "_part%03d", Some("mp4"));
    tracing::info!(input = %input.display(), seconds, "splitting into chunks");
    runner::run(runner::FFMPEG, &chunk_args(input, &pattern, seconds))?;
    Ok(pattern)
}

pub fn first_half_args(input: &Path, output: &Path, at: f64) -> Vec<String> {
    vec![
        "-i".into(),
        input.display().to_string(),
        "-to".into(),
        at.to_string(),
        "-c".into(),
        "copy".into(),
        "-y".into(),
        output.display().to_string(),
    ]
}

pub fn second_half_args(input: &Path, output: &Path, at: f64) -> Vec<String> {
    vec![
        "-ss".into(),
        at.to_string(),
        "-i".into(),
        input.display().to_string(),
        "-c".into(),
        "copy".into(),
        "-y".into(),
        output.display().to_string(),
    ]
}

/// Two stream-copied halves with the boundary at `at` seconds. The cut
/// is keyframe-bounded; a boundary of 0 or one past the end simply
/// yields a near-empty or empty half.
pub fn split_intermission(input: &Path, at: f64) -> Result<(PathBuf, PathBuf)> {
    let first = util::with_suffix(input, "_First_Half", None);
    let second = util::with_suffix(input, "_Second_Half", None);

    tracing::info!(input = %input.display(), at, "cutting first half");
    runner::run(runner::FFMPEG, &first_half_args(input, &first, at))?;
    tracing::info!(input = %input.display(), at, "cutting second half");
    runner::run(runner::FFMPEG, &second_half_args(input, &second, at))?;

    Ok((first, second))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chunking_uses_the_segment_muxer() {
        let args = chunk_args(Path::new("in.mp4"), Path::new("in_part%03d.mp4"), 30);
        assert_eq!(
            args,
            vec![
                "-i", "in.mp4", "-c", "copy", "-f", "segment", "-segment_time", "30",
                "-reset_timestamps", "1", "-y", "in_part%03d.mp4",
            ]
        );
    }

    #[test]
    fn halves_share_the_boundary_timestamp() {
        let first = first_half_args(Path::new("in.mkv"), Path::new("a.mkv"), 3600.0);
        let second = second_half_args(Path::new("in.mkv"), Path::new("b.mkv"), 3600.0);
        assert_eq!(first[..6], ["-i", "in.mkv", "-to", "3600", "-c", "copy"]);
        // seeking before the input keeps the copy fast
        assert_eq!(second[..4], ["-ss", "3600", "-i", "in.mkv"]);
    }

    #[test]
    fn fractional_boundaries_survive() {
        let args = first_half_args(Path::new("in.mkv"), Path::new("a.mkv"), 90.5);
        assert!(args.windows(2).any(|w| w == ["-to", "90.5"]));
    }
}
