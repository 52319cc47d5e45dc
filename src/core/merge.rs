use std::path::{Path, PathBuf};

use crate::core::error::Result;
use crate::core::runner;
use crate::util;

/// Containers the batch merge scans for.
pub const VIDEO_EXTENSIONS: [&str; 3] = ["mkv", "mp4", "avi"];

/// Fixed preference order; the first existing sibling wins.
pub const SUBTITLE_EXTENSIONS: [&str; 2] = ["srt", "ass"];

/// Sibling subtitle sharing the video's base name, if any. At most one
/// match: later extensions are ignored once an earlier one exists.
pub fn match_subtitle(video: &Path) -> Option<PathBuf> {
    for ext in SUBTITLE_EXTENSIONS {
        let candidate = video.with_extension(ext);
        if candidate.is_file() {
            return Some(candidate);
        }
    }
    None
}

pub fn mux_args(video: &Path, subtitle: &Path, output: &Path) -> Vec<String> {
    vec![
        "-i".into(),
        video.display().to_string(),
        "-i".into(),
        subtitle.display().to_string(),
        "-map".into(),
        "0".into(),
        "-map".into(),
        "1".into(),
        "-c".into(),
        "copy".into(),
        "-y".into(),
        output.display().to_string(),
    ]
}

/// Embeds the subtitle as a new stream (soft subs); nothing is
/// re-encoded and both sources are left untouched.
pub fn mux_subtitles(video: &Path, subtitle: &Path) -> Result<PathBuf> {
    let output = util::with_suffix(video, "_subbed", Some("mkv"));
    tracing::info!(
        video = %video.display(),
        subtitle = %subtitle.display(),
        "muxing subtitles"
    );
    runner::run(runner::FFMPEG, &mux_args(video, subtitle, &output))?;
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;

    #[test]
    fn prefers_srt_over_ass() {
        let dir = tempfile::tempdir().unwrap();
        let video = dir.path().join("movie.mkv");
        File::create(&video).unwrap();
        File::create(dir.path().join("movie.srt")).unwrap();
        File::create(dir.path().join("movie.ass")).unwrap();

        assert_eq!(match_subtitle(&video), Some(dir.path().join("movie.srt")));
    }

    #[test]
    fn falls_back_to_ass() {
        let dir = tempfile::tempdir().unwrap();
        let video = dir.path().join("movie.mkv");
        File::create(&video).unwrap();
        File::create(dir.path().join("movie.ass")).unwrap();

        assert_eq!(match_subtitle(&video), Some(dir.path().join("movie.ass")));
    }

    #[test]
    fn no_sibling_means_no_match() {
        let dir = tempfile::tempdir().unwrap();
        let video = dir.path().join("movie.mkv");
        File::create(&video).unwrap();
        File::create(dir.path().join("other.srt")).unwrap();

        assert_eq!(match_subtitle(&video), None);
    }

    #[test]
    fn mux_copies_both_inputs() {
        let args = mux_args(
            Path::new("movie.mkv"),
            Path::new("movie.srt"),
            Path::new("movie_subbed.mkv"),
        );
        assert_eq!(
            args,
            vec![
                "-i", "movie.mkv", "-i", "movie.srt", "-map", "0", "-map", "1", "-c", "copy",
                "-y", "movie_subbed.mkv",
            ]
        );
    }
}
