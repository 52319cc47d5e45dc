use std::path::{Path, PathBuf};

use crate::core::error::Result;
use crate::core::runner;
use crate::util;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Position {
    TopLeft,
    TopRight,
    BottomLeft,
    #[default]
    BottomRight,
    Center,
}

impl Position {
    /// Unrecognized names fall back to the bottom-right anchor.
    pub fn from_name(name: &str) -> Position {
        match name {
            "tl" => Position::TopLeft,
            "tr" => Position::TopRight,
            "bl" => Position::BottomLeft,
            "br" => Position::BottomRight,
            "center" => Position::Center,
            _ => Position::BottomRight,
        }
    }

    /// Overlay offsets, 10px inset from the anchored corner.
    pub fn coords(self) -> &'static str {
        match self {
            Position::TopLeft => "10:10",
            Position::TopRight => "main_w-overlay_w-10:10",
            Position::BottomLeft => "10:main_h-overlay_h-10",
            Position::BottomRight => "main_w-overlay_w-10:main_h-overlay_h-10",
            Position::Center => "(main_w-overlay_w)/2:(main_h-overlay_h)/2",
        }
    }
}

pub fn args(video: &Path, logo: &Path, output: &Path, position: Position) -> Vec<String> {
    vec![
        "-i".into(),
        video.display().to_string(),
        "-i".into(),
        logo.display().to_string(),
        "-filter_complex".into(),
        format!("overlay={}", position.coords()),
        // burning the overlay re-encodes video; audio passes through
        "-c:a".into(),
        "copy".into(),
        "-y".into(),
        output.display().to_string(),
    ]
}

pub fn run(video: &Path, logo: &Path, position: Position) -> Result<PathBuf> {
    let output = util::with_suffix(video, "_branded", Some("mp4"));
    tracing::info!(video = %video.display(), logo = %logo.display(), "burning watermark");
    runner::run(runner::FFMPEG, &args(video, logo, &output, position))?;
    Ok(output)
}
