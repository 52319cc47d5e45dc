use std::path::Path;
use std::str::FromStr;

use serde::Deserialize;

use crate::core::error::{FfkError, Result};
use crate::core::runner;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreamKind {
    Audio,
    Subtitle,
}

impl StreamKind {
    /// ffmpeg/ffprobe stream specifier letter (`0:a:1`, `-select_streams s`).
    pub fn specifier(self) -> &'static str {
        match self {
            StreamKind::Audio => "a",
            StreamKind::Subtitle => "s",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            StreamKind::Audio => "audio",
            StreamKind::Subtitle => "subtitle",
        }
    }
}

impl FromStr for StreamKind {
    type Err = FfkError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "a" | "audio" => Ok(StreamKind::Audio),
            "s" | "sub" | "subs" | "subtitle" | "subtitles" => Ok(StreamKind::Subtitle),
            other => Err(FfkError::InvalidInput(format!(
                "unknown stream type '{other}' (expected 'a' or 's')"
            ))),
        }
    }
}

/// One stream of the probed type, in container order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackInfo {
    /// Container-assigned stream index; not necessarily contiguous.
    pub index: u32,
    pub language: Option<String>,
    pub title: Option<String>,
}

impl TrackInfo {
    pub fn describe(&self) -> String {
        let lang = self.language.as_deref().unwrap_or("unknown");
        match self.title.as_deref() {
            Some(title) => format!("{lang} {title}"),
            None => lang.to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct ProbeOutput {
    #[serde(default)]
    streams: Vec<ProbeStream>,
}

#[derive(Debug, Deserialize)]
struct ProbeStream {
    index: u32,
    #[serde(default)]
    tags: ProbeTags,
}

#[derive(Debug, Default, Deserialize)]
struct ProbeTags {
    language: Option<String>,
    title: Option<String>,
}

pub fn probe_args(input: &Path, kind: StreamKind) -> Vec<String> {
    vec![
        "-v".into(),
        "error".into(),
        "-show_entries".into(),
        "stream=index:stream_tags=language,title".into(),
        "-select_streams".into(),
        kind.specifier().into(),
        "-of".into(),
        "json".into(),
        input.display().to_string(),
    ]
}

/// Lists tracks of one type, in container order. A file with none of
/// them yields an empty list; a probe or parse failure is an error, not
/// an empty list.
pub fn probe_tracks(input: &Path, kind: StreamKind) -> Result<Vec<TrackInfo>> {
    let stdout = runner::run_capture(runner::FFPROBE, &probe_args(input, kind))?;
    let tracks = parse_streams(&stdout)?;
    tracing::debug!(
        kind = kind.label(),
        indices = ?tracks.iter().map(|t| t.index).collect::<Vec<_>>(),
        "probe complete"
    );
    Ok(tracks)
}

fn parse_streams(json: &str) -> Result<Vec<TrackInfo>> {
    let output: ProbeOutput = serde_json::from_str(json)?;
    Ok(output
        .streams
        .into_iter()
        .map(|stream| TrackInfo {
            index: stream.index,
            language: stream.tags.language,
            title: stream.tags.title,
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_tagged_audio_streams() {
        let json = r#"{
            "streams": [
                { "index": 1, "tags": { "language": "eng", "title": "Stereo" } },
                { "index": 2, "tags": { "language": "spa" } }
            ]
        }"#;
        let tracks = parse_streams(json).unwrap();
        assert_eq!(
            tracks,
            vec![
                TrackInfo {
                    index: 1,
                    language: Some("eng".to_string()),
                    title: Some("Stereo".to_string()),
                },
                TrackInfo {
                    index: 2,
                    language: Some("spa".to_string()),
                    title: None,
                },
            ]
        );
        assert_eq!(tracks[1].describe(), "spa");
    }

    #[test]
    fn missing_tags_are_none() {
        let json = r#"{ "streams": [ { "index": 3 } ] }"#;
        let tracks = parse_streams(json).unwrap();
        assert_eq!(tracks[0].language, None);
        assert_eq!(tracks[0].describe(), "unknown");
    }

    #[test]
    fn no_streams_is_ok_and_empty() {
        assert!(parse_streams("{}").unwrap().is_empty());
        assert!(parse_streams(r#"{ "streams": [] }"#).unwrap().is_empty());
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(matches!(
            parse_streams("not json"),
            Err(FfkError::ProbeParse(_))
        ));
    }

    #[test]
    fn probe_args_select_the_requested_type() {
        let args = probe_args(Path::new("in.mkv"), StreamKind::Subtitle);
        assert_eq!(
            args,
            vec![
                "-v",
                "error",
                "-show_entries",
                "stream=index:stream_tags=language,title",
                "-select_streams",
                "s",
                "-of",
                "json",
                "in.mkv",
            ]
        );
    }

    #[test]
    fn kind_parses_from_short_and_long_names() {
        assert_eq!("a".parse::<StreamKind>().unwrap(), StreamKind::Audio);
        assert_eq!("subtitles".parse::<StreamKind>().unwrap(), StreamKind::Subtitle);
        assert!("v".parse::<StreamKind>().is_err());
    }
}
