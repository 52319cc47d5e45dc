use std::path::{Path, PathBuf};

use crate::core::error::Result;
use crate::core::runner;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AudioFormat {
    /// Stream-copy the source codec as-is.
    Original,
    Mp3,
    Wav,
    /// Anything unrecognized gets a generic aac re-encode.
    Other(String),
}

impl AudioFormat {
    pub fn from_name(name: &str) -> AudioFormat {
        match name.to_ascii_lowercase().as_str() {
            "original" => AudioFormat::Original,
            "mp3" => AudioFormat::Mp3,
            "wav" => AudioFormat::Wav,
            other => AudioFormat::Other(other.to_string()),
        }
    }

    pub fn extension(&self) -> &str {
        match self {
            AudioFormat::Original => "aac",
            AudioFormat::Mp3 => "mp3",
            AudioFormat::Wav => "wav",
            AudioFormat::Other(ext) => ext,
        }
    }

    fn codec_args(&self) -> &'static [&'static str] {
        match self {
            AudioFormat::Original => &["-c:a", "copy"],
            AudioFormat::Mp3 => &["-c:a", "libmp3lame", "-q:a", "2"],
            AudioFormat::Wav => &["-c:a", "pcm_s16le"],
            AudioFormat::Other(_) => &["-c:a", "aac"],
        }
    }
}

pub fn args(input: &Path, output: &Path, format: &AudioFormat) -> Vec<String> {
    let mut args = vec![
        "-i".to_string(),
        input.display().to_string(),
        "-vn".to_string(),
    ];
    args.extend(format.codec_args().iter().map(|s| s.to_string()));
    args.extend(["-y".to_string(), output.display().to_string()]);
    args
}

pub fn run(input: &Path, format: &AudioFormat) -> Result<PathBuf> {
    let output = input.with_extension(format.extension());
    tracing::info!(input = %input.display(), ?format, "extracting audio");
    runner::run(runner::FFMPEG, &args(input, &output, format))?;
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_names_map_to_codecs() {
        assert_eq!(AudioFormat::from_name("ORIGINAL"), AudioFormat::Original);
        assert_eq!(AudioFormat::from_name("mp3"), AudioFormat::Mp3);
        assert_eq!(AudioFormat::from_name("wav"), AudioFormat::Wav);
        assert_eq!(
            AudioFormat::from_name("ogg"),
            AudioFormat::Other("ogg".to_string())
        );
    }

    #[test]
    fn original_copies_with_aac_extension() {
        let format = AudioFormat::Original;
        assert_eq!(format.extension(), "aac");
        let args = args(Path::new("video.mp4"), Path::new("video.aac"), &format);
        assert_eq!(args, vec!["-i", "video.mp4", "-vn", "-c:a", "copy", "-y", "video.aac"]);
    }

    #[test]
    fn mp3_uses_high_quality_vbr() {
        let args = args(
            Path::new("video.mp4"),
            Path::new("video.mp3"),
            &AudioFormat::Mp3,
        );
        assert!(args.windows(4).any(|w| w == ["-c:a", "libmp3lame", "-q:a", "2"]));
    }

    #[test]
    fn wav_is_uncompressed_pcm() {
        let args = args(
            Path::new("video.mp4"),
            Path::new("video.wav"),
            &AudioFormat::Wav,
        );
        assert!(args.windows(2).any(|w| w == ["-c:a", "pcm_s16le"]));
    }

    #[test]
    fn unknown_format_falls_back_to_aac() {
        let format = AudioFormat::from_name("opus");
        let args = args(Path::new("video.mp4"), Path::new("video.opus"), &format);
        assert!(args.windows(2).any(|w| w == ["-c:a", "aac"]));
        assert!(args.contains(&"-vn".to_string()));
    }
}
