use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use crossterm::style::Stylize;

use crate::core::error::{FfkError, Result};
use crate::core::probe::StreamKind;
use crate::core::watermark::Position;
use crate::core::{
    compress, convert, extract, gif, merge, remaster, shorts, split, stitch, tracks, watermark,
};
use crate::util;
use crate::watch;

#[derive(Debug, Parser)]
#[command(name = "ffkit", version, about = "FFmpeg video toolbox")]
pub struct Cli {
    /// Operation to run; omit it for the interactive menu.
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Rewrap into a different container, copying streams where possible
    Convert(ConvertArgs),
    /// Keep only selected audio or subtitle tracks (stream copy)
    Tracks(TracksArgs),
    /// Scan a folder and mux sibling .srt/.ass files into their videos
    Merge(MergeArgs),
    /// Re-encode audio to AAC at a target bitrate, copy everything else
    Compress(CompressArgs),
    /// Vertical 9:16 layout with a blurred background fill
    Shorts(ShortsArgs),
    /// Split into stream-copied chunks of fixed length
    Split(SplitArgs),
    /// Split into exactly two parts at a timestamp
    Cut(CutArgs),
    /// Concatenate inputs with matching codecs into one file
    Stitch(StitchArgs),
    /// Overlay a still image at a fixed anchor
    Watermark(WatermarkArgs),
    /// High-quality palette-based GIF from a subclip
    Gif(GifArgs),
    /// Denoise, sharpen and upscale old footage
    Remaster(RemasterArgs),
    /// Extract the audio track
    Extract(ExtractArgs),
    /// Watch a folder and compress every video that lands in it
    Watch(WatchArgs),
}

#[derive(Debug, Parser)]
pub struct ConvertArgs {
    pub input: PathBuf,
    /// Target container (mp4/mkv/avi/...)
    pub format: String,
}

#[derive(Debug, Parser)]
pub struct TracksArgs {
    pub input: PathBuf,
    /// Stream type: 'a' (audio) or 's' (subtitles)
    pub kind: String,
    /// Comma-separated indices to keep, e.g. 0,2
    pub indices: String,
    #[arg(short = 'o', long = "output")]
    pub output: Option<PathBuf>,
}

#[derive(Debug, Parser)]
pub struct MergeArgs {
    pub folder: PathBuf,
}

#[derive(Debug, Parser)]
pub struct CompressArgs {
    pub input: PathBuf,
    /// Audio bitrate (the menu defaults to 384k instead)
    #[arg(default_value = "128k")]
    pub bitrate: String,
}

#[derive(Debug, Parser)]
pub struct ShortsArgs {
    pub input: PathBuf,
}

#[derive(Debug, Parser)]
pub struct SplitArgs {
    pub input: PathBuf,
    /// Chunk length in seconds
    #[arg(default_value_t = 30)]
    pub seconds: u32,
}

#[derive(Debug, Parser)]
pub struct CutArgs {
    pub input: PathBuf,
    /// Boundary in seconds (default: the one-hour mark)
    #[arg(default_value_t = 3600.0)]
    pub seconds: f64,
}

#[derive(Debug, Parser)]
pub struct StitchArgs {
    pub output: PathBuf,
    #[arg(required = true)]
    pub inputs: Vec<PathBuf>,
}

#[derive(Debug, Parser)]
pub struct WatermarkArgs {
    pub video: PathBuf,
    pub logo: PathBuf,
    /// tl, tr, bl, br or center
    #[arg(default_value = "br")]
    pub position: String,
}

#[derive(Debug, Parser)]
pub struct GifArgs {
    pub input: PathBuf,
    /// Start offset in seconds
    #[arg(default_value_t = 0)]
    pub start: u32,
    /// Subclip length in seconds
    #[arg(default_value_t = gif::DEFAULT_DURATION)]
    pub duration: u32,
    /// Output width in pixels (height keeps aspect)
    #[arg(default_value_t = gif::DEFAULT_WIDTH)]
    pub width: u32,
}

#[derive(Debug, Parser)]
pub struct RemasterArgs {
    pub input: PathBuf,
}

#[derive(Debug, Parser)]
pub struct ExtractArgs {
    pub input: PathBuf,
    /// mp3, wav or 'original' (stream copy)
    #[arg(default_value = "mp3")]
    pub format: String,
}

#[derive(Debug, Parser)]
pub struct WatchArgs {
    pub watch_dir: PathBuf,
    pub output_dir: PathBuf,
}

/// Single dispatcher behind every surface: subcommands, the interactive
/// menu and free-form lines typed at its prompt all land here.
pub fn execute(command: Commands) -> Result<()> {
    match command {
        Commands::Convert(args) => {
            let output = convert::run(&args.input, &args.format)?;
            report_output(&output);
        }
        Commands::Tracks(args) => {
            let kind: StreamKind = args.kind.parse()?;
            let indices = parse_indices(&args.indices)?;
            let output = args
                .output
                .unwrap_or_else(|| default_tracks_output(&args.input, kind));
            let output = tracks::keep_tracks(&args.input, &output, kind, &indices)?;
            report_output(&output);
        }
        Commands::Merge(args) => {
            let videos = util::scan_media(&args.folder, &merge::VIDEO_EXTENSIONS);
            println!("Found {} videos. Scanning for subtitles...", videos.len());
            for video in &videos {
                let Some(subtitle) = merge::match_subtitle(video) else {
                    continue;
                };
                println!("matching {}", util::file_name(video));
                match merge::mux_subtitles(video, &subtitle) {
                    Ok(output) => report_output(&output),
                    Err(err) => report_error(&err),
                }
            }
        }
        Commands::Compress(args) => {
            let output = compress::run(&args.input, &args.bitrate)?;
            report_output(&output);
        }
        Commands::Shorts(args) => {
            let output = shorts::run(&args.input)?;
            report_output(&output);
        }
        Commands::Split(args) => {
            let pattern = split::split_chunks(&args.input, args.seconds)?;
            report_output(&pattern);
        }
        Commands::Cut(args) => {
            let (first, second) = split::split_intermission(&args.input, args.seconds)?;
            report_output(&first);
            report_output(&second);
        }
        Commands::Stitch(args) => {
            let output = stitch::concat(&args.inputs, &args.output)?;
            report_output(&output);
        }
        Commands::Watermark(args) => {
            let position = Position::from_name(&args.position);
            let output = watermark::run(&args.video, &args.logo, position)?;
            report_output(&output);
        }
        Commands::Gif(args) => {
            let output = gif::run(&args.input, args.start, args.duration, args.width)?;
            report_output(&output);
        }
        Commands::Remaster(args) => {
            let output = remaster::run(&args.input)?;
            report_output(&output);
        }
        Commands::Extract(args) => {
            let format = extract::AudioFormat::from_name(&args.format);
            let output = extract::run(&args.input, &format)?;
            report_output(&output);
        }
        Commands::Watch(args) => watch::run(&args.watch_dir, &args.output_dir)?,
    }
    Ok(())
}

pub fn parse_indices(raw: &str) -> Result<Vec<u32>> {
    raw.split(',')
        .map(|part| {
            let part = part.trim();
            part.parse::<u32>()
                .map_err(|_| FfkError::InvalidInput(format!("bad track index '{part}'")))
        })
        .collect()
}

// the standalone form keeps the container; the menu forces .mkv
fn default_tracks_output(input: &Path, kind: StreamKind) -> PathBuf {
    let suffix = match kind {
        StreamKind::Audio => "_clean_audio",
        StreamKind::Subtitle => "_clean_subs",
    };
    util::with_suffix(input, suffix, None)
}

pub fn report_output(path: &Path) {
    println!("{} {}", "saved:".green(), path.display());
}

pub fn report_error(err: &FfkError) {
    eprintln!("{} {err}", "error:".red());
}

/// Parses a free-form command line the way the shell would have.
pub fn parse_line(line: &str) -> Result<Commands> {
    let mut argv = vec!["ffkit".to_string()];
    let tokens =
        shell_words::split(line).map_err(|err| FfkError::InvalidInput(err.to_string()))?;
    argv.extend(tokens);

    let cli =
        Cli::try_parse_from(argv).map_err(|err| FfkError::InvalidInput(err.to_string()))?;
    cli.command
        .ok_or_else(|| FfkError::InvalidInput("expected a command".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_split_on_commas_with_spaces() {
        assert_eq!(parse_indices("0, 2,3").unwrap(), vec![0, 2, 3]);
        assert!(parse_indices("0,x").is_err());
        assert!(parse_indices("").is_err());
    }

    #[test]
    fn free_form_line_parses_into_a_command() {
        match parse_line("gif 'my clip.mp4' 10 5").unwrap() {
            Commands::Gif(args) => {
                assert_eq!(args.input, PathBuf::from("my clip.mp4"));
                assert_eq!(args.start, 10);
                assert_eq!(args.duration, 5);
                assert_eq!(args.width, gif::DEFAULT_WIDTH);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn standalone_defaults_differ_from_menu_defaults() {
        match parse_line("compress big.mkv").unwrap() {
            Commands::Compress(args) => assert_eq!(args.bitrate, "128k"),
            other => panic!("unexpected command: {other:?}"),
        }
        assert_eq!(compress::DEFAULT_BITRATE, "384k");
    }

    #[test]
    fn empty_line_is_rejected() {
        assert!(parse_line("").is_err());
    }

    #[test]
    fn clean_audio_keeps_container_by_default() {
        let out = default_tracks_output(Path::new("movie.mp4"), StreamKind::Audio);
        assert_eq!(out, PathBuf::from("movie_clean_audio.mp4"));
        let out = default_tracks_output(Path::new("movie.mkv"), StreamKind::Subtitle);
        assert_eq!(out, PathBuf::from("movie_clean_subs.mkv"));
    }
}
