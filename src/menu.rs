use std::io::{self, Write};
use std::path::PathBuf;
use std::str::FromStr;

use crate::cli::{
    self, Commands, CompressArgs, ConvertArgs, CutArgs, ExtractArgs, GifArgs, MergeArgs,
    RemasterArgs, ShortsArgs, SplitArgs, StitchArgs, TracksArgs, WatermarkArgs,
};
use crate::core::error::{FfkError, Result};
use crate::core::probe::{self, StreamKind};
use crate::core::{compress, gif};
use crate::util;

const OPTIONS: [&str; 13] = [
    "Convert video format",
    "Clean audio tracks (multi-select)",
    "Clean subtitle tracks (multi-select)",
    "Batch merge subtitles (auto-match)",
    "Compress folder (shrink audio)",
    "Create shorts (9:16 layout)",
    "Split into fixed-length chunks",
    "Stitch/join multiple videos",
    "Add watermark/logo",
    "Create high-quality GIF",
    "Remaster old footage (denoise + upscale)",
    "Split in two at a timestamp",
    "Extract audio (mp3/wav)",
];

/// One menu round: show the options, run the chosen operation, return.
/// A non-numeric line is treated as a full command (`gif clip.mp4 10 5`)
/// and goes through the same dispatcher as the subcommands.
pub fn run() -> Result<()> {
    println!("\n=== ffkit video toolbox ===");
    for (i, option) in OPTIONS.iter().enumerate() {
        println!("{:2}. {option}", i + 1);
    }

    let line = prompt("\nSelect an option (1-13), or type a command: ")?;
    if line.is_empty() {
        return Ok(());
    }

    match line.parse::<usize>() {
        Ok(choice @ 1..=13) => dispatch_choice(choice),
        Ok(_) => Err(FfkError::InvalidInput(
            "option out of range (1-13)".to_string(),
        )),
        Err(_) => cli::execute(cli::parse_line(&line)?),
    }
}

fn dispatch_choice(choice: usize) -> Result<()> {
    match choice {
        1 => {
            let input = prompt_path("Enter video path: ")?;
            let format = prompt("Target format (mp4/mkv/avi): ")?;
            cli::execute(Commands::Convert(ConvertArgs { input, format }))
        }
        2 => clean_tracks(StreamKind::Audio),
        3 => clean_tracks(StreamKind::Subtitle),
        4 => {
            let folder = prompt_path("Enter folder path: ")?;
            cli::execute(Commands::Merge(MergeArgs { folder }))
        }
        5 => compress_folder(),
        6 => {
            let input = prompt_path("Enter video path: ")?;
            cli::execute(Commands::Shorts(ShortsArgs { input }))
        }
        7 => {
            let input = prompt_path("Enter video path: ")?;
            let seconds = prompt_number("Enter duration per part (seconds): ")?;
            cli::execute(Commands::Split(SplitArgs { input, seconds }))
        }
        8 => stitch_folder(),
        9 => {
            let video = prompt_path("Video path: ")?;
            let logo = prompt_path("Logo path: ")?;
            let position = prompt("Position (br, bl, tr, tl, center): ")?;
            cli::execute(Commands::Watermark(WatermarkArgs {
                video,
                logo,
                position,
            }))
        }
        10 => {
            let input = prompt_path("Video path: ")?;
            let start = prompt_number("Start (sec): ")?;
            let duration = prompt_number("Duration (sec): ")?;
            cli::execute(Commands::Gif(GifArgs {
                input,
                start,
                duration,
                width: gif::DEFAULT_WIDTH,
            }))
        }
        11 => {
            let input = prompt_path("Old video path: ")?;
            cli::execute(Commands::Remaster(RemasterArgs { input }))
        }
        12 => {
            let input = prompt_path("Enter video path: ")?;
            println!("Tip: 1 hour = 3600 seconds");
            let seconds = prompt_number("Enter split time in seconds: ")?;
            cli::execute(Commands::Cut(CutArgs { input, seconds }))
        }
        13 => {
            let input = prompt_path("Enter video path: ")?;
            let format = prompt("Output format (mp3/wav/original): ")?.to_lowercase();
            cli::execute(Commands::Extract(ExtractArgs { input, format }))
        }
        _ => Ok(()),
    }
}

fn clean_tracks(kind: StreamKind) -> Result<()> {
    let input = prompt_path("Enter video path: ")?;
    let tracks = probe::probe_tracks(&input, kind)?;
    if tracks.is_empty() {
        println!("No {} tracks found.", kind.label());
        return Ok(());
    }

    println!("\nAvailable {} tracks:", kind.label());
    for (position, track) in tracks.iter().enumerate() {
        println!("[{position}] {}", track.describe());
    }

    let indices = prompt("Enter ID(s) to KEEP (comma separated, e.g. 0,2): ")?;
    let suffix = match kind {
        StreamKind::Audio => "_clean_audio",
        StreamKind::Subtitle => "_clean_subtitle",
    };
    let output = util::with_suffix(&input, suffix, Some("mkv"));

    println!("Processing...");
    cli::execute(Commands::Tracks(TracksArgs {
        input,
        kind: kind.specifier().to_string(),
        indices,
        output: Some(output),
    }))
}

fn compress_folder() -> Result<()> {
    let folder = prompt_path("Enter folder path: ")?;
    let bitrate = prompt_default("Audio bitrate", compress::DEFAULT_BITRATE)?;

    let videos = util::scan_media(&folder, &compress::VIDEO_EXTENSIONS);
    for video in videos {
        // small files are not worth the round-trip
        if util::file_size_gb(&video) <= compress::SIZE_THRESHOLD_GB {
            continue;
        }
        println!("compressing {}", util::file_name(&video));
        if let Err(err) = cli::execute(Commands::Compress(CompressArgs {
            input: video,
            bitrate: bitrate.clone(),
        })) {
            cli::report_error(&err);
        }
    }
    Ok(())
}

fn stitch_folder() -> Result<()> {
    let folder = prompt_path("Enter folder with videos: ")?;
    let ext = prompt("Extension (e.g. mp4): ")?;
    let ext = ext.trim_start_matches('.').to_string();

    let inputs = util::list_media(&folder, &[ext.as_str()]);
    if inputs.is_empty() {
        println!("No .{ext} files found.");
        return Ok(());
    }

    let name = prompt("Output filename: ")?;
    let output = folder.join(name);
    cli::execute(Commands::Stitch(StitchArgs { output, inputs }))
}

fn prompt(message: &str) -> Result<String> {
    print!("{message}");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

// pasted paths often come wrapped in quotes
fn prompt_path(message: &str) -> Result<PathBuf> {
    Ok(PathBuf::from(prompt(message)?.trim_matches('"')))
}

fn prompt_number<T: FromStr>(message: &str) -> Result<T> {
    prompt(message)?
        .parse::<T>()
        .map_err(|_| FfkError::InvalidInput("invalid number".to_string()))
}

fn prompt_default(message: &str, default: &str) -> Result<String> {
    let value = prompt(&format!("{message} [{default}]: "))?;
    Ok(if value.is_empty() {
        default.to_string()
    } else {
        value
    })
}
