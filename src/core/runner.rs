use std::process::{Command, Stdio};

use once_cell::sync::Lazy;
use regex::Regex;

use crate::core::error::{FfkError, Result};

pub const FFMPEG: &str = "ffmpeg";
pub const FFPROBE: &str = "ffprobe";

static RE_BANNER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^\s*(ffmpeg|ffprobe) version |^\s*built with |^\s*configuration:|^\s*lib(avutil|avcodec|avformat|avdevice|avfilter|swscale|swresample|postproc)",
    )
    .unwrap()
});

const STDERR_TAIL_LINES: usize = 12;

/// Tail of the diagnostic stream, minus the version banner noise, so
/// errors carry the lines that actually explain the failure.
pub fn stderr_excerpt(stderr: &str) -> String {
    let lines: Vec<&str> = stderr
        .lines()
        .filter(|line| !line.trim().is_empty() && !RE_BANNER.is_match(line))
        .collect();
    let start = lines.len().saturating_sub(STDERR_TAIL_LINES);
    lines[start..].join("\n")
}

fn map_spawn_error(tool: &'static str, err: std::io::Error) -> FfkError {
    if err.kind() == std::io::ErrorKind::NotFound {
        FfkError::BinaryNotFound { tool }
    } else {
        FfkError::Io(err)
    }
}

/// Runs the tool to completion; non-zero exit becomes `ProcessFailed`
/// carrying the filtered stderr.
pub fn run(tool: &'static str, args: &[String]) -> Result<()> {
    tracing::debug!(tool, cmd = %args.join(" "), "spawning");
    let output = Command::new(tool)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::piped())
        .output()
        .map_err(|err| map_spawn_error(tool, err))?;

    if output.status.success() {
        Ok(())
    } else {
        let stderr = String::from_utf8_lossy(&output.stderr);
        Err(FfkError::ProcessFailed {
            tool,
            exit_code: output.status.code(),
            stderr: stderr_excerpt(&stderr),
        })
    }
}

/// Like `run`, but captures stdout. Used for probing.
pub fn run_capture(tool: &'static str, args: &[String]) -> Result<String> {
    tracing::debug!(tool, cmd = %args.join(" "), "spawning");
    let output = Command::new(tool)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .map_err(|err| map_spawn_error(tool, err))?;

    if output.status.success() {
        Ok(String::from_utf8_lossy(&output.stdout).to_string())
    } else {
        let stderr = String::from_utf8_lossy(&output.stderr);
        Err(FfkError::ProcessFailed {
            tool,
            exit_code: output.status.code(),
            stderr: stderr_excerpt(&stderr),
        })
    }
}
