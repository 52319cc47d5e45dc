use std::fs;
use std::path::{Path, PathBuf};
use std::thread;
use std::time::Duration;

use crate::core::compress;
use crate::core::error::{FfkError, Result};
use crate::util;

const POLL_INTERVAL: Duration = Duration::from_secs(2);
/// Grace period so half-copied files are not picked up mid-transfer.
const SETTLE_DELAY: Duration = Duration::from_secs(1);

/// Polls `watch_dir` forever, compressing every video that appears into
/// `output_dir`. The source is deleted only after a successful run, so
/// a failed file stays put and is retried on the next cycle.
pub fn run(watch_dir: &Path, output_dir: &Path) -> Result<()> {
    fs::create_dir_all(watch_dir)?;
    fs::create_dir_all(output_dir)?;
    println!("watching {}", watch_dir.display());

    loop {
        for input in util::list_media(watch_dir, &compress::VIDEO_EXTENSIONS) {
            thread::sleep(SETTLE_DELAY);
            tracing::info!(input = %input.display(), "picked up");
            match compress_into(&input, output_dir) {
                Ok(output) => {
                    println!("done: {}", output.display());
                    fs::remove_file(&input)?;
                }
                Err(err) => {
                    tracing::warn!(error = %err, "compression failed, leaving file for retry");
                }
            }
        }
        thread::sleep(POLL_INTERVAL);
    }
}

fn compress_into(input: &Path, output_dir: &Path) -> Result<PathBuf> {
    let name = input
        .file_name()
        .ok_or_else(|| FfkError::InvalidInput(format!("bad file name: {}", input.display())))?;
    compress::run_to(input, &output_dir.join(name), compress::DEFAULT_BITRATE)
}
