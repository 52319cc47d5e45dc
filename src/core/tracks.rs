use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use crate::core::error::Result;
use crate::core::probe::StreamKind;
use crate::core::runner;

/// Remux that keeps only the tracks of `kind` at the given type-relative
/// indices; every other stream type is carried over untouched. The
/// keep-set is deduplicated and sorted, so surviving tracks keep their
/// container order no matter how the request was written. Out-of-range
/// indices are not validated here; ffmpeg rejects them.
pub fn args(input: &Path, output: &Path, kind: StreamKind, indices: &[u32]) -> Vec<String> {
    let spec = kind.specifier();
    let keep: BTreeSet<u32> = indices.iter().copied().collect();

    let mut args = vec![
        "-i".to_string(),
        input.display().to_string(),
        "-map".to_string(),
        "0".to_string(),
        // deselect every track of the type, then re-add the keep-set
        "-map".to_string(),
        format!("-0:{spec}"),
    ];
    for index in keep {
        args.push("-map".to_string());
        args.push(format!("0:{spec}:{index}"));
    }
    args.extend([
        "-c".to_string(),
        "copy".to_string(),
        "-y".to_string(),
        output.display().to_string(),
    ]);
    args
}

pub fn keep_tracks(
    input: &Path,
    output: &Path,
    kind: StreamKind,
    indices: &[u32],
) -> Result<PathBuf> {
    tracing::info!(
        input = %input.display(),
        kind = kind.label(),
        ?indices,
        "keeping selected tracks"
    );
    runner::run(runner::FFMPEG, &args(input, output, kind, indices))?;
    Ok(output.to_path_buf())
}
