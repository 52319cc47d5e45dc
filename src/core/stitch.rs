use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::core::error::{FfkError, Result};
use crate::core::runner;

/// One manifest line in the concat demuxer's list grammar: the whole
/// path single-quoted, embedded quotes escaped as `'\''`.
pub fn manifest_line(path: &Path) -> String {
    let escaped = path.display().to_string().replace('\'', "'\\''");
    format!("file '{escaped}'\n")
}

/// Manifest as a guarded temp file: dropping it removes the file, which
/// covers the success and failure paths alike.
pub fn write_manifest(inputs: &[PathBuf]) -> Result<NamedTempFile> {
    let mut manifest = tempfile::Builder::new()
        .prefix("ffkit-concat-")
        .suffix(".txt")
        .tempfile()?;
    for input in inputs {
        manifest.write_all(manifest_line(input).as_bytes())?;
    }
    manifest.flush()?;
    Ok(manifest)
}

pub fn concat_args(manifest: &Path, output: &Path) -> Vec<String> {
    vec![
        "-f".into(),
        "concat".into(),
        // absolute paths are fine in the manifest
        "-safe".into(),
        "0".into(),
        "-i".into(),
        manifest.display().to_string(),
        "-c".into(),
        "copy".into(),
        "-y".into(),
        output.display().to_string(),
    ]
}

/// Joins inputs sharing codec parameters into one file without
/// re-encoding. Codec compatibility is not validated in advance; ffmpeg
/// reports mismatches. The manifest never survives this call.
pub fn concat(inputs: &[PathBuf], output: &Path) -> Result<PathBuf> {
    if inputs.is_empty() {
        return Err(FfkError::InvalidInput("nothing to stitch".to_string()));
    }

    let manifest = write_manifest(inputs)?;
    tracing::info!(count = inputs.len(), output = %output.display(), "stitching");
    let result = runner::run(runner::FFMPEG, &concat_args(manifest.path(), output));
    drop(manifest);
    result.map(|_| output.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    // inverse of manifest_line, for the round-trip check
    fn parse_line(line: &str) -> Option<String> {
        let body = line.strip_prefix("file '")?.strip_suffix('\'')?;
        Some(body.replace("'\\''", "'"))
    }

    #[test]
    fn plain_paths_are_quoted() {
        assert_eq!(
            manifest_line(Path::new("/videos/part 1.mp4")),
            "file '/videos/part 1.mp4'\n"
        );
    }

    #[test]
    fn embedded_quotes_round_trip() {
        let original = "/videos/it's here/clip's.mp4";
        let line = manifest_line(Path::new(original));
        assert_eq!(line, "file '/videos/it'\\''s here/clip'\\''s.mp4'\n");
        assert_eq!(parse_line(line.trim_end()).as_deref(), Some(original));
    }

    #[test]
    fn manifest_lists_inputs_in_order_and_is_removed_on_drop() {
        let inputs = vec![PathBuf::from("a.mp4"), PathBuf::from("b.mp4")];
        let manifest = write_manifest(&inputs).unwrap();
        let path = manifest.path().to_path_buf();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content, "file 'a.mp4'\nfile 'b.mp4'\n");

        drop(manifest);
        assert!(!path.exists());
    }

    #[test]
    fn concat_refuses_empty_input() {
        assert!(matches!(
            concat(&[], Path::new("out.mp4")),
            Err(FfkError::InvalidInput(_))
        ));
    }

    #[test]
    fn concat_args_stream_copy() {
        let args = concat_args(Path::new("/tmp/list.txt"), Path::new("out.mp4"));
        assert_eq!(
            args,
            vec![
                "-f", "concat", "-safe", "0", "-i", "/tmp/list.txt", "-c", "copy", "-y",
                "out.mp4",
            ]
        );
    }
}
