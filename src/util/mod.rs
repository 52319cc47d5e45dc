use std::path::{Path, PathBuf};

use walkdir::WalkDir;

/// `movie.mkv` + `_subbed` -> `movie_subbed.mkv`; an explicit extension
/// overrides the input's.
pub fn with_suffix(path: &Path, suffix: &str, extension: Option<&str>) -> PathBuf {
    let stem = path.file_stem().and_then(|s| s.to_str()).unwrap_or_default();
    let ext = match extension {
        Some(ext) => Some(ext.to_string()),
        None => path.extension().and_then(|e| e.to_str()).map(str::to_string),
    };
    let name = match ext {
        Some(ext) => format!("{stem}{suffix}.{ext}"),
        None => format!("{stem}{suffix}"),
    };
    path.with_file_name(name)
}

fn has_extension(path: &Path, extensions: &[&str]) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| extensions.iter().any(|want| want.eq_ignore_ascii_case(e)))
        .unwrap_or(false)
}

/// Recursively collects files matching the extension allowlist
/// (case-insensitive, no leading dot), sorted for stable batch order.
pub fn scan_media(root: &Path, extensions: &[&str]) -> Vec<PathBuf> {
    collect_media(WalkDir::new(root), extensions)
}

/// Non-recursive variant: only direct children of `dir`.
pub fn list_media(dir: &Path, extensions: &[&str]) -> Vec<PathBuf> {
    collect_media(WalkDir::new(dir).max_depth(1), extensions)
}

fn collect_media(walker: WalkDir, extensions: &[&str]) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = walker
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.into_path())
        .filter(|path| has_extension(path, extensions))
        .collect();
    files.sort();
    files
}

pub fn file_size_gb(path: &Path) -> f64 {
    std::fs::metadata(path)
        .map(|meta| meta.len() as f64 / (1024.0 * 1024.0 * 1024.0))
        .unwrap_or(0.0)
}

pub fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
