use crate::config::ClipPaths;
use crate::error::Result;
use std::path::{Path, PathBuf};

/// The explicit directory if given, otherwise the clip home (created on demand).
pub fn clip_dir(paths: &ClipPaths, explicit: Option<PathBuf>) -> Result<PathBuf> {
    match explicit {
        Some(dir) => Ok(dir),
        None => Ok(paths.ensure_clips_dir()?.to_path_buf()),
    }
}

/// The extension of `file` with its leading dot, or an empty string.
pub fn file_suffix(file: &Path) -> String {
    file.extension()
        .map(|ext| format!(".{}", ext.to_string_lossy()))
        .unwrap_or_default()
}
