use crate::commands::{ClipEntry, CmdMessage, CmdResult};
use crate::config::ClipPaths;
use crate::error::Result;
use crate::model::{Clip, CLIP_EXT};
use chrono::{DateTime, Utc};
use std::fs;
use std::path::PathBuf;

/// Lists the clips stored in `dir` (the clip home by default), sorted by name.
///
/// Files that carry the clip extension but fail to decode are reported as
/// warnings rather than failing the whole listing.
pub fn run(paths: &ClipPaths, dir: Option<PathBuf>) -> Result<CmdResult> {
    let dir = dir.unwrap_or_else(|| paths.clips.clone());
    let mut result = CmdResult::default();
    if !dir.is_dir() {
        return Ok(result);
    }

    let mut names: Vec<String> = Vec::new();
    for entry in fs::read_dir(&dir)? {
        let path = entry?.path();
        if !path.is_file() || path.extension().and_then(|e| e.to_str()) != Some(CLIP_EXT) {
            continue;
        }
        if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
            names.push(stem.to_string());
        }
    }
    names.sort();

    let mut listed = Vec::with_capacity(names.len());
    for name in names {
        let path = Clip::path_in(&dir, &name);
        match Clip::read(&name, &dir) {
            Ok(clip) => {
                let modified = fs::metadata(&path)
                    .and_then(|m| m.modified())
                    .ok()
                    .map(DateTime::<Utc>::from);
                listed.push(ClipEntry {
                    name,
                    suffix: clip.suffix().to_string(),
                    variables: clip.variables().clone(),
                    path,
                    modified,
                });
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "skipping unreadable clip");
                result.add_message(CmdMessage::warning(format!("Skipped {}: {}", name, e)));
            }
        }
    }

    Ok(result.with_listed_clips(listed))
}
