use crate::commands::helpers::clip_dir;
use crate::commands::{CmdMessage, CmdResult};
use crate::config::{ClipPaths, ProclipConfig};
use crate::error::{ClipError, Result};
use crate::model::Clip;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, Default)]
pub struct PasteOptions {
    /// Directory to load the clip from (defaults to the clip home)
    pub input_dir: Option<PathBuf>,
    /// Target file or directory (defaults to the configured output dir, then the cwd)
    pub output: Option<PathBuf>,
    /// `k1=v1,k2=v2` overrides
    pub variables: Option<String>,
    pub overwrite: bool,
}

pub fn run(paths: &ClipPaths, name: &str, options: PasteOptions) -> Result<CmdResult> {
    let config = ProclipConfig::load(&paths.clips)?;
    let input_dir = clip_dir(paths, options.input_dir)?;
    let clip = Clip::read(name, &input_dir)?;

    let target = resolve_target(&clip, options.output, config.output_dir)?;
    if target.exists() && !(options.overwrite || config.overwrite) {
        return Err(ClipError::FileExists(target));
    }

    let path = clip.paste(options.variables.as_deref(), &target)?;
    tracing::info!(name, path = %path.display(), "pasted clip");

    let mut result = CmdResult::default().with_written_path(path.clone());
    result.add_message(CmdMessage::success(format!(
        "Clip '{}' pasted to {}",
        name,
        path.display()
    )));
    Ok(result)
}

/// Output path for `clip`. An explicit `output` is used as given, or as the
/// directory for `<name><suffix>` when it is one. Otherwise the file goes into
/// the configured output directory (created if missing) or the cwd.
fn resolve_target(
    clip: &Clip,
    output: Option<PathBuf>,
    default_dir: Option<PathBuf>,
) -> Result<PathBuf> {
    let file_name = format!("{}{}", clip.name(), clip.suffix());

    if let Some(path) = output {
        if path.is_dir() {
            return Ok(path.join(file_name));
        }
        return Ok(path);
    }

    match default_dir {
        Some(dir) => {
            if !dir.exists() {
                fs::create_dir_all(&dir)?;
                tracing::info!(path = %dir.display(), "created output directory");
            }
            Ok(dir.join(file_name))
        }
        None => Ok(std::env::current_dir()?.join(file_name)),
    }
}
