//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single
//! entry point for clip operations, whatever the client.
//!
//! It owns the resolved [`ClipPaths`] so callers never reach for ambient
//! state, dispatches to `commands/*.rs`, and returns `Result<CmdResult>`.
//! It does no printing and holds no business logic.

use crate::commands;
use crate::config::ClipPaths;
use crate::error::Result;
use std::path::{Path, PathBuf};

pub struct ClipApi {
    paths: ClipPaths,
}

impl ClipApi {
    pub fn new(paths: ClipPaths) -> Self {
        Self { paths }
    }

    pub fn new_clip(
        &self,
        name: &str,
        file: &Path,
        output_dir: Option<PathBuf>,
    ) -> Result<commands::CmdResult> {
        commands::new::run(&self.paths, name, file, output_dir)
    }

    pub fn paste_clip(&self, name: &str, options: PasteOptions) -> Result<commands::CmdResult> {
        commands::paste::run(&self.paths, name, options)
    }

    pub fn list_clips(&self, dir: Option<PathBuf>) -> Result<commands::CmdResult> {
        commands::list::run(&self.paths, dir)
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.paths, action)
    }

    pub fn paths(&self) -> &ClipPaths {
        &self.paths
    }
}

pub use commands::config::ConfigAction;
pub use commands::paste::PasteOptions;
pub use commands::{ClipEntry, CmdMessage, CmdResult, MessageLevel};

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn new_then_paste_then_list() {
        let temp = TempDir::new().unwrap();
        let api = ClipApi::new(ClipPaths::new(temp.path().join("home")));
        let source = temp.path().join("src.sh");
        fs::write(&source, "echo {{ word }}\n").unwrap();

        let created = api.new_clip("echo", &source, None).unwrap();
        assert_eq!(created.written_paths.len(), 1);

        let out = temp.path().join("out.sh");
        let pasted = api
            .paste_clip(
                "echo",
                PasteOptions {
                    output: Some(out.clone()),
                    variables: Some("word=hello".into()),
                    ..Default::default()
                },
            )
            .unwrap();
        assert_eq!(pasted.written_paths, vec![out.clone()]);
        assert_eq!(fs::read_to_string(&out).unwrap(), "echo hello\n");

        let listed = api.list_clips(None).unwrap();
        assert_eq!(listed.listed_clips.len(), 1);
        assert_eq!(listed.listed_clips[0].name, "echo");
    }

    #[test]
    fn config_uses_clip_home() {
        let temp = TempDir::new().unwrap();
        let api = ClipApi::new(ClipPaths::new(temp.path()));
        api.config(ConfigAction::Set("overwrite".into(), "true".into()))
            .unwrap();
        assert!(temp.path().join("config.json").exists());
        assert_eq!(api.paths().clips, temp.path());
    }
}
