use crate::commands::helpers::{clip_dir, file_suffix};
use crate::commands::{CmdMessage, CmdResult};
use crate::config::ClipPaths;
use crate::error::Result;
use crate::model::Clip;
use std::fs;
use std::path::{Path, PathBuf};

/// Saves `file` as the clip `name`, in `output_dir` or the clip home.
pub fn run(
    paths: &ClipPaths,
    name: &str,
    file: &Path,
    output_dir: Option<PathBuf>,
) -> Result<CmdResult> {
    let content = fs::read(file)?;
    let clip = Clip::new(name, content, file_suffix(file), None)?;

    let dir = clip_dir(paths, output_dir)?;
    let path = clip.write(Clip::path_in(&dir, name))?;
    tracing::info!(
        name,
        path = %path.display(),
        variables = clip.variables().len(),
        "saved clip"
    );

    let mut result = CmdResult::default().with_written_path(path.clone());
    result.add_message(CmdMessage::success(format!(
        "Clip '{}' saved to {}",
        name,
        path.display()
    )));
    if !clip.variables().is_empty() {
        let names: Vec<&str> = clip.variables().keys().map(String::as_str).collect();
        result.add_message(CmdMessage::info(format!("Variables: {}", names.join(", "))));
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn saves_into_clip_home_by_default() {
        let temp = TempDir::new().unwrap();
        let source = temp.path().join("greet.py");
        fs::write(&source, "print('{{ msg = hi }}')\n").unwrap();
        let paths = ClipPaths::new(temp.path().join("clips"));

        let result = run(&paths, "greet", &source, None).unwrap();

        let expected = temp.path().join("clips").join("greet.clip");
        assert_eq!(result.written_paths, vec![expected.clone()]);
        assert!(expected.exists());

        let clip = Clip::read("greet", temp.path().join("clips")).unwrap();
        assert_eq!(clip.suffix(), ".py");
        assert_eq!(clip.variables().get("msg").map(String::as_str), Some("hi"));
    }

    #[test]
    fn saves_into_explicit_directory() {
        let temp = TempDir::new().unwrap();
        let source = temp.path().join("notes");
        fs::write(&source, "plain").unwrap();
        let paths = ClipPaths::new(temp.path().join("clips"));

        run(&paths, "n", &source, Some(temp.path().to_path_buf())).unwrap();

        assert!(temp.path().join("n.clip").exists());
        assert!(!temp.path().join("clips").exists());
        let clip = Clip::read("n", temp.path()).unwrap();
        assert_eq!(clip.suffix(), "");
        assert!(clip.variables().is_empty());
    }

    #[test]
    fn reports_discovered_variables() {
        let temp = TempDir::new().unwrap();
        let source = temp.path().join("t.txt");
        fs::write(&source, "{{ b }} {{ a = 1 }}").unwrap();
        let paths = ClipPaths::new(temp.path());

        let result = run(&paths, "t", &source, None).unwrap();
        assert!(result
            .messages
            .iter()
            .any(|m| m.content == "Variables: a, b"));
    }

    #[test]
    fn missing_source_file_is_an_io_error() {
        let temp = TempDir::new().unwrap();
        let paths = ClipPaths::new(temp.path());
        let err = run(&paths, "x", &temp.path().join("missing.txt"), None).unwrap_err();
        assert!(matches!(err, crate::error::ClipError::Io(_)));
    }
}
