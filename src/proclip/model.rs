use crate::error::{ClipError, Result};
use crate::format;
use crate::variables::{self, Variables};
use std::fs;
use std::path::{Path, PathBuf};

/// File extension of stored clips.
pub const CLIP_EXT: &str = "clip";

/// A named, reusable template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Clip {
    name: String,
    content: Vec<u8>,
    suffix: String,
    variables: Variables,
}

impl Clip {
    /// Builds a clip. When `variables` is `None` they are discovered from the
    /// placeholders in `content`, which must then be valid UTF-8.
    pub fn new(
        name: impl Into<String>,
        content: Vec<u8>,
        suffix: impl Into<String>,
        variables: Option<Variables>,
    ) -> Result<Self> {
        let variables = match variables {
            Some(vars) => vars,
            None => variables::find_variables(&content)?,
        };
        Ok(Self {
            name: name.into(),
            content,
            suffix: suffix.into(),
            variables,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn content(&self) -> &[u8] {
        &self.content
    }

    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    pub fn variables(&self) -> &Variables {
        &self.variables
    }

    /// Path of the clip called `name` inside `dir`.
    pub fn path_in(dir: &Path, name: &str) -> PathBuf {
        dir.join(format!("{}.{}", name, CLIP_EXT))
    }

    /// Loads `<from_dir>/<name>.clip`.
    pub fn read<P: AsRef<Path>>(name: &str, from_dir: P) -> Result<Self> {
        let path = Self::path_in(from_dir.as_ref(), name);
        let data = fs::read(&path)?;
        let record = format::decode(&data)?;
        tracing::debug!(
            path = %path.display(),
            bytes = data.len(),
            variables = record.variables.len(),
            "read clip"
        );
        Self::new(
            name,
            record.content,
            record.suffix,
            Some(record.variables),
        )
    }

    /// Serializes the clip to `to_file`, replacing anything already there.
    pub fn write<P: AsRef<Path>>(&self, to_file: P) -> Result<PathBuf> {
        let path = to_file.as_ref().to_path_buf();
        let data = format::encode(&self.suffix, &self.content, &self.variables)?;
        fs::write(&path, &data)?;
        tracing::debug!(path = %path.display(), bytes = data.len(), "wrote clip");
        Ok(path)
    }

    /// Renders the content with `vars` bound to its placeholders.
    pub fn transform_content(&self, vars: &Variables) -> Result<Vec<u8>> {
        let text = String::from_utf8(self.content.clone())?;
        Ok(variables::substitute(text, vars)?.into_bytes())
    }

    /// Renders the clip into `to_file`.
    ///
    /// `overrides` is a `k1=v1,k2=v2` string merged over the clip's defaults.
    /// Every variable must end up with a non-empty value; otherwise nothing is
    /// written.
    pub fn paste<P: AsRef<Path>>(&self, overrides: Option<&str>, to_file: P) -> Result<PathBuf> {
        let mut vars = self.variables.clone();
        if let Some(body) = overrides.filter(|body| !body.is_empty()) {
            vars.extend(variables::parse_variables(body)?);
        }

        if vars.values().any(|v| v.is_empty()) {
            return Err(ClipError::IncompleteVariableBindings);
        }

        let rendered = self.transform_content(&vars)?;
        let path = to_file.as_ref().to_path_buf();
        fs::write(&path, &rendered)?;
        tracing::debug!(path = %path.display(), bytes = rendered.len(), "pasted clip");
        Ok(path)
    }
}
