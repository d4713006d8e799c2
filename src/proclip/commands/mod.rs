//! # Command Layer
//!
//! One module per operation. Commands take explicit directories (via
//! [`crate::config::ClipPaths`]) and plain Rust values, and return a
//! [`CmdResult`]. They never print; rendering is the client's job.

use crate::config::ProclipConfig;
use crate::variables::Variables;
use chrono::{DateTime, Utc};
use std::path::PathBuf;

pub mod config;
pub mod helpers;
pub mod list;
pub mod new;
pub mod paste;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// A stored clip as shown by `list`.
#[derive(Debug, Clone)]
pub struct ClipEntry {
    pub name: String,
    pub suffix: String,
    pub variables: Variables,
    pub path: PathBuf,
    pub modified: Option<DateTime<Utc>>,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub written_paths: Vec<PathBuf>,
    pub listed_clips: Vec<ClipEntry>,
    pub config: Option<ProclipConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_written_path(mut self, path: PathBuf) -> Self {
        self.written_paths.push(path);
        self
    }

    pub fn with_listed_clips(mut self, clips: Vec<ClipEntry>) -> Self {
        self.listed_clips = clips;
        self
    }

    pub fn with_config(mut self, config: ProclipConfig) -> Self {
        self.config = Some(config);
        self
    }
}
