//! Context setup and per-command handlers.
//!
//! `run()` parses arguments, installs logging, resolves the clip directory
//! into a [`ClipApi`], dispatches, and prints the resulting messages. Any
//! error bubbles up to `main`, which reports it and exits non-zero.

use super::logging::{init_logging, LogConfig};
use super::render::{print_messages, render_clip_list, render_config};
use super::setup::{Cli, Commands};
use clap::Parser;
use proclip::api::{ClipApi, ConfigAction, PasteOptions};
use proclip::config::ClipPaths;
use proclip::error::{ClipError, Result};
use std::path::{Path, PathBuf};

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    if let Err(e) = init_logging(&LogConfig::from_verbosity(cli.verbose)) {
        eprintln!("Warning: failed to initialize logging: {}", e);
    }

    let api = ClipApi::new(ClipPaths::from_env()?);
    tracing::debug!(clips = %api.paths().clips.display(), "resolved clip home");

    match cli.command {
        Some(Commands::New {
            name,
            file,
            output_dir,
        }) => handle_new(&api, &name, &file, output_dir),
        Some(Commands::Paste {
            name,
            input_dir,
            output,
            variables,
            overwrite,
        }) => handle_paste(
            &api,
            &name,
            PasteOptions {
                input_dir,
                output,
                variables,
                overwrite,
            },
        ),
        Some(Commands::List { input_dir }) => handle_list(&api, input_dir),
        Some(Commands::Config { key, value }) => handle_config(&api, key, value),
        None => handle_list(&api, None),
    }
}

fn handle_new(api: &ClipApi, name: &str, file: &Path, output_dir: Option<PathBuf>) -> Result<()> {
    if name.is_empty() {
        return Err(ClipError::Api("Clip name cannot be empty".into()));
    }
    let result = api.new_clip(name, file, output_dir)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_paste(api: &ClipApi, name: &str, options: PasteOptions) -> Result<()> {
    let result = api.paste_clip(name, options)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(api: &ClipApi, input_dir: Option<PathBuf>) -> Result<()> {
    let result = api.list_clips(input_dir)?;
    print!("{}", render_clip_list(&result.listed_clips));
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(api: &ClipApi, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };

    let result = api.config(action)?;
    if let Some(config) = &result.config {
        if result.messages.is_empty() {
            print!("{}", render_config(config));
        }
    }
    print_messages(&result.messages);
    Ok(())
}
