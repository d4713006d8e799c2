use chrono::{DateTime, Utc};
use colored::*;
use proclip::api::{ClipEntry, CmdMessage, MessageLevel};
use proclip::config::ProclipConfig;

const NAME_WIDTH: usize = 24;
const SUFFIX_WIDTH: usize = 8;
const TIME_WIDTH: usize = 14;

pub fn render_messages(messages: &[CmdMessage]) -> String {
    messages
        .iter()
        .map(|message| {
            let line = match message.level {
                MessageLevel::Info => message.content.dimmed(),
                MessageLevel::Success => message.content.green(),
                MessageLevel::Warning => message.content.yellow(),
                MessageLevel::Error => message.content.red(),
            };
            format!("{}\n", line)
        })
        .collect()
}

pub fn print_messages(messages: &[CmdMessage]) {
    print!("{}", render_messages(messages));
}

pub fn render_clip_list(clips: &[ClipEntry]) -> String {
    if clips.is_empty() {
        return "No clips found.\n".to_string();
    }

    let mut output = String::new();
    for clip in clips {
        let vars = if clip.variables.is_empty() {
            String::new()
        } else {
            clip.variables
                .iter()
                .map(|(k, v)| if v.is_empty() { k.clone() } else { format!("{}={}", k, v) })
                .collect::<Vec<_>>()
                .join(" ")
        };
        let time_ago = clip.modified.map(format_time_ago).unwrap_or_default();

        output.push_str(&format!(
            "{}{}{}{}\n",
            format!("{:<width$}", clip.name, width = NAME_WIDTH).bold(),
            format!("{:<width$}", clip.suffix, width = SUFFIX_WIDTH).yellow(),
            format!("{:>width$}", time_ago, width = TIME_WIDTH).dimmed(),
            if vars.is_empty() {
                String::new()
            } else {
                format!("  {}", vars.cyan())
            }
        ));
    }
    output
}

pub fn render_config(config: &ProclipConfig) -> String {
    ProclipConfig::KEYS
        .iter()
        .map(|key| format!("{} = {}\n", key, config.get(key).unwrap_or_default()))
        .collect()
}

fn format_time_ago(timestamp: DateTime<Utc>) -> String {
    let duration = Utc::now().signed_duration_since(timestamp);
    timeago::Formatter::new().convert(duration.to_std().unwrap_or_default())
}
