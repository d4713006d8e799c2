use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// Returns the version string, including git hash and commit date for non-release builds.
/// Format: "0.3.0" for releases, "0.3.0@abc1234 2024-01-15 14:30" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "proclip", bin_name = "proclip", version = get_version())]
#[command(about = "Save files as templates and paste them with variables", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Increase log verbosity (repeat for more detail)
    #[arg(long, action = ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a new clip called NAME from file FILE
    #[command(alias = "n")]
    New {
        name: String,

        file: PathBuf,

        /// Directory the clip is saved to (defaults to the clip home)
        #[arg(short, long)]
        output_dir: Option<PathBuf>,
    },

    /// Paste the clip NAME to a file
    #[command(alias = "p")]
    Paste {
        name: String,

        /// Directory to load the clip from (defaults to the clip home)
        #[arg(short, long)]
        input_dir: Option<PathBuf>,

        /// File or directory to write to. For a directory, NAME and the clip's
        /// suffix are used as the file name
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Variables to pass to the clip, e.g. "msg=hello,count=3"
        #[arg(short, long)]
        variables: Option<String>,

        /// Overwrite an existing file on conflict
        #[arg(long)]
        overwrite: bool,
    },

    /// List stored clips
    #[command(alias = "ls")]
    List {
        /// Directory to list (defaults to the clip home)
        #[arg(short, long)]
        input_dir: Option<PathBuf>,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (overwrite, output-dir)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
