//! # Proclip CLI
//!
//! The binary is intentionally thin: the CLI lives in `cli/` and this file only
//! invokes `cli::run()` and handles process termination. All clip logic lives in
//! the library; see the crate docs of `proclip` for the layering.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
