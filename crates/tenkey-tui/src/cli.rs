//! CLI argument definitions using clap

use clap::Parser;
use std::path::PathBuf;

/// Tenkey: a keypad-driven desk calculator for the terminal
#[derive(Parser, Debug)]
#[command(name = "tenkey")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Replay a keystroke string headlessly and print the final display
    ///
    /// Digits, '.', '+', '-', '*', '/' and '=' work as on the keypad;
    /// 'c' clears, '<' deletes the last character. Whitespace is ignored.
    #[arg(short, long, value_name = "KEYS")]
    pub keys: Option<String>,

    /// Append tracing output to this file instead of stderr
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Suppress tracing output entirely
    #[arg(short, long)]
    pub quiet: bool,
}
