//! Command-line interface

use clap::Parser;
use std::path::PathBuf;

/// Analyses the metrics to generate a report.
#[derive(Parser, Debug, Clone)]
#[command(name = "metric-analyser")]
#[command(version, about = "Analyses the metrics to generate a report.", long_about = None)]
pub struct Cli {
    /// JSON metrics document to analyse
    #[arg(short, long, value_name = "PATH")]
    pub input: PathBuf,

    /// Disable colored diagnostics
    #[arg(long)]
    pub no_color: bool,

    /// Enable verbose output
    #[arg(long)]
    pub verbose: bool,

    /// Enable debug output
    #[arg(long)]
    pub debug: bool,
}

impl Cli {
    /// Check if colors should be enabled for diagnostics
    pub fn use_colors(&self) -> bool {
        !self.no_color && supports_color()
    }
}

/// Check if the terminal supports color output
pub fn supports_color() -> bool {
    color_from_env(
        std::env::var("TERM").ok().as_deref(),
        std::env::var_os("NO_COLOR").is_some(),
        std::env::var_os("FORCE_COLOR").is_some(),
    )
}

fn color_from_env(term: Option<&str>, no_color: bool, force_color: bool) -> bool {
    if term == Some("dumb") || no_color {
        return false;
    }

    if force_color {
        return true;
    }

    // On Windows, check for ANSICON or ConEmu
    #[cfg(target_os = "windows")]
    {
        if std::env::var("ANSICON").is_ok() || std::env::var("ConEmuANSI").is_ok() {
            return true;
        }
    }

    // Default to true on Unix-like systems, false on Windows
    #[cfg(unix)]
    {
        true
    }
    #[cfg(not(unix))]
    {
        false
    }
}
