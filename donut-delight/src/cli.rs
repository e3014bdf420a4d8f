//! Command-line interface

use crate::core::Theme;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "donut-delight")]
#[command(about = "Browse and chomp the Donut Delight catalog.")]
pub struct CommandLine {
    /// Catalog host base URL
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Directory holding the current session
    #[arg(long, global = true)]
    pub session_dir: Option<PathBuf>,

    /// Log level or filter directive
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Show the home page
    Home,
    /// Show the donut list
    #[command(alias = "l")]
    List,
    /// Chomp a donut by id
    #[command(alias = "c")]
    Chomp { id: u64 },
    /// Clear every chomped donut
    Reset,
    /// Show the company info page
    Company,
    /// Open a page by path (e.g. /company)
    Open { path: String },
    /// Show or switch the theme
    Theme { theme: Option<Theme> },
    /// End the session: forget order, chomps and theme
    SessionEnd,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
