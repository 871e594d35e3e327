//! CLI argument parsing with clap.

use clap::Parser;
use std::path::PathBuf;

/// Render an image as ASCII art sized to the current terminal
#[derive(Parser, Debug)]
#[command(name = "asciiview")]
#[command(version, about = "Render an image as ASCII art in the terminal", long_about = None)]
pub struct Args {
    /// Path to the input image
    #[arg(long)]
    pub input: PathBuf,
}
