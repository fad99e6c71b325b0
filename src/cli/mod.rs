pub mod check;
pub mod completions;
pub mod create;
pub mod effect;
pub mod export;
pub mod mark;
pub mod show;
pub mod view;

mod files;
mod values;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// pgm - read, transform and write plain-text PGM (P2) images
#[derive(Parser, Debug)]
#[command(name = "pgm")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Settings file (default: ./pgm.yaml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print image attributes and pixel values
    Show(show::ShowArgs),

    /// Display an image with characters standing for grey levels
    View(view::ViewArgs),

    /// Apply effects (negative, flips, rotations) and write the result
    Effect(effect::EffectArgs),

    /// Embed a digit string into the lowest decimal digit of the pixels
    Mark(mark::MarkArgs),

    /// Read back digits embedded with `mark`
    Reveal(mark::RevealArgs),

    /// Create a new image from explicit values
    Create(create::CreateArgs),

    /// Check that files decode
    Check(check::CheckArgs),

    /// Export an image as an 8-bit greyscale PNG
    Export(export::ExportArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}
