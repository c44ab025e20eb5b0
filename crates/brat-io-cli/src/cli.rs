//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// brat-io: read, normalize and re-chunk brat standoff annotations
#[derive(Parser)]
#[command(name = "brat-io")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Parse one text/annotation pair and summarize it
    Inspect {
        /// Path to the text file
        #[arg(value_name = "TEXT")]
        text: PathBuf,

        /// Path to the annotation file (default: TEXT with .ann extension)
        #[arg(value_name = "ANN")]
        annotations: Option<PathBuf>,

        /// Sentence delimiter (escapes like \n are understood)
        #[arg(short, long, default_value = "\\n")]
        delimiter: String,

        /// Print the structured JSON form instead of a summary
        #[arg(long)]
        json: bool,
    },

    /// Re-serialize every document of a directory
    Normalize {
        /// Directory holding .txt/.ann pairs
        #[arg(value_name = "INPUT_DIR")]
        input: PathBuf,

        /// Output directory
        #[arg(short, long)]
        output: PathBuf,

        /// Sentence delimiter (escapes like \n are understood)
        #[arg(short, long, default_value = "\\n")]
        delimiter: String,
    },

    /// Flatten a corpus into sentences and write fixed-size documents
    Rechunk {
        /// Directory holding .txt/.ann pairs
        #[arg(value_name = "INPUT_DIR")]
        input: PathBuf,

        /// Output directory
        #[arg(short, long)]
        output: PathBuf,

        /// Sentences per output document
        #[arg(short, long, default_value = "10")]
        size: usize,

        /// Prefix for output document ids
        #[arg(short, long)]
        prefix: Option<String>,

        /// Sentence delimiter, used for splitting and joining
        #[arg(short, long, default_value = "\\n")]
        delimiter: String,

        /// Also read immediate subdirectories
        #[arg(short, long)]
        recursive: bool,

        /// Write annotation.conf for the output
        #[arg(long)]
        config: bool,

        /// Write visual.conf with a colour per type
        #[arg(long)]
        visual: bool,
    },

    /// Infer annotation.conf from a corpus
    Schema {
        /// Directory holding .txt/.ann pairs
        #[arg(value_name = "INPUT_DIR")]
        input: PathBuf,

        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Sentence delimiter (escapes like \n are understood)
        #[arg(short, long, default_value = "\\n")]
        delimiter: String,

        /// Also read immediate subdirectories
        #[arg(short, long)]
        recursive: bool,
    },
}

/// Turn `\n`, `\t`, `\r` and `\\` escapes into the characters they name.
///
/// Unknown escapes are kept as written.
pub fn unescape_delimiter(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('r') => out.push('\r'),
            Some('\\') => out.push('\\'),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
    out
}
