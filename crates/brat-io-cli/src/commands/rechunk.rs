//! Rechunk command - flatten a corpus into sentences and write fixed-size documents.

use std::path::PathBuf;

use brat_io::{AnnotationSchema, ChunkConfig, Sentence};
use colored::Colorize;

use crate::cli::unescape_delimiter;

/// Arguments of the rechunk command.
pub struct RechunkArgs {
    pub input: PathBuf,
    pub output: PathBuf,
    pub size: usize,
    pub prefix: Option<String>,
    pub delimiter: String,
    pub recursive: bool,
    pub config: bool,
    pub visual: bool,
}

pub fn run(args: RechunkArgs, verbose: bool) -> Result<(), Box<dyn std::error::Error>> {
    let io = super::brat_io(&args.delimiter);

    let documents = if args.recursive {
        io.read_directory_recursive(&args.input)?
    } else {
        io.read_directory(&args.input)?
    };

    let sentences: Vec<Sentence> = documents
        .iter()
        .flat_map(|d| d.sentences().iter().cloned())
        .collect();
    println!(
        "{} {} sentences from {} documents",
        "Read".cyan().bold(),
        sentences.len().to_string().white().bold(),
        documents.len()
    );

    let mut chunks = ChunkConfig::default()
        .with_size(args.size)
        .with_delimiter(unescape_delimiter(&args.delimiter));
    if let Some(prefix) = args.prefix {
        chunks = chunks.with_prefix(prefix);
    }

    let mut sink = io.directory_sink(&args.output);
    let written = io.save_chunks(&sentences, &chunks, &mut sink, args.config)?;

    if verbose {
        for document in &written {
            println!("  {} {}", "wrote".dimmed(), document.id);
        }
    }

    if args.visual {
        let schema = AnnotationSchema::infer_all(&written);
        io.write_visual_config(&schema, &mut sink)?;
    }

    println!(
        "{} {} documents to {}",
        "Saved".green().bold(),
        written.len().to_string().white().bold(),
        args.output.display().to_string().white()
    );
    Ok(())
}
