//! Normalize command - re-serialize a directory of documents.

use std::path::PathBuf;

use colored::Colorize;

pub fn run(
    input: PathBuf,
    output: PathBuf,
    delimiter: String,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let io = super::brat_io(&delimiter);
    let documents = io.read_directory(&input)?;

    let mut sink = io.directory_sink(&output);
    for document in &documents {
        io.write_document(document, &mut sink)?;
        if verbose {
            println!("  {} {}", "wrote".dimmed(), document.id);
        }
    }

    println!(
        "{} {} documents to {}",
        "Normalized".green().bold(),
        documents.len().to_string().white().bold(),
        output.display().to_string().white()
    );
    Ok(())
}
