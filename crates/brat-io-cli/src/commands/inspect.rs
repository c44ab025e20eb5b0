//! Inspect command - parse one document and summarize it.

use std::path::PathBuf;

use colored::Colorize;

pub fn run(
    text: PathBuf,
    annotations: Option<PathBuf>,
    delimiter: String,
    json_output: bool,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let io = super::brat_io(&delimiter);

    let annotations = annotations.unwrap_or_else(|| {
        let name = text.file_name().unwrap_or_default().to_string_lossy();
        text.with_file_name(io.annotation_path_for(&name))
    });
    let document = io.read_document(&text, &annotations)?;

    if json_output {
        let value = serde_json::json!({
            "document": document.embed_json(),
            "sentences": document.sentences(),
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    println!("{} {}", "Document".cyan().bold(), document.id.white());
    println!();
    println!(
        "Entities:  {}",
        document.all_entities().count().to_string().white().bold()
    );
    println!(
        "Events:    {}",
        document.all_events().count().to_string().white().bold()
    );
    println!(
        "Relations: {}",
        document.all_relations().count().to_string().white().bold()
    );
    println!(
        "Sentences: {}",
        document.sentences().len().to_string().white().bold()
    );

    if document.has_undistributed() && !document.sentences().is_empty() {
        println!();
        println!(
            "{} {} entities and {} events are not inside any sentence",
            "Warning:".yellow().bold(),
            document.entities.len(),
            document.events.len()
        );
    }

    if verbose {
        println!();
        println!("{}", document.to_brat_string());
    }

    Ok(())
}
