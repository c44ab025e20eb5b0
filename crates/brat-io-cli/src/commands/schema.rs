//! Schema command - infer annotation.conf from a corpus.

use std::fs;
use std::path::PathBuf;

use brat_io::AnnotationSchema;
use colored::Colorize;

pub fn run(
    input: PathBuf,
    output: Option<PathBuf>,
    delimiter: String,
    recursive: bool,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let io = super::brat_io(&delimiter);

    let documents = if recursive {
        io.read_directory_recursive(&input)?
    } else {
        io.read_directory(&input)?
    };
    let schema = AnnotationSchema::infer_all(&documents);
    let config = schema.to_config_string();

    match output {
        Some(path) => {
            fs::write(&path, &config)?;
            println!(
                "{} {} entity, {} event and {} relation types to {}",
                "Wrote".green().bold(),
                schema.plain_entity_types().len(),
                schema.events.len(),
                schema.relations.len(),
                path.display().to_string().white()
            );
        }
        None => print!("{}", config),
    }

    if verbose {
        eprintln!("Inferred from {} documents", documents.len());
    }
    Ok(())
}
