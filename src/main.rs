use anyhow::{Context, Result};
use citegen::generator::Generator;
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

/// Renders the Awesome Story Visualization README from the curated catalog.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Curated catalog to read
    #[arg(default_value = "citations.json")]
    json_path: PathBuf,

    /// Markdown document to write (fully overwritten)
    #[arg(default_value = "README.md")]
    output_path: PathBuf,
}

fn main() -> Result<()> {
    let args = Args::parse();
    tracing_subscriber::fmt::init();

    info!("reading from {}", args.json_path.display());

    Generator::new(&args.json_path, &args.output_path)
        .run()
        .with_context(|| format!("failed to generate {}", args.output_path.display()))?;

    println!(
        "Successfully generated {} with sorted entries!",
        args.output_path.display()
    );
    Ok(())
}
