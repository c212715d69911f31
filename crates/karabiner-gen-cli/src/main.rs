//! karabiner-gen CLI
//!
//! Prints the generated Karabiner-Elements configuration to stdout.

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "karabiner-gen")]
#[command(about = "Generate a Karabiner-Elements configuration on stdout")]
#[command(version)]
struct Cli {}

fn main() -> miette::Result<()> {
    // Initialize tracing; stdout is reserved for the document
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let _cli = Cli::parse();

    tracing::debug!("Generating configuration document");
    let document = karabiner_gen_config::build_document();

    karabiner_gen_config::write_document(&document, std::io::stdout().lock())?;

    Ok(())
}
