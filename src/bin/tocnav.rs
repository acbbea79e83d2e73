//! CLI tool for tocnav - scans an (X)HTML file and outputs its navigation panel
//!
//! Usage:
//!   tocnav <input.html>                 # Panel markup to stdout
//!   tocnav <input.html> --json          # Heading outline as JSON
//!   tocnav <input.html> -o panel.html   # Write output to file

#![allow(clippy::exit)]

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use tocnav::{outline_from_markup, NavModel, TocConfig, TocError};

#[derive(Parser, Debug)]
#[command(name = "tocnav", version, about = "Build a table-of-contents panel from document headings")]
struct Cli {
    /// Input (X)HTML document
    input: PathBuf,

    /// Output file (defaults to stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print the heading outline as JSON instead of panel markup
    #[arg(long)]
    json: bool,

    /// Tag of section headings
    #[arg(long, default_value = tocnav::config::DEFAULT_SECTION_TAG)]
    section: String,

    /// Tag of subsection headings
    #[arg(long, default_value = tocnav::config::DEFAULT_SUBSECTION_TAG)]
    subsection: String,

    /// Class of the panel container
    #[arg(long, default_value = tocnav::config::DEFAULT_PANEL_CLASS)]
    panel_class: String,
}

fn run(cli: &Cli) -> Result<String, TocError> {
    let config = TocConfig {
        section_tag: cli.section.clone(),
        subsection_tag: cli.subsection.clone(),
        panel_class: cli.panel_class.clone(),
        ..TocConfig::static_panel()
    };
    config.validate()?;

    let markup = fs::read_to_string(&cli.input)?;
    let outline = outline_from_markup(&markup, &config)?;
    debug!(
        sections = outline.sections().len(),
        headings = outline.len(),
        "outline built"
    );

    if cli.json {
        Ok(serde_json::to_string_pretty(&outline)?)
    } else {
        Ok(NavModel::from_outline(&outline).to_html(&config))
    }
}

fn main() {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let rendered = match run(&cli) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("Error processing {}: {}", cli.input.display(), e);
            std::process::exit(1);
        }
    };

    match &cli.output {
        Some(path) => {
            if let Err(e) = fs::write(path, &rendered) {
                eprintln!("Error writing {}: {}", path.display(), e);
                std::process::exit(1);
            }
            eprintln!("Written: {}", path.display());
        }
        None => {
            let mut stdout = io::stdout();
            if let Err(e) = writeln!(stdout, "{rendered}") {
                eprintln!("Error writing output: {e}");
                std::process::exit(1);
            }
        }
    }
}
