// Chunk: docs/chunks/outline_cli - Command line outline renderer

//! codemap: render or navigate a document snapshot from the command line.
//!
//! ```text
//! codemap render snapshot.json --css outline.css > outline.html
//! codemap navigate snapshot.json --direction next
//! ```
//!
//! Logging goes to stderr; use `RUST_LOG=codemap=debug` for details.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use codemap::memory_host::{DocumentSnapshot, MemoryDocument, MemoryWindow};
use codemap::{move_to_adjacent_symbol, Document, OutlineConfig, OutlineRenderer, Window};
use codemap_symbols::{IndentResolver, Step};

/// Live code map for split-pane editors
#[derive(Parser, Debug)]
#[command(name = "codemap")]
#[command(author, version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Settings file (defaults to the platform settings file)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the outline of a document snapshot
    Render {
        /// Document snapshot (JSON)
        snapshot: PathBuf,

        /// Stylesheet inlined into the markup
        #[arg(long)]
        css: Option<PathBuf>,

        /// Print the outline entries as JSON instead of markup
        #[arg(long)]
        json: bool,
    },

    /// Print the symbol the caret would move to
    Navigate {
        /// Document snapshot (JSON)
        snapshot: PathBuf,

        #[arg(long, value_enum, default_value_t = Direction::Next)]
        direction: Direction,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Direction {
    Next,
    Prev,
}

impl From<Direction> for Step {
    fn from(direction: Direction) -> Self {
        match direction {
            Direction::Next => Step::Next,
            Direction::Prev => Step::Previous,
        }
    }
}

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "codemap=warn".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .compact(),
        )
        .init();

    if let Err(e) = run(Cli::parse()) {
        eprintln!("codemap: {e:#}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = match &cli.config {
        Some(path) => OutlineConfig::load_from(path)
            .with_context(|| format!("invalid settings {}", path.display()))?,
        None => OutlineConfig::load(),
    };

    match cli.command {
        Commands::Render {
            snapshot,
            css,
            json,
        } => {
            let document = load_document(&snapshot)?;
            let resolver = IndentResolver::new();
            let content = OutlineRenderer::new(&resolver, config.enable_indent)
                .render(&document, &document.selected_lines());

            if json {
                println!("{}", serde_json::to_string_pretty(&content)?);
            } else {
                let css = match css {
                    Some(path) => fs::read_to_string(&path)
                        .with_context(|| format!("failed to read {}", path.display()))?,
                    None => String::new(),
                };
                println!("{}", content.to_html(&css));
            }
        }
        Commands::Navigate {
            snapshot,
            direction,
        } => {
            let document = load_document(&snapshot)?;
            let id = document.id();
            let mut window = MemoryWindow::new(1);
            window.open_document(document);

            let symbol = move_to_adjacent_symbol(&mut window, direction.into())?;
            let position = window
                .document(id)
                .map(|document| document.position_of(symbol.start()))
                .context("document vanished from its window")?;
            println!("{}\t{}", symbol.name, position);
        }
    }

    Ok(())
}

fn load_document(path: &Path) -> anyhow::Result<MemoryDocument> {
    let json =
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
    let snapshot = DocumentSnapshot::from_json(&json)
        .with_context(|| format!("invalid snapshot {}", path.display()))?;
    Ok(snapshot.into())
}
