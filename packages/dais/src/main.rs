use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use dais::page::{render_speaker_page, render_speaker_page_pretty, roster_or_empty};

/// Render the speakers section to a standalone HTML page.
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct ExportArgs {
    /// Output file; prints to stdout when omitted
    #[arg(long)]
    out: Option<PathBuf>,

    /// Base path prepended to relative portrait paths
    #[arg(long, default_value = "")]
    base_path: String,

    /// Emit indented markup instead of one compact line
    #[arg(long)]
    pretty: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let args = ExportArgs::parse();

    let speakers = roster_or_empty();
    tracing::info!(speakers = speakers.len(), "rendering speakers page");
    let html = if args.pretty {
        render_speaker_page_pretty(speakers, args.base_path)
    } else {
        render_speaker_page(speakers, args.base_path)
    };

    match args.out {
        Some(path) => {
            fs::write(&path, &html)
                .with_context(|| format!("writing rendered page to {}", path.display()))?;
            tracing::info!(path = %path.display(), bytes = html.len(), "export complete");
        }
        None => println!("{html}"),
    }

    Ok(())
}
