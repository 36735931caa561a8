//! # grounds-cad
//!
//! Batch driver for the coffee-grounds container generators: run every
//! part (or a selection) into an output directory in both formats, print
//! the dimension table, or start the web facade.

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use grounds_io::{write_mesh, OutputFormat};
use grounds_parts::{Dimensions, PartKind};
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "grounds-cad",
    version,
    about = "Parametric CAD generator for the coffee-grounds container system"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate part files (binary STL + STEP)
    Generate {
        /// Parts to generate (box, lid, spout, storage-scraper, fit-test,
        /// assembly); defaults to all of them, in that order
        #[arg(short, long, value_name = "PART")]
        part: Vec<String>,

        /// Output directory
        #[arg(short, long, default_value = config::constants::DEFAULT_OUTPUT_DIR)]
        out: PathBuf,

        /// Write STL only, skip the STEP boundary representation
        #[arg(long)]
        stl_only: bool,
    },

    /// Print the default dimension table as JSON
    Dims,

    /// Run the web facade (form + viewer + JSON API)
    Serve {
        /// Listen address
        #[arg(long, default_value = "127.0.0.1:5050")]
        addr: SocketAddr,

        /// Root directory for per-session output
        #[arg(short, long, default_value = "out/sessions")]
        out: PathBuf,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    match Cli::parse().command {
        Command::Generate {
            part,
            out,
            stl_only,
        } => generate(&part, &out, stl_only),
        Command::Dims => {
            let json = serde_json::to_string_pretty(&Dimensions::default())?;
            println!("{json}");
            Ok(())
        }
        Command::Serve { addr, out } => grounds_server::serve(addr, out)
            .await
            .context("web facade failed"),
    }
}

/// Runs the selected generators in fixed order, continuing past failures
/// and reporting them at the end.
fn generate(parts: &[String], out: &Path, stl_only: bool) -> anyhow::Result<()> {
    let parts: Vec<PartKind> = if parts.is_empty() {
        PartKind::all().to_vec()
    } else {
        parts
            .iter()
            .map(|name| name.parse::<PartKind>().map_err(anyhow::Error::msg))
            .collect::<anyhow::Result<_>>()?
    };

    let formats: &[OutputFormat] = if stl_only {
        &[OutputFormat::Stl]
    } else {
        OutputFormat::all()
    };

    let dims = Dimensions::default();
    let mut failed = Vec::new();

    for part in &parts {
        match run_part(*part, &dims, out, formats) {
            Ok(count) => tracing::info!(part = %part, files = count, "generated"),
            Err(err) => {
                tracing::error!(part = %part, error = %err, "generation failed");
                failed.push(part.name());
            }
        }
    }

    if failed.is_empty() {
        tracing::info!(out = %out.display(), "all parts generated");
        Ok(())
    } else {
        bail!("failed parts: {}", failed.join(", "));
    }
}

fn run_part(
    part: PartKind,
    dims: &Dimensions,
    out: &Path,
    formats: &[OutputFormat],
) -> anyhow::Result<usize> {
    let solids = part.generate(dims)?;
    let mut count = 0;
    for solid in &solids {
        let written = write_mesh(&solid.mesh, out, &solid.name, formats)
            .with_context(|| format!("writing {}", solid.name))?;
        for path in &written {
            tracing::debug!(path = %path.display(), "wrote");
        }
        count += written.len();
    }
    Ok(count)
}
