//! Writes the hosting API documentation pack and remap file.
//!
//! `hostdoc <path-to-output-pack> <path-to-rsp>`
//!
//! Exit status: 0 on success, 1 on a usage error, 2 when interrupted,
//! 3 on any other failure.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::Parser;
use tracing::info;

use hostdoc::emit::{self, EmitPlan};
use hostdoc::{CancellationToken, Catalog, Error};

const EXIT_USAGE: u8 = 1;
const EXIT_CANCELED: u8 = 2;
const EXIT_FAILURE: u8 = 3;

#[derive(Parser)]
#[command(
    name = "hostdoc",
    version,
    about = "Compile the hosting API documentation catalog into a binary pack and a member-remap response file"
)]
struct Cli {
    /// Binary pack to write
    #[arg(value_name = "path-to-output-pack")]
    pack: PathBuf,

    /// Member-remap response file to write
    #[arg(value_name = "path-to-rsp")]
    rsp: PathBuf,

    /// Read the catalog from a JSON file instead of the built-in hosting API table
    #[arg(short = 'c', long, value_name = "PATH")]
    catalog: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
                _ => ExitCode::from(EXIT_USAGE),
            };
        }
    };

    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let status = failure_status(&err);
            if status == EXIT_FAILURE {
                eprintln!("error: {:#}", err);
            }
            ExitCode::from(status)
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let cancel = CancellationToken::new();
    let on_interrupt = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            println!("Canceling...");
            on_interrupt.cancel();
        }
    });
    // let the listener install its handler before any work starts
    tokio::task::yield_now().await;

    println!("Parsing documents...");
    let catalog = match &cli.catalog {
        Some(path) => Catalog::load(path)
            .with_context(|| format!("failed to load catalog {}", path.display()))?,
        None => Catalog::hosting().context("built-in hosting catalog is invalid")?,
    };
    info!(entries = catalog.len(), "catalog built");
    cancel.check()?;

    let plan = EmitPlan {
        pack_path: cli.pack,
        rsp_path: cli.rsp,
    };
    println!(
        "Writing results to \"{}\" and \"{}\".",
        plan.pack_path.display(),
        plan.rsp_path.display()
    );
    emit::emit_all(&catalog, &plan, &cancel).await?;
    Ok(())
}

/// Exit status for a failed run: cancellation anywhere in the chain wins.
fn failure_status(err: &anyhow::Error) -> u8 {
    let canceled = err
        .chain()
        .any(|cause| matches!(cause.downcast_ref::<Error>(), Some(Error::Canceled)));
    if canceled {
        EXIT_CANCELED
    } else {
        EXIT_FAILURE
    }
}
