//! exifstrip - EXIF removal for JPEG files.
//!
//! Rewrites each input JPEG as a sibling `.stripped` copy with every APP1
//! segment removed and all other bytes preserved.

mod discovery;
mod runner;

use anyhow::Result;
use clap::Parser;
use humansize::{format_size, BINARY};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "exifstrip")]
#[command(version, about = "Strip EXIF (APP1) metadata from JPEG files", long_about = None)]
struct Args {
    /// JPEG files or directories to process
    #[arg(value_name = "PATH")]
    paths: Vec<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .init();

    if args.paths.is_empty() {
        anyhow::bail!("Usage: exifstrip <jpg files or directories>");
    }

    let files = discovery::collect_jpeg_files(&args.paths);
    if files.is_empty() {
        anyhow::bail!("No .jpg files found");
    }

    log::info!("Processing {} file(s)", files.len());

    let summary = runner::run(&files);

    println!(
        "Done: {}/{} file(s) stripped, {} of metadata removed",
        summary.processed - summary.failed,
        summary.processed,
        format_size(summary.bytes_removed, BINARY)
    );

    if !summary.all_ok() {
        anyhow::bail!("{} file(s) failed", summary.failed);
    }

    Ok(())
}
