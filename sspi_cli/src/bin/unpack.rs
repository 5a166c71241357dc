//! Inspect an SSPI firmware image and optionally extract its sections.
//!
//! The header is always printed. With `--algo_file` / `--data_file` the
//! corresponding section is written out. Each file is written all-or-nothing,
//! but the pair is not: if the data write fails, an algo file already
//! extracted stays on disk.

use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use sspi_cli::{human_bytes, init_tracing};
use sspi_core::{unpack, write_image, HEADER_SIZE};

#[derive(Parser)]
#[command(
    name = "sspi-img-unpack",
    about = "Print the header of an ecp5-fpga-mgr .img file and split it back into .sea and .sed",
    version
)]
struct Cli {
    /// Packed image file
    image: PathBuf,
    /// Write the algo section to this path
    #[arg(short = 'a', long = "algo_file")]
    algo_file: Option<PathBuf>,
    /// Write the data section to this path
    #[arg(short = 'd', long = "data_file")]
    data_file: Option<PathBuf>,
    /// Log each step to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let image = fs::read(&cli.image)
        .with_context(|| format!("opening image file {:?}", cli.image))?;
    let parts = unpack(&image).with_context(|| format!("parsing image file {:?}", cli.image))?;
    let header = parts.header;

    println!("=== SSPI image: {:?} ===", cli.image);
    println!();
    println!("  header         : {} bytes", HEADER_SIZE);
    println!(
        "  algo_size      : {} ({})",
        header.algo_size,
        human_bytes(header.algo_size as u64)
    );
    println!(
        "  data_size      : {} ({})",
        header.data_size,
        human_bytes(header.data_size as u64)
    );
    println!("  algo offset    : {}", header.algo_range().start);
    println!("  data offset    : {}", header.data_range().start);
    println!("  image length   : {}", header.image_len());

    if let Some(path) = &cli.algo_file {
        write_image(path, parts.algo)?;
        eprintln!("  algo written to {:?}", path);
    }
    if let Some(path) = &cli.data_file {
        write_image(path, parts.data)?;
        eprintln!("  data written to {:?}", path);
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose)?;
    run(cli)
}
