use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::debug;

use sspi_cli::{human_bytes, init_tracing};
use sspi_core::{pack, read_section, write_image, Section, DEFAULT_IMAGE_FILE};

// ── CLI definition ─────────────────────────────────────────────────────────

#[derive(Parser)]
#[command(
    name = "sspi-img-pack",
    about = "Make .img file from .sea and .sed files for ecp5-fpga-mgr driver",
    version
)]
struct Cli {
    /// algo file (usually .sea)
    algo: PathBuf,
    /// data file (usually .sed)
    data: PathBuf,
    /// result image file name
    #[arg(short = 'i', long = "image_file", default_value = DEFAULT_IMAGE_FILE)]
    image_file: PathBuf,
    /// Log each step to stderr
    #[arg(short, long)]
    verbose: bool,
}

// ── Entry point ────────────────────────────────────────────────────────────

fn run(cli: Cli) -> anyhow::Result<()> {
    // Both inputs are read before the output path is touched.
    let algo = read_section(Section::Algo, &cli.algo)?;
    let data = read_section(Section::Data, &cli.data)?;

    let image = pack(&algo, &data)
        .with_context(|| format!("packing {:?} and {:?}", cli.algo, cli.data))?;
    debug!(image_len = image.len(), "image ready");

    write_image(&cli.image_file, &image)?;

    eprintln!("  algo        : {}", human_bytes(algo.len() as u64));
    eprintln!("  data        : {}", human_bytes(data.len() as u64));
    eprintln!("  image       : {}", human_bytes(image.len() as u64));
    eprintln!("  written to  : {:?}", cli.image_file);
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose)?;
    run(cli)
}
