//! Shared plumbing for the `sspi-img-pack` and `sspi-img-unpack` binaries.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install the stderr `tracing` subscriber.
///
/// `RUST_LOG` wins when set; otherwise `verbose` selects debug output for the
/// image crates and warnings only for everything else.
pub fn init_tracing(verbose: bool) -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env().or_else(|_| {
        if verbose {
            EnvFilter::try_new("sspi_core=debug,sspi_cli=debug,info")
        } else {
            EnvFilter::try_new("warn")
        }
    })?;

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(verbose)
                .without_time()
                .compact(),
        )
        .try_init()?;
    Ok(())
}

/// Render a byte count with a binary unit: `1023 B`, `1.50 KB`, `4.00 GB`.
pub fn human_bytes(n: u64) -> String {
    const SCALED: [&str; 4] = ["KB", "MB", "GB", "TB"];
    if n < 1024 {
        return format!("{n} B");
    }
    let mut value = n as f64 / 1024.0;
    let mut unit = SCALED[0];
    for next in &SCALED[1..] {
        if value < 1024.0 {
            break;
        }
        value /= 1024.0;
        unit = *next;
    }
    format!("{value:.2} {unit}")
}
