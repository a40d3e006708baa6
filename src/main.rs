use std::io::{self, BufWriter};

use anyhow::Context;
use foldpunch::{init_logging, run, BUILD_DATE, VERSION};
use foldpunch_settings::{config_path, Config};

fn main() -> anyhow::Result<()> {
    let path = config_path();
    let config = Config::load_or_default(path.as_deref()).context("Failed to load configuration")?;

    init_logging(&config.logging)?;
    tracing::info!("foldpunch {} (built {})", VERSION, BUILD_DATE);
    if let Some(path) = &path {
        tracing::info!("Using configuration from {}", path.display());
    }

    let stdout = io::stdout();
    run(io::stdin().lock(), BufWriter::new(stdout.lock()), &config)
}
