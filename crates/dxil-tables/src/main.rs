use std::io::{self, Write};

use dxil_tables::config::Config;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let config = Config::load();

    let filter = EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    tracing::debug!(format = ?config.format, command = ?config.command, "starting");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    dxil_tables::run(&config, &mut out)?;
    out.flush()?;
    Ok(())
}
