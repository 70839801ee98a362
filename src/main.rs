use std::io::{self, Write};

use breaking_oa::demo::DRIVERS;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // stdout carries the observations, so logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let mut out = io::stdout().lock();
    let mut err = io::stderr();

    for (name, driver) in DRIVERS {
        writeln!(out, "== {name} ==")?;
        driver(&mut out, &mut err)?;
    }

    out.flush()?;
    Ok(())
}
