use std::io;

use clap::Parser;
use lifo_term::Opts;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let opts = Opts::parse();
    if let Some(log) = &opts.log {
        let file = std::fs::OpenOptions::new().create(true).append(true).open(log)?;
        tracing_subscriber::fmt()
            .with_writer(file)
            .with_ansi(false)
            .with_env_filter(EnvFilter::from_env("LIFO_LOG"))
            .init();
    }

    let config = opts.config();
    let stdin = io::stdin().lock();
    let stdout = io::stdout().lock();
    lifo_term::run(opts.cmd, &config, stdin, stdout)
}
