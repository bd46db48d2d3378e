//! Command-line runner: `matops [SIZE] [--workers W] [--seed S]`.

use std::io::{self, IsTerminal};
use std::process::ExitCode;

use clap::Parser;
use matops::config::{Args, Config};
use matops::matrix::format::write_report;
use tracing::error;
use tracing_subscriber::filter::{FilterExt, LevelFilter, Targets};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    // Warnings and fatal errors from matops reach stderr whatever RUST_LOG says.
    let floor = Targets::new().with_target("matops", LevelFilter::WARN);
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(io::stderr)
                .with_ansi(io::stderr().is_terminal())
                .with_filter(filter.or(floor)),
        )
        .init();

    // Usage errors print to stderr and exit non-zero here.
    let config = Config::from_args(Args::parse());

    let store = match matops::run(&config) {
        Ok(store) => store,
        Err(err) => {
            error!("{}", err);
            return ExitCode::FAILURE;
        }
    };

    if let Err(err) = write_report(&mut io::stdout().lock(), &store) {
        error!("failed to write results: {}", err);
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
