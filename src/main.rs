mod cli;
mod core;
mod menu;
mod util;
mod watch;

use clap::Parser;

use crate::core::runner::FFMPEG;
use crate::core::tools;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_target(false)
        .init();

    if !tools::is_available(FFMPEG) {
        eprintln!("CRITICAL: ffmpeg not found. Install it and add it to PATH.");
        std::process::exit(1);
    }

    let parsed = cli::Cli::parse();
    let result = match parsed.command {
        Some(command) => cli::execute(command),
        None => menu::run(),
    };

    if let Err(err) = result {
        cli::report_error(&err);
        std::process::exit(1);
    }
}
