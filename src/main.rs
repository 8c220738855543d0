// src/main.rs
use std::process::ExitCode;

use clap::Parser;
use zx_tablegen::app;
use zx_tablegen::args::Args;
use zx_tablegen::config::RunConfig;

fn main() -> ExitCode {
    let args = Args::parse();
    app::init_logging(args.verbose);

    match RunConfig::try_from(args.command).and_then(|config| app::run(&config)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
