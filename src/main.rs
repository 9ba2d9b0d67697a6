use clap::Parser;
use classify_lines::args::Args;
use classify_lines::config::Config;
use classify_lines::error::Result;
use classify_lines::{engine, output, stats};
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = Args::parse();
    let config = Config::from(args);

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(config: &Config) -> Result<()> {
    let partition = engine::run(config)?;
    output::write_partition(&partition, config)?;

    let report = stats::render(&partition, config.stats);
    if !report.is_empty() {
        print!("{report}");
    }

    Ok(())
}
