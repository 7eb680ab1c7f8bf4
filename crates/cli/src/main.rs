use clap::Parser;
use letter_counts_cli::args::Args;
use letter_counts_cli::config::Config;
use letter_counts_cli::{logging, presentation};
use std::io::Write;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = Args::parse();
    logging::init(args.verbose, args.quiet);
    tracing::debug!("letter_counts v{} starting", letter_counts_cli::VERSION);

    let config = Config::from(args);

    match letter_counts_engine::run(&config) {
        Ok(result) => {
            // Per-file failures were already logged by the collector.
            let mut stdout = std::io::stdout().lock();
            let written = presentation::write_results(&mut stdout, &result, config.format)
                .and_then(|()| stdout.flush().map_err(Into::into));
            match written {
                Ok(()) => ExitCode::SUCCESS,
                Err(e) => {
                    eprintln!("Output Error: {e}");
                    ExitCode::FAILURE
                }
            }
        }
        Err(e) => {
            eprintln!("Application Error: {e}");
            ExitCode::FAILURE
        }
    }
}
