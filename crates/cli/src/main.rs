use clap::Parser;
use decl_count_cli::args::Args;
use decl_count_cli::config::Config;
use decl_count_cli::presentation;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = Args::parse();
    // Convert args to engine::Config
    let config = Config::from(args);

    match decl_count_engine::run(&config) {
        Ok(result) => {
            for (path, err) in &result.errors {
                eprintln!("Warning: skipped {}: {err}", path.display());
            }

            presentation::print_results(&result, &config);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
