//! Metric Analyser - Main CLI Application
//!
//! Reads a JSON metrics document and prints a throughput report.

use clap::Parser;
use metric_analyser::{
    app::App,
    cli::Cli,
    error::ErrorReporter,
};
use std::process;

fn main() {
    // Set up better panic handling
    std::panic::set_hook(Box::new(|panic_info| {
        eprintln!("Application panic: {}", panic_info);
        eprintln!("This is likely a bug. Please report it with the input that triggered it.");
        process::exit(99);
    }));

    // Parse command line arguments
    let cli = Cli::parse();

    // Until configuration is resolved only the CLI flags are known
    let fallback = ErrorReporter::new(cli.use_colors(), cli.verbose || cli.debug);
    let app = match App::new(cli) {
        Ok(app) => app,
        Err(e) => {
            fallback.report_error(&e);
            process::exit(e.exit_code());
        }
    };

    match app.run() {
        Ok(report) => println!("{}", report),
        Err(e) => {
            app.error_reporter().report_error(&e);
            process::exit(e.exit_code());
        }
    }
}
