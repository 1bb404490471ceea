use std::{env, fs, path::PathBuf, process};

use kaching::errors::errors::Error;
use kaching::report::report::analyze;
use kaching::report::tables::{error_listing, result_table, token_table};
use kaching::server::server::serve;

const DEFAULT_ADDR: &str = "127.0.0.1:5000";

fn main() {
    // Structured logging with env-based filter, defaulting to info.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .try_init();

    let args: Vec<String> = env::args().collect();

    let result = match args.get(1).map(String::as_str) {
        Some("serve") => {
            let addr = args.get(2).map(String::as_str).unwrap_or(DEFAULT_ADDR);
            serve(addr)
        }
        Some(path) => run_file(PathBuf::from(path)),
        None => {
            eprintln!("Usage: kaching <file.kc> | kaching serve [addr]");
            process::exit(2);
        }
    };

    if let Err(error) = result {
        eprintln!("Error: {}", error);
        process::exit(1);
    }
}

/// Analyzes one source file and prints the token table, the error listing,
/// and the line/diagnostic result table.
fn run_file(path: PathBuf) -> Result<(), Error> {
    let source = fs::read_to_string(&path).map_err(|source| Error::ReadSource { path, source })?;

    let report = analyze(&source);
    tracing::debug!(
        tokens = report.tokens.len(),
        lines = report.lines.len(),
        "analysis complete"
    );

    println!("{}", token_table(&report.tokens));

    let errors = error_listing(&report);
    if !errors.is_empty() {
        println!("{}", errors);
    }

    println!("{}", result_table(&report));

    Ok(())
}
