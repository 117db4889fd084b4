use std::{io, path::PathBuf, process};

use clap::Parser;
use cool_lexer::driver::{run, DriverConfig};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "cool_lexer",
    about = "Scan every source file in a directory and report token statistics",
    version
)]
struct Cli {
    /// Directory holding the source files
    #[arg(value_name = "DIR", default_value = "cool_programs")]
    directory: PathBuf,

    /// Extension of the files to scan
    #[arg(long, default_value = "cl")]
    extension: String,

    /// Print and reset statistics after every file
    #[arg(long)]
    per_file: bool,

    /// Only print statistics, not tokens
    #[arg(short, long)]
    quiet: bool,

    /// Log filter used when RUST_LOG is not set (e.g. "debug", "cool_lexer=trace")
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn init_logging(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(&cli.log_level);

    let config = DriverConfig {
        directory: cli.directory,
        extension: cli.extension,
        per_file: cli.per_file,
        quiet: cli.quiet,
    };

    let stdout = io::stdout();
    let stderr = io::stderr();
    if let Err(error) = run(&config, &mut stdout.lock(), &mut stderr.lock()) {
        eprintln!("Error: {}", error);
        process::exit(1);
    }
}
