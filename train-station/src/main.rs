use std::io;
use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

use train_station::console::Console;
use train_station::station::{Station, StationConfig};

fn main() -> ExitCode {
    // Logs go to stderr so they never interleave with the console on stdout
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let config = match StationConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            return ExitCode::FAILURE;
        }
    };

    let mut station = match Station::from_config(&config) {
        Ok(station) => station,
        Err(e) => {
            eprintln!("Invalid wagon catalog: {e}");
            return ExitCode::FAILURE;
        }
    };

    let mut console =
        Console::new(io::stdin().lock(), io::stdout().lock()).with_clear_screen(true);

    if let Err(e) = console.run(&mut station) {
        eprintln!("{e}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
