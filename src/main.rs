use anyhow::{Context, Result};
use clap::Parser;
use seating::CLIArgs;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = CLIArgs::parse();
    let grid = seating::read_seat_grid(&args.input_path).with_context(|| {
        format!(
            "Failed to read map of seats layout from given input file({}).",
            args.input_path.display()
        )
    })?;

    let report = seating::stabilize(grid, args.mode);
    if args.count_only {
        println!("{}", report.occupied_n());
    } else {
        println!("{}", report);
    }

    Ok(())
}
