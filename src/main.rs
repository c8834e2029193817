use anyhow::{Context, Result};
use pokedex_to_json::{
    cli::{Cli, Commands},
    parser::Dataset,
    schema::ALL_TABLES,
    writer::convert_to_json,
};
use std::time::Instant;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("pokedex_to_json=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse_args();

    match cli.command {
        None => {
            let config = cli
                .config()
                .context("No data directory given (use --data-dir or POKEDEX_DATA_DIR)")?;
            let start = Instant::now();

            let summary = convert_to_json(&config).with_context(|| {
                format!("Failed to flatten tables in {:?}", config.data_dir)
            })?;

            let elapsed = start.elapsed();
            println!(
                "Wrote {} records to {:?} in {:.1}s",
                summary.records,
                summary.output,
                elapsed.as_secs_f64()
            );
        }

        Some(Commands::Check) => {
            let config = cli
                .config()
                .context("No data directory given (use --data-dir or POKEDEX_DATA_DIR)")?;
            let dataset = Dataset::load(&config.data_dir).with_context(|| {
                format!("Failed to load tables from {:?}", config.data_dir)
            })?;

            println!("All tables present in {:?}:\n", config.data_dir);
            for (name, count) in dataset.table_counts() {
                println!("  {:<20} {} rows", name, count);
            }
        }

        Some(Commands::Tables) => {
            println!("Source tables:\n");
            for table in ALL_TABLES {
                println!("  {} ({})", table.source_file, table.name);
                for col in table.columns {
                    let nullable = if col.nullable { ", nullable" } else { "" };
                    println!("      {:<20} {}{}", col.name, col.col_type, nullable);
                }
            }
        }
    }

    Ok(())
}
