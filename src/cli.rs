use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::{
    FlattenConfig, FlattenOptions, DEFAULT_OUTPUT_FILE, ENGLISH_LANGUAGE_ID,
    SYNTHETIC_ID_THRESHOLD,
};

#[derive(Parser, Debug)]
#[command(name = "pokedex-to-json")]
#[command(version, about = "Flatten the Pokédex CSV export into a single JSON sheet")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory containing the source CSV tables
    #[arg(short, long, env = "POKEDEX_DATA_DIR", global = true)]
    pub data_dir: Option<PathBuf>,

    /// Output JSON path
    #[arg(short, long, env = "POKEDEX_OUTPUT", default_value = DEFAULT_OUTPUT_FILE, global = true)]
    pub output: PathBuf,

    /// Language used for species and ability names (9 = English)
    #[arg(long, env = "POKEDEX_LANGUAGE_ID", default_value_t = ENGLISH_LANGUAGE_ID, global = true)]
    pub language_id: i64,

    /// Species ids at or above this value are alternate forms and end the sheet
    #[arg(
        long,
        env = "POKEDEX_SYNTHETIC_ID_THRESHOLD",
        default_value_t = SYNTHETIC_ID_THRESHOLD,
        global = true
    )]
    pub synthetic_id_threshold: i64,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Load and validate every source table without writing output
    Check,

    /// List the source tables and their required columns
    Tables,
}

impl Cli {
    pub fn parse_args() -> Self {
        Cli::parse()
    }

    /// Build the run configuration; `None` when no data directory was given
    pub fn config(&self) -> Option<FlattenConfig> {
        let data_dir = self.data_dir.clone()?;
        Some(
            FlattenConfig::new(data_dir)
                .with_output(self.output.clone())
                .with_options(FlattenOptions {
                    language_id: self.language_id,
                    synthetic_id_threshold: self.synthetic_id_threshold,
                }),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_flags_build_config() {
        let cli = Cli::try_parse_from([
            "pokedex-to-json",
            "--data-dir",
            "data",
            "-o",
            "sheet.json",
            "--language-id",
            "5",
            "--synthetic-id-threshold",
            "1000",
        ])
        .unwrap();

        assert_eq!(cli.command, None);
        let config = cli.config().unwrap();
        assert_eq!(config.data_dir, PathBuf::from("data"));
        assert_eq!(config.output, PathBuf::from("sheet.json"));
        assert_eq!(config.options.language_id, 5);
        assert_eq!(config.options.synthetic_id_threshold, 1000);
    }

    #[test]
    fn test_subcommand_accepts_global_flags() {
        let cli = Cli::try_parse_from(["pokedex-to-json", "check", "--data-dir", "data"]).unwrap();
        assert_eq!(cli.command, Some(Commands::Check));
        assert_eq!(cli.data_dir, Some(PathBuf::from("data")));
    }

    #[test]
    fn test_tables_needs_no_data_dir() {
        let cli = Cli::try_parse_from(["pokedex-to-json", "tables"]).unwrap();
        assert_eq!(cli.command, Some(Commands::Tables));
    }
}
