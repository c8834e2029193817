use std::path::PathBuf;

/// `local_language_id` of English in the export's `languages` table
pub const ENGLISH_LANGUAGE_ID: i64 = 9;

/// Species and pokemon ids at or above this value are alternate forms
/// (megas, regional variants, gigantamax) that the export appends after the
/// canonical entries. Flattening stops at the first id in that range.
pub const SYNTHETIC_ID_THRESHOLD: i64 = 10_000;

pub const DEFAULT_OUTPUT_FILE: &str = "pokemon_planilha.json";

/// Options that shape the flattened records
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlattenOptions {
    /// Language used for species and ability names
    pub language_id: i64,
    /// First id treated as a synthetic form
    pub synthetic_id_threshold: i64,
}

impl Default for FlattenOptions {
    fn default() -> Self {
        Self {
            language_id: ENGLISH_LANGUAGE_ID,
            synthetic_id_threshold: SYNTHETIC_ID_THRESHOLD,
        }
    }
}

/// Everything needed for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlattenConfig {
    /// Directory containing the source CSV tables
    pub data_dir: PathBuf,
    pub output: PathBuf,
    pub options: FlattenOptions,
}

impl FlattenConfig {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            output: PathBuf::from(DEFAULT_OUTPUT_FILE),
            options: FlattenOptions::default(),
        }
    }

    pub fn with_output(self, output: impl Into<PathBuf>) -> Self {
        Self {
            output: output.into(),
            ..self
        }
    }

    pub fn with_options(self, options: FlattenOptions) -> Self {
        Self { options, ..self }
    }
}
