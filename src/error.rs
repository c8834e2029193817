use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FlattenError {
    #[error("Missing source table {table}: {path:?} not found")]
    MissingTable { table: &'static str, path: PathBuf },

    #[error("Table {table} is missing required column '{column}'")]
    MissingColumn {
        table: &'static str,
        column: &'static str,
    },

    #[error("Failed to read table {table}: {source}")]
    Csv {
        table: &'static str,
        #[source]
        source: csv::Error,
    },

    #[error("Bad value in table {table}, line {line}, column '{column}': {detail}")]
    Decode {
        table: &'static str,
        line: u64,
        column: String,
        detail: String,
        #[source]
        source: csv::Error,
    },

    #[error("Join integrity violated in {table} for key {key}: {detail}")]
    JoinIntegrity {
        table: &'static str,
        key: i64,
        detail: String,
    },

    #[error("IO error on {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize output to {path:?}: {source}")]
    Serialization {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, FlattenError>;
