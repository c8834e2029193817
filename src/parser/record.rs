use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;
use tracing::debug;

use crate::error::{FlattenError, Result};
use crate::schema::{self, TableSchema};

/// A row type that can be decoded from one of the source tables
pub trait SourceRecord: DeserializeOwned {
    fn schema() -> &'static TableSchema;
}

/// A row of a localized-name table: `(subject id, language id) -> name`
pub trait LocalizedRow {
    fn subject_id(&self) -> i64;
    fn language_id(&self) -> i64;
    /// `None` when the cell is empty
    fn name(&self) -> Option<&str>;
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Species {
    pub id: i64,
    pub identifier: String,
    pub color_id: i64,
}

/// Physical form (`pokemon.csv`); height in decimetres, weight in hectograms
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PhysicalForm {
    pub species_id: i64,
    pub height: Option<i64>,
    pub weight: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StatValue {
    pub pokemon_id: i64,
    pub stat_id: i64,
    pub base_stat: i64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AbilitySlot {
    pub pokemon_id: i64,
    pub ability_id: i64,
    pub slot: i64,
    #[serde(deserialize_with = "flag")]
    pub is_hidden: bool,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Ability {
    pub id: i64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Color {
    pub id: i64,
    pub identifier: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SpeciesName {
    pub pokemon_species_id: i64,
    pub local_language_id: i64,
    pub name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AbilityName {
    pub ability_id: i64,
    pub local_language_id: i64,
    pub name: Option<String>,
}

macro_rules! source_record {
    ($ty:ty, $schema:expr) => {
        impl SourceRecord for $ty {
            fn schema() -> &'static TableSchema {
                &$schema
            }
        }
    };
}

source_record!(Species, schema::SPECIES);
source_record!(PhysicalForm, schema::POKEMON);
source_record!(StatValue, schema::POKEMON_STATS);
source_record!(AbilitySlot, schema::POKEMON_ABILITIES);
source_record!(Ability, schema::ABILITIES);
source_record!(Color, schema::COLORS);
source_record!(SpeciesName, schema::SPECIES_NAMES);
source_record!(AbilityName, schema::ABILITY_NAMES);

impl LocalizedRow for SpeciesName {
    fn subject_id(&self) -> i64 {
        self.pokemon_species_id
    }
    fn language_id(&self) -> i64 {
        self.local_language_id
    }
    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

impl LocalizedRow for AbilityName {
    fn subject_id(&self) -> i64 {
        self.ability_id
    }
    fn language_id(&self) -> i64 {
        self.local_language_id
    }
    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

/// Deserialize a 0/1 column into a bool
fn flag<'de, D>(deserializer: D) -> std::result::Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = u8::deserialize(deserializer)?;
    Ok(value != 0)
}

/// Load every row of `R`'s table from `dir`, in file order
pub fn load_table<R: SourceRecord>(dir: &Path) -> Result<Vec<R>> {
    let schema = R::schema();
    let path = dir.join(schema.source_file);

    let file = File::open(&path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => FlattenError::MissingTable {
            table: schema.name,
            path: path.clone(),
        },
        _ => FlattenError::Io {
            path: path.clone(),
            source,
        },
    })?;

    let rows = read_records::<R, _>(file)?;
    debug!(table = schema.name, rows = rows.len(), "Loaded table");
    Ok(rows)
}

/// Decode CSV rows from any reader after checking the header against the schema
pub fn read_records<R, T>(input: T) -> Result<Vec<R>>
where
    R: SourceRecord,
    T: Read,
{
    let schema = R::schema();
    let csv_error = |source: csv::Error| FlattenError::Csv {
        table: schema.name,
        source,
    };

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(input);

    let headers = reader.headers().map_err(csv_error)?.clone();
    let names: Vec<&str> = headers.iter().collect();
    if let Some(column) = schema.missing_column(&names) {
        return Err(FlattenError::MissingColumn {
            table: schema.name,
            column,
        });
    }

    reader
        .deserialize::<R>()
        .map(|row| row.map_err(|source| decode_error(schema.name, &headers, source)))
        .collect()
}

/// Name the offending line and column when a cell fails to decode
fn decode_error(
    table: &'static str,
    headers: &csv::StringRecord,
    source: csv::Error,
) -> FlattenError {
    let located = match source.kind() {
        csv::ErrorKind::Deserialize { pos, err } => err
            .field()
            .and_then(|field| headers.get(field as usize))
            .map(|column| {
                (
                    pos.as_ref().map_or(0, |pos| pos.line()),
                    column.to_string(),
                    err.kind().to_string(),
                )
            }),
        _ => None,
    };

    match located {
        Some((line, column, detail)) => FlattenError::Decode {
            table,
            line,
            column,
            detail,
            source,
        },
        None => FlattenError::Csv { table, source },
    }
}
