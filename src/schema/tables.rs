//! Source table definitions for the Pokédex CSV export

use super::types::*;

// =============================================================================
// Catalogue tables
// =============================================================================

pub static SPECIES: TableSchema = TableSchema {
    name: "species",
    source_file: "pokemon_species.csv",
    columns: &[
        Column::required("id", ColumnType::Integer),
        Column::required("identifier", ColumnType::Text),
        Column::required("color_id", ColumnType::Integer),
    ],
};

pub static COLORS: TableSchema = TableSchema {
    name: "colors",
    source_file: "pokemon_colors.csv",
    columns: &[
        Column::required("id", ColumnType::Integer),
        Column::required("identifier", ColumnType::Text),
    ],
};

pub static ABILITIES: TableSchema = TableSchema {
    name: "abilities",
    source_file: "abilities.csv",
    columns: &[Column::required("id", ColumnType::Integer)],
};

// =============================================================================
// Per-pokemon tables
// =============================================================================

pub static POKEMON: TableSchema = TableSchema {
    name: "pokemon",
    source_file: "pokemon.csv",
    columns: &[
        Column::required("species_id", ColumnType::Integer),
        Column::new("height", ColumnType::Integer),
        Column::new("weight", ColumnType::Integer),
    ],
};

pub static POKEMON_STATS: TableSchema = TableSchema {
    name: "pokemon_stats",
    source_file: "pokemon_stats.csv",
    columns: &[
        Column::required("pokemon_id", ColumnType::Integer),
        Column::required("stat_id", ColumnType::Integer),
        Column::required("base_stat", ColumnType::Integer),
    ],
};

pub static POKEMON_ABILITIES: TableSchema = TableSchema {
    name: "pokemon_abilities",
    source_file: "pokemon_abilities.csv",
    columns: &[
        Column::required("pokemon_id", ColumnType::Integer),
        Column::required("ability_id", ColumnType::Integer),
        Column::required("slot", ColumnType::Integer),
        Column::required("is_hidden", ColumnType::Flag),
    ],
};

// =============================================================================
// Localized names
// =============================================================================

pub static SPECIES_NAMES: TableSchema = TableSchema {
    name: "species_names",
    source_file: "pokemon_species_names.csv",
    columns: &[
        Column::required("pokemon_species_id", ColumnType::Integer),
        Column::required("local_language_id", ColumnType::Integer),
        Column::new("name", ColumnType::Text),
    ],
};

pub static ABILITY_NAMES: TableSchema = TableSchema {
    name: "ability_names",
    source_file: "ability_names.csv",
    columns: &[
        Column::required("ability_id", ColumnType::Integer),
        Column::required("local_language_id", ColumnType::Integer),
        Column::new("name", ColumnType::Text),
    ],
};

/// Every table the flattener reads, in load order
pub static ALL_TABLES: &[&TableSchema] = &[
    &POKEMON,
    &POKEMON_STATS,
    &POKEMON_ABILITIES,
    &SPECIES,
    &COLORS,
    &ABILITIES,
    &SPECIES_NAMES,
    &ABILITY_NAMES,
];
