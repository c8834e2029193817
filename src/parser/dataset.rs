use std::path::Path;
use tracing::info;

use super::record::*;
use crate::error::Result;
use crate::schema;

/// Every source table, fully loaded into memory
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub species: Vec<Species>,
    pub forms: Vec<PhysicalForm>,
    pub stats: Vec<StatValue>,
    pub ability_slots: Vec<AbilitySlot>,
    pub abilities: Vec<Ability>,
    pub colors: Vec<Color>,
    pub species_names: Vec<SpeciesName>,
    pub ability_names: Vec<AbilityName>,
}

impl Dataset {
    /// Load all tables from `dir`. Any missing table or column aborts the load.
    pub fn load(dir: &Path) -> Result<Self> {
        info!(dir = %dir.display(), "Loading source tables");

        let dataset = Self {
            forms: load_table(dir)?,
            stats: load_table(dir)?,
            ability_slots: load_table(dir)?,
            species: load_table(dir)?,
            colors: load_table(dir)?,
            abilities: load_table(dir)?,
            species_names: load_table(dir)?,
            ability_names: load_table(dir)?,
        };

        info!(
            species = dataset.species.len(),
            forms = dataset.forms.len(),
            stats = dataset.stats.len(),
            ability_slots = dataset.ability_slots.len(),
            "Source tables loaded"
        );

        Ok(dataset)
    }

    /// Row count of every table, in catalogue order
    pub fn table_counts(&self) -> Vec<(&'static str, usize)> {
        vec![
            (schema::POKEMON.name, self.forms.len()),
            (schema::POKEMON_STATS.name, self.stats.len()),
            (schema::POKEMON_ABILITIES.name, self.ability_slots.len()),
            (schema::SPECIES.name, self.species.len()),
            (schema::COLORS.name, self.colors.len()),
            (schema::ABILITIES.name, self.abilities.len()),
            (schema::SPECIES_NAMES.name, self.species_names.len()),
            (schema::ABILITY_NAMES.name, self.ability_names.len()),
        ]
    }
}
