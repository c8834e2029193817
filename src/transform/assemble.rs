use std::collections::HashMap;
use tracing::{debug, info, warn};

use super::abilities::{aggregate_abilities, AbilitySet};
use super::names::NameIndex;
use super::record::{from_tenths, PokemonRecord};
use super::stats::{pivot_stats, BaseStats};
use crate::config::FlattenOptions;
use crate::error::Result;
use crate::parser::{Color, Dataset, PhysicalForm, Species};

/// Lookup tables for the left joins hanging off the species table
struct Joins<'a> {
    forms: HashMap<i64, &'a PhysicalForm>,
    stats: HashMap<i64, BaseStats>,
    abilities: HashMap<i64, AbilitySet>,
    colors: HashMap<i64, &'a str>,
    names: NameIndex,
}

impl<'a> Joins<'a> {
    fn build(dataset: &'a Dataset, options: &FlattenOptions) -> Result<Self> {
        let stats = pivot_stats(&dataset.stats)?;
        let names = NameIndex::for_language(&dataset.species_names, options.language_id);
        let ability_names = NameIndex::for_language(&dataset.ability_names, options.language_id);
        let abilities =
            aggregate_abilities(&dataset.ability_slots, &dataset.abilities, &ability_names);

        info!(
            stat_rows = stats.len(),
            ability_groups = abilities.len(),
            species_names = names.len(),
            ability_names = ability_names.len(),
            language_id = options.language_id,
            "Built join tables"
        );

        Ok(Self {
            forms: index_forms(&dataset.forms),
            stats,
            abilities,
            colors: index_colors(&dataset.colors),
            names,
        })
    }

    fn project(&self, species: &Species) -> PokemonRecord {
        let form = self.forms.get(&species.id);
        if form.is_none() {
            debug!(species_id = species.id, "No physical form row");
        }

        let stats = self.stats.get(&species.id).copied().unwrap_or_default();
        if !stats.is_complete() {
            debug!(species_id = species.id, "Incomplete base stats");
        }
        let abilities = self.abilities.get(&species.id).cloned().unwrap_or_default();

        let color = match self.colors.get(&species.color_id) {
            Some(color) => color.to_string(),
            None => {
                warn!(
                    species_id = species.id,
                    color_id = species.color_id,
                    "Unresolved color id"
                );
                String::new()
            }
        };

        PokemonRecord {
            species_id: species.id,
            name: self
                .names
                .get(species.id)
                .unwrap_or(species.identifier.as_str())
                .to_string(),
            hp: stats.hp,
            attack: stats.attack,
            defense: stats.defense,
            special_attack: stats.special_attack,
            special_defense: stats.special_defense,
            speed: stats.speed,
            ability1: abilities.ability1,
            ability2: abilities.ability2,
            hidden: abilities.hidden,
            weight_kg: from_tenths(form.and_then(|f| f.weight)),
            height_m: from_tenths(form.and_then(|f| f.height)),
            color,
        }
    }
}

/// Physical forms keyed by species id. The first form in file order wins,
/// which is the default form in the canonical export.
fn index_forms(forms: &[PhysicalForm]) -> HashMap<i64, &PhysicalForm> {
    let mut index: HashMap<i64, &PhysicalForm> = HashMap::with_capacity(forms.len());
    let mut extra_forms = 0usize;

    for form in forms {
        if index.contains_key(&form.species_id) {
            extra_forms += 1;
        } else {
            index.insert(form.species_id, form);
        }
    }

    if extra_forms > 0 {
        debug!(extra_forms, "Ignoring non-default physical forms");
    }
    index
}

/// Color identifiers keyed by color id, first row wins
fn index_colors(colors: &[Color]) -> HashMap<i64, &str> {
    let mut index: HashMap<i64, &str> = HashMap::with_capacity(colors.len());

    for color in colors {
        if let Some(kept) = index.get(&color.id) {
            debug!(
                color_id = color.id,
                kept = *kept,
                ignored = color.identifier.as_str(),
                "Ignoring duplicate color id"
            );
        } else {
            index.insert(color.id, color.identifier.as_str());
        }
    }
    index
}

/// Join every table onto the species list and project one record per species.
///
/// Species are visited in file order; the first id at or above the synthetic
/// threshold ends the run, so everything after it is dropped too.
pub fn flatten(dataset: &Dataset, options: &FlattenOptions) -> Result<Vec<PokemonRecord>> {
    let joins = Joins::build(dataset, options)?;
    let mut records = Vec::with_capacity(dataset.species.len());

    for species in &dataset.species {
        if species.id >= options.synthetic_id_threshold {
            info!(
                species_id = species.id,
                threshold = options.synthetic_id_threshold,
                "Reached synthetic id range"
            );
            break;
        }
        records.push(joins.project(species));
    }

    info!(records = records.len(), "Flattened species");
    Ok(records)
}
