use std::collections::{BTreeMap, HashMap, HashSet};
use tracing::debug;

use super::names::NameIndex;
use crate::parser::{Ability, AbilitySlot};

/// Resolved ability names for one pokemon. Empty string means no ability.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AbilitySet {
    pub ability1: String,
    pub ability2: String,
    pub hidden: String,
}

/// Group slot rows by pokemon id, keeping only abilities present in the
/// catalogue. Each group is ordered by slot; ties keep file order.
pub fn group_slots<'a>(
    slots: &'a [AbilitySlot],
    catalogue: &[Ability],
) -> BTreeMap<i64, Vec<&'a AbilitySlot>> {
    let known: HashSet<i64> = catalogue.iter().map(|a| a.id).collect();
    let mut groups: BTreeMap<i64, Vec<&AbilitySlot>> = BTreeMap::new();
    let mut dropped = 0usize;

    for slot in slots {
        if known.contains(&slot.ability_id) {
            groups.entry(slot.pokemon_id).or_default().push(slot);
        } else {
            dropped += 1;
        }
    }

    for rows in groups.values_mut() {
        rows.sort_by_key(|row| row.slot);
    }

    if dropped > 0 {
        debug!(dropped, "Dropped ability slots with no catalogue entry");
    }

    groups
}

/// Pick ability1, ability2 and the hidden ability out of one group
pub fn select_abilities(group: &[&AbilitySlot], names: &NameIndex) -> AbilitySet {
    let resolve = |row: Option<&&AbilitySlot>| {
        row.and_then(|r| names.get(r.ability_id))
            .unwrap_or_default()
            .to_string()
    };

    AbilitySet {
        ability1: resolve(group.iter().find(|r| r.slot == 1)),
        ability2: resolve(group.iter().find(|r| r.slot == 2)),
        hidden: resolve(group.iter().find(|r| r.is_hidden)),
    }
}

/// Aggregate every pokemon's abilities, keyed by pokemon id
pub fn aggregate_abilities(
    slots: &[AbilitySlot],
    catalogue: &[Ability],
    names: &NameIndex,
) -> HashMap<i64, AbilitySet> {
    group_slots(slots, catalogue)
        .into_iter()
        .map(|(pokemon_id, group)| (pokemon_id, select_abilities(&group, names)))
        .collect()
}
