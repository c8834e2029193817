use std::collections::{BTreeSet, HashMap};
use tracing::warn;

use crate::error::{FlattenError, Result};
use crate::parser::StatValue;
use crate::schema;

/// The six base stats, keyed by their `stat_id` in the export
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatKind {
    Hp,
    Attack,
    Defense,
    SpecialAttack,
    SpecialDefense,
    Speed,
}

impl StatKind {
    pub const ALL: [StatKind; 6] = [
        StatKind::Hp,
        StatKind::Attack,
        StatKind::Defense,
        StatKind::SpecialAttack,
        StatKind::SpecialDefense,
        StatKind::Speed,
    ];

    pub fn from_id(stat_id: i64) -> Option<Self> {
        match stat_id {
            1 => Some(StatKind::Hp),
            2 => Some(StatKind::Attack),
            3 => Some(StatKind::Defense),
            4 => Some(StatKind::SpecialAttack),
            5 => Some(StatKind::SpecialDefense),
            6 => Some(StatKind::Speed),
            _ => None,
        }
    }

    /// Column name used in the output sheet
    pub fn column(self) -> &'static str {
        match self {
            StatKind::Hp => "HP",
            StatKind::Attack => "Atk",
            StatKind::Defense => "Def",
            StatKind::SpecialAttack => "SpAtk",
            StatKind::SpecialDefense => "SpDef",
            StatKind::Speed => "Speed",
        }
    }
}

/// One pivoted row. A `None` cell had no matching stat row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BaseStats {
    pub hp: Option<i64>,
    pub attack: Option<i64>,
    pub defense: Option<i64>,
    pub special_attack: Option<i64>,
    pub special_defense: Option<i64>,
    pub speed: Option<i64>,
}

impl BaseStats {
    pub fn get(&self, kind: StatKind) -> Option<i64> {
        *self.cell(kind)
    }

    fn cell(&self, kind: StatKind) -> &Option<i64> {
        match kind {
            StatKind::Hp => &self.hp,
            StatKind::Attack => &self.attack,
            StatKind::Defense => &self.defense,
            StatKind::SpecialAttack => &self.special_attack,
            StatKind::SpecialDefense => &self.special_defense,
            StatKind::Speed => &self.speed,
        }
    }

    fn cell_mut(&mut self, kind: StatKind) -> &mut Option<i64> {
        match kind {
            StatKind::Hp => &mut self.hp,
            StatKind::Attack => &mut self.attack,
            StatKind::Defense => &mut self.defense,
            StatKind::SpecialAttack => &mut self.special_attack,
            StatKind::SpecialDefense => &mut self.special_defense,
            StatKind::Speed => &mut self.speed,
        }
    }

    pub fn is_complete(&self) -> bool {
        StatKind::ALL.iter().all(|kind| self.get(*kind).is_some())
    }
}

/// Pivot long-format stat rows into one `BaseStats` per pokemon id.
///
/// Unknown stat ids are skipped. Two values for the same cell are an error.
pub fn pivot_stats(rows: &[StatValue]) -> Result<HashMap<i64, BaseStats>> {
    let mut pivot: HashMap<i64, BaseStats> = HashMap::new();
    let mut unknown: BTreeSet<i64> = BTreeSet::new();

    for row in rows {
        let Some(kind) = StatKind::from_id(row.stat_id) else {
            unknown.insert(row.stat_id);
            continue;
        };

        let cell = pivot.entry(row.pokemon_id).or_default().cell_mut(kind);
        if let Some(existing) = *cell {
            return Err(FlattenError::JoinIntegrity {
                table: schema::POKEMON_STATS.name,
                key: row.pokemon_id,
                detail: format!(
                    "duplicate {} value ({} and {})",
                    kind.column(),
                    existing,
                    row.base_stat
                ),
            });
        }
        *cell = Some(row.base_stat);
    }

    for stat_id in unknown {
        warn!(stat_id, "Skipping rows with unknown stat id");
    }

    Ok(pivot)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stat(pokemon_id: i64, stat_id: i64, base_stat: i64) -> StatValue {
        StatValue {
            pokemon_id,
            stat_id,
            base_stat,
        }
    }

    #[test]
    fn test_pivot_full_row() {
        let rows: Vec<_> = [45, 49, 49, 65, 65, 45]
            .iter()
            .enumerate()
            .map(|(i, v)| stat(1, i as i64 + 1, *v))
            .collect();

        let pivot = pivot_stats(&rows).unwrap();
        let bulbasaur = pivot[&1];
        assert!(bulbasaur.is_complete());
        assert_eq!(bulbasaur.hp, Some(45));
        assert_eq!(bulbasaur.special_attack, Some(65));
        assert_eq!(bulbasaur.speed, Some(45));
    }

    #[test]
    fn test_missing_cells_stay_none() {
        let rows = vec![stat(7, 1, 44), stat(7, 6, 43)];
        let pivot = pivot_stats(&rows).unwrap();
        let squirtle = pivot[&7];

        assert_eq!(squirtle.hp, Some(44));
        assert_eq!(squirtle.attack, None);
        assert_eq!(squirtle.defense, None);
        assert_eq!(squirtle.speed, Some(43));
        assert!(!squirtle.is_complete());
    }

    #[test]
    fn test_unknown_stat_ids_are_skipped() {
        let rows = vec![stat(1, 1, 45), stat(1, 7, 100), stat(1, 8, 100)];
        let pivot = pivot_stats(&rows).unwrap();
        assert_eq!(pivot[&1], BaseStats {
            hp: Some(45),
            ..Default::default()
        });
    }

    #[test]
    fn test_duplicate_cell_is_join_error() {
        let rows = vec![stat(4, 2, 52), stat(4, 2, 60)];
        let err = pivot_stats(&rows).unwrap_err();
        assert!(matches!(err, FlattenError::JoinIntegrity { key: 4, .. }));
    }

    #[test]
    fn test_zero_is_kept_distinct_from_missing() {
        let rows = vec![stat(9, 3, 0)];
        let pivot = pivot_stats(&rows).unwrap();
        assert_eq!(pivot[&9].defense, Some(0));
        assert_eq!(pivot[&9].hp, None);
    }

    #[test]
    fn test_stat_columns() {
        let columns: Vec<_> = StatKind::ALL.iter().map(|k| k.column()).collect();
        assert_eq!(columns, ["HP", "Atk", "Def", "SpAtk", "SpDef", "Speed"]);
    }
}
