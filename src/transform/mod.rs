//! Join, pivot and projection stages that turn the loaded tables into records

pub mod abilities;
pub mod assemble;
pub mod names;
pub mod record;
pub mod stats;

pub use abilities::{aggregate_abilities, group_slots, select_abilities, AbilitySet};
pub use assemble::flatten;
pub use names::NameIndex;
pub use record::{from_tenths, PokemonRecord};
pub use stats::{pivot_stats, BaseStats, StatKind};
