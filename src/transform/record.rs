use serde::{Deserialize, Serialize};

/// One row of the output sheet. Field order is the serialized key order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PokemonRecord {
    pub species_id: i64,
    pub name: String,
    #[serde(rename = "HP")]
    pub hp: Option<i64>,
    #[serde(rename = "Atk")]
    pub attack: Option<i64>,
    #[serde(rename = "Def")]
    pub defense: Option<i64>,
    #[serde(rename = "SpAtk")]
    pub special_attack: Option<i64>,
    #[serde(rename = "SpDef")]
    pub special_defense: Option<i64>,
    #[serde(rename = "Speed")]
    pub speed: Option<i64>,
    pub ability1: String,
    pub ability2: String,
    pub hidden: String,
    pub weight_kg: Option<f64>,
    pub height_m: Option<f64>,
    pub color: String,
}

/// Convert a measurement in tenths (decimetres, hectograms) to whole units
pub fn from_tenths(value: Option<i64>) -> Option<f64> {
    value.map(|v| v as f64 / 10.0)
}
