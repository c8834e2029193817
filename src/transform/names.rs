use std::collections::HashMap;
use tracing::debug;

use crate::parser::LocalizedRow;

/// Subject id -> display name for a single language
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NameIndex {
    names: HashMap<i64, String>,
}

impl NameIndex {
    /// Build the index from the rows of `language_id`.
    /// Blank names are skipped; on a repeated subject id the first row wins.
    pub fn for_language<R: LocalizedRow>(rows: &[R], language_id: i64) -> Self {
        let mut names = HashMap::new();

        for row in rows.iter().filter(|r| r.language_id() == language_id) {
            let subject_id = row.subject_id();
            let name = match row.name().filter(|name| !name.is_empty()) {
                Some(name) => name,
                None => {
                    debug!(subject_id, language_id, "Skipping blank localized name");
                    continue;
                }
            };

            if names.contains_key(&subject_id) {
                debug!(subject_id, language_id, name, "Ignoring duplicate localized name");
                continue;
            }
            names.insert(subject_id, name.to_string());
        }

        Self { names }
    }

    pub fn get(&self, subject_id: i64) -> Option<&str> {
        self.names.get(&subject_id).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::{AbilityName, SpeciesName};

    fn species_name(id: i64, lang: i64, name: &str) -> SpeciesName {
        SpeciesName {
            pokemon_species_id: id,
            local_language_id: lang,
            name: Some(name.to_string()),
        }
    }

    #[test]
    fn test_filters_by_language() {
        let rows = vec![
            species_name(1, 1, "フシギダネ"),
            species_name(1, 9, "Bulbasaur"),
            species_name(1, 5, "Bulbizarre"),
            species_name(2, 5, "Herbizarre"),
        ];

        let english = NameIndex::for_language(&rows, 9);
        assert_eq!(english.len(), 1);
        assert_eq!(english.get(1), Some("Bulbasaur"));
        assert_eq!(english.get(2), None);

        let french = NameIndex::for_language(&rows, 5);
        assert_eq!(french.get(2), Some("Herbizarre"));
    }

    #[test]
    fn test_first_row_wins() {
        let rows = vec![
            AbilityName {
                ability_id: 65,
                local_language_id: 9,
                name: Some("Overgrow".to_string()),
            },
            AbilityName {
                ability_id: 65,
                local_language_id: 9,
                name: Some("Overgrowth".to_string()),
            },
        ];

        let index = NameIndex::for_language(&rows, 9);
        assert_eq!(index.get(65), Some("Overgrow"));
    }

    #[test]
    fn test_blank_names_are_skipped() {
        let rows = vec![
            species_name(1, 9, ""),
            SpeciesName {
                pokemon_species_id: 2,
                local_language_id: 9,
                name: None,
            },
            species_name(2, 9, "Ivysaur"),
        ];

        let index = NameIndex::for_language(&rows, 9);
        assert_eq!(index.get(1), None);
        assert_eq!(index.get(2), Some("Ivysaur"));
        assert_eq!(index.len(), 1);
    }

    #[test]
    fn test_unknown_language_is_empty() {
        let rows = vec![species_name(1, 9, "Bulbasaur")];
        assert!(NameIndex::for_language(&rows, 42).is_empty());
    }
}
