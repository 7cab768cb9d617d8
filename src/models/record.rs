// src/models/record.rs

//! Normalized per-entity record.

use std::collections::HashSet;

use serde_json::Value;

use crate::error::Result;

use super::api::PokemonDetail;

/// Flat record derived from one detail payload.
#[derive(Debug, Clone, PartialEq)]
pub struct PokemonRecord {
    pub name: String,
    pub id: i64,
    pub base_experience: i64,
    pub weight_hg: i64,
    pub height_dm: i64,
    pub order: i64,

    /// Game versions the entity appears in, listing order
    pub game_versions: Vec<String>,

    /// Type tags, slot order
    pub types: Vec<String>,

    /// Default front sprite; nullable upstream
    pub front_default_sprite_url: Option<String>,
}

impl PokemonRecord {
    /// Normalize one raw detail payload into a flat record.
    ///
    /// Pure: no I/O, identical input yields identical output. The payload is
    /// decoded through [`PokemonDetail`], so any missing required key
    /// surfaces as a JSON error rather than a partially-populated record.
    pub fn from_payload(payload: Value) -> Result<Self> {
        let detail: PokemonDetail = serde_json::from_value(payload)?;

        Ok(Self {
            name: detail.name,
            id: detail.id,
            base_experience: detail.base_experience,
            weight_hg: detail.weight,
            height_dm: detail.height,
            order: detail.order,
            game_versions: detail
                .game_indices
                .into_iter()
                .map(|g| g.version.name)
                .collect(),
            types: detail.types.into_iter().map(|t| t.kind.name).collect(),
            front_default_sprite_url: detail.sprites.front_default,
        })
    }

    /// True when the record appears in at least one of the given games.
    pub fn in_games(&self, required: &HashSet<String>) -> bool {
        self.game_versions.iter().any(|g| required.contains(g))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use serde_json::json;

    use crate::error::AppError;

    fn sample_payload() -> Value {
        json!({
            "id": 1,
            "name": "bulbasaur",
            "base_experience": 64,
            "weight": 69,
            "height": 7,
            "order": 1,
            "types": [
                {"slot": 1, "type": {"name": "grass", "url": "https://pokeapi.co/api/v2/type/12/"}},
                {"slot": 2, "type": {"name": "poison", "url": "https://pokeapi.co/api/v2/type/4/"}}
            ],
            "game_indices": [
                {"game_index": 153, "version": {"name": "red", "url": "https://pokeapi.co/api/v2/version/1/"}},
                {"game_index": 153, "version": {"name": "blue", "url": "https://pokeapi.co/api/v2/version/2/"}}
            ],
            "sprites": {"front_default": "https://img.example/1.png"}
        })
    }

    #[test]
    fn from_payload_flattens_nested_tags() {
        let record = PokemonRecord::from_payload(sample_payload()).unwrap();

        assert_eq!(record.name, "bulbasaur");
        assert_eq!(record.id, 1);
        assert_eq!(record.weight_hg, 69);
        assert_eq!(record.height_dm, 7);
        assert_eq!(record.types, vec!["grass", "poison"]);
        assert_eq!(record.game_versions, vec!["red", "blue"]);
        assert_eq!(
            record.front_default_sprite_url.as_deref(),
            Some("https://img.example/1.png")
        );
    }

    #[test]
    fn from_payload_is_deterministic() {
        let first = PokemonRecord::from_payload(sample_payload()).unwrap();
        let second = PokemonRecord::from_payload(sample_payload()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn from_payload_rejects_missing_key() {
        let mut payload = sample_payload();
        payload.as_object_mut().unwrap().remove("height");

        let result = PokemonRecord::from_payload(payload);
        assert!(matches!(result, Err(AppError::Json(_))));
    }

    #[test]
    fn in_games_matches_on_intersection() {
        let record = PokemonRecord::from_payload(sample_payload()).unwrap();
        let required: HashSet<String> = ["red".to_string(), "white".to_string()].into();
        assert!(record.in_games(&required));

        let disjoint: HashSet<String> = ["gold".to_string()].into();
        assert!(!record.in_games(&disjoint));
    }
}
