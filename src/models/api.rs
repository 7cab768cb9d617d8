// src/models/api.rs

//! Wire shapes returned by the catalog API.
//!
//! Every struct here is a decode target for one response body. Required
//! fields are deliberately non-optional: a missing key is a typed decode
//! error, never a silently defaulted value.

use serde::Deserialize;

/// One page of the paginated catalog listing.
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogPage {
    /// URL of the next page; absent on the final page
    pub next: Option<String>,

    /// Item references carried by this page
    pub results: Vec<CatalogEntry>,
}

/// A single item reference on a listing page.
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogEntry {
    /// Detail endpoint for the entity
    pub url: String,
}

/// Full detail record for one entity.
#[derive(Debug, Clone, Deserialize)]
pub struct PokemonDetail {
    /// Numeric entity identifier
    pub id: i64,

    /// Lowercase entity name as served by the API
    pub name: String,

    /// Experience score granted when defeated
    pub base_experience: i64,

    /// Mass in hectograms
    pub weight: i64,

    /// Height in decimeters
    pub height: i64,

    /// Sort index used by the API
    pub order: i64,

    /// Type tags in slot order
    pub types: Vec<TypeSlot>,

    /// Game appearances in listing order
    pub game_indices: Vec<GameIndex>,

    /// Sprite image URLs
    pub sprites: Sprites,
}

/// Wrapper around one type tag.
#[derive(Debug, Clone, Deserialize)]
pub struct TypeSlot {
    #[serde(rename = "type")]
    pub kind: NamedResource,
}

/// Wrapper around one game appearance.
#[derive(Debug, Clone, Deserialize)]
pub struct GameIndex {
    pub version: NamedResource,
}

/// Name/URL pair the API uses for cross-references.
#[derive(Debug, Clone, Deserialize)]
pub struct NamedResource {
    pub name: String,
}

/// Sprite image URLs. `front_default` is nullable upstream.
#[derive(Debug, Clone, Deserialize)]
pub struct Sprites {
    pub front_default: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_page_decodes_with_next() {
        let page: CatalogPage = serde_json::from_str(
            r#"{
                "count": 1302,
                "next": "https://pokeapi.co/api/v2/pokemon?offset=100&limit=100",
                "previous": null,
                "results": [
                    {"name": "bulbasaur", "url": "https://pokeapi.co/api/v2/pokemon/1/"},
                    {"name": "ivysaur", "url": "https://pokeapi.co/api/v2/pokemon/2/"}
                ]
            }"#,
        )
        .unwrap();

        assert!(page.next.is_some());
        assert_eq!(page.results.len(), 2);
        assert_eq!(page.results[0].url, "https://pokeapi.co/api/v2/pokemon/1/");
    }

    #[test]
    fn catalog_page_decodes_terminal_page() {
        let page: CatalogPage =
            serde_json::from_str(r#"{"next": null, "results": []}"#).unwrap();
        assert!(page.next.is_none());
        assert!(page.results.is_empty());
    }

    #[test]
    fn catalog_page_rejects_missing_results() {
        let result = serde_json::from_str::<CatalogPage>(r#"{"next": null}"#);
        assert!(result.is_err());
    }

    #[test]
    fn detail_decodes_nested_tags() {
        let detail: PokemonDetail = serde_json::from_str(
            r#"{
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
                    {"game_index": 153, "version": {"name": "red", "url": "https://pokeapi.co/api/v2/version/1/"}}
                ],
                "sprites": {"front_default": "https://img.example/1.png", "back_default": null}
            }"#,
        )
        .unwrap();

        assert_eq!(detail.id, 1);
        assert_eq!(detail.types[1].kind.name, "poison");
        assert_eq!(detail.game_indices[0].version.name, "red");
        assert_eq!(
            detail.sprites.front_default.as_deref(),
            Some("https://img.example/1.png")
        );
    }

    #[test]
    fn detail_accepts_null_sprite() {
        let detail: PokemonDetail = serde_json::from_str(
            r#"{
                "id": 10,
                "name": "caterpie",
                "base_experience": 39,
                "weight": 29,
                "height": 3,
                "order": 14,
                "types": [],
                "game_indices": [],
                "sprites": {"front_default": null}
            }"#,
        )
        .unwrap();
        assert!(detail.sprites.front_default.is_none());
    }

    #[test]
    fn detail_rejects_missing_weight() {
        let result = serde_json::from_str::<PokemonDetail>(
            r#"{
                "id": 1,
                "name": "bulbasaur",
                "base_experience": 64,
                "height": 7,
                "order": 1,
                "types": [],
                "game_indices": [],
                "sprites": {"front_default": null}
            }"#,
        );
        assert!(result.is_err());
    }
}
