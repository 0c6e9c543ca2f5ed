//! Data types for PokeAPI responses
//!
//! Only the fields the CLI uses are mapped; serde ignores the rest.

use serde::{Deserialize, Serialize};

/// A `{ name, url }` reference to another resource
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedResource {
    pub name: String,
    pub url: String,
}

/// One page of `/location-area/`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AreaPage {
    pub count: u32,
    pub next: Option<String>,
    /// `null` on the first page
    pub previous: Option<String>,
    pub results: Vec<NamedResource>,
}

/// `/location-area/{name}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationArea {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub pokemon_encounters: Vec<PokemonEncounter>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonEncounter {
    pub pokemon: NamedResource,
}

/// A base stat such as `hp` or `speed`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stat {
    pub name: String,
    pub base: u32,
}

/// A Pokémon as kept in the Pokédex
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pokemon {
    pub id: u32,
    pub name: String,
    /// Decimetres
    pub height: u32,
    /// Hectograms
    pub weight: u32,
    pub base_experience: u32,
    /// Type names ordered by slot
    pub types: Vec<String>,
    pub abilities: Vec<String>,
    pub stats: Vec<Stat>,
    pub sprite_url: Option<String>,
    pub official_artwork_url: Option<String>,
}

impl Pokemon {
    /// Official artwork if available, otherwise the default front sprite
    pub fn preferred_sprite(&self) -> Option<&str> {
        [&self.official_artwork_url, &self.sprite_url]
            .into_iter()
            .filter_map(|url| url.as_deref())
            .find(|url| !url.is_empty())
    }
}

/// Raw `/pokemon/{name}` payload
#[derive(Debug, Deserialize)]
pub(crate) struct PokemonResponse {
    pub(crate) id: u32,
    pub(crate) name: String,
    #[serde(default)]
    pub(crate) height: u32,
    #[serde(default)]
    pub(crate) weight: u32,
    /// `null` for some forms
    pub(crate) base_experience: Option<u32>,
    #[serde(default)]
    pub(crate) types: Vec<TypeSlot>,
    #[serde(default)]
    pub(crate) abilities: Vec<AbilitySlot>,
    #[serde(default)]
    pub(crate) stats: Vec<StatSlot>,
    #[serde(default)]
    pub(crate) sprites: Sprites,
}

#[derive(Debug, Deserialize)]
pub(crate) struct TypeSlot {
    pub(crate) slot: u32,
    #[serde(rename = "type")]
    pub(crate) kind: NamedResource,
}

#[derive(Debug, Deserialize)]
pub(crate) struct AbilitySlot {
    pub(crate) ability: NamedResource,
}

#[derive(Debug, Deserialize)]
pub(crate) struct StatSlot {
    pub(crate) base_stat: u32,
    pub(crate) stat: NamedResource,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct Sprites {
    pub(crate) front_default: Option<String>,
    pub(crate) other: Option<OtherSprites>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct OtherSprites {
    #[serde(rename = "official-artwork")]
    pub(crate) official_artwork: Option<Artwork>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Artwork {
    pub(crate) front_default: Option<String>,
}

impl From<PokemonResponse> for Pokemon {
    fn from(mut raw: PokemonResponse) -> Self {
        raw.types.sort_by_key(|t| t.slot);

        let official_artwork_url = raw
            .sprites
            .other
            .and_then(|other| other.official_artwork)
            .and_then(|artwork| artwork.front_default);

        Self {
            id: raw.id,
            name: raw.name,
            height: raw.height,
            weight: raw.weight,
            base_experience: raw.base_experience.unwrap_or(0),
            types: raw.types.into_iter().map(|t| t.kind.name).collect(),
            abilities: raw.abilities.into_iter().map(|a| a.ability.name).collect(),
            stats: raw
                .stats
                .into_iter()
                .map(|s| Stat {
                    name: s.stat.name,
                    base: s.base_stat,
                })
                .collect(),
            sprite_url: raw.sprites.front_default,
            official_artwork_url,
        }
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    pub(crate) const AREA_PAGE_1: &str = r#"{
        "count": 1089,
        "next": "https://pokeapi.co/api/v2/location-area/?offset=20&limit=20",
        "previous": null,
        "results": [
            {"name": "canalave-city-area", "url": "https://pokeapi.co/api/v2/location-area/1/"},
            {"name": "eterna-city-area", "url": "https://pokeapi.co/api/v2/location-area/2/"}
        ]
    }"#;

    pub(crate) const AREA_PAGE_2: &str = r#"{
        "count": 1089,
        "next": "https://pokeapi.co/api/v2/location-area/?offset=40&limit=20",
        "previous": "https://pokeapi.co/api/v2/location-area/?offset=0&limit=20",
        "results": [
            {"name": "mt-coronet-1f-route-216", "url": "https://pokeapi.co/api/v2/location-area/21/"}
        ]
    }"#;

    pub(crate) const PASTORIA_AREA: &str = r#"{
        "id": 168,
        "name": "pastoria-city-area",
        "pokemon_encounters": [
            {"pokemon": {"name": "tentacool", "url": "https://pokeapi.co/api/v2/pokemon/72/"}, "version_details": []},
            {"pokemon": {"name": "magikarp", "url": "https://pokeapi.co/api/v2/pokemon/129/"}, "version_details": []}
        ]
    }"#;

    pub(crate) const PIKACHU: &str = r#"{
        "id": 25,
        "name": "pikachu",
        "height": 4,
        "weight": 60,
        "base_experience": 112,
        "types": [
            {"slot": 1, "type": {"name": "electric", "url": "https://pokeapi.co/api/v2/type/13/"}}
        ],
        "abilities": [
            {"ability": {"name": "static", "url": "https://pokeapi.co/api/v2/ability/9/"}, "is_hidden": false, "slot": 1},
            {"ability": {"name": "lightning-rod", "url": "https://pokeapi.co/api/v2/ability/31/"}, "is_hidden": true, "slot": 3}
        ],
        "stats": [
            {"base_stat": 35, "effort": 0, "stat": {"name": "hp", "url": "https://pokeapi.co/api/v2/stat/1/"}},
            {"base_stat": 90, "effort": 2, "stat": {"name": "speed", "url": "https://pokeapi.co/api/v2/stat/6/"}}
        ],
        "sprites": {
            "front_default": "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon/25.png",
            "other": {
                "official-artwork": {
                    "front_default": "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon/other/official-artwork/25.png"
                }
            }
        }
    }"#;
}
