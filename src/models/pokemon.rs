use serde::Serialize;

/// Flattened view of a single upstream pokemon document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PokemonInfo {
    pub name: String,
    pub base_experience: i64,
    pub height: i64,
    pub weight: i64,
    pub abilities: Vec<String>,
    /// At most [`crate::normalizer::MAX_MOVES`] entries.
    pub moves: Vec<String>,
    pub held_items: Vec<String>,
    pub species: String,
    pub types: Vec<String>,
}
