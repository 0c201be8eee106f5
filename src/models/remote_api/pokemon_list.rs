use serde::Deserialize;

/// Paginated listing as served by the upstream, e.g. `/pokemon?limit=10&offset=0`.
///
/// Only `results[].name` is read, `count`/`next`/`previous` are ignored.
#[derive(Deserialize)]
pub struct ApiPokemonList {
    pub results: Vec<ApiPokemonListItem>,
}

#[derive(Deserialize)]
pub struct ApiPokemonListItem {
    pub name: String,
}

impl ApiPokemonList {
    pub fn into_names(self) -> Vec<String> {
        self.results.into_iter().map(|item| item.name).collect()
    }
}
