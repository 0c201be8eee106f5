use serde::{Deserialize, Serialize};

pub const DEFAULT_LIMIT: u32 = 10;

fn default_limit() -> u32 {
    DEFAULT_LIMIT
}

/// Pagination window requested by the caller and forwarded upstream as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct Page {
    #[serde(default = "default_limit")]
    pub limit: u32,
    #[serde(default)]
    pub offset: u32,
}

impl Default for Page {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            offset: 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PokemonList {
    pub listing: Vec<String>,
    pub limit: u32,
    pub offset: u32,
}

impl PokemonList {
    pub fn new(listing: Vec<String>, page: Page) -> Self {
        Self {
            listing,
            limit: page.limit,
            offset: page.offset,
        }
    }
}
