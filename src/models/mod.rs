pub mod envelope;
pub mod pokemon;
pub mod pokemon_list;
pub mod remote_api;

pub use envelope::ResultEnvelope;
pub use pokemon::PokemonInfo;
pub use pokemon_list::{Page, PokemonList};
