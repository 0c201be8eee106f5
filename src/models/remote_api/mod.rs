mod pokemon_list;

pub use pokemon_list::*;
