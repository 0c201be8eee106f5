use actix_web::{
    get,
    web::{self, Data},
    Responder,
};

use crate::{models::Page, service::PokemonService};

#[get("/api/pokemon")]
pub async fn get_list(page: web::Query<Page>, service: Data<PokemonService>) -> impl Responder {
    service.get_pokemon_list(page.into_inner()).await
}
