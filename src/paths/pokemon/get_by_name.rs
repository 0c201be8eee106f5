use actix_web::{
    get,
    web::{self, Data},
    Responder,
};

use crate::service::PokemonService;

#[get("/api/pokemon/{name}")]
pub async fn get_by_name(name: web::Path<String>, service: Data<PokemonService>) -> impl Responder {
    service.get_pokemon(&name.into_inner()).await
}
