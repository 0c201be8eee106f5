mod get_by_name;
mod get_list;

use actix_web::web::{PathConfig, QueryConfig, ServiceConfig};

use crate::request_error::envelope_error_handler;

pub fn configure(cfg: &mut ServiceConfig) {
    cfg.app_data(PathConfig::default().error_handler(envelope_error_handler))
        .app_data(QueryConfig::default().error_handler(envelope_error_handler))
        .service(get_by_name::get_by_name)
        .service(get_list::get_list);
}
