// Route exports
pub mod errors;
pub mod matches;

use actix_web::web;

pub use errors::{json_config, query_config, JsonError};

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .configure(matches::configure),
    );
}
