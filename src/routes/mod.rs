// Route exports
pub mod destinations;
pub mod weights;

use actix_web::web;

pub use destinations::AppState;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .configure(destinations::configure)
            .configure(weights::configure),
    );
}
