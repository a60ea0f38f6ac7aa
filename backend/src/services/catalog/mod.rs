//! # Catalog Service Module
//!
//! Serves the product seed the browser client loads on start. The host keeps
//! no catalog state of its own: it only hands out the file behind
//! `CATALOG_DB`, whatever it currently contains.
//!
//! ## Sub-modules:
//! - `seed`: the `GET /db.json` handler and the startup check of the seed file.

pub mod seed;

use actix_web::web::get;
use actix_web::Resource;

/// Path the client fetches the product seed from (`./db.json`).
const SEED_PATH: &str = "/db.json";

/// Configures the seed route. Needs `web::Data<HostConfig>` registered on the app.
pub fn configure_routes() -> Resource {
    actix_web::web::resource(SEED_PATH).route(get().to(seed::process))
}
