//! # Catalog Service Module
//!
//! Read-only reference data consumed by the wizard's first and second steps.
//! Routes under `/api/catalog`:
//!
//! *   **`GET /departments`** — distinct non-empty department names, derived
//!     from the `staff` table (there is no separate departments table).
//! *   **`GET /provinces`** — all provinces, ordered by name.
//! *   **`GET /wards/{province_code}`** — the wards of one province, ordered
//!     by name; an unknown code yields an empty list.

mod departments;
mod provinces;
mod wards;

use actix_web::web::{get, scope};
use actix_web::Scope;

const API_PATH: &str = "/api/catalog";

pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("/departments", get().to(departments::process))
        .route("/provinces", get().to(provinces::process))
        .route("/wards/{province_code}", get().to(wards::process))
}
