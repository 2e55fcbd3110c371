//! # Staff Service Module
//!
//! Routes under `/api/staff`:
//!
//! *   **`GET ?department=…`** — the roster of one department, ordered by
//!     name. An unknown department yields an empty list.
//! *   **`POST /{staff_id}/profile`** — persists the contact fields and the
//!     uploaded asset URLs for one staff record in a single atomic UPDATE.

mod roster;
mod update;

use actix_web::web::{get, post, scope};
use actix_web::Scope;

const API_PATH: &str = "/api/staff";

pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("", get().to(roster::process))
        .route("/{staff_id}/profile", post().to(update::process))
}
