//! # Upload Service Module
//!
//! `POST /api/uploads` accepts one multipart request per asset: a `name`
//! part carrying the logical name (e.g. `E1024_cccd1`) followed by a `file`
//! part with the image bytes. The file is streamed to disk under the upload
//! directory and the response carries the durable URL it is served from
//! (`/files/{name}.{ext}`). Re-uploading the same logical name overwrites
//! the previous file, which is what a retried submit does.

mod save;

use actix_web::web::{post, scope};
use actix_web::Scope;

const API_PATH: &str = "/api/uploads";

pub fn configure_routes() -> Scope {
    scope(API_PATH).route("", post().to(save::process))
}
