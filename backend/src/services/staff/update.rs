use actix_web::web;
use actix_web::Responder;
use common::requests::UpdateProfileRequest;
use rusqlite::{params, Connection};

use crate::db;

pub async fn process(
    staff_id: web::Path<String>,
    payload: web::Json<UpdateProfileRequest>,
) -> impl Responder {
    let result = db::open().and_then(|conn| update_profile(&conn, &staff_id, &payload));
    match result {
        Ok(true) => actix_web::HttpResponse::Ok().body("Profile updated"),
        Ok(false) => actix_web::HttpResponse::NotFound().body("Staff member not found"),
        Err(e) => actix_web::HttpResponse::ServiceUnavailable()
            .body(format!("Error updating profile: {}", e)),
    }
}

/// Persists the profile fields and asset URLs for one staff record.
///
/// A single UPDATE statement keyed by the staff id, so the write is atomic
/// per record. Returns `Ok(false)` when the id matches no row.
pub fn update_profile(
    conn: &Connection,
    staff_id: &str,
    payload: &UpdateProfileRequest,
) -> Result<bool, String> {
    let changed = conn
        .execute(
            "UPDATE staff SET
                 phone = ?1,
                 email = ?2,
                 province_code = ?3,
                 ward_code = ?4,
                 cccd_front_url = ?5,
                 cccd_back_url = ?6,
                 signature_url = ?7,
                 updated_at = datetime('now')
             WHERE id = ?8",
            params![
                payload.phone,
                payload.email,
                payload.province_code,
                payload.ward_code,
                payload.cccd_front_url,
                payload.cccd_back_url,
                payload.signature_url,
                staff_id
            ],
        )
        .map_err(|e| e.to_string())?;
    Ok(changed == 1)
}
