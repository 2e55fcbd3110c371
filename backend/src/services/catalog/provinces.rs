use actix_web::Responder;
use common::model::geo::Province;
use rusqlite::Connection;

use crate::db;

pub async fn process() -> impl Responder {
    let result = db::open().and_then(|conn| list_provinces(&conn));
    match result {
        Ok(provinces) => actix_web::HttpResponse::Ok().json(provinces),
        Err(e) => actix_web::HttpResponse::ServiceUnavailable()
            .body(format!("Error listing provinces: {}", e)),
    }
}

pub fn list_provinces(conn: &Connection) -> Result<Vec<Province>, String> {
    let mut stmt = conn
        .prepare("SELECT code, name FROM provinces ORDER BY name")
        .map_err(|e| e.to_string())?;
    let rows = stmt
        .query_map([], |row| {
            Ok(Province {
                code: row.get(0)?,
                name: row.get(1)?,
            })
        })
        .map_err(|e| e.to_string())?;
    Ok(rows.filter_map(Result::ok).collect())
}
