use actix_web::Responder;
use rusqlite::Connection;

use crate::db;

pub async fn process() -> impl Responder {
    let result = db::open().and_then(|conn| list_departments(&conn));
    match result {
        Ok(departments) => actix_web::HttpResponse::Ok().json(departments),
        Err(e) => actix_web::HttpResponse::ServiceUnavailable()
            .body(format!("Error listing departments: {}", e)),
    }
}

/// Distinct non-empty department names from the staff table, ordered.
pub fn list_departments(conn: &Connection) -> Result<Vec<String>, String> {
    let mut stmt = conn
        .prepare(
            "SELECT DISTINCT department_name FROM staff
             WHERE department_name IS NOT NULL AND department_name <> ''
             ORDER BY department_name",
        )
        .map_err(|e| e.to_string())?;
    let rows = stmt
        .query_map([], |row| row.get::<_, String>(0))
        .map_err(|e| e.to_string())?;
    Ok(rows.filter_map(Result::ok).collect())
}
