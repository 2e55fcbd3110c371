use actix_web::web;
use actix_web::Responder;
use common::model::staff::Staff;
use common::requests::RosterQuery;
use rusqlite::{params, Connection};

use crate::db;

pub async fn process(query: web::Query<RosterQuery>) -> impl Responder {
    let result = db::open().and_then(|conn| list_staff(&conn, &query.department));
    match result {
        Ok(staff) => actix_web::HttpResponse::Ok().json(staff),
        Err(e) => actix_web::HttpResponse::ServiceUnavailable()
            .body(format!("Error listing staff: {}", e)),
    }
}

/// The staff of one department, ordered by name.
pub fn list_staff(conn: &Connection, department: &str) -> Result<Vec<Staff>, String> {
    let mut stmt = conn
        .prepare(
            "SELECT id, name, department_name FROM staff
             WHERE department_name = ?1 ORDER BY name",
        )
        .map_err(|e| e.to_string())?;
    let rows = stmt
        .query_map(params![department], |row| {
            Ok(Staff {
                id: row.get(0)?,
                name: row.get(1)?,
                department_name: row.get(2)?,
            })
        })
        .map_err(|e| e.to_string())?;
    Ok(rows.filter_map(Result::ok).collect())
}

#[cfg(test)]
mod tests {
    use super::list_staff;
    use crate::db::open_test_db;
    use rusqlite::params;

    #[test]
    fn roster_is_filtered_by_department() {
        let dir = tempfile::tempdir().unwrap();
        let conn = open_test_db(&dir);
        for (id, name, dept) in [
            ("E1", "Nguyen Van A", "Khoa A"),
            ("E2", "Tran Thi B", "Khoa B"),
            ("E3", "Le Van C", "Khoa A"),
        ] {
            conn.execute(
                "INSERT INTO staff (id, name, department_name) VALUES (?1, ?2, ?3)",
                params![id, name, dept],
            )
            .unwrap();
        }

        let roster = list_staff(&conn, "Khoa A").unwrap();
        let ids: Vec<&str> = roster.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["E3", "E1"]);

        assert!(list_staff(&conn, "Khoa C").unwrap().is_empty());
    }
}
