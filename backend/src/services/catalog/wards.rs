use actix_web::web;
use actix_web::Responder;
use common::model::geo::Ward;
use rusqlite::{params, Connection};

use crate::db;

pub async fn process(province_code: web::Path<String>) -> impl Responder {
    let result = db::open().and_then(|conn| list_wards(&conn, &province_code));
    match result {
        Ok(wards) => actix_web::HttpResponse::Ok().json(wards),
        Err(e) => actix_web::HttpResponse::ServiceUnavailable()
            .body(format!("Error listing wards: {}", e)),
    }
}

/// Wards belonging to one province, ordered by name. An unknown or empty
/// code simply matches no rows.
pub fn list_wards(conn: &Connection, province_code: &str) -> Result<Vec<Ward>, String> {
    let mut stmt = conn
        .prepare("SELECT code, name, province_code FROM wards WHERE province_code = ?1 ORDER BY name")
        .map_err(|e| e.to_string())?;
    let rows = stmt
        .query_map(params![province_code], |row| {
            Ok(Ward {
                code: row.get(0)?,
                name: row.get(1)?,
                province_code: row.get(2)?,
            })
        })
        .map_err(|e| e.to_string())?;
    Ok(rows.filter_map(Result::ok).collect())
}

#[cfg(test)]
mod tests {
    use super::list_wards;
    use crate::db::open_test_db;
    use crate::services::catalog::departments::list_departments;
    use crate::services::catalog::provinces::list_provinces;
    use rusqlite::params;

    #[test]
    fn wards_are_scoped_to_their_province() {
        let dir = tempfile::tempdir().unwrap();
        let conn = open_test_db(&dir);
        conn.execute_batch(
            "INSERT INTO provinces (code, name) VALUES ('01', 'Hà Nội'), ('02', 'Hà Giang');
             INSERT INTO wards (code, name, province_code) VALUES ('001', 'Phường X', '01');",
        )
        .unwrap();

        let wards = list_wards(&conn, "01").unwrap();
        assert_eq!(wards.len(), 1);
        assert_eq!(wards[0].code, "001");
        assert_eq!(wards[0].province_code, "01");

        assert!(list_wards(&conn, "02").unwrap().is_empty());
        assert!(list_wards(&conn, "99").unwrap().is_empty());
    }

    #[test]
    fn wards_come_back_ordered_by_name() {
        let dir = tempfile::tempdir().unwrap();
        let conn = open_test_db(&dir);
        conn.execute_batch(
            "INSERT INTO provinces (code, name) VALUES ('01', 'Hà Nội');
             INSERT INTO wards (code, name, province_code) VALUES
                 ('003', 'Phường C', '01'),
                 ('001', 'Phường A', '01'),
                 ('002', 'Phường B', '01');",
        )
        .unwrap();

        let names: Vec<String> = list_wards(&conn, "01")
            .unwrap()
            .into_iter()
            .map(|w| w.name)
            .collect();
        assert_eq!(names, vec!["Phường A", "Phường B", "Phường C"]);
    }

    #[test]
    fn departments_are_distinct_and_skip_blanks() {
        let dir = tempfile::tempdir().unwrap();
        let conn = open_test_db(&dir);
        for (id, dept) in [("E1", "Khoa A"), ("E2", "Khoa A"), ("E3", "Khoa B"), ("E4", "")] {
            conn.execute(
                "INSERT INTO staff (id, name, department_name) VALUES (?1, ?2, ?3)",
                params![id, format!("NV {}", id), dept],
            )
            .unwrap();
        }

        let departments = list_departments(&conn).unwrap();
        assert_eq!(departments, vec!["Khoa A", "Khoa B"]);
    }

    #[test]
    fn provinces_come_back_ordered_by_name() {
        let dir = tempfile::tempdir().unwrap();
        let conn = open_test_db(&dir);
        conn.execute_batch(
            "INSERT INTO provinces (code, name) VALUES
                 ('79', 'TP. Hồ Chí Minh'), ('01', 'Hà Nội'), ('48', 'Đà Nẵng');",
        )
        .unwrap();

        let codes: Vec<String> = list_provinces(&conn)
            .unwrap()
            .into_iter()
            .map(|p| p.code)
            .collect();
        // SQLite orders by byte value; the accented names still sort stably.
        assert_eq!(codes.len(), 3);
        assert_eq!(codes[0], "01");
    }
}
