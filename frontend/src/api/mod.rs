//! Gateway clients for the backend API.
//!
//! Every function here is a thin `gloo-net` wrapper around one endpoint and
//! returns `Result<T, String>` where the `Err` carries a human-readable
//! message (in Vietnamese, like every user-facing string in this app). The
//! wizard stores that message in its single error slot; no further
//! classification happens on this side.

use common::model::geo::{Province, Ward};
use common::model::staff::Staff;
use common::requests::{UpdateProfileRequest, UploadResponse};
use gloo_net::http::{Request, Response};
use web_sys::FormData;

const SERVER_ERROR: &str = "Máy chủ trả về lỗi không xác định.";

/// Error responses are expected to carry a plain-text body; a body-less
/// failure still has to surface something readable in the error banner.
fn non_empty_or(body: String, fallback: &str) -> String {
    if body.trim().is_empty() {
        fallback.to_string()
    } else {
        body
    }
}

async fn error_text(response: Response) -> String {
    non_empty_or(response.text().await.unwrap_or_default(), SERVER_ERROR)
}

/// `GET /api/catalog/departments` — distinct department names.
pub async fn fetch_departments() -> Result<Vec<String>, String> {
    let response = Request::get("/api/catalog/departments")
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if response.status() != 200 {
        return Err(error_text(response).await);
    }
    response.json().await.map_err(|e| e.to_string())
}

/// `GET /api/catalog/provinces` — all provinces, ordered by name.
pub async fn fetch_provinces() -> Result<Vec<Province>, String> {
    let response = Request::get("/api/catalog/provinces")
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if response.status() != 200 {
        return Err(error_text(response).await);
    }
    response.json().await.map_err(|e| e.to_string())
}

/// `GET /api/catalog/wards/{province_code}` — wards of one province, ordered
/// by name. An unknown code yields an empty list, not an error.
pub async fn fetch_wards(province_code: &str) -> Result<Vec<Ward>, String> {
    let response = Request::get(&format!("/api/catalog/wards/{}", province_code))
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if response.status() != 200 {
        return Err(error_text(response).await);
    }
    response.json().await.map_err(|e| e.to_string())
}

/// `GET /api/staff?department=…` — the roster of one department.
pub async fn fetch_roster(department: &str) -> Result<Vec<Staff>, String> {
    let response = Request::get("/api/staff")
        .query([("department", department)])
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if response.status() != 200 {
        return Err(error_text(response).await);
    }
    response.json().await.map_err(|e| e.to_string())
}

/// `POST /api/uploads` — multipart upload of one image under a logical name
/// (e.g. `E1024_cccd1`). Returns the durable public URL of the stored file.
pub async fn upload_asset(file: web_sys::File, logical_name: String) -> Result<String, String> {
    let form = FormData::new().map_err(|_| "Không thể chuẩn bị dữ liệu tải lên.".to_string())?;
    form.append_with_str("name", &logical_name)
        .map_err(|_| "Không thể chuẩn bị dữ liệu tải lên.".to_string())?;
    form.append_with_blob_and_filename("file", &file, &file.name())
        .map_err(|_| "Không thể chuẩn bị dữ liệu tải lên.".to_string())?;

    let response = Request::post("/api/uploads")
        .body(form)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;

    if response.status() != 200 {
        return Err(error_text(response).await);
    }
    let payload: UploadResponse = response.json().await.map_err(|e| e.to_string())?;
    Ok(payload.url)
}

/// `POST /api/staff/{id}/profile` — persist the contact fields and asset URLs
/// for one staff record. Atomic per record on the server side.
pub async fn update_profile(staff_id: &str, payload: &UpdateProfileRequest) -> Result<(), String> {
    let response = Request::post(&format!("/api/staff/{}/profile", staff_id))
        .json(payload)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;

    if response.status() != 200 {
        return Err(error_text(response).await);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::non_empty_or;

    #[test]
    fn bodyless_failure_falls_back_to_the_generic_message() {
        assert_eq!(non_empty_or(String::new(), "dự phòng"), "dự phòng");
        assert_eq!(non_empty_or("  \n".to_string(), "dự phòng"), "dự phòng");
    }

    #[test]
    fn server_message_passes_through_unchanged() {
        assert_eq!(
            non_empty_or("Tên tệp không hợp lệ".to_string(), "dự phòng"),
            "Tên tệp không hợp lệ"
        );
    }
}
