use serde::{Deserialize, Serialize};

/// Payload for `POST /api/staff/{id}/profile`.
///
/// This is the persisted field set: contact info, province/ward codes and the
/// uploaded asset URLs. `signature_url` is `None` for the two-asset variant
/// of the wizard.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateProfileRequest {
    pub phone: String,
    pub email: String,
    pub province_code: String,
    pub ward_code: String,
    pub cccd_front_url: String,
    pub cccd_back_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signature_url: Option<String>,
}

/// Query of `GET /api/staff`: the department whose roster is requested.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterQuery {
    pub department: String,
}

/// Response of `POST /api/uploads`: the durable public URL of the stored file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadResponse {
    pub url: String,
}
