use serde::{Deserialize, Serialize};

/// A province/city entry from the `provinces` table. `code` is the unique key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Province {
    pub code: String,
    pub name: String,
}

/// A ward entry from the `wards` table. `province_code` is the owning
/// province; the ward list shown to the user is always scoped to one province.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ward {
    pub code: String,
    pub name: String,
    pub province_code: String,
}
