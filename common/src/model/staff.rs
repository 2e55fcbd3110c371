use serde::{Deserialize, Serialize};

/// A staff record as stored in the `staff` table.
///
/// `id` is the employee code and is unique and immutable. The roster endpoint
/// returns staff filtered by `department_name`; the same field is the source
/// of the department catalog (distinct values).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Staff {
    pub id: String,
    pub name: String,
    pub department_name: String,
}
