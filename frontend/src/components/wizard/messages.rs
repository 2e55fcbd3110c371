use common::model::geo::{Province, Ward};
use common::model::staff::Staff;

use super::state::{AssetSlot, FieldEdit};

pub enum Msg {
    LoadCatalogs,
    CatalogsLoaded {
        departments: Vec<String>,
        provinces: Vec<Province>,
    },
    CatalogsFailed(String),
    DepartmentChosen(String),
    RosterLoaded(Vec<Staff>),
    RosterFailed(String),
    RosterFilterChanged(String),
    StaffChosen(Staff),
    Edit(FieldEdit),
    WardsLoaded(Vec<Ward>),
    WardsFailed(String),
    FileChosen { slot: AssetSlot, file: web_sys::File },
    PreviewLoaded { slot: AssetSlot, preview: String },
    Back,
    ContinueToAssets,
    Submit,
    SubmitSucceeded,
    SubmitFailed(String),
    Restart,
}
