//! State container for the identity update wizard.
//!
//! The wizard owns the step position, the loaded catalogs, the roster of the
//! chosen department, the draft profile and the pending assets for the whole
//! session. Nothing outside `update.rs` mutates these fields; `view.rs` only
//! reads them.

use common::model::geo::{Province, Ward};
use common::model::staff::Staff;

/// The four wizard steps, strictly sequential. `Completed` is terminal: the
/// only way back to `SelectingStaff` is a full page reload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    SelectingStaff,
    EditingProfile,
    UploadingAssets,
    Completed,
}

impl Step {
    /// 1-based step number shown in the progress indicator.
    pub fn number(self) -> u8 {
        match self {
            Step::SelectingStaff => 1,
            Step::EditingProfile => 2,
            Step::UploadingAssets => 3,
            Step::Completed => 4,
        }
    }

    /// The step one position back, for steps where "back" is allowed
    /// (any step after the first and before the terminal one).
    pub fn previous(self) -> Option<Step> {
        match self {
            Step::EditingProfile => Some(Step::SelectingStaff),
            Step::UploadingAssets => Some(Step::EditingProfile),
            Step::SelectingStaff | Step::Completed => None,
        }
    }
}

/// The three asset slots of the extended wizard. The two-asset variant uses
/// only `Front` and `Back`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetSlot {
    Front,
    Back,
    Signature,
}

impl AssetSlot {
    /// Suffix of the logical upload name: `{staff_id}_{suffix}`.
    pub fn logical_suffix(self) -> &'static str {
        match self {
            AssetSlot::Front => "cccd1",
            AssetSlot::Back => "cccd2",
            AssetSlot::Signature => "signature",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            AssetSlot::Front => "Thẻ Mặt Trước",
            AssetSlot::Back => "Thẻ Mặt Sau",
            AssetSlot::Signature => "Chữ Ký",
        }
    }
}

/// The required slots for a wizard variant, in upload order.
pub fn required_slots(require_signature: bool) -> Vec<AssetSlot> {
    let mut slots = vec![AssetSlot::Front, AssetSlot::Back];
    if require_signature {
        slots.push(AssetSlot::Signature);
    }
    slots
}

/// The required slots that are not in `filled`. Submission is allowed iff
/// this is empty.
pub fn missing_slots(filled: &[AssetSlot], require_signature: bool) -> Vec<AssetSlot> {
    required_slots(require_signature)
        .into_iter()
        .filter(|slot| !filled.contains(slot))
        .collect()
}

/// A tagged edit of one draft field. Field names are checked at compile time
/// instead of going through a stringly-keyed merge.
#[derive(Debug, Clone)]
pub enum FieldEdit {
    Phone(String),
    Email(String),
    Province(String),
    Ward(String),
    Address(String),
    CccdNumber(String),
    CccdDate(String),
    CccdIssuer(String),
}

/// The in-progress form values for one staff member. Created empty when a
/// staff record is selected, mutated field by field, frozen on submit.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DraftProfile {
    pub phone: String,
    pub email: String,
    pub province_code: String,
    pub ward_code: String,
    pub address_permanent: String,
    pub cccd_number: String,
    pub cccd_date: String,
    pub cccd_issuer: String,
}

impl DraftProfile {
    /// Applies one tagged edit. Changing the province always clears the ward
    /// code, because no ward is valid across two provinces.
    pub fn apply(&mut self, edit: FieldEdit) {
        match edit {
            FieldEdit::Phone(value) => self.phone = value,
            FieldEdit::Email(value) => self.email = value,
            FieldEdit::Province(value) => {
                self.province_code = value;
                self.ward_code.clear();
            }
            FieldEdit::Ward(value) => self.ward_code = value,
            FieldEdit::Address(value) => self.address_permanent = value,
            FieldEdit::CccdNumber(value) => self.cccd_number = value,
            FieldEdit::CccdDate(value) => self.cccd_date = value,
            FieldEdit::CccdIssuer(value) => self.cccd_issuer = value,
        }
    }

    /// The step-2 completeness gate: all required fields non-empty. Email is
    /// collected but optional. Non-emptiness is the only check by design.
    pub fn is_complete(&self) -> bool {
        !self.phone.is_empty()
            && !self.province_code.is_empty()
            && !self.ward_code.is_empty()
            && !self.address_permanent.is_empty()
            && !self.cccd_number.is_empty()
            && !self.cccd_date.is_empty()
            && !self.cccd_issuer.is_empty()
    }
}

/// One locally selected, not-yet-uploaded image: the file handle and the
/// data-URL preview (empty until the reader finishes).
pub struct PendingAsset {
    pub file: web_sys::File,
    pub preview: String,
}

/// The per-slot pending assets. Slots are independent: replacing one file
/// never touches the others.
#[derive(Default)]
pub struct PendingAssets {
    pub front: Option<PendingAsset>,
    pub back: Option<PendingAsset>,
    pub signature: Option<PendingAsset>,
}

impl PendingAssets {
    pub fn get(&self, slot: AssetSlot) -> Option<&PendingAsset> {
        match slot {
            AssetSlot::Front => self.front.as_ref(),
            AssetSlot::Back => self.back.as_ref(),
            AssetSlot::Signature => self.signature.as_ref(),
        }
    }

    pub fn set(&mut self, slot: AssetSlot, asset: PendingAsset) {
        match slot {
            AssetSlot::Front => self.front = Some(asset),
            AssetSlot::Back => self.back = Some(asset),
            AssetSlot::Signature => self.signature = Some(asset),
        }
    }

    pub fn set_preview(&mut self, slot: AssetSlot, preview: String) {
        let asset = match slot {
            AssetSlot::Front => self.front.as_mut(),
            AssetSlot::Back => self.back.as_mut(),
            AssetSlot::Signature => self.signature.as_mut(),
        };
        if let Some(asset) = asset {
            asset.preview = preview;
        }
    }

    /// The slots that currently hold a file, in slot order.
    pub fn filled(&self) -> Vec<AssetSlot> {
        [AssetSlot::Front, AssetSlot::Back, AssetSlot::Signature]
            .into_iter()
            .filter(|slot| self.get(*slot).is_some())
            .collect()
    }

    /// The required slots still without a file for the given variant.
    pub fn missing(&self, require_signature: bool) -> Vec<AssetSlot> {
        missing_slots(&self.filled(), require_signature)
    }
}

/// Main state container for the `WizardComponent`.
///
/// Fields are `pub` because they are accessed by the `view` and `update`
/// modules.
pub struct WizardComponent {
    /// Current wizard position.
    pub step: Step,

    /// Set before any outstanding gateway call, cleared when it resolves.
    /// Deliberately a single non-stacked boolean.
    pub busy: bool,

    /// Most recent failure description. Overwrite-only: a new error replaces
    /// the old one and nothing auto-clears it.
    pub error: Option<String>,

    /// Department catalog (distinct names), loaded on first render.
    pub departments: Vec<String>,

    /// Province catalog, loaded on first render.
    pub provinces: Vec<Province>,

    /// Wards of the currently selected province. Empty whenever no province
    /// is selected.
    pub wards: Vec<Ward>,

    /// Roster of the currently selected department. Fully replaced on every
    /// department change.
    pub roster: Vec<Staff>,

    /// Currently selected department name; empty means none.
    pub selected_department: String,

    /// Client-side roster search text (matches name or id).
    pub roster_filter: String,

    /// The staff member being edited. Immutable after selection; selecting a
    /// different one resets the draft and the pending assets.
    pub selected_staff: Option<Staff>,

    pub draft: DraftProfile,

    pub pending: PendingAssets,

    /// Guard so the first-render catalog load runs only once.
    pub loaded: bool,
}

impl WizardComponent {
    pub fn new() -> Self {
        Self {
            step: Step::SelectingStaff,
            busy: false,
            error: None,
            departments: Vec::new(),
            provinces: Vec::new(),
            wards: Vec::new(),
            roster: Vec::new(),
            selected_department: String::new(),
            roster_filter: String::new(),
            selected_staff: None,
            draft: DraftProfile::default(),
            pending: PendingAssets::default(),
            loaded: false,
        }
    }

    /// Resets the draft and the pending assets for a freshly selected staff
    /// member, so nothing leaks from a previous edit in the same session.
    pub fn reset_for_staff(&mut self, staff: Staff) {
        self.selected_staff = Some(staff);
        self.draft = DraftProfile::default();
        self.pending = PendingAssets::default();
        self.wards.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_draft() -> DraftProfile {
        DraftProfile {
            phone: "0905123456".to_string(),
            email: String::new(),
            province_code: "01".to_string(),
            ward_code: "001".to_string(),
            address_permanent: "12 Lý Thường Kiệt".to_string(),
            cccd_number: "012345678901".to_string(),
            cccd_date: "2022-06-01".to_string(),
            cccd_issuer: "BỘ CÔNG AN".to_string(),
        }
    }

    #[test]
    fn complete_draft_passes_the_gate_without_email() {
        assert!(complete_draft().is_complete());
    }

    #[test]
    fn any_single_empty_required_field_blocks_the_gate() {
        let blank = |edit: FieldEdit| {
            let mut draft = complete_draft();
            draft.apply(edit);
            draft
        };
        assert!(!blank(FieldEdit::Phone(String::new())).is_complete());
        assert!(!blank(FieldEdit::Ward(String::new())).is_complete());
        assert!(!blank(FieldEdit::Address(String::new())).is_complete());
        assert!(!blank(FieldEdit::CccdNumber(String::new())).is_complete());
        assert!(!blank(FieldEdit::CccdDate(String::new())).is_complete());
        assert!(!blank(FieldEdit::CccdIssuer(String::new())).is_complete());
        // Clearing the province also clears the ward, so it blocks twice over.
        assert!(!blank(FieldEdit::Province(String::new())).is_complete());
    }

    #[test]
    fn changing_province_clears_the_ward_code() {
        let mut draft = complete_draft();
        draft.apply(FieldEdit::Province("02".to_string()));
        assert_eq!(draft.province_code, "02");
        assert!(draft.ward_code.is_empty());
    }

    #[test]
    fn ward_is_cleared_even_if_the_new_province_reuses_the_code() {
        // Two provinces may both contain a ward coded "001"; the stale
        // selection must still be dropped.
        let mut draft = complete_draft();
        assert_eq!(draft.ward_code, "001");
        draft.apply(FieldEdit::Province("02".to_string()));
        assert!(draft.ward_code.is_empty());
    }

    #[test]
    fn missing_slots_requires_every_slot_of_the_variant() {
        use AssetSlot::*;
        assert_eq!(missing_slots(&[], false), vec![Front, Back]);
        assert_eq!(missing_slots(&[Front], false), vec![Back]);
        assert!(missing_slots(&[Front, Back], false).is_empty());

        assert_eq!(missing_slots(&[], true), vec![Front, Back, Signature]);
        assert_eq!(missing_slots(&[Front, Back], true), vec![Signature]);
        assert_eq!(missing_slots(&[Signature, Back], true), vec![Front]);
        assert!(missing_slots(&[Front, Back, Signature], true).is_empty());
    }

    #[test]
    fn signature_alone_never_satisfies_the_two_asset_variant() {
        use AssetSlot::*;
        assert_eq!(missing_slots(&[Signature], false), vec![Front, Back]);
    }

    #[test]
    fn selecting_a_staff_member_resets_the_draft_and_pending_assets() {
        use common::model::staff::Staff;
        let mut component = WizardComponent::new();
        component.draft = complete_draft();
        component.wards = vec![common::model::geo::Ward {
            code: "001".to_string(),
            name: "Phường X".to_string(),
            province_code: "01".to_string(),
        }];

        component.reset_for_staff(Staff {
            id: "E2".to_string(),
            name: "Tran Thi B".to_string(),
            department_name: "Khoa A".to_string(),
        });

        assert_eq!(component.draft, DraftProfile::default());
        assert!(component.pending.filled().is_empty());
        assert!(component.wards.is_empty());
        assert_eq!(component.selected_staff.as_ref().map(|s| s.id.as_str()), Some("E2"));
    }

    #[test]
    fn back_is_available_only_between_the_first_and_last_step() {
        assert_eq!(Step::SelectingStaff.previous(), None);
        assert_eq!(Step::EditingProfile.previous(), Some(Step::SelectingStaff));
        assert_eq!(Step::UploadingAssets.previous(), Some(Step::EditingProfile));
        assert_eq!(Step::Completed.previous(), None);
    }
}
