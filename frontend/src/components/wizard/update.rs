//! Update function for the identity update wizard.
//!
//! Elm-style: receives the current `WizardComponent` state, the `Context`
//! and a `Msg`, mutates the state and returns whether the view should
//! re-render. All gateway calls are dispatched from here via `spawn_local`
//! and report back through further messages.
//!
//! Transition contract
//! - `SelectingStaff → EditingProfile` on `StaffChosen`; entering step 2
//!   resets the draft and the pending assets unconditionally.
//! - `EditingProfile → UploadingAssets` on `ContinueToAssets`, gated by the
//!   draft completeness predicate.
//! - `UploadingAssets → Completed` on `Submit`, gated by every required
//!   asset slot holding a file; uploads fan out in parallel and the persist
//!   call runs only after all of them succeed.
//! - `Back` moves one step backwards wherever `Step::previous` allows it.
//!
//! Dependent data: a department change refetches and fully replaces the
//! roster (no fetch for an empty selection); a province edit clears the ward
//! selection and refetches the ward list (no fetch for an empty code).

use common::requests::UpdateProfileRequest;
use gloo_file::futures::read_as_data_url;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api;

use super::helpers::{refresh_for, Refresh};
use super::messages::Msg;
use super::state::{FieldEdit, PendingAsset, Step, WizardComponent};
use super::submit::perform_submit;

const CATALOG_LOAD_ERROR: &str = "Không thể tải danh mục từ máy chủ.";
const ROSTER_LOAD_ERROR: &str = "Lỗi khi tải danh sách nhân viên.";

pub fn update(component: &mut WizardComponent, ctx: &Context<WizardComponent>, msg: Msg) -> bool {
    match msg {
        Msg::LoadCatalogs => {
            component.busy = true;
            let link = ctx.link().clone();
            spawn_local(async move {
                let (departments, provinces) =
                    futures::join!(api::fetch_departments(), api::fetch_provinces());
                match (departments, provinces) {
                    (Ok(departments), Ok(provinces)) => {
                        link.send_message(Msg::CatalogsLoaded {
                            departments,
                            provinces,
                        });
                    }
                    _ => link.send_message(Msg::CatalogsFailed(CATALOG_LOAD_ERROR.to_string())),
                }
            });
            true
        }
        Msg::CatalogsLoaded {
            departments,
            provinces,
        } => {
            component.busy = false;
            component.departments = departments;
            component.provinces = provinces;
            true
        }
        Msg::CatalogsFailed(message) => {
            component.busy = false;
            component.error = Some(message);
            true
        }
        Msg::DepartmentChosen(department) => {
            component.selected_department = department.clone();
            component.roster_filter.clear();
            match refresh_for(&department) {
                Refresh::Clear => {
                    component.roster.clear();
                }
                Refresh::Fetch(_) => {
                    component.busy = true;
                    let link = ctx.link().clone();
                    spawn_local(async move {
                        match api::fetch_roster(&department).await {
                            Ok(roster) => link.send_message(Msg::RosterLoaded(roster)),
                            Err(_) => link
                                .send_message(Msg::RosterFailed(ROSTER_LOAD_ERROR.to_string())),
                        }
                    });
                }
            }
            true
        }
        Msg::RosterLoaded(roster) => {
            component.busy = false;
            // Full replacement, never a merge with the previous department.
            component.roster = roster;
            true
        }
        Msg::RosterFailed(message) => {
            component.busy = false;
            component.roster.clear();
            component.error = Some(message);
            true
        }
        Msg::RosterFilterChanged(query) => {
            component.roster_filter = query;
            true
        }
        Msg::StaffChosen(staff) => {
            component.reset_for_staff(staff);
            component.step = Step::EditingProfile;
            true
        }
        Msg::Edit(edit) => {
            let province_changed = matches!(edit, FieldEdit::Province(_));
            component.draft.apply(edit);
            if province_changed {
                component.wards.clear();
                if let Refresh::Fetch(code) = refresh_for(&component.draft.province_code) {
                    // Ward refetches deliberately do not toggle the busy flag.
                    let code = code.to_string();
                    let link = ctx.link().clone();
                    spawn_local(async move {
                        match api::fetch_wards(&code).await {
                            Ok(wards) => link.send_message(Msg::WardsLoaded(wards)),
                            Err(_) => link
                                .send_message(Msg::WardsFailed(CATALOG_LOAD_ERROR.to_string())),
                        }
                    });
                }
            }
            true
        }
        Msg::WardsLoaded(wards) => {
            component.wards = wards;
            true
        }
        Msg::WardsFailed(message) => {
            component.wards.clear();
            component.error = Some(message);
            true
        }
        Msg::FileChosen { slot, file } => {
            let preview_source = file.clone();
            component.pending.set(
                slot,
                PendingAsset {
                    file,
                    preview: String::new(),
                },
            );
            let link = ctx.link().clone();
            wasm_bindgen_futures::spawn_local(async move {
                let blob = gloo_file::File::from(preview_source);
                if let Ok(preview) = read_as_data_url(&blob).await {
                    link.send_message(Msg::PreviewLoaded { slot, preview });
                }
            });
            true
        }
        Msg::PreviewLoaded { slot, preview } => {
            component.pending.set_preview(slot, preview);
            true
        }
        Msg::Back => {
            if let Some(previous) = component.step.previous() {
                component.step = previous;
                return true;
            }
            false
        }
        Msg::ContinueToAssets => {
            if component.step == Step::EditingProfile && component.draft.is_complete() {
                component.step = Step::UploadingAssets;
                return true;
            }
            false
        }
        Msg::Submit => {
            let require_signature = ctx.props().require_signature;
            if component.step != Step::UploadingAssets
                || !component.pending.missing(require_signature).is_empty()
            {
                return false;
            }
            let staff = match &component.selected_staff {
                Some(staff) => staff.clone(),
                None => return false,
            };

            component.busy = true;
            component.error = None;

            let pending: Vec<_> = component
                .pending
                .filled()
                .into_iter()
                .filter_map(|slot| {
                    component
                        .pending
                        .get(slot)
                        .map(|asset| (slot, asset.file.clone()))
                })
                .collect();
            let draft = component.draft.clone();
            let link = ctx.link().clone();

            spawn_local(async move {
                let staff_id = staff.id.clone();
                let result = perform_submit(
                    pending,
                    |slot, file| {
                        let name = format!("{}_{}", staff_id, slot.logical_suffix());
                        api::upload_asset(file, name)
                    },
                    move |assets| async move {
                        let payload = UpdateProfileRequest {
                            phone: draft.phone,
                            email: draft.email,
                            province_code: draft.province_code,
                            ward_code: draft.ward_code,
                            cccd_front_url: assets.front,
                            cccd_back_url: assets.back,
                            signature_url: assets.signature,
                        };
                        api::update_profile(&staff.id, &payload).await
                    },
                )
                .await;

                match result {
                    Ok(()) => link.send_message(Msg::SubmitSucceeded),
                    Err(message) => link.send_message(Msg::SubmitFailed(message)),
                }
            });
            true
        }
        Msg::SubmitSucceeded => {
            component.busy = false;
            component.step = Step::Completed;
            true
        }
        Msg::SubmitFailed(message) => {
            // Stay on step 3 with the files still selected so the user can
            // retry; a retry re-uploads every asset.
            component.busy = false;
            component.error = Some(message);
            true
        }
        Msg::Restart => {
            if let Some(window) = web_sys::window() {
                let _ = window.location().reload();
            }
            false
        }
    }
}
