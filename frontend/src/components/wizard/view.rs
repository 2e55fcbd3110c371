//! View rendering for the identity update wizard.
//!
//! One pane per step: department/staff selection, the profile form, the
//! asset upload slots, and the terminal success card. A progress indicator
//! is shown for steps 1-3 and a back button for any step between the first
//! and the last. All user-facing strings are Vietnamese by design.

use yew::html::Scope;
use yew::prelude::*;

use crate::components::searchable_picker::{PickerOption, SearchablePicker};

use super::helpers::filter_roster;
use super::messages::Msg;
use super::state::{AssetSlot, FieldEdit, Step, WizardComponent};

/// Accepted values for the ID-card issuer field.
const CCCD_ISSUERS: [&str; 2] = [
    "BỘ CÔNG AN",
    "CỤC TRƯỞNG CỤC CẢNH SÁT QUẢN LÝ HÀNH CHÍNH VỀ TRẬT TỰ XÃ HỘI",
];

pub fn view(component: &WizardComponent, ctx: &Context<WizardComponent>) -> Html {
    let link = ctx.link();

    html! {
        <div class="wizard-root">
            <header class="wizard-header">
                <div class="wizard-brand">
                    <h1>{ "Identity Hub" }</h1>
                    <p>{ "Cập nhật hồ sơ nhân viên" }</p>
                </div>
                {
                    if component.step.previous().is_some() {
                        html! {
                            <button class="back-btn" onclick={link.callback(|_| Msg::Back)}>
                                { "← Quay lại" }
                            </button>
                        }
                    } else {
                        html! {}
                    }
                }
            </header>

            { build_busy_overlay(component) }

            <main class="wizard-main">
                {
                    if component.step != Step::Completed {
                        build_progress(component)
                    } else {
                        html! {}
                    }
                }
                { build_error_banner(component) }
                {
                    match component.step {
                        Step::SelectingStaff => build_select_staff(component, ctx),
                        Step::EditingProfile => build_profile_form(component, ctx),
                        Step::UploadingAssets => build_upload_assets(component, ctx),
                        Step::Completed => build_completed(component, ctx),
                    }
                }
            </main>
        </div>
    }
}

fn build_progress(component: &WizardComponent) -> Html {
    html! {
        <div class="step-progress">
            {
                for [Step::SelectingStaff, Step::EditingProfile, Step::UploadingAssets]
                    .into_iter()
                    .map(|step| {
                        let reached = component.step.number() >= step.number();
                        html! {
                            <div class={classes!("step-marker", if reached { "reached" } else { "" })}>
                                { format!("BƯỚC {}", step.number()) }
                            </div>
                        }
                    })
            }
        </div>
    }
}

fn build_busy_overlay(component: &WizardComponent) -> Html {
    if !component.busy {
        return html! {};
    }
    html! {
        <div class="busy-overlay">
            <div class="busy-card">
                <div class="spinner" />
                <p>{ "Đang xử lý dữ liệu..." }</p>
            </div>
        </div>
    }
}

fn build_error_banner(component: &WizardComponent) -> Html {
    match &component.error {
        Some(message) => html! {
            <div class="error-banner">
                <p class="error-title">{ "Đã xảy ra lỗi" }</p>
                <p class="error-detail">{ message.clone() }</p>
            </div>
        },
        None => html! {},
    }
}

/// Step 1: department picker plus the filtered staff roster.
fn build_select_staff(component: &WizardComponent, ctx: &Context<WizardComponent>) -> Html {
    let link = ctx.link();

    let department_options: Vec<PickerOption> = component
        .departments
        .iter()
        .map(|name| PickerOption::new(name.clone(), name.clone()))
        .collect();

    let filtered = filter_roster(&component.roster, &component.roster_filter);

    html! {
        <div class="step step-select-staff">
            <div class="card">
                <h2>{ "Bắt đầu xác thực" }</h2>
                <label>{ "Phòng ban / Khoa" }</label>
                <SearchablePicker
                    options={department_options}
                    value={component.selected_department.clone()}
                    placeholder={"Chọn khoa/phòng...".to_string()}
                    on_select={link.callback(Msg::DepartmentChosen)}
                />
            </div>
            {
                if !component.selected_department.is_empty() {
                    html! {
                        <div class="roster">
                            <p class="roster-title">{ "Danh sách nhân viên" }</p>
                            <input
                                type="text"
                                class="roster-search"
                                placeholder="Tìm theo tên hoặc mã nhân viên..."
                                value={component.roster_filter.clone()}
                                oninput={link.callback(|e: InputEvent| {
                                    let input: web_sys::HtmlInputElement = e.target_unchecked_into();
                                    Msg::RosterFilterChanged(input.value())
                                })}
                            />
                            {
                                if filtered.is_empty() {
                                    html! {
                                        <p class="roster-empty">{ "Không có nhân viên trong khoa này" }</p>
                                    }
                                } else {
                                    html! {
                                        <ul class="roster-list">
                                            {
                                                for filtered.into_iter().map(|staff| {
                                                    let chosen = staff.clone();
                                                    html! {
                                                        <li>
                                                            <button
                                                                class="roster-entry"
                                                                onclick={link.callback(move |_| Msg::StaffChosen(chosen.clone()))}
                                                            >
                                                                <span class="roster-name">{ staff.name.clone() }</span>
                                                                <span class="roster-id">{ staff.id.clone() }</span>
                                                            </button>
                                                        </li>
                                                    }
                                                })
                                            }
                                        </ul>
                                    }
                                }
                            }
                        </div>
                    }
                } else {
                    html! {}
                }
            }
        </div>
    }
}

fn text_input(
    link: &Scope<WizardComponent>,
    value: &str,
    placeholder: &'static str,
    input_type: &'static str,
    make_edit: fn(String) -> FieldEdit,
) -> Html {
    html! {
        <input
            type={input_type}
            value={value.to_string()}
            placeholder={placeholder}
            oninput={link.callback(move |e: InputEvent| {
                let input: web_sys::HtmlInputElement = e.target_unchecked_into();
                Msg::Edit(make_edit(input.value()))
            })}
        />
    }
}

/// Step 2: contact/address details and the ID-card fields, with the
/// continue button gated by the completeness predicate.
fn build_profile_form(component: &WizardComponent, ctx: &Context<WizardComponent>) -> Html {
    let link = ctx.link();

    let staff_card = match &component.selected_staff {
        Some(staff) => html! {
            <div class="staff-card">
                <h2>{ staff.name.clone() }</h2>
                <p>{ staff.department_name.clone() }</p>
            </div>
        },
        None => html! {},
    };

    let province_options: Vec<PickerOption> = component
        .provinces
        .iter()
        .map(|p| PickerOption::new(p.code.clone(), p.name.clone()))
        .collect();
    let ward_options: Vec<PickerOption> = component
        .wards
        .iter()
        .map(|w| PickerOption::new(w.code.clone(), w.name.clone()))
        .collect();
    let issuer_options: Vec<PickerOption> = CCCD_ISSUERS
        .iter()
        .map(|issuer| PickerOption::new(*issuer, *issuer))
        .collect();

    html! {
        <div class="step step-profile">
            { staff_card }
            <div class="card form-card">
                <p class="section-title">{ "Thông tin địa chỉ & Liên lạc" }</p>
                <div class="field-row">
                    <div class="field">
                        <label>{ "Tỉnh / Thành phố" }</label>
                        <SearchablePicker
                            options={province_options}
                            value={component.draft.province_code.clone()}
                            placeholder={"Chọn Tỉnh".to_string()}
                            on_select={link.callback(|code| Msg::Edit(FieldEdit::Province(code)))}
                        />
                    </div>
                    <div class="field">
                        <label>{ "Quận / Huyện / Xã" }</label>
                        // Locked until a province is chosen.
                        <SearchablePicker
                            options={ward_options}
                            value={component.draft.ward_code.clone()}
                            placeholder={"Chọn Xã/Phường".to_string()}
                            disabled={component.draft.province_code.is_empty()}
                            on_select={link.callback(|code| Msg::Edit(FieldEdit::Ward(code)))}
                        />
                    </div>
                </div>
                { text_input(link, &component.draft.address_permanent, "Địa chỉ thường trú (sau sát nhập)", "text", FieldEdit::Address) }
                { text_input(link, &component.draft.phone, "Số điện thoại di động", "tel", FieldEdit::Phone) }
                { text_input(link, &component.draft.email, "Email cá nhân", "email", FieldEdit::Email) }

                <p class="section-title">{ "Chi tiết căn cước công dân" }</p>
                { text_input(link, &component.draft.cccd_number, "Số căn cước công dân (12 số)", "text", FieldEdit::CccdNumber) }
                { text_input(link, &component.draft.cccd_date, "", "date", FieldEdit::CccdDate) }
                <div class="field">
                    <label>{ "Nơi cấp" }</label>
                    <SearchablePicker
                        options={issuer_options}
                        value={component.draft.cccd_issuer.clone()}
                        placeholder={"Chọn Nơi cấp".to_string()}
                        on_select={link.callback(|issuer| Msg::Edit(FieldEdit::CccdIssuer(issuer)))}
                    />
                </div>

                <button
                    class="primary-btn"
                    disabled={!component.draft.is_complete()}
                    onclick={link.callback(|_| Msg::ContinueToAssets)}
                >
                    { "Tiếp tục: Chụp ảnh thẻ →" }
                </button>
            </div>
        </div>
    }
}

fn build_asset_slot(
    component: &WizardComponent,
    link: &Scope<WizardComponent>,
    slot: AssetSlot,
) -> Html {
    let preview = component
        .pending
        .get(slot)
        .map(|asset| asset.preview.clone())
        .unwrap_or_default();

    let on_change = link.batch_callback(move |e: Event| {
        let input: web_sys::HtmlInputElement = e.target_unchecked_into();
        input
            .files()
            .and_then(|files| files.get(0))
            .map(|file| Msg::FileChosen { slot, file })
    });

    html! {
        <div class="asset-slot">
            <input type="file" accept="image/*" onchange={on_change} />
            <div class="asset-frame">
                {
                    if preview.is_empty() {
                        html! { <span class="asset-label">{ slot.label() }</span> }
                    } else {
                        html! { <img src={preview} alt={slot.label()} /> }
                    }
                }
            </div>
        </div>
    }
}

/// Step 3: one file slot per required asset and the submit button, gated by
/// every slot holding a file.
fn build_upload_assets(component: &WizardComponent, ctx: &Context<WizardComponent>) -> Html {
    let link = ctx.link();
    let require_signature = ctx.props().require_signature;
    let slots = super::state::required_slots(require_signature);
    let ready = component.pending.missing(require_signature).is_empty();

    html! {
        <div class="step step-assets">
            <div class="step-heading">
                <h3>{ "Hình ảnh CCCD" }</h3>
                <p>{ "Chụp rõ nét, không mất góc" }</p>
            </div>
            <div class="asset-grid">
                { for slots.into_iter().map(|slot| build_asset_slot(component, link, slot)) }
            </div>
            <button
                class="submit-btn"
                disabled={!ready}
                onclick={link.callback(|_| Msg::Submit)}
            >
                { "XÁC NHẬN VÀ GỬI HỒ SƠ" }
            </button>
        </div>
    }
}

/// Step 4: terminal success card. The only exit is a full reload.
fn build_completed(component: &WizardComponent, ctx: &Context<WizardComponent>) -> Html {
    let link = ctx.link();
    let name = component
        .selected_staff
        .as_ref()
        .map(|staff| staff.name.clone())
        .unwrap_or_default();

    html! {
        <div class="step step-completed card">
            <h2>{ "Hoàn tất!" }</h2>
            <p>
                { "Hồ sơ của " }<strong>{ name }</strong>{ " đã được cập nhật thành công." }
            </p>
            <button class="primary-btn" onclick={link.callback(|_| Msg::Restart)}>
                { "Về Trang Chủ" }
            </button>
        </div>
    }
}
