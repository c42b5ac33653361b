use super::view_model::StaffDetailsViewModel;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DETAIL;
use contracts::domain::a003_staff::aggregate::{Department, Staff};
use contracts::domain::common::FilterOption;
use leptos::prelude::*;

#[component]
pub fn StaffDetails(
    source: Option<Staff>,
    on_saved: Callback<Staff>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let vm = StaffDetailsViewModel::new();
    if let Some(member) = source {
        vm.load(member);
    }

    let form = vm.form;
    let error = vm.error;
    let is_edit_mode = vm.is_edit_mode();
    let is_form_valid = vm.is_form_valid();

    view! {
        <PageFrame page_id="a003_staff--detail" category=PAGE_CAT_DETAIL>
            <div class="details-container staff-details">
                <div class="details-header">
                    <h3>
                        {move || if is_edit_mode.get() { "Edit staff member" } else { "New staff member" }}
                    </h3>
                </div>

                {move || error.get().map(|e| view! { <div class="error">{e}</div> })}

                <div class="details-form">
                    <div class="form-group">
                        <label for="full_name">"Full name"</label>
                        <input
                            type="text"
                            id="full_name"
                            prop:value=move || form.with(|f| f.base.description.clone())
                            on:input=move |ev| form.update(|f| f.base.description = event_target_value(&ev))
                            placeholder="First and last name"
                        />
                    </div>

                    <div class="form-group">
                        <label for="position">"Position"</label>
                        <input
                            type="text"
                            id="position"
                            prop:value=move || form.with(|f| f.position.clone())
                            on:input=move |ev| form.update(|f| f.position = event_target_value(&ev))
                            placeholder="Role in the team"
                        />
                    </div>

                    <div class="form-group">
                        <label for="department">"Department"</label>
                        <select
                            id="department"
                            on:change=move |ev| {
                                if let Some(department) = Department::from_str_opt(&event_target_value(&ev)) {
                                    form.update(|f| f.department = department);
                                }
                            }
                        >
                            {Department::all().iter().copied().map(|department| {
                                view! {
                                    <option
                                        value=department.as_str()
                                        selected=move || form.with(|f| f.department == department)
                                    >
                                        {department.label()}
                                    </option>
                                }
                            }).collect_view()}
                        </select>
                    </div>

                    <div class="form-group">
                        <label for="email">"Email"</label>
                        <input
                            type="email"
                            id="email"
                            prop:value=move || form.with(|f| f.email.clone())
                            on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                            placeholder="name@company.com"
                        />
                    </div>

                    <div class="form-group">
                        <label for="phone">"Phone"</label>
                        <input
                            type="tel"
                            id="phone"
                            prop:value=move || form.with(|f| f.phone.clone())
                            on:input=move |ev| form.update(|f| f.phone = event_target_value(&ev))
                            placeholder="Optional"
                        />
                    </div>

                    <div class="form-group">
                        <label for="code">"Employee code"</label>
                        <input
                            type="text"
                            id="code"
                            prop:value=move || form.with(|f| f.base.code.clone())
                            on:input=move |ev| form.update(|f| f.base.code = event_target_value(&ev))
                            placeholder="ST-00"
                        />
                    </div>
                </div>

                <div class="details-actions">
                    <button
                        class="btn btn-primary"
                        on:click={
                            let vm = vm.clone();
                            move |_| vm.save_command(on_saved)
                        }
                        disabled=move || !is_form_valid.get()
                    >
                        {icon("save")}
                        {move || if is_edit_mode.get() { " Save" } else { " Create" }}
                    </button>
                    <button class="btn btn-secondary" on:click=move |_| on_cancel.run(())>
                        {icon("x")}
                        " Cancel"
                    </button>
                </div>
            </div>
        </PageFrame>
    }
}
