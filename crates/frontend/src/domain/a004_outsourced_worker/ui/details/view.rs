use super::view_model::OutsourcedWorkerDetailsViewModel;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DETAIL;
use contracts::domain::a004_outsourced_worker::aggregate::{Availability, OutsourcedWorker};
use contracts::domain::common::FilterOption;
use leptos::prelude::*;

#[component]
pub fn OutsourcedWorkerDetails(
    source: Option<OutsourcedWorker>,
    on_saved: Callback<OutsourcedWorker>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let vm = OutsourcedWorkerDetailsViewModel::new();
    if let Some(worker) = source {
        vm.load(worker);
    }

    let form = vm.form;
    let daily_rate = vm.daily_rate;
    let error = vm.error;
    let is_edit_mode = vm.is_edit_mode();
    let is_form_valid = vm.is_form_valid();

    view! {
        <PageFrame page_id="a004_outsourced_worker--detail" category=PAGE_CAT_DETAIL>
            <div class="details-container outsourced-worker-details">
                <div class="details-header">
                    <h3>
                        {move || if is_edit_mode.get() { "Edit outsourced worker" } else { "New outsourced worker" }}
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
                        <label for="agency">"Agency"</label>
                        <input
                            type="text"
                            id="agency"
                            prop:value=move || form.with(|f| f.agency.clone())
                            on:input=move |ev| form.update(|f| f.agency = event_target_value(&ev))
                            placeholder="Leave empty for freelancers"
                        />
                    </div>

                    <div class="form-group">
                        <label for="skill">"Skill"</label>
                        <input
                            type="text"
                            id="skill"
                            prop:value=move || form.with(|f| f.skill.clone())
                            on:input=move |ev| form.update(|f| f.skill = event_target_value(&ev))
                            placeholder="Rigger, camera operator..."
                        />
                    </div>

                    <div class="form-group">
                        <label for="daily_rate">"Daily rate"</label>
                        <input
                            type="text"
                            id="daily_rate"
                            inputmode="decimal"
                            prop:value=move || daily_rate.get()
                            on:input=move |ev| daily_rate.set(event_target_value(&ev))
                            placeholder="0.00"
                        />
                    </div>

                    <div class="form-group">
                        <label for="availability">"Availability"</label>
                        <select
                            id="availability"
                            on:change=move |ev| {
                                if let Some(availability) = Availability::from_str_opt(&event_target_value(&ev)) {
                                    form.update(|f| f.availability = availability);
                                }
                            }
                        >
                            {Availability::all().iter().copied().map(|availability| {
                                view! {
                                    <option
                                        value=availability.as_str()
                                        selected=move || form.with(|f| f.availability == availability)
                                    >
                                        {availability.label()}
                                    </option>
                                }
                            }).collect_view()}
                        </select>
                    </div>

                    <div class="form-group">
                        <label for="code">"Code"</label>
                        <input
                            type="text"
                            id="code"
                            prop:value=move || form.with(|f| f.base.code.clone())
                            on:input=move |ev| form.update(|f| f.base.code = event_target_value(&ev))
                            placeholder="OW-00"
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
