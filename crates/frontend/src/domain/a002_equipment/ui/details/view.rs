use super::view_model::EquipmentDetailsViewModel;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DETAIL;
use contracts::domain::a002_equipment::aggregate::{Equipment, EquipmentCategory, EquipmentCondition};
use contracts::domain::common::FilterOption;
use leptos::prelude::*;

#[component]
pub fn EquipmentDetails(
    source: Option<Equipment>,
    on_saved: Callback<Equipment>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let vm = EquipmentDetailsViewModel::new();
    if let Some(equipment) = source {
        vm.load(equipment);
    }

    let form = vm.form;
    let error = vm.error;
    let is_edit_mode = vm.is_edit_mode();
    let is_form_valid = vm.is_form_valid();

    view! {
        <PageFrame page_id="a002_equipment--detail" category=PAGE_CAT_DETAIL>
            <div class="details-container equipment-details">
                <div class="details-header">
                    <h3>
                        {move || if is_edit_mode.get() { "Edit equipment" } else { "New equipment" }}
                    </h3>
                </div>

                {move || error.get().map(|e| view! { <div class="error">{e}</div> })}

                <div class="details-form">
                    <div class="form-group">
                        <label for="description">"Name"</label>
                        <input
                            type="text"
                            id="description"
                            prop:value=move || form.with(|f| f.base.description.clone())
                            on:input=move |ev| form.update(|f| f.base.description = event_target_value(&ev))
                            placeholder="Item name"
                        />
                    </div>

                    <div class="form-group">
                        <label for="code">"Code"</label>
                        <input
                            type="text"
                            id="code"
                            prop:value=move || form.with(|f| f.base.code.clone())
                            on:input=move |ev| form.update(|f| f.base.code = event_target_value(&ev))
                            placeholder="EQ-000"
                        />
                    </div>

                    <div class="form-group">
                        <label for="category">"Category"</label>
                        <select
                            id="category"
                            on:change=move |ev| {
                                if let Some(category) = EquipmentCategory::from_str_opt(&event_target_value(&ev)) {
                                    form.update(|f| f.category = category);
                                }
                            }
                        >
                            {EquipmentCategory::all().iter().copied().map(|category| {
                                view! {
                                    <option
                                        value=category.as_str()
                                        selected=move || form.with(|f| f.category == category)
                                    >
                                        {category.label()}
                                    </option>
                                }
                            }).collect_view()}
                        </select>
                    </div>

                    <div class="form-group">
                        <label for="serial_number">"Serial number"</label>
                        <input
                            type="text"
                            id="serial_number"
                            prop:value=move || form.with(|f| f.serial_number.clone())
                            on:input=move |ev| form.update(|f| f.serial_number = event_target_value(&ev))
                            placeholder="Optional"
                        />
                    </div>

                    <div class="form-group">
                        <label for="condition">"Condition"</label>
                        <select
                            id="condition"
                            on:change=move |ev| {
                                if let Some(condition) = EquipmentCondition::from_str_opt(&event_target_value(&ev)) {
                                    form.update(|f| f.condition = condition);
                                }
                            }
                        >
                            {EquipmentCondition::all().iter().copied().map(|condition| {
                                view! {
                                    <option
                                        value=condition.as_str()
                                        selected=move || form.with(|f| f.condition == condition)
                                    >
                                        {condition.label()}
                                    </option>
                                }
                            }).collect_view()}
                        </select>
                    </div>

                    <div class="form-group">
                        <label for="comment">"Comment"</label>
                        <textarea
                            id="comment"
                            prop:value=move || form.with(|f| f.base.comment.clone().unwrap_or_default())
                            on:input={
                                let vm = vm.clone();
                                move |ev| vm.set_comment(event_target_value(&ev))
                            }
                            placeholder="Optional"
                            rows="3"
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
