use super::view_model::PackageDetailsViewModel;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DETAIL;
use contracts::domain::a006_package::aggregate::{Package, PackageTier};
use contracts::domain::common::FilterOption;
use leptos::prelude::*;

#[component]
pub fn PackageDetails(
    source: Option<Package>,
    on_saved: Callback<Package>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let vm = PackageDetailsViewModel::new();
    if let Some(package) = source {
        vm.load(package);
    }

    let form = vm.form;
    let price = vm.price;
    let items_line = vm.items_line;
    let error = vm.error;
    let is_edit_mode = vm.is_edit_mode();
    let is_form_valid = vm.is_form_valid();

    view! {
        <PageFrame page_id="a006_package--detail" category=PAGE_CAT_DETAIL>
            <div class="details-container package-details">
                <div class="details-header">
                    <h3>
                        {move || if is_edit_mode.get() { "Edit package" } else { "New package" }}
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
                            placeholder="Package name"
                        />
                    </div>

                    <div class="form-group">
                        <label for="code">"Code"</label>
                        <input
                            type="text"
                            id="code"
                            prop:value=move || form.with(|f| f.base.code.clone())
                            on:input=move |ev| form.update(|f| f.base.code = event_target_value(&ev))
                            placeholder="PK-00"
                        />
                    </div>

                    <div class="form-group">
                        <label for="tier">"Tier"</label>
                        <select
                            id="tier"
                            on:change=move |ev| {
                                if let Some(tier) = PackageTier::from_str_opt(&event_target_value(&ev)) {
                                    form.update(|f| f.tier = tier);
                                }
                            }
                        >
                            {PackageTier::all().iter().copied().map(|tier| {
                                view! {
                                    <option value=tier.as_str() selected=move || form.with(|f| f.tier == tier)>
                                        {tier.label()}
                                    </option>
                                }
                            }).collect_view()}
                        </select>
                    </div>

                    <div class="form-group">
                        <label for="price">"Price"</label>
                        <input
                            type="text"
                            id="price"
                            inputmode="decimal"
                            prop:value=move || price.get()
                            on:input=move |ev| price.set(event_target_value(&ev))
                            placeholder="0.00"
                        />
                    </div>

                    <div class="form-group">
                        <label for="included_items">"Included items"</label>
                        <textarea
                            id="included_items"
                            prop:value=move || items_line.get()
                            on:input=move |ev| items_line.set(event_target_value(&ev))
                            placeholder="Comma separated, e.g. PA system, LED wall"
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
