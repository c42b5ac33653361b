//! General tab - name, code, industry, contacts, status

use super::super::view_model::CompanyDetailsVm;
use contracts::domain::a001_company::aggregate::CompanyStatus;
use contracts::domain::common::FilterOption;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn GeneralTab(vm: CompanyDetailsVm) -> impl IntoView {
    let status = vm.status;

    view! {
        <div class="details-section">
            <h4 class="details-section__title">"Company"</h4>
            <div class="details-grid--3col">
                <div class="form__group" style="grid-column: 1 / -1;">
                    <label class="form__label">"Name *"</label>
                    <Input value=vm.description placeholder="Company name" />
                </div>

                <div class="form__group">
                    <label class="form__label">"Code *"</label>
                    <Input value=vm.code placeholder="CMP-000" />
                </div>

                <div class="form__group">
                    <label class="form__label">"Industry"</label>
                    <Input value=vm.industry placeholder="Optional" />
                </div>

                <div class="form__group">
                    <label class="form__label">"Status"</label>
                    <select
                        class="form__select"
                        on:change=move |ev| status.set(event_target_value(&ev))
                    >
                        {CompanyStatus::options().into_iter().map(|(value, label)| {
                            let value_for_check = value.clone();
                            view! {
                                <option value=value selected=move || status.get() == value_for_check>
                                    {label}
                                </option>
                            }
                        }).collect_view()}
                    </select>
                </div>

                <div class="form__group" style="grid-column: span 2;">
                    <label class="form__label">"Contact email"</label>
                    <Input value=vm.contact_email placeholder="name@company.com" />
                </div>

                <div class="form__group">
                    <label class="form__label">"Phone"</label>
                    <Input value=vm.phone placeholder="Optional" />
                </div>

                <div class="form__group" style="grid-column: 1 / -1;">
                    <label class="form__label">"Comment"</label>
                    <Textarea value=vm.comment placeholder="Optional" attr:rows=3 />
                </div>
            </div>
        </div>
    }
}
