//! General tab - title, venue, dates, client company, status

use super::super::view_model::EventDetailsVm;
use crate::shared::data::mock;
use contracts::domain::a005_event::aggregate::EventStatus;
use contracts::domain::common::{AggregateId, FilterOption};
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn GeneralTab(vm: EventDetailsVm) -> impl IntoView {
    let companies: Vec<(String, String)> = mock::companies()
        .into_iter()
        .map(|c| (c.base.id.as_string(), c.base.description))
        .collect();
    let company_id = vm.company_id;
    let status = vm.status;

    view! {
        <div class="details-section">
            <h4 class="details-section__title">"Event"</h4>
            <div class="details-grid--3col">
                <div class="form__group" style="grid-column: 1 / -1;">
                    <label class="form__label">"Title *"</label>
                    <Input value=vm.description placeholder="Event title" />
                </div>

                <div class="form__group">
                    <label class="form__label">"Code *"</label>
                    <Input value=vm.code placeholder="EVT-000" />
                </div>

                <div class="form__group" style="grid-column: span 2;">
                    <label class="form__label">"Venue"</label>
                    <Input value=vm.venue placeholder="Optional" />
                </div>

                <div class="form__group">
                    <label class="form__label">"Starts on *"</label>
                    <input type="date" class="form__input" bind:value=vm.starts_on />
                </div>

                <div class="form__group">
                    <label class="form__label">"Ends on *"</label>
                    <input type="date" class="form__input" bind:value=vm.ends_on />
                </div>

                <div class="form__group">
                    <label class="form__label">"Status"</label>
                    <select
                        class="form__select"
                        on:change=move |ev| status.set(event_target_value(&ev))
                    >
                        {EventStatus::options().into_iter().map(|(value, label)| {
                            let value_for_check = value.clone();
                            view! {
                                <option value=value selected=move || status.get() == value_for_check>
                                    {label}
                                </option>
                            }
                        }).collect_view()}
                    </select>
                </div>

                <div class="form__group" style="grid-column: 1 / -1;">
                    <label class="form__label">"Client company"</label>
                    <select
                        class="form__select"
                        on:change=move |ev| company_id.set(event_target_value(&ev))
                    >
                        <option value="" selected=move || company_id.get().is_empty()>"(none)"</option>
                        {companies.into_iter().map(|(value, label)| {
                            let value_for_check = value.clone();
                            view! {
                                <option value=value selected=move || company_id.get() == value_for_check>
                                    {label}
                                </option>
                            }
                        }).collect_view()}
                    </select>
                </div>

                <div class="form__group" style="grid-column: 1 / -1;">
                    <label class="form__label">"Comment"</label>
                    <Textarea value=vm.comment placeholder="Optional" attr:rows=3 />
                </div>
            </div>
        </div>
    }
}
