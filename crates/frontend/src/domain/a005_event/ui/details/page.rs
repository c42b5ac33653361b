//! Main page component for Event details
//!
//! Creates the ViewModel, renders the header with Save/Close, the tab bar and
//! the active tab.

use super::tabs::{DocumentsTab, GeneralTab, JsonTab};
use super::view_model::EventDetailsVm;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DETAIL;
use contracts::domain::a005_event::aggregate::Event;
use leptos::prelude::*;
use thaw::*;

/// Details form for an event; `source` is `None` for a new event
#[component]
pub fn EventDetails(
    source: Option<Event>,
    on_saved: Callback<Event>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let vm = EventDetailsVm::new();
    if let Some(event) = source {
        vm.load(event);
    }

    view! {
        <PageFrame page_id="a005_event--detail" category=PAGE_CAT_DETAIL>
            <div class="details-container event-details">
                <Header vm=vm.clone() on_saved=on_saved on_cancel=on_cancel />

                <div class="modal-body">
                    <ErrorDisplay vm=vm.clone() />
                    <TabBar vm=vm.clone() />
                    <div style="height: 60vh; overflow-y: auto; overflow-x: hidden;">
                        <TabContent vm=vm.clone() />
                    </div>
                </div>
            </div>
        </PageFrame>
    }
}

#[component]
fn Header(vm: EventDetailsVm, on_saved: Callback<Event>, on_cancel: Callback<()>) -> impl IntoView {
    let is_edit_mode = vm.is_edit_mode();
    let is_save_disabled = vm.is_save_disabled();

    let handle_save = {
        let vm = vm.clone();
        move |_| vm.save(on_saved)
    };

    view! {
        <div class="modal-header">
            <h3 class="modal-title">
                {move || if is_edit_mode.get() { "Edit event" } else { "New event" }}
            </h3>
            <div class="modal-header-actions">
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=handle_save
                    disabled=is_save_disabled
                >
                    {icon("save")}
                    " Save"
                </Button>
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| on_cancel.run(())
                >
                    {icon("x")}
                    " Close"
                </Button>
            </div>
        </div>
    }
}

#[component]
fn ErrorDisplay(vm: EventDetailsVm) -> impl IntoView {
    let error = vm.error;

    view! {
        {move || error.get().map(|e| view! {
            <div class="warning-box" style="background: var(--color-error-50); border-color: var(--color-error-100); margin-bottom: var(--spacing-md);">
                <span class="warning-box__icon" style="color: var(--color-error);">"⚠"</span>
                <span class="warning-box__text" style="color: var(--color-error);">{e}</span>
            </div>
        })}
    }
}

#[component]
fn TabBar(vm: EventDetailsVm) -> impl IntoView {
    let active_tab = vm.active_tab;
    let documents_count = vm.documents_count();

    let tab_appearance = move |tab: &'static str| {
        Signal::derive(move || {
            if active_tab.get() == tab {
                ButtonAppearance::Primary
            } else {
                ButtonAppearance::Subtle
            }
        })
    };

    view! {
        <Flex
            gap=FlexGap::Small
            align=FlexAlign::Center
            style="margin-bottom: var(--spacing-md); padding: var(--spacing-sm); background: var(--color-bg-secondary); border-radius: var(--radius-lg); border: 1px solid var(--color-border);"
        >
            <Button
                appearance=tab_appearance("general")
                size=ButtonSize::Small
                on_click={
                    let vm = vm.clone();
                    move |_| vm.set_tab("general")
                }
            >
                {icon("file-text")}
                " General"
            </Button>

            <Button
                appearance=tab_appearance("documents")
                size=ButtonSize::Small
                on_click={
                    let vm = vm.clone();
                    move |_| vm.set_tab("documents")
                }
            >
                {icon("file")}
                " Documents"
                <Badge
                    appearance=BadgeAppearance::Tint
                    color=Signal::derive(move || if active_tab.get() == "documents" {
                        BadgeColor::Brand
                    } else {
                        BadgeColor::Informative
                    })
                    attr:style="margin-left: 6px;"
                >
                    {move || documents_count.get().to_string()}
                </Badge>
            </Button>

            <Button
                appearance=tab_appearance("json")
                size=ButtonSize::Small
                on_click={
                    let vm = vm.clone();
                    move |_| vm.set_tab("json")
                }
            >
                {icon("code")}
                " JSON"
            </Button>
        </Flex>
    }
}

#[component]
fn TabContent(vm: EventDetailsVm) -> impl IntoView {
    let active_tab = vm.active_tab;

    move || match active_tab.get() {
        "documents" => view! { <DocumentsTab vm=vm.clone() /> }.into_any(),
        "json" => view! { <JsonTab vm=vm.clone() /> }.into_any(),
        _ => view! { <GeneralTab vm=vm.clone() /> }.into_any(),
    }
}
