//! Documents tab - registry (view) or editor (edit) over the event snapshot

use super::super::view_model::EventDetailsVm;
use crate::shared::attachments::{DocumentEditor, DocumentRegistry};
use crate::shared::icons::icon;
use contracts::domain::a005_event::aggregate::Event;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn DocumentsTab(vm: EventDetailsVm) -> impl IntoView {
    let editing = vm.documents_editing;
    let snapshot = vm.snapshot;
    let attachments = Signal::derive(move || snapshot.with(|e| e.attachments.clone()));

    let on_change = Callback::new({
        let vm = vm.clone();
        move |event: Event| vm.replace_snapshot(event)
    });

    view! {
        <div class="details-section">
            <Flex justify=FlexJustify::SpaceBetween align=FlexAlign::Center>
                <h4 class="details-section__title">"Documents"</h4>
                <Button
                    appearance=ButtonAppearance::Secondary
                    size=ButtonSize::Small
                    on_click={
                        let vm = vm.clone();
                        move |_| vm.toggle_documents_mode()
                    }
                >
                    {move || if editing.get() { icon("eye") } else { icon("edit") }}
                    {move || if editing.get() { " View" } else { " Edit" }}
                </Button>
            </Flex>

            <Show
                when=move || editing.get()
                fallback=move || view! { <DocumentRegistry attachments=attachments /> }
            >
                <DocumentEditor entity=snapshot on_change=on_change />
            </Show>
        </div>
    }
}
