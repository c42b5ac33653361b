//! Documents tab - registry (view) or editor (edit) over the company snapshot

use super::super::view_model::CompanyDetailsVm;
use crate::shared::attachments::{DocumentEditor, DocumentRegistry};
use crate::shared::icons::icon;
use contracts::domain::a001_company::aggregate::Company;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn DocumentsTab(vm: CompanyDetailsVm) -> impl IntoView {
    let editing = vm.documents_editing;
    let snapshot = vm.snapshot;
    let attachments = Signal::derive(move || snapshot.with(|c| c.attachments.clone()));

    let on_change = Callback::new({
        let vm = vm.clone();
        move |company: Company| vm.replace_snapshot(company)
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
