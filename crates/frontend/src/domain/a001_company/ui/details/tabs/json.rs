//! JSON tab - the snapshot that Save would hand to the list

use super::super::view_model::CompanyDetailsVm;
use leptos::prelude::*;

#[component]
pub fn JsonTab(vm: CompanyDetailsVm) -> impl IntoView {
    let json = move || {
        let company = vm.to_aggregate().unwrap_or_else(|_| vm.snapshot.get());
        serde_json::to_string_pretty(&company).unwrap_or_else(|e| format!("serialization error: {e}"))
    };

    view! {
        <div class="details-section">
            <pre class="json-preview">{json}</pre>
        </div>
    }
}
