//! Tab content registry - the only place that maps tab.key → View

use crate::domain::a001_company::ui::list::CompanyList;
use crate::domain::a002_equipment::ui::list::EquipmentList;
use crate::domain::a003_staff::ui::list::StaffList;
use crate::domain::a004_outsourced_worker::ui::list::OutsourcedWorkerList;
use crate::domain::a005_event::ui::list::EventList;
use crate::domain::a006_package::ui::list::PackageList;
use leptos::logging::log;
use leptos::prelude::*;

/// Renders the content of a tab by its key (e.g. "a005_event").
///
/// Unknown keys get a placeholder.
pub fn render_tab_content(key: &str) -> AnyView {
    match key {
        "a001_company" => view! { <CompanyList /> }.into_any(),
        "a002_equipment" => view! { <EquipmentList /> }.into_any(),
        "a003_staff" => view! { <StaffList /> }.into_any(),
        "a004_outsourced_worker" => view! { <OutsourcedWorkerList /> }.into_any(),
        "a005_event" => view! { <EventList /> }.into_any(),
        "a006_package" => view! { <PackageList /> }.into_any(),
        _ => {
            log!("Unknown tab type: {}", key);
            view! { <div class="placeholder">{"Not implemented yet"}</div> }.into_any()
        }
    }
}
