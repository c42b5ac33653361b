pub mod state;

use self::state::create_state;
use crate::domain::a003_staff::ui::details::StaffDetails;
use crate::shared::components::filter_panel::{FilterPanel, FilterTag};
use crate::shared::components::multi_select_filter::MultiSelectFilter;
use crate::shared::components::page_header::PageHeader;
use crate::shared::config::use_ui_config;
use crate::shared::data::mock;
use crate::shared::icons::icon;
use crate::shared::list_utils::SearchInput;
use crate::shared::modal_frame::ModalFrame;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::domain::a003_staff::aggregate::{Department, Staff};
use contracts::domain::common::{AggregateRoot, FilterOption};
use leptos::prelude::*;
use thaw::*;

#[component]
#[allow(non_snake_case)]
pub fn StaffList() -> impl IntoView {
    let state = create_state();
    let min_chars = use_ui_config().search.min_chars;
    let filter_expanded = RwSignal::new(false);
    let show_modal = RwSignal::new(false);
    let editing = RwSignal::new(None::<Staff>);

    state.update(|s| s.load(mock::staff()));

    let handle_create_new = move || {
        editing.set(None);
        show_modal.set(true);
    };

    let handle_edit = move |member: Staff| {
        editing.set(Some(member));
        show_modal.set(true);
    };

    let on_saved = Callback::new(move |member: Staff| {
        log::info!("staff member saved: {}", member.base.code);
        state.update(|s| s.upsert(member));
        show_modal.set(false);
    });

    let on_cancel = Callback::new(move |_| show_modal.set(false));

    let search_text = Signal::derive(move || state.with(|s| s.search_text.clone()));
    let selected = Signal::derive(move || state.with(|s| s.selected_filters.clone()));
    let active_filters_count = Signal::derive(move || state.with(|s| s.selected_filters.len()));

    view! {
        <PageFrame page_id="a003_staff--list" category=PAGE_CAT_LIST>
            <PageHeader title=Staff::list_name() subtitle="In-house team".to_string()>
                <Button appearance=ButtonAppearance::Primary on_click=move |_| handle_create_new()>
                    {icon("plus")}
                    " New staff member"
                </Button>
            </PageHeader>

            <div class="page__content">
                <Flex gap=FlexGap::Small align=FlexAlign::Center>
                    <SearchInput
                        value=search_text
                        on_change=Callback::new(move |text: String| state.update(|s| s.search_text = text))
                        placeholder="Search by name, email or phone..."
                    />
                </Flex>

                <FilterPanel is_expanded=filter_expanded active_filters_count=active_filters_count>
                    <MultiSelectFilter
                        label="Department"
                        options=Department::options()
                        selected=selected
                        on_change=Callback::new(move |values: Vec<String>| {
                            state.update(|s| s.selected_filters = values)
                        })
                    />
                    <div class="filter-panel__tags">
                        {move || state.with(|s| s.selected_options()).into_iter().map(|(value, label)| {
                            view! {
                                <FilterTag
                                    label=label
                                    on_remove=Callback::new(move |_| state.update(|s| s.remove_filter(&value)))
                                />
                            }
                        }).collect_view()}
                    </div>
                </FilterPanel>

                <div class="list-summary">
                    {move || state.with(|s| format!("{} people · {}", s.items.len(), s.summary(min_chars)))}
                </div>

                <Table>
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell resizable=true min_width=200.0>"Full name"</TableHeaderCell>
                            <TableHeaderCell resizable=true min_width=160.0>"Position"</TableHeaderCell>
                            <TableHeaderCell min_width=130.0>"Department"</TableHeaderCell>
                            <TableHeaderCell resizable=true min_width=200.0>"Email"</TableHeaderCell>
                            <TableHeaderCell min_width=140.0>"Phone"</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        {move || state.with(|s| s.items.clone()).into_iter().map(|member| {
                            let name = member.full_name().to_string();
                            let position = member.position.clone();
                            let department = member.department.label();
                            let email = member.email.clone();
                            let phone = member.phone.clone();
                            view! {
                                <TableRow>
                                    <TableCell>
                                        <TableCellLayout truncate=true>
                                            {icon("user")}
                                            " "
                                            <a
                                                href="#"
                                                class="table__link"
                                                on:click=move |e| {
                                                    e.prevent_default();
                                                    handle_edit(member.clone());
                                                }
                                            >
                                                {name}
                                            </a>
                                        </TableCellLayout>
                                    </TableCell>
                                    <TableCell>
                                        <TableCellLayout truncate=true>{position}</TableCellLayout>
                                    </TableCell>
                                    <TableCell>
                                        <TableCellLayout>
                                            <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Informative>
                                                {department}
                                            </Badge>
                                        </TableCellLayout>
                                    </TableCell>
                                    <TableCell>
                                        <TableCellLayout truncate=true>{email}</TableCellLayout>
                                    </TableCell>
                                    <TableCell>
                                        <TableCellLayout>{phone}</TableCellLayout>
                                    </TableCell>
                                </TableRow>
                            }
                        }).collect_view()}
                    </TableBody>
                </Table>
            </div>

            <Show when=move || show_modal.get()>
                {move || {
                    let source = editing.get_untracked();
                    view! {
                        <ModalFrame
                            on_close=on_cancel
                            modal_class="staff-details-modal".to_string()
                            modal_style="max-width: min(720px, 95vw); width: min(720px, 95vw);".to_string()
                        >
                            <StaffDetails source=source on_saved=on_saved on_cancel=on_cancel />
                        </ModalFrame>
                    }
                }}
            </Show>
        </PageFrame>
    }
}
