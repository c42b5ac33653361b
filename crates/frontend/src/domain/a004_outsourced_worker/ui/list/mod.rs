pub mod state;

use self::state::create_state;
use crate::domain::a004_outsourced_worker::ui::details::OutsourcedWorkerDetails;
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
use contracts::domain::a004_outsourced_worker::aggregate::{Availability, OutsourcedWorker};
use contracts::domain::common::{AggregateRoot, FilterOption};
use leptos::prelude::*;
use thaw::*;

fn availability_badge_color(availability: Availability) -> BadgeColor {
    match availability {
        Availability::Available => BadgeColor::Success,
        Availability::Booked => BadgeColor::Brand,
        Availability::Unavailable => BadgeColor::Danger,
    }
}

#[component]
#[allow(non_snake_case)]
pub fn OutsourcedWorkerList() -> impl IntoView {
    let state = create_state();
    let min_chars = use_ui_config().search.min_chars;
    let filter_expanded = RwSignal::new(false);
    let show_modal = RwSignal::new(false);
    let editing = RwSignal::new(None::<OutsourcedWorker>);

    state.update(|s| s.load(mock::outsourced_workers()));

    let handle_create_new = move || {
        editing.set(None);
        show_modal.set(true);
    };

    let handle_edit = move |worker: OutsourcedWorker| {
        editing.set(Some(worker));
        show_modal.set(true);
    };

    let on_saved = Callback::new(move |worker: OutsourcedWorker| {
        log::info!("outsourced worker saved: {}", worker.base.code);
        state.update(|s| s.upsert(worker));
        show_modal.set(false);
    });

    let on_cancel = Callback::new(move |_| show_modal.set(false));

    let search_text = Signal::derive(move || state.with(|s| s.search_text.clone()));
    let selected = Signal::derive(move || state.with(|s| s.selected_filters.clone()));
    let active_filters_count = Signal::derive(move || state.with(|s| s.selected_filters.len()));

    view! {
        <PageFrame page_id="a004_outsourced_worker--list" category=PAGE_CAT_LIST>
            <PageHeader title=OutsourcedWorker::list_name() subtitle="Freelancers and agency crews".to_string()>
                <Button appearance=ButtonAppearance::Primary on_click=move |_| handle_create_new()>
                    {icon("plus")}
                    " New worker"
                </Button>
            </PageHeader>

            <div class="page__content">
                <Flex gap=FlexGap::Small align=FlexAlign::Center>
                    <SearchInput
                        value=search_text
                        on_change=Callback::new(move |text: String| state.update(|s| s.search_text = text))
                        placeholder="Search workers..."
                    />
                </Flex>

                <FilterPanel is_expanded=filter_expanded active_filters_count=active_filters_count>
                    <MultiSelectFilter
                        label="Availability"
                        options=Availability::options()
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
                    {move || state.with(|s| format!("{} workers · {}", s.items.len(), s.summary(min_chars)))}
                </div>

                <Table>
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell resizable=true min_width=200.0>"Full name"</TableHeaderCell>
                            <TableHeaderCell resizable=true min_width=160.0>"Agency"</TableHeaderCell>
                            <TableHeaderCell resizable=true min_width=140.0>"Skill"</TableHeaderCell>
                            <TableHeaderCell min_width=110.0>"Daily rate"</TableHeaderCell>
                            <TableHeaderCell min_width=120.0>"Availability"</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        {move || state.with(|s| s.items.clone()).into_iter().map(|worker| {
                            let name = worker.base.description.clone();
                            let agency = if worker.agency.is_empty() {
                                "Freelance".to_string()
                            } else {
                                worker.agency.clone()
                            };
                            let skill = worker.skill.clone();
                            let rate = format!("{:.2}", worker.daily_rate);
                            let availability = worker.availability;
                            view! {
                                <TableRow>
                                    <TableCell>
                                        <TableCellLayout truncate=true>
                                            <a
                                                href="#"
                                                class="table__link"
                                                on:click=move |e| {
                                                    e.prevent_default();
                                                    handle_edit(worker.clone());
                                                }
                                            >
                                                {name}
                                            </a>
                                        </TableCellLayout>
                                    </TableCell>
                                    <TableCell>
                                        <TableCellLayout truncate=true>{agency}</TableCellLayout>
                                    </TableCell>
                                    <TableCell>
                                        <TableCellLayout truncate=true>{skill}</TableCellLayout>
                                    </TableCell>
                                    <TableCell>
                                        <TableCellLayout>{rate}</TableCellLayout>
                                    </TableCell>
                                    <TableCell>
                                        <TableCellLayout>
                                            <Badge appearance=BadgeAppearance::Tint color=availability_badge_color(availability)>
                                                {availability.label()}
                                            </Badge>
                                        </TableCellLayout>
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
                            modal_class="outsourced-worker-details-modal".to_string()
                            modal_style="max-width: min(720px, 95vw); width: min(720px, 95vw);".to_string()
                        >
                            <OutsourcedWorkerDetails source=source on_saved=on_saved on_cancel=on_cancel />
                        </ModalFrame>
                    }
                }}
            </Show>
        </PageFrame>
    }
}
