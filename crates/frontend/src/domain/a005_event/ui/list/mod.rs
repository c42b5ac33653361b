pub mod state;

use self::state::create_state;
use crate::domain::a005_event::ui::details::EventDetails;
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
use contracts::domain::a005_event::aggregate::{Event, EventStatus};
use contracts::domain::common::{AggregateRoot, FilterOption};
use leptos::prelude::*;
use thaw::*;

pub fn status_badge_color(status: EventStatus) -> BadgeColor {
    match status {
        EventStatus::Planned => BadgeColor::Informative,
        EventStatus::Confirmed => BadgeColor::Brand,
        EventStatus::Completed => BadgeColor::Success,
        EventStatus::Cancelled => BadgeColor::Danger,
    }
}

fn format_dates(event: &Event) -> String {
    if event.starts_on == event.ends_on {
        event.starts_on.format("%Y-%m-%d").to_string()
    } else {
        format!(
            "{} – {} ({} days)",
            event.starts_on.format("%Y-%m-%d"),
            event.ends_on.format("%Y-%m-%d"),
            event.duration_days()
        )
    }
}

#[component]
#[allow(non_snake_case)]
pub fn EventList() -> impl IntoView {
    let state = create_state();
    let min_chars = use_ui_config().search.min_chars;
    let filter_expanded = RwSignal::new(false);
    let show_modal = RwSignal::new(false);
    let editing = RwSignal::new(None::<Event>);

    state.update(|s| s.load(mock::events()));

    let handle_create_new = move || {
        editing.set(None);
        show_modal.set(true);
    };

    let handle_edit = move |event: Event| {
        editing.set(Some(event));
        show_modal.set(true);
    };

    let on_saved = Callback::new(move |event: Event| {
        log::info!("event saved: {}", event.base.code);
        state.update(|s| s.upsert(event));
        show_modal.set(false);
    });

    let on_cancel = Callback::new(move |_| show_modal.set(false));

    let search_text = Signal::derive(move || state.with(|s| s.search_text.clone()));
    let selected = Signal::derive(move || state.with(|s| s.selected_filters.clone()));
    let active_filters_count = Signal::derive(move || state.with(|s| s.selected_filters.len()));

    view! {
        <PageFrame page_id="a005_event--list" category=PAGE_CAT_LIST>
            <PageHeader title=Event::list_name() subtitle="Client events and their documents".to_string()>
                <Button appearance=ButtonAppearance::Primary on_click=move |_| handle_create_new()>
                    {icon("plus")}
                    " New event"
                </Button>
            </PageHeader>

            <div class="page__content">
                <Flex gap=FlexGap::Small align=FlexAlign::Center>
                    <SearchInput
                        value=search_text
                        on_change=Callback::new(move |text: String| state.update(|s| s.search_text = text))
                        placeholder="Search events..."
                    />
                </Flex>

                <FilterPanel is_expanded=filter_expanded active_filters_count=active_filters_count>
                    <MultiSelectFilter
                        label="Status"
                        options=EventStatus::options()
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
                    {move || state.with(|s| format!("{} events · {}", s.items.len(), s.summary(min_chars)))}
                </div>

                <Table>
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell min_width=100.0>"Code"</TableHeaderCell>
                            <TableHeaderCell resizable=true min_width=220.0>"Title"</TableHeaderCell>
                            <TableHeaderCell resizable=true min_width=180.0>"Venue"</TableHeaderCell>
                            <TableHeaderCell min_width=200.0>"Dates"</TableHeaderCell>
                            <TableHeaderCell resizable=true min_width=180.0>"Company"</TableHeaderCell>
                            <TableHeaderCell min_width=110.0>"Status"</TableHeaderCell>
                            <TableHeaderCell min_width=100.0>"Documents"</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        {move || state.with(|s| s.items.clone()).into_iter().map(|event| {
                            let company = event
                                .company_id
                                .as_ref()
                                .and_then(mock::company_name)
                                .unwrap_or_else(|| "-".to_string());
                            let dates = format_dates(&event);
                            let documents = event.attachments.len();
                            let status = event.status;
                            let code = event.base.code.clone();
                            let title = event.base.description.clone();
                            let venue = event.venue.clone();
                            view! {
                                <TableRow>
                                    <TableCell>
                                        <TableCellLayout>{code}</TableCellLayout>
                                    </TableCell>
                                    <TableCell>
                                        <TableCellLayout truncate=true>
                                            <a
                                                href="#"
                                                class="table__link"
                                                on:click=move |e| {
                                                    e.prevent_default();
                                                    handle_edit(event.clone());
                                                }
                                            >
                                                {title}
                                            </a>
                                        </TableCellLayout>
                                    </TableCell>
                                    <TableCell>
                                        <TableCellLayout truncate=true>{venue}</TableCellLayout>
                                    </TableCell>
                                    <TableCell>
                                        <TableCellLayout>{dates}</TableCellLayout>
                                    </TableCell>
                                    <TableCell>
                                        <TableCellLayout truncate=true>{company}</TableCellLayout>
                                    </TableCell>
                                    <TableCell>
                                        <TableCellLayout>
                                            <Badge appearance=BadgeAppearance::Tint color=status_badge_color(status)>
                                                {status.label()}
                                            </Badge>
                                        </TableCellLayout>
                                    </TableCell>
                                    <TableCell>
                                        <TableCellLayout>
                                            {icon("file-text")}
                                            {format!(" {documents}")}
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
                            modal_class="event-details-modal".to_string()
                            modal_style="max-width: min(1100px, 95vw); width: min(1100px, 95vw);".to_string()
                        >
                            <EventDetails source=source on_saved=on_saved on_cancel=on_cancel />
                        </ModalFrame>
                    }
                }}
            </Show>
        </PageFrame>
    }
}
