pub mod state;

use self::state::create_state;
use crate::domain::a002_equipment::ui::details::EquipmentDetails;
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
use contracts::domain::a002_equipment::aggregate::{Equipment, EquipmentCondition};
use contracts::domain::common::{AggregateRoot, FilterOption};
use leptos::prelude::*;
use thaw::*;

fn condition_badge_color(condition: EquipmentCondition) -> BadgeColor {
    match condition {
        EquipmentCondition::Available => BadgeColor::Success,
        EquipmentCondition::InUse => BadgeColor::Brand,
        EquipmentCondition::Maintenance => BadgeColor::Warning,
    }
}

#[component]
#[allow(non_snake_case)]
pub fn EquipmentList() -> impl IntoView {
    let state = create_state();
    let min_chars = use_ui_config().search.min_chars;
    let filter_expanded = RwSignal::new(false);
    let show_modal = RwSignal::new(false);
    let editing = RwSignal::new(None::<Equipment>);

    state.update(|s| s.load(mock::equipment()));

    let handle_create_new = move || {
        editing.set(None);
        show_modal.set(true);
    };

    let handle_edit = move |item: Equipment| {
        editing.set(Some(item));
        show_modal.set(true);
    };

    let on_saved = Callback::new(move |item: Equipment| {
        log::info!("equipment saved: {}", item.base.code);
        state.update(|s| s.upsert(item));
        show_modal.set(false);
    });

    let on_cancel = Callback::new(move |_| show_modal.set(false));

    let search_text = Signal::derive(move || state.with(|s| s.search_text.clone()));
    let selected = Signal::derive(move || state.with(|s| s.selected_filters.clone()));
    let active_filters_count = Signal::derive(move || state.with(|s| s.selected_filters.len()));

    view! {
        <PageFrame page_id="a002_equipment--list" category=PAGE_CAT_LIST>
            <PageHeader title=Equipment::list_name()>
                <Button appearance=ButtonAppearance::Primary on_click=move |_| handle_create_new()>
                    {icon("plus")}
                    " New equipment"
                </Button>
            </PageHeader>

            <div class="page__content">
                <Flex gap=FlexGap::Small align=FlexAlign::Center>
                    <SearchInput
                        value=search_text
                        on_change=Callback::new(move |text: String| state.update(|s| s.search_text = text))
                        placeholder="Search equipment..."
                    />
                </Flex>

                <FilterPanel is_expanded=filter_expanded active_filters_count=active_filters_count>
                    <MultiSelectFilter
                        label="Condition"
                        options=EquipmentCondition::options()
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
                    {move || state.with(|s| format!("{} items · {}", s.items.len(), s.summary(min_chars)))}
                </div>

                <Table>
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell min_width=100.0>"Code"</TableHeaderCell>
                            <TableHeaderCell resizable=true min_width=220.0>"Name"</TableHeaderCell>
                            <TableHeaderCell min_width=120.0>"Category"</TableHeaderCell>
                            <TableHeaderCell resizable=true min_width=140.0>"Serial number"</TableHeaderCell>
                            <TableHeaderCell min_width=120.0>"Condition"</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        {move || state.with(|s| s.items.clone()).into_iter().map(|item| {
                            let code = item.base.code.clone();
                            let name = item.base.description.clone();
                            let category = item.category.label();
                            let serial = item.serial_number.clone();
                            let condition = item.condition;
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
                                                    handle_edit(item.clone());
                                                }
                                            >
                                                {name}
                                            </a>
                                        </TableCellLayout>
                                    </TableCell>
                                    <TableCell>
                                        <TableCellLayout>{category}</TableCellLayout>
                                    </TableCell>
                                    <TableCell>
                                        <TableCellLayout truncate=true>{serial}</TableCellLayout>
                                    </TableCell>
                                    <TableCell>
                                        <TableCellLayout>
                                            <Badge appearance=BadgeAppearance::Tint color=condition_badge_color(condition)>
                                                {condition.label()}
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
                            modal_class="equipment-details-modal".to_string()
                            modal_style="max-width: min(800px, 95vw); width: min(800px, 95vw);".to_string()
                        >
                            <EquipmentDetails source=source on_saved=on_saved on_cancel=on_cancel />
                        </ModalFrame>
                    }
                }}
            </Show>
        </PageFrame>
    }
}
