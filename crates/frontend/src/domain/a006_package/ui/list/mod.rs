pub mod state;

use self::state::create_state;
use crate::domain::a006_package::ui::details::PackageDetails;
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
use contracts::domain::a006_package::aggregate::{Package, PackageTier};
use contracts::domain::common::{AggregateRoot, FilterOption};
use leptos::prelude::*;
use thaw::*;

fn tier_badge_color(tier: PackageTier) -> BadgeColor {
    match tier {
        PackageTier::Basic => BadgeColor::Informative,
        PackageTier::Standard => BadgeColor::Brand,
        PackageTier::Premium => BadgeColor::Warning,
    }
}

#[component]
#[allow(non_snake_case)]
pub fn PackageList() -> impl IntoView {
    let state = create_state();
    let min_chars = use_ui_config().search.min_chars;
    let filter_expanded = RwSignal::new(false);
    let show_modal = RwSignal::new(false);
    let editing = RwSignal::new(None::<Package>);

    state.update(|s| s.load(mock::packages()));

    let handle_create_new = move || {
        editing.set(None);
        show_modal.set(true);
    };

    let handle_edit = move |package: Package| {
        editing.set(Some(package));
        show_modal.set(true);
    };

    let on_saved = Callback::new(move |package: Package| {
        log::info!("package saved: {}", package.base.code);
        state.update(|s| s.upsert(package));
        show_modal.set(false);
    });

    let on_cancel = Callback::new(move |_| show_modal.set(false));

    let search_text = Signal::derive(move || state.with(|s| s.search_text.clone()));
    let selected = Signal::derive(move || state.with(|s| s.selected_filters.clone()));
    let active_filters_count = Signal::derive(move || state.with(|s| s.selected_filters.len()));

    view! {
        <PageFrame page_id="a006_package--list" category=PAGE_CAT_LIST>
            <PageHeader title=Package::list_name() subtitle="Bundles offered to clients".to_string()>
                <Button appearance=ButtonAppearance::Primary on_click=move |_| handle_create_new()>
                    {icon("plus")}
                    " New package"
                </Button>
            </PageHeader>

            <div class="page__content">
                <Flex gap=FlexGap::Small align=FlexAlign::Center>
                    <SearchInput
                        value=search_text
                        on_change=Callback::new(move |text: String| state.update(|s| s.search_text = text))
                        placeholder="Search packages..."
                    />
                </Flex>

                <FilterPanel is_expanded=filter_expanded active_filters_count=active_filters_count>
                    <MultiSelectFilter
                        label="Tier"
                        options=PackageTier::options()
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
                    {move || state.with(|s| format!("{} packages · {}", s.items.len(), s.summary(min_chars)))}
                </div>

                <Table>
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell min_width=90.0>"Code"</TableHeaderCell>
                            <TableHeaderCell resizable=true min_width=200.0>"Name"</TableHeaderCell>
                            <TableHeaderCell min_width=110.0>"Tier"</TableHeaderCell>
                            <TableHeaderCell min_width=110.0>"Price"</TableHeaderCell>
                            <TableHeaderCell resizable=true min_width=260.0>"Included items"</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        {move || state.with(|s| s.items.clone()).into_iter().map(|package| {
                            let code = package.base.code.clone();
                            let name = package.base.description.clone();
                            let tier = package.tier;
                            let price = format!("{:.2}", package.price);
                            let items = package.items_line();
                            view! {
                                <TableRow>
                                    <TableCell>
                                        <TableCellLayout>{code}</TableCellLayout>
                                    </TableCell>
                                    <TableCell>
                                        <TableCellLayout truncate=true>
                                            {icon("package")}
                                            " "
                                            <a
                                                href="#"
                                                class="table__link"
                                                on:click=move |e| {
                                                    e.prevent_default();
                                                    handle_edit(package.clone());
                                                }
                                            >
                                                {name}
                                            </a>
                                        </TableCellLayout>
                                    </TableCell>
                                    <TableCell>
                                        <TableCellLayout>
                                            <Badge appearance=BadgeAppearance::Tint color=tier_badge_color(tier)>
                                                {tier.label()}
                                            </Badge>
                                        </TableCellLayout>
                                    </TableCell>
                                    <TableCell>
                                        <TableCellLayout>{price}</TableCellLayout>
                                    </TableCell>
                                    <TableCell>
                                        <TableCellLayout truncate=true>{items}</TableCellLayout>
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
                            modal_class="package-details-modal".to_string()
                            modal_style="max-width: min(720px, 95vw); width: min(720px, 95vw);".to_string()
                        >
                            <PackageDetails source=source on_saved=on_saved on_cancel=on_cancel />
                        </ModalFrame>
                    }
                }}
            </Show>
        </PageFrame>
    }
}
