pub mod state;

use self::state::create_state;
use crate::domain::a001_company::ui::details::CompanyDetails;
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
use contracts::domain::a001_company::aggregate::{Company, CompanyStatus};
use contracts::domain::common::{AggregateRoot, FilterOption};
use leptos::prelude::*;
use thaw::*;

fn status_badge_color(status: CompanyStatus) -> BadgeColor {
    match status {
        CompanyStatus::Active => BadgeColor::Success,
        CompanyStatus::Prospect => BadgeColor::Warning,
        CompanyStatus::Inactive => BadgeColor::Informative,
    }
}

#[component]
#[allow(non_snake_case)]
pub fn CompanyList() -> impl IntoView {
    let state = create_state();
    let min_chars = use_ui_config().search.min_chars;
    let filter_expanded = RwSignal::new(false);
    let show_modal = RwSignal::new(false);
    let editing = RwSignal::new(None::<Company>);

    state.update(|s| s.load(mock::companies()));

    let handle_create_new = move || {
        editing.set(None);
        show_modal.set(true);
    };

    let handle_edit = move |company: Company| {
        editing.set(Some(company));
        show_modal.set(true);
    };

    let on_saved = Callback::new(move |company: Company| {
        log::info!("company saved: {}", company.base.code);
        state.update(|s| s.upsert(company));
        show_modal.set(false);
    });

    let on_cancel = Callback::new(move |_| show_modal.set(false));

    let search_text = Signal::derive(move || state.with(|s| s.search_text.clone()));
    let selected = Signal::derive(move || state.with(|s| s.selected_filters.clone()));
    let active_filters_count = Signal::derive(move || state.with(|s| s.selected_filters.len()));

    view! {
        <PageFrame page_id="a001_company--list" category=PAGE_CAT_LIST>
            <PageHeader title=Company::list_name() subtitle="Client companies and their contracts".to_string()>
                <Button appearance=ButtonAppearance::Primary on_click=move |_| handle_create_new()>
                    {icon("plus")}
                    " New company"
                </Button>
            </PageHeader>

            <div class="page__content">
                <Flex gap=FlexGap::Small align=FlexAlign::Center>
                    <SearchInput
                        value=search_text
                        on_change=Callback::new(move |text: String| state.update(|s| s.search_text = text))
                        placeholder="Search companies..."
                    />
                </Flex>

                <FilterPanel is_expanded=filter_expanded active_filters_count=active_filters_count>
                    <MultiSelectFilter
                        label="Status"
                        options=CompanyStatus::options()
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
                    {move || state.with(|s| format!("{} companies · {}", s.items.len(), s.summary(min_chars)))}
                </div>

                <Table>
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell min_width=100.0>"Code"</TableHeaderCell>
                            <TableHeaderCell resizable=true min_width=220.0>"Name"</TableHeaderCell>
                            <TableHeaderCell resizable=true min_width=140.0>"Industry"</TableHeaderCell>
                            <TableHeaderCell resizable=true min_width=200.0>"Contact"</TableHeaderCell>
                            <TableHeaderCell min_width=110.0>"Status"</TableHeaderCell>
                            <TableHeaderCell min_width=100.0>"Documents"</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        {move || state.with(|s| s.items.clone()).into_iter().map(|company| {
                            let code = company.base.code.clone();
                            let name = company.base.description.clone();
                            let industry = company.industry.clone();
                            let contact = if company.contact_email.is_empty() {
                                company.phone.clone()
                            } else {
                                company.contact_email.clone()
                            };
                            let status = company.status;
                            let documents = company.attachments.len();
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
                                                    handle_edit(company.clone());
                                                }
                                            >
                                                {name}
                                            </a>
                                        </TableCellLayout>
                                    </TableCell>
                                    <TableCell>
                                        <TableCellLayout truncate=true>{industry}</TableCellLayout>
                                    </TableCell>
                                    <TableCell>
                                        <TableCellLayout truncate=true>{contact}</TableCellLayout>
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
                            modal_class="company-details-modal".to_string()
                            modal_style="max-width: min(1000px, 95vw); width: min(1000px, 95vw);".to_string()
                        >
                            <CompanyDetails source=source on_saved=on_saved on_cancel=on_cancel />
                        </ModalFrame>
                    }
                }}
            </Show>
        </PageFrame>
    }
}
