use crate::shared::config::use_ui_config;
use crate::shared::icons::icon;
use contracts::domain::attachments::{Attachment, RegistryView};
use leptos::prelude::*;
use thaw::*;

/// Read-only list of a parent's documents with download links
#[component]
pub fn DocumentRegistry(#[prop(into)] attachments: Signal<Vec<Attachment>>) -> impl IntoView {
    let pending_href = use_ui_config().attachments.pending_href;

    let registry =
        Memo::new(move |_| attachments.with(|list| RegistryView::build(list, &pending_href)));

    view! {
        <div class="document-registry">
            {move || match registry.get() {
                RegistryView::Empty => view! {
                    <div class="document-registry__empty">
                        {icon("file")}
                        <span>"No documents attached"</span>
                    </div>
                }.into_any(),
                RegistryView::Rows(rows) => view! {
                    <Table>
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell min_width=40.0>""</TableHeaderCell>
                                <TableHeaderCell resizable=true min_width=240.0>"Name"</TableHeaderCell>
                                <TableHeaderCell min_width=100.0>"Size"</TableHeaderCell>
                                <TableHeaderCell min_width=80.0>""</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            {rows.into_iter().map(|row| {
                                let download_name = row.name.clone();
                                view! {
                                    <TableRow>
                                        <TableCell>
                                            <TableCellLayout>{icon(row.icon.icon_name())}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout truncate=true>{row.name}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>{row.size_label}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>
                                                <a
                                                    class="document-registry__download"
                                                    href=row.href
                                                    download=download_name
                                                    title="Download"
                                                >
                                                    {icon("download")}
                                                </a>
                                            </TableCellLayout>
                                        </TableCell>
                                    </TableRow>
                                }
                            }).collect_view()}
                        </TableBody>
                    </Table>
                }.into_any(),
            }}
        </div>
    }
}
