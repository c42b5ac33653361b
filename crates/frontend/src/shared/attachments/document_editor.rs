//! Editable attachment list of one parent entity.
//!
//! Every action builds a full replacement snapshot of the parent with
//! `append` / `remove_at` and hands it to `on_change`; the component keeps no
//! copy of its own.

use super::file_intake::{raw_files_from_drop, raw_files_from_input};
use crate::shared::config::use_ui_config;
use crate::shared::icons::icon;
use contracts::domain::attachments::{
    append, intake, remove_at, Attachment, AttachmentLocation, HasAttachments, RawFile,
    RegistryIcon,
};
use leptos::ev;
use leptos::prelude::*;
use thaw::*;

/// Owned display data of one editor row
#[derive(Debug, Clone, PartialEq)]
pub struct EditorRow {
    pub index: usize,
    pub id: String,
    pub name: String,
    pub size_label: String,
    pub icon_name: &'static str,
    pub is_pending: bool,
}

/// One row per attachment, in list order; `index` is what `remove_at` expects
pub fn editor_rows(attachments: &[Attachment]) -> Vec<EditorRow> {
    attachments
        .iter()
        .enumerate()
        .map(|(index, attachment)| EditorRow {
            index,
            id: attachment.id.to_string(),
            name: attachment.name.clone(),
            size_label: attachment.size_label.clone(),
            icon_name: RegistryIcon::for_kind(attachment.kind).icon_name(),
            is_pending: matches!(attachment.location, AttachmentLocation::Pending),
        })
        .collect()
}

#[component]
pub fn DocumentEditor<E>(
    /// Current snapshot of the parent entity
    #[prop(into)]
    entity: Signal<E>,
    /// Receives the replacement snapshot after each append or removal
    on_change: Callback<E>,
) -> impl IntoView
where
    E: HasAttachments + Clone + Send + Sync + 'static,
{
    let accept = use_ui_config().attachments.accept;
    let input_id = format!("document-input-{}", uuid::Uuid::new_v4());
    let is_dragging = RwSignal::new(false);

    let append_files = move |files: Vec<RawFile>| {
        if files.is_empty() {
            return;
        }
        let batch = intake(&files, chrono::Utc::now());
        let added = batch.len();
        let next = append(&entity.get_untracked(), batch);
        log::debug!(
            "attachments appended: {added}, total {}",
            next.attachments().len()
        );
        on_change.run(next);
    };

    let remove = move |index: usize| {
        let next = remove_at(&entity.get_untracked(), index);
        log::debug!(
            "attachment removed at {index}, total {}",
            next.attachments().len()
        );
        on_change.run(next);
    };

    let handle_file_select = move |ev: ev::Event| append_files(raw_files_from_input(&ev));

    let handle_drag_over = move |ev: ev::DragEvent| {
        ev.prevent_default();
        is_dragging.set(true);
    };

    let handle_drag_leave = move |_: ev::DragEvent| is_dragging.set(false);

    let handle_drop = move |ev: ev::DragEvent| {
        ev.prevent_default();
        is_dragging.set(false);
        append_files(raw_files_from_drop(&ev));
    };

    let count = move || entity.with(|e| e.attachments().len());
    let has_rows = Signal::derive(move || count() > 0);
    let rows = Memo::new(move |_| entity.with(|e| editor_rows(e.attachments())));

    view! {
        <div class="document-editor">
            <div
                class="document-editor__dropzone"
                class:document-editor__dropzone--active=move || is_dragging.get()
                on:dragover=handle_drag_over
                on:dragleave=handle_drag_leave
                on:drop=handle_drop
            >
                {icon("upload")}
                <span>"Drop files here or"</span>
                <label class="button button--primary" for=input_id.clone()>
                    "Choose files"
                </label>
                <input
                    id=input_id
                    type="file"
                    multiple=true
                    accept=accept
                    class="hidden"
                    on:change=handle_file_select
                />
            </div>

            <div class="document-editor__count">
                {move || format!("{} document(s)", count())}
            </div>

            <Show
                when=move || has_rows.get()
                fallback=|| view! {
                    <div class="document-registry__empty">
                        <span>"No documents attached"</span>
                    </div>
                }
            >
                <div class="document-editor__rows">
                    {move || rows.get().into_iter().map(|row| {
                        let index = row.index;
                        let is_pending = row.is_pending;
                        view! {
                            <div class="document-editor__row" data-attachment-id=row.id>
                                <Flex align=FlexAlign::Center gap=FlexGap::Small>
                                    {icon(row.icon_name)}
                                    <span class="document-editor__name">{row.name}</span>
                                    <span class="document-editor__size">{row.size_label}</span>
                                    <Badge
                                        appearance=BadgeAppearance::Tint
                                        color=if is_pending { BadgeColor::Warning } else { BadgeColor::Success }
                                    >
                                        {if is_pending { "Not uploaded" } else { "Stored" }}
                                    </Badge>
                                </Flex>
                                <Button
                                    appearance=ButtonAppearance::Subtle
                                    size=ButtonSize::Small
                                    on_click=move |_| remove(index)
                                >
                                    {icon("trash")}
                                </Button>
                            </div>
                        }
                    }).collect_view()}
                </div>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::attachments::AttachmentKind;
    use chrono::TimeZone;

    #[test]
    fn test_editor_rows_own_their_data_in_list_order() {
        let mut attachments = vec![Attachment::stored(
            "doc-1",
            "contract.pdf",
            AttachmentKind::Pdf,
            "1.20 MB",
            "/files/contract.pdf",
        )];
        let at = chrono::Utc.with_ymd_and_hms(2025, 4, 2, 10, 0, 0).unwrap();
        attachments.extend(intake(&[RawFile::new("stage.png", 2048, "image/png")], at));

        let rows = editor_rows(&attachments);
        drop(attachments);

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].index, 0);
        assert_eq!(rows[0].name, "contract.pdf");
        assert_eq!(rows[0].icon_name, RegistryIcon::FilePdf.icon_name());
        assert!(!rows[0].is_pending);
        assert_eq!(rows[1].index, 1);
        assert_eq!(rows[1].name, "stage.png");
        assert_eq!(rows[1].size_label, "0.00 MB");
        assert!(rows[1].is_pending);
    }

    #[test]
    fn test_no_rows_for_empty_list() {
        assert!(editor_rows(&[]).is_empty());
    }
}
