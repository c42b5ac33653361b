//! Read-only display model of an attachment list

use super::aggregate::Attachment;
use super::kind::AttachmentKind;

/// Icon variant shown next to an attachment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistryIcon {
    FilePdf,
    FileImage,
    File,
}

impl RegistryIcon {
    pub fn for_kind(kind: AttachmentKind) -> Self {
        match kind {
            AttachmentKind::Pdf => RegistryIcon::FilePdf,
            AttachmentKind::Image => RegistryIcon::FileImage,
            AttachmentKind::DocumentOther => RegistryIcon::File,
        }
    }

    /// Name understood by the frontend icon set
    pub fn icon_name(&self) -> &'static str {
        match self {
            RegistryIcon::FilePdf => "file-pdf",
            RegistryIcon::FileImage => "file-image",
            RegistryIcon::File => "file",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryRow {
    pub id: String,
    pub name: String,
    pub size_label: String,
    pub icon: RegistryIcon,
    /// Download link target
    pub href: String,
}

/// What the registry renders: an explicit empty state or one row per attachment
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryView {
    Empty,
    Rows(Vec<RegistryRow>),
}

impl RegistryView {
    /// `pending_href` is used for files that have no resolved location yet
    pub fn build(attachments: &[Attachment], pending_href: &str) -> Self {
        if attachments.is_empty() {
            return RegistryView::Empty;
        }

        RegistryView::Rows(
            attachments
                .iter()
                .map(|a| RegistryRow {
                    id: a.id.to_string(),
                    name: a.name.clone(),
                    size_label: a.size_label.clone(),
                    icon: RegistryIcon::for_kind(a.kind),
                    href: a.location.href(pending_href).to_string(),
                })
                .collect(),
        )
    }

    pub fn row_count(&self) -> usize {
        match self {
            RegistryView::Empty => 0,
            RegistryView::Rows(rows) => rows.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::attachments::aggregate::{AttachmentId, AttachmentLocation};

    fn sample() -> Vec<Attachment> {
        vec![
            Attachment::stored(
                "1",
                "floor-plan.pdf",
                AttachmentKind::Pdf,
                "1.20 MB",
                "/files/floor-plan.pdf",
            ),
            Attachment::stored(
                "2",
                "stage.jpg",
                AttachmentKind::Image,
                "3.00 MB",
                "/files/stage.jpg",
            ),
            Attachment {
                id: AttachmentId("1700000000000-0".to_string()),
                name: "budget.xlsx".to_string(),
                kind: AttachmentKind::DocumentOther,
                size_label: "0.05 MB".to_string(),
                location: AttachmentLocation::Pending,
            },
        ]
    }

    #[test]
    fn test_empty_list_renders_placeholder_state() {
        let view = RegistryView::build(&[], "#");
        assert_eq!(view, RegistryView::Empty);
        assert_eq!(view.row_count(), 0);
    }

    #[test]
    fn test_one_row_per_attachment_with_icon_and_link() {
        let view = RegistryView::build(&sample(), "#");
        let RegistryView::Rows(rows) = view else {
            panic!("expected rows");
        };

        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].icon, RegistryIcon::FilePdf);
        assert_eq!(rows[0].href, "/files/floor-plan.pdf");
        assert_eq!(rows[1].icon, RegistryIcon::FileImage);
        assert_eq!(rows[2].icon, RegistryIcon::File);
        assert_eq!(rows[2].href, "#");
        assert_eq!(rows[2].size_label, "0.05 MB");
    }

    #[test]
    fn test_building_twice_gives_the_same_view() {
        let list = sample();
        assert_eq!(RegistryView::build(&list, "#"), RegistryView::build(&list, "#"));
    }
}
