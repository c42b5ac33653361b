//! Attachment list mutations on a parent entity.
//!
//! Both operations leave the input untouched and return a full replacement
//! snapshot of the parent; the caller hands that snapshot to whoever owns the
//! entity state.

use super::aggregate::Attachment;

/// Parent entity that owns an ordered list of attachments
pub trait HasAttachments: Sized {
    fn attachments(&self) -> &[Attachment];

    /// Same entity with its attachment list replaced
    fn with_attachments(self, attachments: Vec<Attachment>) -> Self;
}

/// Snapshot of `entity` with `new_attachments` added at the end.
///
/// Existing records keep their order and ids.
pub fn append<E>(entity: &E, new_attachments: Vec<Attachment>) -> E
where
    E: HasAttachments + Clone,
{
    let mut list = entity.attachments().to_vec();
    list.extend(new_attachments);
    entity.clone().with_attachments(list)
}

/// Snapshot of `entity` without the attachment at `index`.
///
/// `index` must come from the same list the caller rendered; an out of range
/// index is a programming error and panics.
pub fn remove_at<E>(entity: &E, index: usize) -> E
where
    E: HasAttachments + Clone,
{
    let mut list = entity.attachments().to_vec();
    list.remove(index);
    entity.clone().with_attachments(list)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::attachments::intake::{intake, RawFile};
    use crate::domain::attachments::kind::AttachmentKind;
    use chrono::{TimeZone, Utc};

    #[derive(Debug, Clone, PartialEq)]
    struct Folder {
        name: String,
        attachments: Vec<Attachment>,
    }

    impl HasAttachments for Folder {
        fn attachments(&self) -> &[Attachment] {
            &self.attachments
        }

        fn with_attachments(self, attachments: Vec<Attachment>) -> Self {
            Self {
                attachments,
                ..self
            }
        }
    }

    fn stored(id: &str) -> Attachment {
        Attachment::stored(
            id,
            format!("{}.pdf", id),
            AttachmentKind::Pdf,
            "1.00 MB",
            format!("/files/{}.pdf", id),
        )
    }

    fn folder(ids: &[&str]) -> Folder {
        Folder {
            name: "Spring gala".to_string(),
            attachments: ids.iter().map(|id| stored(id)).collect(),
        }
    }

    fn ids(entity: &Folder) -> Vec<String> {
        entity
            .attachments()
            .iter()
            .map(|a| a.id.to_string())
            .collect()
    }

    #[test]
    fn test_append_puts_batch_at_the_tail_in_order() {
        let before = folder(&["a", "b"]);
        let batch = intake(
            &[
                RawFile::new("one.pdf", 1, "application/pdf"),
                RawFile::new("two.png", 2, "image/png"),
                RawFile::new("three.txt", 3, "text/plain"),
            ],
            Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap(),
        );

        let after = append(&before, batch.clone());

        assert_eq!(after.attachments().len(), 5);
        assert_eq!(&after.attachments()[..2], before.attachments());
        assert_eq!(&after.attachments()[2..], batch.as_slice());
        assert_eq!(after.name, before.name);
    }

    #[test]
    fn test_append_leaves_the_source_snapshot_alone() {
        let before = folder(&["a"]);
        let _ = append(&before, vec![stored("b")]);
        assert_eq!(ids(&before), vec!["a"]);
    }

    #[test]
    fn test_remove_middle_of_three() {
        let before = folder(&["first", "second", "third"]);

        let after = remove_at(&before, 1);

        assert_eq!(ids(&after), vec!["first", "third"]);
        assert_eq!(after.attachments()[0], before.attachments()[0]);
        assert_eq!(after.attachments()[1], before.attachments()[2]);
    }

    #[test]
    fn test_remove_shrinks_by_exactly_one() {
        let before = folder(&["a", "b", "c", "d"]);
        for index in 0..before.attachments().len() {
            let after = remove_at(&before, index);
            assert_eq!(after.attachments().len(), before.attachments().len() - 1);

            let mut expected = ids(&before);
            expected.remove(index);
            assert_eq!(ids(&after), expected);
        }
    }

    #[test]
    #[should_panic]
    fn test_remove_out_of_range_panics() {
        let _ = remove_at(&folder(&["a"]), 1);
    }
}
