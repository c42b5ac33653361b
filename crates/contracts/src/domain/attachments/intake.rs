//! File intake: raw file selection → attachment records

use super::aggregate::{Attachment, AttachmentId, AttachmentLocation};
use super::kind::AttachmentKind;
use chrono::{DateTime, Utc};

/// Metadata of one selected file, as reported by the picker or a drop event
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawFile {
    pub name: String,
    pub size_bytes: u64,
    /// Declared MIME type, may be empty
    pub content_type: String,
}

impl RawFile {
    pub fn new(name: impl Into<String>, size_bytes: u64, content_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            size_bytes,
            content_type: content_type.into(),
        }
    }
}

const BYTES_IN_MB: f64 = 1024.0 * 1024.0;

/// Size in megabytes with exactly two decimals, e.g. `"2.34 MB"`.
///
/// Sub-megabyte files come out as small fractions ("0.00 MB" for 500 bytes).
pub fn format_size_label(size_bytes: u64) -> String {
    format!("{:.2} MB", size_bytes as f64 / BYTES_IN_MB)
}

/// Convert a selection batch into new attachments, preserving order.
///
/// Ids combine the intake instant with the position in the batch so that a
/// multi-file selection never produces duplicates. Locations stay `Pending`.
pub fn intake(files: &[RawFile], at: DateTime<Utc>) -> Vec<Attachment> {
    let millis = at.timestamp_millis();
    files
        .iter()
        .enumerate()
        .map(|(index, file)| Attachment {
            id: AttachmentId::provisional(millis, index),
            name: file.name.clone(),
            kind: AttachmentKind::classify(&file.name, &file.content_type),
            size_label: format_size_label(file.size_bytes),
            location: AttachmentLocation::Pending,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 15, 14, 2, 26).unwrap()
    }

    #[test]
    fn test_format_size_label() {
        assert_eq!(format_size_label(3_145_728), "3.00 MB");
        assert_eq!(format_size_label(2_453_668), "2.34 MB");
        assert_eq!(format_size_label(500), "0.00 MB");
        assert_eq!(format_size_label(0), "0.00 MB");
    }

    #[test]
    fn test_single_image_file() {
        let out = intake(&[RawFile::new("photo.jpg", 3_145_728, "image/jpeg")], at());

        assert_eq!(out.len(), 1);
        assert_eq!(out[0].name, "photo.jpg");
        assert_eq!(out[0].kind, AttachmentKind::Image);
        assert_eq!(out[0].size_label, "3.00 MB");
        assert_eq!(out[0].location, AttachmentLocation::Pending);
    }

    #[test]
    fn test_batch_keeps_order_and_unique_ids() {
        let files = vec![
            RawFile::new("contract.pdf", 10_000, "application/pdf"),
            RawFile::new("notes.docx", 20_000, "application/msword"),
            RawFile::new("stage.png", 30_000, "image/png"),
        ];
        let out = intake(&files, at());

        let names: Vec<&str> = out.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["contract.pdf", "notes.docx", "stage.png"]);

        let kinds: Vec<AttachmentKind> = out.iter().map(|a| a.kind).collect();
        assert_eq!(
            kinds,
            vec![
                AttachmentKind::Pdf,
                AttachmentKind::DocumentOther,
                AttachmentKind::Image
            ]
        );

        let millis = at().timestamp_millis();
        assert_eq!(out[0].id.as_str(), format!("{}-0", millis));
        assert_eq!(out[2].id.as_str(), format!("{}-2", millis));
        assert_ne!(out[0].id, out[1].id);
    }

    #[test]
    fn test_empty_selection_yields_nothing() {
        assert!(intake(&[], at()).is_empty());
    }
}
