use serde::{Deserialize, Serialize};

/// Kind of an attached file, fixed at intake time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AttachmentKind {
    Pdf,
    Image,
    DocumentOther,
}

impl AttachmentKind {
    /// Best-effort kind heuristic, checked in order:
    /// 1. name ends with the literal ".pdf" → `Pdf`
    /// 2. declared content type contains "image" → `Image`
    /// 3. anything else → `DocumentOther`
    ///
    /// No content sniffing, matching is case-sensitive.
    pub fn classify(name: &str, content_type: &str) -> Self {
        if name.ends_with(".pdf") {
            AttachmentKind::Pdf
        } else if content_type.contains("image") {
            AttachmentKind::Image
        } else {
            AttachmentKind::DocumentOther
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AttachmentKind::Pdf => "pdf",
            AttachmentKind::Image => "image",
            AttachmentKind::DocumentOther => "document-other",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AttachmentKind::Pdf => "PDF",
            AttachmentKind::Image => "Image",
            AttachmentKind::DocumentOther => "Document",
        }
    }
}

impl std::fmt::Display for AttachmentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pdf_suffix_wins_over_content_type() {
        assert_eq!(
            AttachmentKind::classify("report.pdf", "application/octet-stream"),
            AttachmentKind::Pdf
        );
        assert_eq!(
            AttachmentKind::classify("scan.pdf", "image/png"),
            AttachmentKind::Pdf
        );
    }

    #[test]
    fn test_image_content_type() {
        assert_eq!(
            AttachmentKind::classify("photo.jpg", "image/jpeg"),
            AttachmentKind::Image
        );
    }

    #[test]
    fn test_everything_else_is_other_document() {
        assert_eq!(
            AttachmentKind::classify(
                "notes.docx",
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
            ),
            AttachmentKind::DocumentOther
        );
        assert_eq!(AttachmentKind::classify("", ""), AttachmentKind::DocumentOther);
        // uppercase suffix is not the literal ".pdf"
        assert_eq!(
            AttachmentKind::classify("REPORT.PDF", "application/pdf"),
            AttachmentKind::DocumentOther
        );
    }

    #[test]
    fn test_serialized_names() {
        let json = serde_json::to_string(&AttachmentKind::DocumentOther).unwrap();
        assert_eq!(json, "\"document-other\"");
        assert_eq!(AttachmentKind::DocumentOther.as_str(), "document-other");
    }
}
