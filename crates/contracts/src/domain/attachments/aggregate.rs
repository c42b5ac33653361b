use super::kind::AttachmentKind;
use serde::{Deserialize, Serialize};

/// Attachment id, unique within one parent entity's list.
///
/// Local uploads get a provisional `"{intake_millis}-{batch_index}"` id; it is
/// not stable across reloads.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AttachmentId(pub String);

impl AttachmentId {
    pub fn provisional(intake_millis: i64, batch_index: usize) -> Self {
        Self(format!("{}-{}", intake_millis, batch_index))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for AttachmentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Where the file can be fetched from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum AttachmentLocation {
    /// Picked locally, nothing uploaded yet
    Pending,
    Url(String),
}

impl AttachmentLocation {
    /// Link target for the download affordance; `Pending` resolves to `placeholder`
    pub fn href<'a>(&'a self, placeholder: &'a str) -> &'a str {
        match self {
            AttachmentLocation::Pending => placeholder,
            AttachmentLocation::Url(url) => url,
        }
    }
}

/// One file associated with a parent entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attachment {
    pub id: AttachmentId,
    pub name: String,
    pub kind: AttachmentKind,
    #[serde(rename = "sizeLabel")]
    pub size_label: String,
    pub location: AttachmentLocation,
}

impl Attachment {
    /// Attachment already stored somewhere (fixtures, server-provided records)
    pub fn stored(
        id: impl Into<String>,
        name: impl Into<String>,
        kind: AttachmentKind,
        size_label: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self {
            id: AttachmentId(id.into()),
            name: name.into(),
            kind,
            size_label: size_label.into(),
            location: AttachmentLocation::Url(url.into()),
        }
    }
}
