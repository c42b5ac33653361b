use super::EntityMetadata;
use serde::{Deserialize, Serialize};

/// Fields every aggregate carries
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BaseAggregate<Id> {
    /// Unique record id
    pub id: Id,
    /// Business code (e.g. "CMP-001", "EVT-2025-014")
    pub code: String,
    /// Display name of the record
    pub description: String,
    pub comment: Option<String>,
    pub metadata: EntityMetadata,
}

impl<Id> BaseAggregate<Id> {
    pub fn new(id: Id, code: String, description: String) -> Self {
        Self {
            id,
            code,
            description,
            comment: None,
            metadata: EntityMetadata::new(),
        }
    }

    /// Build an aggregate with existing metadata (mock fixtures)
    pub fn with_metadata(
        id: Id,
        code: String,
        description: String,
        comment: Option<String>,
        metadata: EntityMetadata,
    ) -> Self {
        Self {
            id,
            code,
            description,
            comment,
            metadata,
        }
    }

    /// Mark the record as changed: new timestamp and version
    pub fn touch(&mut self) {
        self.metadata.touch();
        self.metadata.increment_version();
    }

    pub fn set_comment(&mut self, comment: Option<String>) {
        self.comment = comment;
    }
}
