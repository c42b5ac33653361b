use serde::{Deserialize, Serialize};

/// Lifecycle metadata of an aggregate instance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityMetadata {
    /// When the record was created
    pub created_at: chrono::DateTime<chrono::Utc>,
    /// When the record was last changed
    pub updated_at: chrono::DateTime<chrono::Utc>,
    /// Soft delete flag
    pub is_deleted: bool,
    /// Bumped on every saved snapshot
    pub version: i32,
}

impl EntityMetadata {
    pub fn new() -> Self {
        Self::created_at(chrono::Utc::now())
    }

    /// Metadata for a record created at a known instant (mock data, tests)
    pub fn created_at(at: chrono::DateTime<chrono::Utc>) -> Self {
        Self {
            created_at: at,
            updated_at: at,
            is_deleted: false,
            version: 0,
        }
    }

    /// Refresh `updated_at`
    pub fn touch(&mut self) {
        self.updated_at = chrono::Utc::now();
    }

    pub fn increment_version(&mut self) {
        self.version += 1;
    }
}

impl Default for EntityMetadata {
    fn default() -> Self {
        Self::new()
    }
}
