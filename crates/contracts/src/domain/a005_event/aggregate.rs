use crate::domain::a001_company::aggregate::CompanyId;
use crate::domain::attachments::{Attachment, HasAttachments};
use crate::domain::common::{AggregateRoot, BaseAggregate, EntityMetadata, FilterOption};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ============================================================================
// ID Type
// ============================================================================

crate::uuid_aggregate_id!(
    /// Unique event identifier
    EventId
);

// ============================================================================
// Status
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventStatus {
    Planned,
    Confirmed,
    Completed,
    Cancelled,
}

impl FilterOption for EventStatus {
    fn all() -> &'static [Self] {
        &[
            EventStatus::Planned,
            EventStatus::Confirmed,
            EventStatus::Completed,
            EventStatus::Cancelled,
        ]
    }

    fn as_str(&self) -> &'static str {
        match self {
            EventStatus::Planned => "planned",
            EventStatus::Confirmed => "confirmed",
            EventStatus::Completed => "completed",
            EventStatus::Cancelled => "cancelled",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            EventStatus::Planned => "Planned",
            EventStatus::Confirmed => "Confirmed",
            EventStatus::Completed => "Completed",
            EventStatus::Cancelled => "Cancelled",
        }
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Event run for a client company; owns its documents
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    #[serde(flatten)]
    pub base: BaseAggregate<EventId>,

    pub venue: String,
    #[serde(rename = "startsOn")]
    pub starts_on: NaiveDate,
    #[serde(rename = "endsOn")]
    pub ends_on: NaiveDate,
    #[serde(rename = "companyId")]
    pub company_id: Option<CompanyId>,
    pub status: EventStatus,
    #[serde(default)]
    pub attachments: Vec<Attachment>,
}

impl Event {
    /// New single-day event
    pub fn new_for_insert(code: String, description: String, starts_on: NaiveDate) -> Self {
        Self {
            base: BaseAggregate::new(EventId::new_v4(), code, description),
            venue: String::new(),
            starts_on,
            ends_on: starts_on,
            company_id: None,
            status: EventStatus::Planned,
            attachments: Vec::new(),
        }
    }

    #[allow(clippy::too_many_arguments)]
    pub fn new_with_id(
        id: EventId,
        code: &str,
        description: &str,
        venue: &str,
        starts_on: NaiveDate,
        ends_on: NaiveDate,
        company_id: Option<CompanyId>,
        status: EventStatus,
        metadata: EntityMetadata,
    ) -> Self {
        Self {
            base: BaseAggregate::with_metadata(
                id,
                code.to_string(),
                description.to_string(),
                None,
                metadata,
            ),
            venue: venue.to_string(),
            starts_on,
            ends_on,
            company_id,
            status,
            attachments: Vec::new(),
        }
    }

    /// Number of calendar days the event spans, both ends included
    pub fn duration_days(&self) -> i64 {
        (self.ends_on - self.starts_on).num_days() + 1
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.base.description.trim().is_empty() {
            return Err("Event title is required".into());
        }
        if self.base.code.trim().is_empty() {
            return Err("Code is required".into());
        }
        if self.ends_on < self.starts_on {
            return Err("End date is before start date".into());
        }
        Ok(())
    }

    pub fn before_write(&mut self) {
        self.base.touch();
    }
}

impl HasAttachments for Event {
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

impl AggregateRoot for Event {
    type Id = EventId;

    fn id(&self) -> Self::Id {
        self.base.id
    }

    fn code(&self) -> &str {
        &self.base.code
    }

    fn description(&self) -> &str {
        &self.base.description
    }

    fn metadata(&self) -> &EntityMetadata {
        &self.base.metadata
    }

    fn metadata_mut(&mut self) -> &mut EntityMetadata {
        &mut self.base.metadata
    }

    fn aggregate_index() -> &'static str {
        "a005"
    }

    fn collection_name() -> &'static str {
        "event"
    }

    fn element_name() -> &'static str {
        "Event"
    }

    fn list_name() -> &'static str {
        "Events"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::attachments::{append, intake, remove_at, AttachmentKind, RawFile};
    use chrono::{TimeZone, Utc};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn event() -> Event {
        Event::new_for_insert("EVT-001".into(), "Product launch".into(), date(2025, 6, 10))
    }

    #[test]
    fn test_date_range_validation() {
        let mut e = event();
        assert_eq!(e.duration_days(), 1);
        e.ends_on = date(2025, 6, 12);
        assert_eq!(e.duration_days(), 3);
        assert!(e.validate().is_ok());

        e.ends_on = date(2025, 6, 9);
        assert_eq!(e.validate().unwrap_err(), "End date is before start date");
    }

    #[test]
    fn test_document_round_on_an_event() {
        let e = event();
        let at = Utc.with_ymd_and_hms(2025, 5, 1, 9, 0, 0).unwrap();
        let batch = intake(
            &[
                RawFile::new("run-of-show.pdf", 250_000, "application/pdf"),
                RawFile::new("photo.jpg", 3_145_728, "image/jpeg"),
                RawFile::new("notes.docx", 40_000, "application/msword"),
            ],
            at,
        );

        let with_docs = append(&e, batch);
        assert_eq!(with_docs.attachments.len(), 3);
        assert_eq!(with_docs.attachments[1].kind, AttachmentKind::Image);
        assert_eq!(with_docs.attachments[1].size_label, "3.00 MB");
        // the rest of the snapshot is carried over untouched
        assert_eq!(with_docs.base, e.base);

        let trimmed = remove_at(&with_docs, 1);
        let names: Vec<&str> = trimmed.attachments.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["run-of-show.pdf", "notes.docx"]);
    }

    #[test]
    fn test_serialized_shape() {
        let e = event();
        let json = serde_json::to_value(&e).unwrap();
        assert_eq!(json["code"], "EVT-001");
        assert_eq!(json["status"], "planned");
        assert_eq!(json["startsOn"], "2025-06-10");
        assert!(json["attachments"].as_array().unwrap().is_empty());
    }
}
