use crate::domain::attachments::{Attachment, HasAttachments};
use crate::domain::common::{AggregateRoot, BaseAggregate, EntityMetadata, FilterOption};
use serde::{Deserialize, Serialize};

// ============================================================================
// ID Type
// ============================================================================

crate::uuid_aggregate_id!(
    /// Unique company identifier
    CompanyId
);

// ============================================================================
// Status
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompanyStatus {
    Active,
    Prospect,
    Inactive,
}

impl FilterOption for CompanyStatus {
    fn all() -> &'static [Self] {
        &[
            CompanyStatus::Active,
            CompanyStatus::Prospect,
            CompanyStatus::Inactive,
        ]
    }

    fn as_str(&self) -> &'static str {
        match self {
            CompanyStatus::Active => "active",
            CompanyStatus::Prospect => "prospect",
            CompanyStatus::Inactive => "inactive",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            CompanyStatus::Active => "Active",
            CompanyStatus::Prospect => "Prospect",
            CompanyStatus::Inactive => "Inactive",
        }
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Client company (event organiser, venue owner, partner)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Company {
    #[serde(flatten)]
    pub base: BaseAggregate<CompanyId>,

    pub industry: String,
    #[serde(rename = "contactEmail")]
    pub contact_email: String,
    pub phone: String,
    pub status: CompanyStatus,
    #[serde(default)]
    pub attachments: Vec<Attachment>,
}

impl Company {
    /// New company, not yet saved anywhere
    pub fn new_for_insert(
        code: String,
        description: String,
        industry: String,
        contact_email: String,
        phone: String,
    ) -> Self {
        Self {
            base: BaseAggregate::new(CompanyId::new_v4(), code, description),
            industry,
            contact_email,
            phone,
            status: CompanyStatus::Prospect,
            attachments: Vec::new(),
        }
    }

    /// Company with a known id and metadata (mock fixtures)
    #[allow(clippy::too_many_arguments)]
    pub fn new_with_id(
        id: CompanyId,
        code: &str,
        description: &str,
        industry: &str,
        contact_email: &str,
        phone: &str,
        status: CompanyStatus,
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
            industry: industry.to_string(),
            contact_email: contact_email.to_string(),
            phone: phone.to_string(),
            status,
            attachments: Vec::new(),
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.base.description.trim().is_empty() {
            return Err("Company name is required".into());
        }
        if self.base.code.trim().is_empty() {
            return Err("Code is required".into());
        }
        if !self.contact_email.trim().is_empty() && !self.contact_email.contains('@') {
            return Err("Contact email must contain '@'".into());
        }
        Ok(())
    }

    /// Hook before the snapshot is handed to the list owner
    pub fn before_write(&mut self) {
        self.base.touch();
    }
}

impl HasAttachments for Company {
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

impl AggregateRoot for Company {
    type Id = CompanyId;

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
        "a001"
    }

    fn collection_name() -> &'static str {
        "company"
    }

    fn element_name() -> &'static str {
        "Company"
    }

    fn list_name() -> &'static str {
        "Companies"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn company() -> Company {
        Company::new_for_insert(
            "CMP-001".into(),
            "Northwind Events".into(),
            "Hospitality".into(),
            "office@northwind.test".into(),
            "+1 555 0100".into(),
        )
    }

    #[test]
    fn test_new_company_is_a_prospect_without_attachments() {
        let c = company();
        assert_eq!(c.status, CompanyStatus::Prospect);
        assert!(c.attachments.is_empty());
        assert!(c.validate().is_ok());
    }

    #[test]
    fn test_validation_requires_name_and_sane_email() {
        let mut c = company();
        c.base.description = "  ".into();
        assert!(c.validate().is_err());

        let mut c = company();
        c.contact_email = "office.northwind.test".into();
        assert_eq!(c.validate().unwrap_err(), "Contact email must contain '@'");
    }

    #[test]
    fn test_status_filter_options() {
        assert_eq!(
            CompanyStatus::from_str_opt("inactive"),
            Some(CompanyStatus::Inactive)
        );
        assert_eq!(CompanyStatus::from_str_opt("gone"), None);
        assert_eq!(CompanyStatus::options()[0], ("active".into(), "Active".into()));
    }

    #[test]
    fn test_full_name_is_the_list_key() {
        assert_eq!(Company::full_name(), "a001_company");
    }
}
