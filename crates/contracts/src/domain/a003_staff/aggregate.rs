use crate::domain::common::{AggregateRoot, BaseAggregate, EntityMetadata, FilterOption};
use serde::{Deserialize, Serialize};

crate::uuid_aggregate_id!(
    /// Unique staff member identifier
    StaffId
);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Department {
    Operations,
    Technical,
    Sales,
    Administration,
}

impl FilterOption for Department {
    fn all() -> &'static [Self] {
        &[
            Department::Operations,
            Department::Technical,
            Department::Sales,
            Department::Administration,
        ]
    }

    fn as_str(&self) -> &'static str {
        match self {
            Department::Operations => "operations",
            Department::Technical => "technical",
            Department::Sales => "sales",
            Department::Administration => "administration",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Department::Operations => "Operations",
            Department::Technical => "Technical",
            Department::Sales => "Sales",
            Department::Administration => "Administration",
        }
    }
}

/// In-house staff member. `base.description` holds the full name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Staff {
    #[serde(flatten)]
    pub base: BaseAggregate<StaffId>,

    pub position: String,
    pub email: String,
    pub phone: String,
    pub department: Department,
}

impl Staff {
    pub fn new_for_insert(code: String, full_name: String, department: Department) -> Self {
        Self {
            base: BaseAggregate::new(StaffId::new_v4(), code, full_name),
            position: String::new(),
            email: String::new(),
            phone: String::new(),
            department,
        }
    }

    #[allow(clippy::too_many_arguments)]
    pub fn new_with_id(
        id: StaffId,
        code: &str,
        full_name: &str,
        position: &str,
        email: &str,
        phone: &str,
        department: Department,
        metadata: EntityMetadata,
    ) -> Self {
        Self {
            base: BaseAggregate::with_metadata(
                id,
                code.to_string(),
                full_name.to_string(),
                None,
                metadata,
            ),
            position: position.to_string(),
            email: email.to_string(),
            phone: phone.to_string(),
            department,
        }
    }

    pub fn full_name(&self) -> &str {
        &self.base.description
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.base.description.trim().is_empty() {
            return Err("Full name is required".into());
        }
        if !self.email.trim().is_empty() && !self.email.contains('@') {
            return Err("Email must contain '@'".into());
        }
        Ok(())
    }

    pub fn before_write(&mut self) {
        self.base.touch();
    }
}

impl AggregateRoot for Staff {
    type Id = StaffId;

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
        "a003"
    }

    fn collection_name() -> &'static str {
        "staff"
    }

    fn element_name() -> &'static str {
        "Staff member"
    }

    fn list_name() -> &'static str {
        "Staff"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_is_optional_but_checked() {
        let mut s = Staff::new_for_insert("ST-01".into(), "Dana Reyes".into(), Department::Sales);
        assert!(s.validate().is_ok());

        s.email = "dana".into();
        assert!(s.validate().is_err());

        s.email = "dana@company.test".into();
        assert!(s.validate().is_ok());
        assert_eq!(s.full_name(), "Dana Reyes");
    }
}
