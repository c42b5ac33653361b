use crate::domain::common::{AggregateRoot, BaseAggregate, EntityMetadata, FilterOption};
use serde::{Deserialize, Serialize};

crate::uuid_aggregate_id!(
    /// Unique outsourced worker identifier
    OutsourcedWorkerId
);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Availability {
    Available,
    Booked,
    Unavailable,
}

impl FilterOption for Availability {
    fn all() -> &'static [Self] {
        &[
            Availability::Available,
            Availability::Booked,
            Availability::Unavailable,
        ]
    }

    fn as_str(&self) -> &'static str {
        match self {
            Availability::Available => "available",
            Availability::Booked => "booked",
            Availability::Unavailable => "unavailable",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Availability::Available => "Available",
            Availability::Booked => "Booked",
            Availability::Unavailable => "Unavailable",
        }
    }
}

/// Freelancer or agency worker hired per event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutsourcedWorker {
    #[serde(flatten)]
    pub base: BaseAggregate<OutsourcedWorkerId>,

    pub agency: String,
    pub skill: String,
    #[serde(rename = "dailyRate")]
    pub daily_rate: f64,
    pub availability: Availability,
}

impl OutsourcedWorker {
    pub fn new_for_insert(code: String, full_name: String, agency: String) -> Self {
        Self {
            base: BaseAggregate::new(OutsourcedWorkerId::new_v4(), code, full_name),
            agency,
            skill: String::new(),
            daily_rate: 0.0,
            availability: Availability::Available,
        }
    }

    #[allow(clippy::too_many_arguments)]
    pub fn new_with_id(
        id: OutsourcedWorkerId,
        code: &str,
        full_name: &str,
        agency: &str,
        skill: &str,
        daily_rate: f64,
        availability: Availability,
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
            agency: agency.to_string(),
            skill: skill.to_string(),
            daily_rate,
            availability,
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.base.description.trim().is_empty() {
            return Err("Full name is required".into());
        }
        if !self.daily_rate.is_finite() {
            return Err("Daily rate must be a number".into());
        }
        if self.daily_rate < 0.0 {
            return Err("Daily rate cannot be negative".into());
        }
        Ok(())
    }

    pub fn before_write(&mut self) {
        self.base.touch();
    }
}

impl AggregateRoot for OutsourcedWorker {
    type Id = OutsourcedWorkerId;

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
        "a004"
    }

    fn collection_name() -> &'static str {
        "outsourced_worker"
    }

    fn element_name() -> &'static str {
        "Outsourced worker"
    }

    fn list_name() -> &'static str {
        "Outsourced workers"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negative_rate_is_rejected() {
        let mut w = OutsourcedWorker::new_for_insert(
            "OW-7".into(),
            "Sam Ortiz".into(),
            "Crew Partners".into(),
        );
        assert!(w.validate().is_ok());
        w.daily_rate = -1.0;
        assert_eq!(w.validate().unwrap_err(), "Daily rate cannot be negative");
    }

    #[test]
    fn test_non_finite_rate_is_rejected() {
        let mut w = OutsourcedWorker::new_for_insert("OW-8".into(), "Lee Park".into(), String::new());
        w.daily_rate = f64::NAN;
        assert_eq!(w.validate().unwrap_err(), "Daily rate must be a number");
    }
}
