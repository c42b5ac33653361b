use crate::domain::common::{AggregateRoot, BaseAggregate, EntityMetadata, FilterOption};
use serde::{Deserialize, Serialize};

crate::uuid_aggregate_id!(
    /// Unique equipment item identifier
    EquipmentId
);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EquipmentCategory {
    Audio,
    Lighting,
    Video,
    Staging,
}

impl EquipmentCategory {
    pub fn all() -> &'static [Self] {
        &[
            EquipmentCategory::Audio,
            EquipmentCategory::Lighting,
            EquipmentCategory::Video,
            EquipmentCategory::Staging,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EquipmentCategory::Audio => "audio",
            EquipmentCategory::Lighting => "lighting",
            EquipmentCategory::Video => "video",
            EquipmentCategory::Staging => "staging",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            EquipmentCategory::Audio => "Audio",
            EquipmentCategory::Lighting => "Lighting",
            EquipmentCategory::Video => "Video",
            EquipmentCategory::Staging => "Staging",
        }
    }

    pub fn from_str_opt(value: &str) -> Option<Self> {
        Self::all().iter().copied().find(|c| c.as_str() == value)
    }
}

/// Condition of an item; this is what the equipment list filters on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EquipmentCondition {
    Available,
    InUse,
    Maintenance,
}

impl FilterOption for EquipmentCondition {
    fn all() -> &'static [Self] {
        &[
            EquipmentCondition::Available,
            EquipmentCondition::InUse,
            EquipmentCondition::Maintenance,
        ]
    }

    fn as_str(&self) -> &'static str {
        match self {
            EquipmentCondition::Available => "available",
            EquipmentCondition::InUse => "in-use",
            EquipmentCondition::Maintenance => "maintenance",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            EquipmentCondition::Available => "Available",
            EquipmentCondition::InUse => "In use",
            EquipmentCondition::Maintenance => "Maintenance",
        }
    }
}

/// Rentable equipment item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Equipment {
    #[serde(flatten)]
    pub base: BaseAggregate<EquipmentId>,

    pub category: EquipmentCategory,
    #[serde(rename = "serialNumber")]
    pub serial_number: String,
    pub condition: EquipmentCondition,
}

impl Equipment {
    pub fn new_for_insert(code: String, description: String, category: EquipmentCategory) -> Self {
        Self {
            base: BaseAggregate::new(EquipmentId::new_v4(), code, description),
            category,
            serial_number: String::new(),
            condition: EquipmentCondition::Available,
        }
    }

    pub fn new_with_id(
        id: EquipmentId,
        code: &str,
        description: &str,
        category: EquipmentCategory,
        serial_number: &str,
        condition: EquipmentCondition,
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
            category,
            serial_number: serial_number.to_string(),
            condition,
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.base.description.trim().is_empty() {
            return Err("Equipment name is required".into());
        }
        if self.base.code.trim().is_empty() {
            return Err("Code is required".into());
        }
        Ok(())
    }

    pub fn before_write(&mut self) {
        self.base.touch();
    }
}

impl AggregateRoot for Equipment {
    type Id = EquipmentId;

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
        "a002"
    }

    fn collection_name() -> &'static str {
        "equipment"
    }

    fn element_name() -> &'static str {
        "Equipment item"
    }

    fn list_name() -> &'static str {
        "Equipment"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_item_is_available() {
        let item = Equipment::new_for_insert(
            "EQ-010".into(),
            "Line array speaker".into(),
            EquipmentCategory::Audio,
        );
        assert_eq!(item.condition, EquipmentCondition::Available);
        assert!(item.validate().is_ok());
    }

    #[test]
    fn test_condition_names_are_kebab_case() {
        assert_eq!(EquipmentCondition::InUse.as_str(), "in-use");
        let json = serde_json::to_string(&EquipmentCondition::InUse).unwrap();
        assert_eq!(json, "\"in-use\"");
        assert_eq!(
            EquipmentCategory::from_str_opt("video"),
            Some(EquipmentCategory::Video)
        );
    }
}
