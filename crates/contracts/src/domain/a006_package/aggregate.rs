use crate::domain::common::{AggregateRoot, BaseAggregate, EntityMetadata, FilterOption};
use serde::{Deserialize, Serialize};

crate::uuid_aggregate_id!(
    /// Unique package identifier
    PackageId
);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PackageTier {
    Basic,
    Standard,
    Premium,
}

impl FilterOption for PackageTier {
    fn all() -> &'static [Self] {
        &[PackageTier::Basic, PackageTier::Standard, PackageTier::Premium]
    }

    fn as_str(&self) -> &'static str {
        match self {
            PackageTier::Basic => "basic",
            PackageTier::Standard => "standard",
            PackageTier::Premium => "premium",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            PackageTier::Basic => "Basic",
            PackageTier::Standard => "Standard",
            PackageTier::Premium => "Premium",
        }
    }
}

/// Sellable bundle of services and equipment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Package {
    #[serde(flatten)]
    pub base: BaseAggregate<PackageId>,

    pub tier: PackageTier,
    pub price: f64,
    #[serde(rename = "includedItems")]
    pub included_items: Vec<String>,
}

impl Package {
    pub fn new_for_insert(code: String, description: String, tier: PackageTier) -> Self {
        Self {
            base: BaseAggregate::new(PackageId::new_v4(), code, description),
            tier,
            price: 0.0,
            included_items: Vec::new(),
        }
    }

    pub fn new_with_id(
        id: PackageId,
        code: &str,
        description: &str,
        tier: PackageTier,
        price: f64,
        included_items: &[&str],
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
            tier,
            price,
            included_items: included_items.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Included items as one comma separated line (list cell, form field)
    pub fn items_line(&self) -> String {
        self.included_items.join(", ")
    }

    /// Inverse of `items_line`: splits on commas, drops blanks
    pub fn parse_items_line(line: &str) -> Vec<String> {
        line.split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect()
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.base.description.trim().is_empty() {
            return Err("Package name is required".into());
        }
        if !self.price.is_finite() {
            return Err("Price must be a number".into());
        }
        if self.price < 0.0 {
            return Err("Price cannot be negative".into());
        }
        Ok(())
    }

    pub fn before_write(&mut self) {
        self.base.touch();
    }
}

impl AggregateRoot for Package {
    type Id = PackageId;

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
        "a006"
    }

    fn collection_name() -> &'static str {
        "package"
    }

    fn element_name() -> &'static str {
        "Package"
    }

    fn list_name() -> &'static str {
        "Packages"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_items_line_round_trip() {
        let items = Package::parse_items_line(" PA system, , 2x moving heads ,LED wall");
        assert_eq!(items, vec!["PA system", "2x moving heads", "LED wall"]);

        let mut p = Package::new_for_insert("PK-1".into(), "Conference".into(), PackageTier::Standard);
        p.included_items = items;
        assert_eq!(p.items_line(), "PA system, 2x moving heads, LED wall");
    }

    #[test]
    fn test_negative_price_is_rejected() {
        let mut p = Package::new_for_insert("PK-2".into(), "Gala".into(), PackageTier::Premium);
        p.price = -10.0;
        assert!(p.validate().is_err());
    }

    #[test]
    fn test_non_finite_price_is_rejected() {
        let mut p = Package::new_for_insert("PK-3".into(), "Expo".into(), PackageTier::Basic);
        p.price = f64::NAN;
        assert_eq!(p.validate().unwrap_err(), "Price must be a number");
        p.price = f64::INFINITY;
        assert!(p.validate().is_err());
    }
}
