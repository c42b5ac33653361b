use serde::{de::DeserializeOwned, Serialize};
use std::hash::Hash;

/// Identifier type of an aggregate
pub trait AggregateId:
    Clone + Copy + PartialEq + Eq + Hash + Serialize + DeserializeOwned + std::fmt::Debug
{
    /// Render the id as a string (tab keys, DOM ids, list rows)
    fn as_string(&self) -> String;

    /// Parse the id back from its string form
    fn from_string(s: &str) -> Result<Self, String>;
}

impl AggregateId for uuid::Uuid {
    fn as_string(&self) -> String {
        ToString::to_string(self)
    }

    fn from_string(s: &str) -> Result<Self, String> {
        uuid::Uuid::parse_str(s).map_err(|e| format!("Invalid UUID: {}", e))
    }
}

/// Declares a `Uuid` newtype id and its `AggregateId` impl.
#[macro_export]
macro_rules! uuid_aggregate_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
        )]
        pub struct $name(pub uuid::Uuid);

        impl $name {
            pub fn new(value: uuid::Uuid) -> Self {
                Self(value)
            }

            pub fn new_v4() -> Self {
                Self(uuid::Uuid::new_v4())
            }

            pub fn value(&self) -> uuid::Uuid {
                self.0
            }
        }

        impl $crate::domain::common::AggregateId for $name {
            fn as_string(&self) -> String {
                self.0.to_string()
            }

            fn from_string(s: &str) -> Result<Self, String> {
                uuid::Uuid::parse_str(s)
                    .map($name::new)
                    .map_err(|e| format!("Invalid UUID: {}", e))
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    crate::uuid_aggregate_id!(
        /// Id used only by these tests
        SampleId
    );

    #[test]
    fn test_uuid_id_round_trips_through_string() {
        let id = SampleId::new_v4();
        let parsed = SampleId::from_string(&id.as_string()).unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn test_invalid_id_is_rejected() {
        let err = SampleId::from_string("not-a-uuid").unwrap_err();
        assert!(err.starts_with("Invalid UUID"));
    }
}
