use super::EntityMetadata;

/// Aggregate root contract shared by every entity of the console
pub trait AggregateRoot {
    type Id;

    // ============================================================================
    // Instance data
    // ============================================================================

    fn id(&self) -> Self::Id;

    /// Business code of the record (e.g. "CMP-001")
    fn code(&self) -> &str;

    fn description(&self) -> &str;

    fn metadata(&self) -> &EntityMetadata;

    fn metadata_mut(&mut self) -> &mut EntityMetadata;

    // ============================================================================
    // Aggregate class metadata
    // ============================================================================

    /// Index of the aggregate in the console (e.g. "a001")
    fn aggregate_index() -> &'static str;

    /// Collection name (e.g. "company")
    fn collection_name() -> &'static str;

    /// Singular UI name (e.g. "Company")
    fn element_name() -> &'static str;

    /// Plural UI name (e.g. "Companies")
    fn list_name() -> &'static str;

    /// Full key of the aggregate, also used as the list tab key (e.g. "a001_company")
    fn full_name() -> String {
        format!("{}_{}", Self::aggregate_index(), Self::collection_name())
    }
}
