/// Closed set of values a list page can filter by (statuses, categories)
pub trait FilterOption: Copy + PartialEq + Sized + 'static {
    /// Every value, in display order
    fn all() -> &'static [Self];

    /// Stable machine name, used as the option value
    fn as_str(&self) -> &'static str;

    /// Human readable name
    fn label(&self) -> &'static str;

    fn from_str_opt(value: &str) -> Option<Self> {
        Self::all().iter().copied().find(|v| v.as_str() == value)
    }

    /// `(value, label)` pairs for dropdowns
    fn options() -> Vec<(String, String)> {
        Self::all()
            .iter()
            .map(|v| (v.as_str().to_string(), v.label().to_string()))
            .collect()
    }
}
