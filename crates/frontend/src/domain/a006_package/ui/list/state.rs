use crate::shared::components::multi_select_filter::FilterSelection;
use crate::shared::list_utils::{query_summary, replace_or_push};
use contracts::domain::a006_package::aggregate::{Package, PackageTier};
use contracts::domain::common::FilterOption;
use leptos::prelude::*;

#[derive(Clone, Debug, Default)]
pub struct PackageListState {
    pub items: Vec<Package>,
    pub search_text: String,
    pub selected_filters: Vec<String>,
    pub is_loaded: bool,
}

impl PackageListState {
    pub fn load(&mut self, items: Vec<Package>) {
        self.items = items;
        self.is_loaded = true;
    }

    pub fn upsert(&mut self, package: Package) {
        replace_or_push(&mut self.items, package, |p| p.base.id);
    }

    pub fn remove_filter(&mut self, value: &str) {
        self.selected_filters.retain(|v| v != value);
    }

    pub fn selected_options(&self) -> Vec<(String, String)> {
        FilterSelection::new(self.selected_filters.clone()).selected_options(&PackageTier::options())
    }

    pub fn summary(&self, min_chars: usize) -> String {
        let labels: Vec<String> = self.selected_options().into_iter().map(|(_, l)| l).collect();
        query_summary(&self.search_text, &labels, min_chars)
    }
}

pub fn create_state() -> RwSignal<PackageListState> {
    RwSignal::new(PackageListState::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_with_search_and_tiers() {
        let mut state = PackageListState::default();
        state.search_text = " gala ".into();
        state.selected_filters = vec!["premium".into(), "basic".into()];
        assert_eq!(state.summary(3), "search \"gala\"; filter: Premium, Basic");
    }
}
