use crate::shared::components::multi_select_filter::FilterSelection;
use crate::shared::list_utils::{query_summary, replace_or_push};
use contracts::domain::a004_outsourced_worker::aggregate::{Availability, OutsourcedWorker};
use contracts::domain::common::FilterOption;
use leptos::prelude::*;

#[derive(Clone, Debug, Default)]
pub struct OutsourcedWorkerListState {
    pub items: Vec<OutsourcedWorker>,
    pub search_text: String,
    pub selected_filters: Vec<String>,
    pub is_loaded: bool,
}

impl OutsourcedWorkerListState {
    pub fn load(&mut self, items: Vec<OutsourcedWorker>) {
        self.items = items;
        self.is_loaded = true;
    }

    pub fn upsert(&mut self, worker: OutsourcedWorker) {
        replace_or_push(&mut self.items, worker, |w| w.base.id);
    }

    pub fn remove_filter(&mut self, value: &str) {
        self.selected_filters.retain(|v| v != value);
    }

    pub fn selected_options(&self) -> Vec<(String, String)> {
        FilterSelection::new(self.selected_filters.clone())
            .selected_options(&Availability::options())
    }

    pub fn summary(&self, min_chars: usize) -> String {
        let labels: Vec<String> = self.selected_options().into_iter().map(|(_, l)| l).collect();
        query_summary(&self.search_text, &labels, min_chars)
    }
}

pub fn create_state() -> RwSignal<OutsourcedWorkerListState> {
    RwSignal::new(OutsourcedWorkerListState::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remove_filter_keeps_others() {
        let mut state = OutsourcedWorkerListState::default();
        state.selected_filters = vec!["available".into(), "booked".into()];
        state.remove_filter("available");
        assert_eq!(state.selected_filters, vec!["booked".to_string()]);
        assert_eq!(state.summary(3), "filter: Booked");
    }
}
