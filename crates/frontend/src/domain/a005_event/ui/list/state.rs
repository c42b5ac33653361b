use crate::shared::components::multi_select_filter::FilterSelection;
use crate::shared::list_utils::{query_summary, replace_or_push};
use contracts::domain::a005_event::aggregate::{Event, EventStatus};
use contracts::domain::common::FilterOption;
use leptos::prelude::*;

#[derive(Clone, Debug, Default)]
pub struct EventListState {
    pub items: Vec<Event>,
    pub search_text: String,
    /// Selected `EventStatus` values (`as_str` form)
    pub selected_filters: Vec<String>,
    pub is_loaded: bool,
}

impl EventListState {
    pub fn load(&mut self, items: Vec<Event>) {
        self.items = items;
        self.is_loaded = true;
    }

    /// Swaps in a saved snapshot, or appends it when it is new
    pub fn upsert(&mut self, event: Event) {
        replace_or_push(&mut self.items, event, |e| e.base.id);
    }

    pub fn remove_filter(&mut self, value: &str) {
        self.selected_filters.retain(|v| v != value);
    }

    pub fn selected_options(&self) -> Vec<(String, String)> {
        FilterSelection::new(self.selected_filters.clone()).selected_options(&EventStatus::options())
    }

    pub fn summary(&self, min_chars: usize) -> String {
        let labels: Vec<String> = self.selected_options().into_iter().map(|(_, l)| l).collect();
        query_summary(&self.search_text, &labels, min_chars)
    }
}

pub fn create_state() -> RwSignal<EventListState> {
    RwSignal::new(EventListState::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn event(code: &str) -> Event {
        let day = NaiveDate::from_ymd_opt(2025, 3, 12).unwrap();
        Event::new_for_insert(code.to_string(), format!("Event {code}"), day)
    }

    #[test]
    fn test_upsert_replaces_saved_snapshot() {
        let mut state = EventListState::default();
        let first = event("EVT-1");
        state.load(vec![first.clone(), event("EVT-2")]);

        let mut edited = first.clone();
        edited.venue = "Main hall".to_string();
        state.upsert(edited);

        assert_eq!(state.items.len(), 2);
        assert_eq!(state.items[0].venue, "Main hall");
        assert_eq!(state.items[0].base.id, first.base.id);
    }

    #[test]
    fn test_upsert_appends_new_event() {
        let mut state = EventListState::default();
        state.load(vec![event("EVT-1")]);
        state.upsert(event("EVT-9"));
        assert_eq!(state.items.len(), 2);
        assert_eq!(state.items[1].base.code, "EVT-9");
    }

    #[test]
    fn test_filters_only_change_local_state() {
        let mut state = EventListState::default();
        state.load(vec![event("EVT-1"), event("EVT-2")]);
        state.search_text = "zzz-no-match".to_string();
        state.selected_filters = vec!["cancelled".to_string()];

        assert_eq!(state.items.len(), 2);
        assert_eq!(state.summary(3), "search \"zzz-no-match\"; filter: Cancelled");

        state.remove_filter("cancelled");
        assert!(state.selected_filters.is_empty());
    }
}
