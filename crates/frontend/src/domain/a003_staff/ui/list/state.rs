use crate::shared::components::multi_select_filter::FilterSelection;
use crate::shared::list_utils::{query_summary, replace_or_push};
use contracts::domain::a003_staff::aggregate::{Department, Staff};
use contracts::domain::common::FilterOption;
use leptos::prelude::*;

#[derive(Clone, Debug, Default)]
pub struct StaffListState {
    pub items: Vec<Staff>,
    pub search_text: String,
    pub selected_filters: Vec<String>,
    pub is_loaded: bool,
}

impl StaffListState {
    pub fn load(&mut self, items: Vec<Staff>) {
        self.items = items;
        self.is_loaded = true;
    }

    pub fn upsert(&mut self, member: Staff) {
        replace_or_push(&mut self.items, member, |s| s.base.id);
    }

    pub fn remove_filter(&mut self, value: &str) {
        self.selected_filters.retain(|v| v != value);
    }

    pub fn selected_options(&self) -> Vec<(String, String)> {
        FilterSelection::new(self.selected_filters.clone()).selected_options(&Department::options())
    }

    pub fn summary(&self, min_chars: usize) -> String {
        let labels: Vec<String> = self.selected_options().into_iter().map(|(_, l)| l).collect();
        query_summary(&self.search_text, &labels, min_chars)
    }
}

pub fn create_state() -> RwSignal<StaffListState> {
    RwSignal::new(StaffListState::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upsert_replaces_edited_member() {
        let mut state = StaffListState::default();
        let member = Staff::new_for_insert("ST-1".into(), "Ana Lima".into(), Department::Technical);
        state.load(vec![member.clone()]);

        let mut edited = member;
        edited.position = "Lead technician".into();
        state.upsert(edited);

        assert_eq!(state.items.len(), 1);
        assert_eq!(state.items[0].position, "Lead technician");
    }

    #[test]
    fn test_short_search_is_ignored_in_summary() {
        let mut state = StaffListState::default();
        state.search_text = "an".into();
        state.selected_filters = vec!["sales".into()];
        assert_eq!(state.summary(3), "filter: Sales");
    }
}
