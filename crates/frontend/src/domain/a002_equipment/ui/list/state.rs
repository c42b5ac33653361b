use crate::shared::components::multi_select_filter::FilterSelection;
use crate::shared::list_utils::{query_summary, replace_or_push};
use contracts::domain::a002_equipment::aggregate::{Equipment, EquipmentCondition};
use contracts::domain::common::FilterOption;
use leptos::prelude::*;

#[derive(Clone, Debug, Default)]
pub struct EquipmentListState {
    pub items: Vec<Equipment>,
    pub search_text: String,
    /// Selected `EquipmentCondition` values
    pub selected_filters: Vec<String>,
    pub is_loaded: bool,
}

impl EquipmentListState {
    pub fn load(&mut self, items: Vec<Equipment>) {
        self.items = items;
        self.is_loaded = true;
    }

    pub fn upsert(&mut self, equipment: Equipment) {
        replace_or_push(&mut self.items, equipment, |e| e.base.id);
    }

    pub fn remove_filter(&mut self, value: &str) {
        self.selected_filters.retain(|v| v != value);
    }

    pub fn selected_options(&self) -> Vec<(String, String)> {
        FilterSelection::new(self.selected_filters.clone())
            .selected_options(&EquipmentCondition::options())
    }

    pub fn summary(&self, min_chars: usize) -> String {
        let labels: Vec<String> = self.selected_options().into_iter().map(|(_, l)| l).collect();
        query_summary(&self.search_text, &labels, min_chars)
    }
}

pub fn create_state() -> RwSignal<EquipmentListState> {
    RwSignal::new(EquipmentListState::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a002_equipment::aggregate::EquipmentCategory;

    #[test]
    fn test_in_use_filter_label() {
        let mut state = EquipmentListState::default();
        state.selected_filters = vec!["in-use".to_string(), "maintenance".to_string()];
        assert_eq!(
            state.selected_options(),
            vec![
                ("in-use".to_string(), "In use".to_string()),
                ("maintenance".to_string(), "Maintenance".to_string()),
            ]
        );
    }

    #[test]
    fn test_upsert_new_equipment() {
        let mut state = EquipmentListState::default();
        state.load(Vec::new());
        let item = Equipment::new_for_insert(
            "EQ-9".to_string(),
            "Fog machine".to_string(),
            EquipmentCategory::Staging,
        );
        state.upsert(item.clone());
        state.upsert(item);
        assert_eq!(state.items.len(), 1);
    }
}
