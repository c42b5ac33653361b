use crate::shared::components::multi_select_filter::FilterSelection;
use crate::shared::list_utils::{query_summary, replace_or_push};
use contracts::domain::a001_company::aggregate::{Company, CompanyStatus};
use contracts::domain::common::FilterOption;
use leptos::prelude::*;

#[derive(Clone, Debug, Default)]
pub struct CompanyListState {
    pub items: Vec<Company>,
    pub search_text: String,
    /// Selected `CompanyStatus` values
    pub selected_filters: Vec<String>,
    pub is_loaded: bool,
}

impl CompanyListState {
    pub fn load(&mut self, items: Vec<Company>) {
        self.items = items;
        self.is_loaded = true;
    }

    pub fn upsert(&mut self, company: Company) {
        replace_or_push(&mut self.items, company, |c| c.base.id);
    }

    pub fn remove_filter(&mut self, value: &str) {
        self.selected_filters.retain(|v| v != value);
    }

    pub fn selected_options(&self) -> Vec<(String, String)> {
        FilterSelection::new(self.selected_filters.clone())
            .selected_options(&CompanyStatus::options())
    }

    pub fn summary(&self, min_chars: usize) -> String {
        let labels: Vec<String> = self.selected_options().into_iter().map(|(_, l)| l).collect();
        query_summary(&self.search_text, &labels, min_chars)
    }
}

pub fn create_state() -> RwSignal<CompanyListState> {
    RwSignal::new(CompanyListState::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::attachments::{append, intake, RawFile};

    fn company(code: &str) -> Company {
        Company::new_for_insert(
            code.to_string(),
            format!("Company {code}"),
            "Retail".to_string(),
            String::new(),
            String::new(),
        )
    }

    #[test]
    fn test_upsert_keeps_position_and_takes_new_attachments() {
        let mut state = CompanyListState::default();
        let target = company("CMP-2");
        state.load(vec![company("CMP-1"), target.clone(), company("CMP-3")]);

        let files = [RawFile::new("contract.pdf", 2_000_000, "application/pdf")];
        let at = chrono::DateTime::from_timestamp_millis(1_700_000_000_000).unwrap();
        let saved = append(&target, intake(&files, at));
        state.upsert(saved);

        assert_eq!(state.items.len(), 3);
        assert_eq!(state.items[1].base.code, "CMP-2");
        assert_eq!(state.items[1].attachments.len(), 1);
        assert!(state.items[0].attachments.is_empty());
    }

    #[test]
    fn test_summary_uses_status_labels() {
        let mut state = CompanyListState::default();
        state.selected_filters = vec!["prospect".to_string()];
        assert_eq!(state.summary(3), "filter: Prospect");
    }
}
