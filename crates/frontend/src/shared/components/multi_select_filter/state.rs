/// Selected values of a multi-select filter, in the order they were picked
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSelection {
    values: Vec<String>,
}

impl FilterSelection {
    pub fn new(values: Vec<String>) -> Self {
        let mut selection = Self::default();
        for value in values {
            if !selection.is_selected(&value) {
                selection.values.push(value);
            }
        }
        selection
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }

    pub fn into_values(self) -> Vec<String> {
        self.values
    }

    pub fn is_selected(&self, value: &str) -> bool {
        self.values.iter().any(|v| v == value)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Adds the value when absent, removes it when present
    pub fn toggle(&mut self, value: &str) {
        if let Some(pos) = self.values.iter().position(|v| v == value) {
            self.values.remove(pos);
        } else {
            self.values.push(value.to_string());
        }
    }

    pub fn clear(&mut self) {
        self.values.clear();
    }

    /// Button caption: "All", the single selected label, or "N selected"
    pub fn summary(&self, options: &[(String, String)]) -> String {
        match self.values.as_slice() {
            [] => "All".to_string(),
            [single] => options
                .iter()
                .find(|(value, _)| value == single)
                .map(|(_, label)| label.clone())
                .unwrap_or_else(|| single.clone()),
            many => format!("{} selected", many.len()),
        }
    }

    /// `(value, label)` pairs of the selected options, for filter chips
    pub fn selected_options(&self, options: &[(String, String)]) -> Vec<(String, String)> {
        self.values
            .iter()
            .map(|value| {
                let label = options
                    .iter()
                    .find(|(v, _)| v == value)
                    .map(|(_, l)| l.clone())
                    .unwrap_or_else(|| value.clone());
                (value.clone(), label)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options() -> Vec<(String, String)> {
        vec![
            ("planned".to_string(), "Planned".to_string()),
            ("confirmed".to_string(), "Confirmed".to_string()),
            ("completed".to_string(), "Completed".to_string()),
        ]
    }

    #[test]
    fn test_toggle_adds_then_removes() {
        let mut selection = FilterSelection::default();
        selection.toggle("planned");
        assert!(selection.is_selected("planned"));
        selection.toggle("planned");
        assert!(!selection.is_selected("planned"));
        assert!(selection.is_empty());
    }

    #[test]
    fn test_toggle_keeps_pick_order() {
        let mut selection = FilterSelection::default();
        selection.toggle("completed");
        selection.toggle("planned");
        assert_eq!(selection.values(), ["completed", "planned"]);
    }

    #[test]
    fn test_summary() {
        let opts = options();
        let mut selection = FilterSelection::default();
        assert_eq!(selection.summary(&opts), "All");
        selection.toggle("confirmed");
        assert_eq!(selection.summary(&opts), "Confirmed");
        selection.toggle("planned");
        assert_eq!(selection.summary(&opts), "2 selected");
        selection.clear();
        assert_eq!(selection.summary(&opts), "All");
    }

    #[test]
    fn test_unknown_value_falls_back_to_raw_value() {
        let selection = FilterSelection::new(vec!["archived".to_string()]);
        assert_eq!(selection.summary(&options()), "archived");
        assert_eq!(
            selection.selected_options(&options()),
            vec![("archived".to_string(), "archived".to_string())]
        );
    }

    #[test]
    fn test_new_drops_duplicates() {
        let selection = FilterSelection::new(vec![
            "planned".to_string(),
            "planned".to_string(),
            "completed".to_string(),
        ]);
        assert_eq!(selection.len(), 2);
    }
}
