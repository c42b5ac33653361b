use leptos::prelude::Effect;
use leptos::prelude::*;
use std::collections::HashMap;
use web_sys::window;

/// Shell navigation state: which tabs are open and which one is shown.
///
/// Page data (search text, filters, entity lists) is not kept here; every
/// page owns its own state.
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub opened: RwSignal<Vec<Tab>>,
    pub active: RwSignal<Option<String>>,
    pub left_open: RwSignal<bool>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            opened: RwSignal::new(vec![]),
            active: RwSignal::new(None),
            left_open: RwSignal::new(true),
        }
    }

    pub fn init_router_integration(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        if let Some(active_key) = active_key_from_query(&search) {
            let exists = self
                .opened
                .with_untracked(|tabs| tabs.iter().any(|tab| tab.key == active_key));
            if !exists {
                let title = crate::layout::tabs::tab_label_for_key(&active_key);
                let title = if title.is_empty() { active_key.as_str() } else { title };
                self.open_tab(&active_key, title);
            } else {
                self.activate_tab(&active_key);
            }
        }

        let this = *self;
        Effect::new(move |_| {
            if let Some(active_key) = this.active.get() {
                let new_url = query_for_active_key(&active_key);

                let current_search = window()
                    .and_then(|w| w.location().search().ok())
                    .unwrap_or_default();

                // Only update URL if it actually changed
                if current_search != new_url {
                    if let Some(w) = window() {
                        if let Ok(history) = w.history() {
                            let _ = history.replace_state_with_url(
                                &wasm_bindgen::JsValue::NULL,
                                "",
                                Some(&new_url),
                            );
                        }
                    }
                }
            }
        });
    }

    pub fn open_tab(&self, key: &str, title: &str) {
        leptos::logging::log!("open_tab: key='{}', title='{}'", key, title);
        let exists = self
            .opened
            .with_untracked(|tabs| tabs.iter().any(|tab| tab.key == key));
        if !exists {
            let tab = Tab {
                key: key.to_string(),
                title: title.to_string(),
            };
            self.opened.update(|tabs| tabs.push(tab));
        }
        self.activate_tab(key);
    }

    pub fn activate_tab(&self, key: &str) {
        self.active.set(Some(key.to_string()));
    }

    pub fn close_tab(&self, key: &str) {
        leptos::logging::log!("close_tab: key='{}'", key);
        self.opened.update(|tabs| tabs.retain(|tab| tab.key != key));
        if self
            .active
            .with_untracked(|active| active.as_deref() == Some(key))
        {
            let next_active = self
                .opened
                .with_untracked(|tabs| tabs.last().map(|t| t.key.clone()));
            self.active.set(next_active);
        }
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|val| *val = !*val);
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tab {
    pub key: String,
    pub title: String,
}

/// `?active=a005_event` → `Some("a005_event")`
fn active_key_from_query(search: &str) -> Option<String> {
    let params: HashMap<String, String> =
        serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
    params.get("active").filter(|k| !k.is_empty()).cloned()
}

fn query_for_active_key(active_key: &str) -> String {
    let query_string = serde_qs::to_string(&HashMap::from([(
        "active".to_string(),
        active_key.to_string(),
    )]))
    .unwrap_or_default();
    format!("?{}", query_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_active_key_round_trip() {
        let query = query_for_active_key("a005_event");
        assert_eq!(query, "?active=a005_event");
        assert_eq!(active_key_from_query(&query).as_deref(), Some("a005_event"));
    }

    #[test]
    fn test_missing_or_empty_active_key() {
        assert_eq!(active_key_from_query(""), None);
        assert_eq!(active_key_from_query("?active="), None);
        assert_eq!(active_key_from_query("?other=1"), None);
    }
}
