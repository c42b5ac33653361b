//! UI configuration embedded into the bundle.
//!
//! The browser build has no filesystem, so the TOML source is compiled in and
//! parsed once on startup by `App`, which then provides it as context.

use leptos::prelude::*;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct UiConfig {
    pub search: SearchConfig,
    pub attachments: AttachmentsConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct SearchConfig {
    /// Search text shorter than this is treated as empty
    pub min_chars: usize,
    pub debounce_ms: u32,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AttachmentsConfig {
    /// Value of the file input `accept` attribute; empty means any file
    pub accept: String,
    /// Link target rendered for attachments that have no URL yet
    pub pending_href: String,
}

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r##"
[search]
min_chars = 3
debounce_ms = 300

[attachments]
accept = ""
pending_href = "#"
"##;

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            search: SearchConfig {
                min_chars: 3,
                debounce_ms: 300,
            },
            attachments: AttachmentsConfig {
                accept: String::new(),
                pending_href: "#".to_string(),
            },
        }
    }
}

/// Parse configuration from a TOML source
pub fn load_config_from(source: &str) -> anyhow::Result<UiConfig> {
    let config: UiConfig = toml::from_str(source)?;
    Ok(config)
}

/// Load the embedded configuration
pub fn load_config() -> anyhow::Result<UiConfig> {
    log::info!("Using default embedded UI configuration");
    load_config_from(DEFAULT_CONFIG)
}

/// Configuration from context, or the defaults when rendered outside `App`
pub fn use_ui_config() -> UiConfig {
    use_context::<UiConfig>().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = load_config_from(DEFAULT_CONFIG);
        assert!(config.is_ok());
        let config = config.unwrap();
        assert_eq!(config.search.min_chars, 3);
        assert_eq!(config.search.debounce_ms, 300);
        assert_eq!(config.attachments.pending_href, "#");
    }

    #[test]
    fn test_embedded_config_matches_default() {
        assert_eq!(load_config_from(DEFAULT_CONFIG).unwrap(), UiConfig::default());
    }

    #[test]
    fn test_missing_section_is_an_error() {
        let result = load_config_from("[search]\nmin_chars = 2\ndebounce_ms = 100\n");
        assert!(result.is_err());
    }
}
