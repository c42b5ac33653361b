//! ViewModel for the Event details form
//!
//! Form fields are individual RwSignals for THAW two-way binding. The
//! attachment list lives in `snapshot`, which the document editor replaces
//! as a whole after every append or removal.

use contracts::domain::a001_company::aggregate::CompanyId;
use contracts::domain::a005_event::aggregate::{Event, EventStatus};
use contracts::domain::common::{AggregateId, FilterOption};
use leptos::prelude::*;

const DATE_FORMAT: &str = "%Y-%m-%d";

fn opt(v: String) -> Option<String> {
    if v.trim().is_empty() {
        None
    } else {
        Some(v)
    }
}

fn parse_date(value: &str, field: &str) -> Result<chrono::NaiveDate, String> {
    chrono::NaiveDate::parse_from_str(value.trim(), DATE_FORMAT)
        .map_err(|_| format!("{field} must be a date (YYYY-MM-DD)"))
}

#[derive(Clone)]
pub struct EventDetailsVm {
    // === Form fields ===
    pub code: RwSignal<String>,
    pub description: RwSignal<String>,
    pub venue: RwSignal<String>,
    pub starts_on: RwSignal<String>,
    pub ends_on: RwSignal<String>,
    pub company_id: RwSignal<String>,
    pub status: RwSignal<String>,
    pub comment: RwSignal<String>,

    // === Parent entity state (attachments) ===
    pub snapshot: RwSignal<Event>,
    pub is_new: RwSignal<bool>,

    // === UI State ===
    pub active_tab: RwSignal<&'static str>,
    pub documents_editing: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
}

impl EventDetailsVm {
    pub fn new() -> Self {
        let today = chrono::Utc::now().date_naive();
        let blank = Event::new_for_insert(String::new(), String::new(), today);
        let vm = Self {
            code: RwSignal::new(String::new()),
            description: RwSignal::new(String::new()),
            venue: RwSignal::new(String::new()),
            starts_on: RwSignal::new(String::new()),
            ends_on: RwSignal::new(String::new()),
            company_id: RwSignal::new(String::new()),
            status: RwSignal::new(String::new()),
            comment: RwSignal::new(String::new()),
            snapshot: RwSignal::new(blank.clone()),
            is_new: RwSignal::new(true),
            active_tab: RwSignal::new("general"),
            documents_editing: RwSignal::new(false),
            error: RwSignal::new(None),
        };
        vm.from_aggregate(&blank);
        vm
    }

    /// Fill the form from an existing event
    pub fn load(&self, event: Event) {
        log::debug!(
            "event details loaded: {} ({} documents)",
            event.base.code,
            event.attachments.len()
        );
        self.from_aggregate(&event);
        self.snapshot.set(event);
        self.is_new.set(false);
    }

    fn from_aggregate(&self, event: &Event) {
        self.code.set(event.base.code.clone());
        self.description.set(event.base.description.clone());
        self.venue.set(event.venue.clone());
        self.starts_on.set(event.starts_on.format(DATE_FORMAT).to_string());
        self.ends_on.set(event.ends_on.format(DATE_FORMAT).to_string());
        self.company_id.set(
            event
                .company_id
                .as_ref()
                .map(|id| id.as_string())
                .unwrap_or_default(),
        );
        self.status.set(event.status.as_str().to_string());
        self.comment.set(event.base.comment.clone().unwrap_or_default());
    }

    /// Current snapshot with the form fields applied
    pub fn to_aggregate(&self) -> Result<Event, String> {
        let mut event = self.snapshot.get();
        event.base.code = self.code.get().trim().to_string();
        event.base.description = self.description.get().trim().to_string();
        event.base.comment = opt(self.comment.get());
        event.venue = self.venue.get().trim().to_string();
        event.starts_on = parse_date(&self.starts_on.get(), "Start date")?;
        event.ends_on = parse_date(&self.ends_on.get(), "End date")?;
        event.status = EventStatus::from_str_opt(&self.status.get())
            .ok_or_else(|| "Unknown status".to_string())?;
        event.company_id = match opt(self.company_id.get()) {
            Some(id) => Some(CompanyId::from_string(&id)?),
            None => None,
        };
        Ok(event)
    }

    // === Derived signals ===

    pub fn is_edit_mode(&self) -> Signal<bool> {
        let is_new = self.is_new;
        Signal::derive(move || !is_new.get())
    }

    pub fn is_save_disabled(&self) -> Signal<bool> {
        let description = self.description;
        let code = self.code;
        Signal::derive(move || description.get().trim().is_empty() || code.get().trim().is_empty())
    }

    pub fn documents_count(&self) -> Signal<usize> {
        let snapshot = self.snapshot;
        Signal::derive(move || snapshot.with(|e| e.attachments.len()))
    }

    // === Commands ===

    pub fn set_tab(&self, tab: &'static str) {
        self.active_tab.set(tab);
    }

    pub fn toggle_documents_mode(&self) {
        self.documents_editing.update(|editing| *editing = !*editing);
    }

    /// Takes the snapshot produced by the document editor
    pub fn replace_snapshot(&self, event: Event) {
        self.snapshot.set(event);
    }

    /// Validate and hand the whole event to the list that owns it
    pub fn save(&self, on_saved: Callback<Event>) {
        let mut event = match self.to_aggregate() {
            Ok(event) => event,
            Err(msg) => {
                self.error.set(Some(msg));
                return;
            }
        };
        if let Err(msg) = event.validate() {
            self.error.set(Some(msg));
            return;
        }
        event.before_write();
        self.error.set(None);
        log::info!(
            "event snapshot emitted: {} with {} documents",
            event.base.code,
            event.attachments.len()
        );
        on_saved.run(event);
    }
}

impl Default for EventDetailsVm {
    fn default() -> Self {
        Self::new()
    }
}
