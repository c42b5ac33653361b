//! ViewModel for the Company details form

use contracts::domain::a001_company::aggregate::{Company, CompanyStatus};
use contracts::domain::common::FilterOption;
use leptos::prelude::*;

fn opt(v: String) -> Option<String> {
    if v.trim().is_empty() {
        None
    } else {
        Some(v)
    }
}

#[derive(Clone)]
pub struct CompanyDetailsVm {
    // === Form fields ===
    pub code: RwSignal<String>,
    pub description: RwSignal<String>,
    pub industry: RwSignal<String>,
    pub contact_email: RwSignal<String>,
    pub phone: RwSignal<String>,
    pub status: RwSignal<String>,
    pub comment: RwSignal<String>,

    // === Parent entity state (attachments) ===
    pub snapshot: RwSignal<Company>,
    pub is_new: RwSignal<bool>,

    // === UI State ===
    pub active_tab: RwSignal<&'static str>,
    pub documents_editing: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
}

impl CompanyDetailsVm {
    pub fn new() -> Self {
        let blank = Company::new_for_insert(
            String::new(),
            String::new(),
            String::new(),
            String::new(),
            String::new(),
        );
        let vm = Self {
            code: RwSignal::new(String::new()),
            description: RwSignal::new(String::new()),
            industry: RwSignal::new(String::new()),
            contact_email: RwSignal::new(String::new()),
            phone: RwSignal::new(String::new()),
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

    pub fn load(&self, company: Company) {
        log::debug!(
            "company details loaded: {} ({} documents)",
            company.base.code,
            company.attachments.len()
        );
        self.from_aggregate(&company);
        self.snapshot.set(company);
        self.is_new.set(false);
    }

    fn from_aggregate(&self, company: &Company) {
        self.code.set(company.base.code.clone());
        self.description.set(company.base.description.clone());
        self.industry.set(company.industry.clone());
        self.contact_email.set(company.contact_email.clone());
        self.phone.set(company.phone.clone());
        self.status.set(company.status.as_str().to_string());
        self.comment.set(company.base.comment.clone().unwrap_or_default());
    }

    /// Current snapshot with the form fields applied
    pub fn to_aggregate(&self) -> Result<Company, String> {
        let mut company = self.snapshot.get();
        company.base.code = self.code.get().trim().to_string();
        company.base.description = self.description.get().trim().to_string();
        company.base.comment = opt(self.comment.get());
        company.industry = self.industry.get().trim().to_string();
        company.contact_email = self.contact_email.get().trim().to_string();
        company.phone = self.phone.get().trim().to_string();
        company.status = CompanyStatus::from_str_opt(&self.status.get())
            .ok_or_else(|| "Unknown status".to_string())?;
        Ok(company)
    }

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
        Signal::derive(move || snapshot.with(|c| c.attachments.len()))
    }

    pub fn set_tab(&self, tab: &'static str) {
        self.active_tab.set(tab);
    }

    pub fn toggle_documents_mode(&self) {
        self.documents_editing.update(|editing| *editing = !*editing);
    }

    pub fn replace_snapshot(&self, company: Company) {
        self.snapshot.set(company);
    }

    pub fn save(&self, on_saved: Callback<Company>) {
        let mut company = match self.to_aggregate() {
            Ok(company) => company,
            Err(msg) => {
                self.error.set(Some(msg));
                return;
            }
        };
        if let Err(msg) = company.validate() {
            self.error.set(Some(msg));
            return;
        }
        company.before_write();
        self.error.set(None);
        log::info!(
            "company snapshot emitted: {} with {} documents",
            company.base.code,
            company.attachments.len()
        );
        on_saved.run(company);
    }
}

impl Default for CompanyDetailsVm {
    fn default() -> Self {
        Self::new()
    }
}
