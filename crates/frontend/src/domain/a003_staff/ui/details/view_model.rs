use contracts::domain::a003_staff::aggregate::{Department, Staff};
use leptos::prelude::*;

/// ViewModel for Staff details form
#[derive(Clone)]
pub struct StaffDetailsViewModel {
    pub form: RwSignal<Staff>,
    pub is_new: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
}

impl StaffDetailsViewModel {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(Staff::new_for_insert(
                String::new(),
                String::new(),
                Department::Operations,
            )),
            is_new: RwSignal::new(true),
            error: RwSignal::new(None),
        }
    }

    pub fn load(&self, member: Staff) {
        self.form.set(member);
        self.is_new.set(false);
    }

    pub fn is_edit_mode(&self) -> Signal<bool> {
        let is_new = self.is_new;
        Signal::derive(move || !is_new.get())
    }

    /// Only the name gates the Save button; email format is reported on save
    pub fn is_form_valid(&self) -> Signal<bool> {
        let form = self.form;
        Signal::derive(move || form.with(|f| !f.base.description.trim().is_empty()))
    }

    pub fn save_command(&self, on_saved: Callback<Staff>) {
        let mut current = self.form.get();
        current.base.description = current.base.description.trim().to_string();
        current.email = current.email.trim().to_string();

        if let Err(msg) = current.validate() {
            self.error.set(Some(msg));
            return;
        }

        current.before_write();
        self.error.set(None);
        on_saved.run(current);
    }
}

impl Default for StaffDetailsViewModel {
    fn default() -> Self {
        Self::new()
    }
}
