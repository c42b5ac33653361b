use crate::shared::form_utils::{format_amount, parse_amount};
use contracts::domain::a004_outsourced_worker::aggregate::OutsourcedWorker;
use leptos::prelude::*;

/// ViewModel for Outsourced worker details form
#[derive(Clone)]
pub struct OutsourcedWorkerDetailsViewModel {
    pub form: RwSignal<OutsourcedWorker>,
    /// Daily rate is edited as text and parsed on save
    pub daily_rate: RwSignal<String>,
    pub is_new: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
}

impl OutsourcedWorkerDetailsViewModel {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(OutsourcedWorker::new_for_insert(
                String::new(),
                String::new(),
                String::new(),
            )),
            daily_rate: RwSignal::new(String::new()),
            is_new: RwSignal::new(true),
            error: RwSignal::new(None),
        }
    }

    pub fn load(&self, worker: OutsourcedWorker) {
        self.daily_rate.set(format_amount(worker.daily_rate));
        self.form.set(worker);
        self.is_new.set(false);
    }

    pub fn is_edit_mode(&self) -> Signal<bool> {
        let is_new = self.is_new;
        Signal::derive(move || !is_new.get())
    }

    pub fn is_form_valid(&self) -> Signal<bool> {
        let form = self.form;
        Signal::derive(move || form.with(|f| !f.base.description.trim().is_empty()))
    }

    pub fn save_command(&self, on_saved: Callback<OutsourcedWorker>) {
        let mut current = self.form.get();
        current.base.description = current.base.description.trim().to_string();
        current.daily_rate = match parse_amount("Daily rate", &self.daily_rate.get()) {
            Ok(rate) => rate,
            Err(msg) => {
                self.error.set(Some(msg));
                return;
            }
        };

        if let Err(msg) = current.validate() {
            self.error.set(Some(msg));
            return;
        }

        current.before_write();
        self.error.set(None);
        on_saved.run(current);
    }
}

impl Default for OutsourcedWorkerDetailsViewModel {
    fn default() -> Self {
        Self::new()
    }
}

