use contracts::domain::a002_equipment::aggregate::{Equipment, EquipmentCategory};
use leptos::prelude::*;

/// ViewModel for Equipment details form
#[derive(Clone)]
pub struct EquipmentDetailsViewModel {
    pub form: RwSignal<Equipment>,
    pub is_new: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
}

impl EquipmentDetailsViewModel {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(Equipment::new_for_insert(
                String::new(),
                String::new(),
                EquipmentCategory::Audio,
            )),
            is_new: RwSignal::new(true),
            error: RwSignal::new(None),
        }
    }

    pub fn load(&self, equipment: Equipment) {
        self.form.set(equipment);
        self.is_new.set(false);
    }

    pub fn is_edit_mode(&self) -> Signal<bool> {
        let is_new = self.is_new;
        Signal::derive(move || !is_new.get())
    }

    pub fn is_form_valid(&self) -> Signal<bool> {
        let form = self.form;
        Signal::derive(move || form.with(|f| f.validate().is_ok()))
    }

    pub fn set_comment(&self, value: String) {
        self.form.update(|f| {
            let comment = if value.trim().is_empty() { None } else { Some(value) };
            f.base.set_comment(comment);
        });
    }

    pub fn save_command(&self, on_saved: Callback<Equipment>) {
        let mut current = self.form.get();
        current.base.code = current.base.code.trim().to_string();
        current.base.description = current.base.description.trim().to_string();

        if let Err(msg) = current.validate() {
            self.error.set(Some(msg));
            return;
        }

        current.before_write();
        self.error.set(None);
        on_saved.run(current);
    }
}

impl Default for EquipmentDetailsViewModel {
    fn default() -> Self {
        Self::new()
    }
}

