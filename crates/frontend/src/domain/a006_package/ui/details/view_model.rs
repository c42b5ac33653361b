use crate::shared::form_utils::{format_amount, parse_amount};
use contracts::domain::a006_package::aggregate::{Package, PackageTier};
use leptos::prelude::*;

/// ViewModel for Package details form
#[derive(Clone)]
pub struct PackageDetailsViewModel {
    pub form: RwSignal<Package>,
    /// Price is edited as text and parsed on save
    pub price: RwSignal<String>,
    /// Included items as one comma separated line
    pub items_line: RwSignal<String>,
    pub is_new: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
}

impl PackageDetailsViewModel {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(Package::new_for_insert(
                String::new(),
                String::new(),
                PackageTier::Standard,
            )),
            price: RwSignal::new(String::new()),
            items_line: RwSignal::new(String::new()),
            is_new: RwSignal::new(true),
            error: RwSignal::new(None),
        }
    }

    pub fn load(&self, package: Package) {
        self.price.set(format_amount(package.price));
        self.items_line.set(package.items_line());
        self.form.set(package);
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

    pub fn save_command(&self, on_saved: Callback<Package>) {
        let mut current = self.form.get();
        current.base.description = current.base.description.trim().to_string();
        current.included_items = Package::parse_items_line(&self.items_line.get());
        current.price = match parse_amount("Price", &self.price.get()) {
            Ok(price) => price,
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

impl Default for PackageDetailsViewModel {
    fn default() -> Self {
        Self::new()
    }
}

