//! Input validation logic
//!
//! Re-evaluates per-field errors on every edit so the form can show them
//! inline; the aggregate gate at submit time uses the same checks.

use chrono::Utc;

use super::{App, FocusField};
use crate::form::validation::{
    custom_id_error, expiry_date_error, link_error, max_uses_error,
};
use crate::form::{FormFields, validation};

impl App {
    /// A borrowed snapshot of the form for the pure validation/build layer.
    pub fn form_fields(&self) -> FormFields<'_> {
        FormFields {
            link: &self.link_input,
            advanced: self.advanced_mode,
            max_uses: &self.max_uses_input,
            custom_id: &self.custom_id_input,
            date_mode: self.date_mode,
            expiry_date: &self.expiry_date_input,
            duration: self.duration.text,
        }
    }

    /// Validate current input and update the inline error map.
    pub fn validate_inputs(&mut self) {
        self.validation_errors.clear();

        // An untouched empty link shows no error yet; submission still
        // refuses it through the aggregate gate.
        if !self.link_input.is_empty()
            && let Some(e) = link_error(&self.link_input, &self.limits)
        {
            self.validation_errors
                .insert(FocusField::Link.field_name(), e);
        }

        if self.advanced_mode {
            if let Some(e) = max_uses_error(&self.max_uses_input) {
                self.validation_errors
                    .insert(FocusField::MaxUses.field_name(), e);
            }
            if let Some(e) = custom_id_error(&self.custom_id_input, &self.limits) {
                self.validation_errors
                    .insert(FocusField::CustomId.field_name(), e);
            }
            if self.date_mode
                && let Some(e) = expiry_date_error(&self.expiry_date_input, Utc::now())
            {
                self.validation_errors
                    .insert(FocusField::ExpiryDate.field_name(), e);
            }
        }
    }

    /// Whether the submit gate would pass right now.
    pub fn gate_passes(&self) -> bool {
        validation::invalid_groups(&self.form_fields(), &self.limits, Utc::now()).is_empty()
    }

    pub fn field_error(&self, field: FocusField) -> Option<&str> {
        self.validation_errors
            .get(field.field_name())
            .map(String::as_str)
    }
}
