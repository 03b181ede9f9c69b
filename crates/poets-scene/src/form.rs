//! Live state of the form: field values, the second-love toggle and the
//! error slots.

use crate::field::{PerField, TextField};
use crate::validate::{FormInput, ValidationErrors};

/// Current contents of the form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormState {
    values: PerField<String>,
    /// `None` until the form builder has created the checkbox.
    toggle: Option<bool>,
    second_love_disabled: bool,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self, field: TextField) -> &str {
        self.values.get(field)
    }

    /// Stores typed text. Typing into the disabled second-love input is
    /// ignored, as the browser would ignore it.
    pub fn set_value(&mut self, field: TextField, value: impl Into<String>) {
        if field == TextField::SecondLove && self.second_love_disabled {
            return;
        }
        self.values.set(field, value.into());
    }

    pub fn toggle(&self) -> Option<bool> {
        self.toggle
    }

    pub fn has_second_love(&self) -> bool {
        self.toggle.unwrap_or(false)
    }

    pub fn second_love_disabled(&self) -> bool {
        self.second_love_disabled
    }

    /// Puts the checkbox on the page, unchecked. No-op when it already exists.
    pub(crate) fn install_toggle(&mut self) -> bool {
        if self.toggle.is_some() {
            return false;
        }
        self.toggle = Some(false);
        true
    }

    /// Handles a change of the checkbox and re-evaluates the second-love input.
    pub fn set_toggle(&mut self, checked: bool) {
        if let Some(toggle) = self.toggle.as_mut() {
            *toggle = checked;
        }
        self.sync_second_love();
    }

    /// Enables the second-love input while the toggle is checked; otherwise
    /// disables it and clears its value. Does nothing while there is no toggle.
    pub fn sync_second_love(&mut self) {
        let Some(checked) = self.toggle else {
            return;
        };
        if checked {
            self.second_love_disabled = false;
        } else {
            self.second_love_disabled = true;
            self.values.get_mut(TextField::SecondLove).clear();
        }
    }

    /// Reads every value the validator looks at, including a second love
    /// that sits in a disabled input.
    pub fn snapshot(&self) -> FormInput {
        FormInput {
            name: self.value(TextField::Name).to_owned(),
            era: self.value(TextField::Era).to_owned(),
            first_love: self.value(TextField::FirstLove).to_owned(),
            second_love: self.value(TextField::SecondLove).to_owned(),
            has_second_love: self.has_second_love(),
        }
    }

    /// Empties every input and unchecks the toggle, like `HTMLFormElement.reset`.
    pub fn reset(&mut self) {
        self.values = PerField::default();
        if let Some(toggle) = self.toggle.as_mut() {
            *toggle = false;
        }
    }
}

/// The message slot next to each text field.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ErrorSlots(PerField<Option<&'static str>>);

impl ErrorSlots {
    pub fn message(&self, field: TextField) -> Option<&'static str> {
        *self.0.get(field)
    }

    /// Whether the slot carries the error marker.
    pub fn is_marked(&self, field: TextField) -> bool {
        self.message(field).is_some()
    }

    pub fn clear(&mut self) {
        self.0 = PerField::default();
    }

    pub fn show(&mut self, errors: &ValidationErrors) {
        for error in errors.iter() {
            self.0.set(error.field(), Some(error.message()));
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.iter().all(|(_, message)| message.is_none())
    }

    pub fn iter(&self) -> impl Iterator<Item = (TextField, Option<&'static str>)> + '_ {
        self.0.iter().map(|(field, message)| (field, *message))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn built() -> FormState {
        let mut form = FormState::new();
        form.install_toggle();
        form.sync_second_love();
        form
    }

    #[test]
    fn guard_without_toggle_leaves_second_love_alone() {
        let mut form = FormState::new();
        form.set_value(TextField::SecondLove, "Csinszka");
        form.sync_second_love();
        assert_eq!(form.value(TextField::SecondLove), "Csinszka");
        assert!(!form.second_love_disabled());
    }

    #[test]
    fn checking_enables_and_keeps_value() {
        let mut form = built();
        assert!(form.second_love_disabled());
        form.set_toggle(true);
        assert!(!form.second_love_disabled());
        form.set_value(TextField::SecondLove, "Léda");
        form.set_toggle(true);
        assert_eq!(form.value(TextField::SecondLove), "Léda");
    }

    #[test]
    fn unchecking_disables_and_clears() {
        let mut form = built();
        form.set_toggle(true);
        form.set_value(TextField::SecondLove, "Léda");
        form.set_toggle(false);
        assert!(form.second_love_disabled());
        assert_eq!(form.value(TextField::SecondLove), "");
    }

    #[test]
    fn disabled_second_love_ignores_typing() {
        let mut form = built();
        form.set_value(TextField::SecondLove, "ignored");
        assert_eq!(form.value(TextField::SecondLove), "");
    }

    #[test]
    fn install_toggle_runs_once() {
        let mut form = FormState::new();
        assert!(form.install_toggle());
        form.set_toggle(true);
        assert!(!form.install_toggle());
        assert_eq!(form.toggle(), Some(true));
    }

    #[test]
    fn reset_unchecks_and_empties() {
        let mut form = built();
        form.set_toggle(true);
        for field in TextField::ALL {
            form.set_value(field, "x");
        }
        form.reset();
        assert_eq!(form.toggle(), Some(false));
        assert!(TextField::ALL.iter().all(|field| form.value(*field).is_empty()));
    }

    #[test]
    fn error_slots_mark_only_failed_fields() {
        let errors = crate::validate::validate(&FormInput {
            era: "X".into(),
            first_love: "Y".into(),
            ..FormInput::default()
        })
        .unwrap_err();
        let mut slots = ErrorSlots::default();
        slots.show(&errors);
        assert_eq!(slots.message(TextField::Name), Some("Kérem adja meg a költő nevét!"));
        assert!(!slots.is_marked(TextField::Era));
        slots.clear();
        assert!(slots.is_empty());
    }
}
