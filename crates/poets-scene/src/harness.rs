//! Drives an [`App`] the way a user drives the page, without a browser.
//! Provides event simulation and assertions.

use crate::app::{App, Submission};
use crate::field::TextField;
use crate::table::{Row, TableScene};

/// Test wrapper around a page whose form has been built.
pub struct PageDriver {
    app: App,
}

impl Default for PageDriver {
    fn default() -> Self {
        Self::new(App::default())
    }
}

impl PageDriver {
    pub fn new(mut app: App) -> Self {
        app.build_form();
        Self { app }
    }

    /// Type text into a field, replacing what was there.
    pub fn type_text(&mut self, field: TextField, text: &str) -> &mut Self {
        self.app.set_text(field, text);
        self
    }

    /// Fill name, era and first love in one go.
    pub fn fill(&mut self, name: &str, era: &str, first_love: &str) -> &mut Self {
        self.type_text(TextField::Name, name)
            .type_text(TextField::Era, era)
            .type_text(TextField::FirstLove, first_love)
    }

    pub fn set_toggle(&mut self, checked: bool) -> &mut Self {
        self.app.set_toggle(checked);
        self
    }

    pub fn submit(&mut self) -> Submission {
        self.app.submit()
    }

    pub fn app(&self) -> &App {
        &self.app
    }

    pub fn app_mut(&mut self) -> &mut App {
        &mut self.app
    }

    pub fn table(&self) -> &TableScene {
        self.app.table()
    }

    pub fn row(&self, index: usize) -> &Row {
        self.app
            .table()
            .rows
            .get(index)
            .unwrap_or_else(|| panic!("table has no row {index}"))
    }

    /// Assert that a field's error slot shows exactly `expected`.
    pub fn assert_error(&self, field: TextField, expected: Option<&str>) {
        let actual = self.app.errors().message(field);
        assert_eq!(
            actual, expected,
            "Slot '{}' expected {:?} but got {:?}",
            field.error_slot_id(),
            expected,
            actual
        );
        assert_eq!(
            self.app.errors().is_marked(field),
            expected.is_some(),
            "Slot '{}' error marker does not match its message",
            field.error_slot_id()
        );
    }

    /// Assert that only `field` shows an error, and that it shows its own message.
    pub fn assert_only_error(&self, field: TextField) {
        for other in TextField::ALL {
            let expected = (other == field).then(|| other.missing_message());
            self.assert_error(other, expected);
        }
    }

    pub fn assert_no_errors(&self) {
        assert!(
            self.app.errors().is_empty(),
            "expected no errors but got {:?}",
            self.app.errors()
        );
    }

    pub fn assert_len(&self, expected: usize) {
        assert_eq!(self.app.roster().len(), expected, "roster length");
        assert_eq!(self.app.table().rows.len(), expected, "table row count");
    }

    /// Assert that every input is empty and the second-love input is disabled.
    pub fn assert_form_cleared(&self) {
        let form = self.app.form();
        for field in TextField::ALL {
            assert_eq!(form.value(field), "", "field '{}' not cleared", field.input_id());
        }
        assert_eq!(form.toggle(), Some(false), "toggle still checked");
        assert!(form.second_love_disabled(), "second love still enabled");
    }
}
