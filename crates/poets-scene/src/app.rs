//! Application state: the roster, the form and the rendered table.
//!
//! `App` owns every piece of mutable page state. Renderers hold it behind a
//! single handle and call into it from their event handlers.

use crate::field::{DEFAULT_HEADERS, TextField};
use crate::form::{ErrorSlots, FormState};
use crate::layout::{FormItem, form_layout};
use crate::record::{PoetRecord, Roster};
use crate::table::{TableScene, render_table};
use crate::validate::{ValidationErrors, validate};

/// Result of one submission attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Submission {
    /// The record was appended at `index`; the table was re-rendered and the
    /// form was cleared.
    Accepted { index: usize },
    /// Nothing was appended; the failed rules are shown in their slots.
    Rejected(ValidationErrors),
}

impl Submission {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted { .. })
    }
}

#[derive(Clone, Debug)]
pub struct App {
    headers: Vec<String>,
    roster: Roster,
    form: FormState,
    errors: ErrorSlots,
    table: TableScene,
    form_built: bool,
}

impl Default for App {
    fn default() -> Self {
        Self::new(DEFAULT_HEADERS)
    }
}

impl App {
    /// Creates the state and renders the initial, empty table. The form does
    /// not exist yet; call [`App::build_form`] once to create it.
    pub fn new<S: Into<String>>(headers: impl IntoIterator<Item = S>) -> Self {
        let mut app = Self {
            headers: headers.into_iter().map(Into::into).collect(),
            roster: Roster::new(),
            form: FormState::new(),
            errors: ErrorSlots::default(),
            table: TableScene::default(),
            form_built: false,
        };
        app.render_table();
        app
    }

    /// Creates the form: installs the unchecked toggle, applies it to the
    /// second-love input and returns the elements to build, in order.
    ///
    /// Later calls return the same layout and leave the state untouched.
    pub fn build_form(&mut self) -> Vec<FormItem> {
        if !self.form_built {
            self.form_built = true;
            self.form.install_toggle();
            self.form.sync_second_love();
        }
        form_layout()
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn errors(&self) -> &ErrorSlots {
        &self.errors
    }

    /// The table as of the last render.
    pub fn table(&self) -> &TableScene {
        &self.table
    }

    pub fn set_text(&mut self, field: TextField, value: impl Into<String>) {
        self.form.set_value(field, value);
    }

    /// Change handler of the toggle.
    pub fn set_toggle(&mut self, checked: bool) {
        self.form.set_toggle(checked);
    }

    /// Rebuilds the table from the roster, then re-applies the toggle to the
    /// second-love input.
    pub fn render_table(&mut self) {
        self.table = render_table(&self.headers, self.roster.as_slice());
        self.form.sync_second_love();
    }

    /// Validates the form and, when every rule passes, appends the record,
    /// re-renders the table and resets the form.
    pub fn submit(&mut self) -> Submission {
        self.errors.clear();
        match validate(&self.form.snapshot()) {
            Err(errors) => {
                self.errors.show(&errors);
                Submission::Rejected(errors)
            }
            Ok(record) => {
                let index = self.append(record);
                self.render_table();
                self.form.reset();
                self.form.sync_second_love();
                Submission::Accepted { index }
            }
        }
    }

    fn append(&mut self, record: PoetRecord) -> usize {
        self.roster.push(record)
    }
}
