//! Typed view layer: one `Mutable` per piece of page state the DOM shows.
//!
//! The view never decides anything. [`PoetView::sync`] copies the current
//! [`App`] state in, and the rendered elements follow the signals.

use std::rc::Rc;

use poets_scene::{App, TableScene, TextField};
use zoon::*;

#[derive(Clone)]
pub struct PoetView {
    name: Mutable<String>,
    era: Mutable<String>,
    first_love: Mutable<String>,
    second_love: Mutable<String>,
    has_second_love: Mutable<bool>,
    second_love_disabled: Mutable<bool>,
    name_error: Mutable<Option<&'static str>>,
    era_error: Mutable<Option<&'static str>>,
    first_love_error: Mutable<Option<&'static str>>,
    second_love_error: Mutable<Option<&'static str>>,
    table: Mutable<Rc<TableScene>>,
}

impl PoetView {
    pub fn new(app: &App) -> Self {
        let view = Self {
            name: Mutable::new(String::new()),
            era: Mutable::new(String::new()),
            first_love: Mutable::new(String::new()),
            second_love: Mutable::new(String::new()),
            has_second_love: Mutable::new(false),
            second_love_disabled: Mutable::new(false),
            name_error: Mutable::new(None),
            era_error: Mutable::new(None),
            first_love_error: Mutable::new(None),
            second_love_error: Mutable::new(None),
            table: Mutable::new(Rc::new(app.table().clone())),
        };
        view.sync(app);
        view
    }

    /// Text shown in a field's input.
    pub fn text(&self, field: TextField) -> &Mutable<String> {
        match field {
            TextField::Name => &self.name,
            TextField::Era => &self.era,
            TextField::FirstLove => &self.first_love,
            TextField::SecondLove => &self.second_love,
        }
    }

    /// Message shown in a field's error slot.
    pub fn error_slot(&self, field: TextField) -> &Mutable<Option<&'static str>> {
        match field {
            TextField::Name => &self.name_error,
            TextField::Era => &self.era_error,
            TextField::FirstLove => &self.first_love_error,
            TextField::SecondLove => &self.second_love_error,
        }
    }

    pub fn has_second_love(&self) -> &Mutable<bool> {
        &self.has_second_love
    }

    pub fn second_love_disabled(&self) -> &Mutable<bool> {
        &self.second_love_disabled
    }

    pub fn table(&self) -> &Mutable<Rc<TableScene>> {
        &self.table
    }

    /// Copies `app` into the mutables. Unchanged values do not re-fire.
    pub fn sync(&self, app: &App) {
        let form = app.form();
        for field in TextField::ALL {
            let text = self.text(field);
            if *text.lock_ref() != form.value(field) {
                text.set(form.value(field).to_owned());
            }
            self.error_slot(field).set_neq(app.errors().message(field));
        }
        self.has_second_love.set_neq(form.has_second_love());
        self.second_love_disabled.set_neq(form.second_love_disabled());

        let table_changed = **self.table.lock_ref() != *app.table();
        if table_changed {
            self.table.set(Rc::new(app.table().clone()));
        }
    }
}
