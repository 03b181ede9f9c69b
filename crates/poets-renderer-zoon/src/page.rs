use std::cell::RefCell;
use std::rc::Rc;

use poets_scene::{App, Submission, TextField};
use zoon::*;

use crate::automation;
use crate::config::{LOG_DEBUG, PageConfig};
use crate::form::form_element;
use crate::table::table_panel;
use crate::view::PoetView;

/// The poets page. Cheap to clone; every clone shares one [`App`].
#[derive(Clone)]
pub struct PoetsPage {
    app: Rc<RefCell<App>>,
    view: PoetView,
}

impl PoetsPage {
    pub fn new(config: PageConfig) -> impl Element {
        Self::with_app(App::new(config.headers)).root()
    }

    pub fn with_app(app: App) -> Self {
        let view = PoetView::new(&app);
        Self {
            app: Rc::new(RefCell::new(app)),
            view,
        }
    }

    pub fn view(&self) -> &PoetView {
        &self.view
    }

    /// Runs `f` against the app, then pushes the new state into the view.
    /// The borrow ends before any signal fires.
    pub fn update<T>(&self, f: impl FnOnce(&mut App) -> T) -> T {
        let result = f(&mut self.app.borrow_mut());
        self.view.sync(&self.app.borrow());
        result
    }

    pub fn read<T>(&self, f: impl FnOnce(&App) -> T) -> T {
        f(&self.app.borrow())
    }

    pub fn text_input(&self, field: TextField, text: String) {
        self.update(|app| app.set_text(field, text));
    }

    pub fn toggle(&self, checked: bool) {
        if LOG_DEBUG {
            zoon::println!("[poets] second love toggle: {checked}");
        }
        self.update(|app| app.set_toggle(checked));
    }

    pub fn submit(&self) -> Submission {
        let submission = self.update(App::submit);
        if LOG_DEBUG {
            match &submission {
                Submission::Accepted { index } => {
                    zoon::println!("[poets] record {index} accepted");
                }
                Submission::Rejected(errors) => {
                    zoon::println!("[poets] submission rejected: {errors}");
                }
            }
        }
        submission
    }

    /// Builds the form and the table holder. Call once.
    pub fn root(&self) -> impl Element + use<> {
        let items = self.update(App::build_form);
        automation::install(self);
        Column::new()
            .s(Padding::new().x(20).y(20))
            .s(Gap::new().y(24))
            .item(form_element(self, &items))
            .item(table_panel(&self.view))
    }
}
