//! Browser-free core of the poets page.
//!
//! Records, validation, the form state machine and scene descriptions of the
//! table and the form. No zoon or browser dependencies.

pub mod app;
pub mod field;
pub mod form;
pub mod harness;
pub mod layout;
pub mod record;
pub mod table;
pub mod validate;

pub use app::{App, Submission};
pub use field::TextField;
pub use form::{ErrorSlots, FormState};
pub use layout::{FormItem, form_layout};
pub use record::{Loves, PoetRecord, Roster};
pub use table::{Cell, Row, TableScene, render_table};
pub use validate::{FormInput, ValidationError, ValidationErrors, validate};
