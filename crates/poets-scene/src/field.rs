//! The single mapping table between typed fields and the page's element ids
//! and literal strings.
//!
//! Nothing outside this module spells an element id or a user-facing string.

use serde::{Deserialize, Serialize};

/// Id of the `<form>` element.
pub const FORM_ID: &str = "form";
/// Id of the `<table>` element.
pub const TABLE_ID: &str = "table";

/// Id of the "had a second love" checkbox.
pub const TOGGLE_ID: &str = "masodik";
/// Label of the "had a second love" checkbox.
pub const TOGGLE_LABEL: &str = "Volt-e másik szerelme?";

/// Id of the submit button.
pub const SUBMIT_ID: &str = "button";
/// Label of the submit button.
pub const SUBMIT_LABEL: &str = "Hozzáadás";

/// Class applied to an error slot that currently shows a message.
pub const ERROR_CLASS: &str = "error";

/// Header of the column holding the loves. Rendered spanning two columns.
pub const LOVE_HEADER: &str = "Szerelme";

/// Default table headers, in column order.
pub const DEFAULT_HEADERS: [&str; 3] = ["Költő neve", "Korszak", LOVE_HEADER];

/// A text input on the form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TextField {
    Name,
    Era,
    FirstLove,
    SecondLove,
}

impl TextField {
    /// All text fields in form order.
    pub const ALL: [TextField; 4] = [
        TextField::Name,
        TextField::Era,
        TextField::FirstLove,
        TextField::SecondLove,
    ];

    pub fn input_id(self) -> &'static str {
        match self {
            Self::Name => "kolto_nev",
            Self::Era => "korszak",
            Self::FirstLove => "szerelem1",
            Self::SecondLove => "szerelem2",
        }
    }

    pub fn label_id(self) -> &'static str {
        match self {
            Self::Name => "kolto_nev-label",
            Self::Era => "korszak-label",
            Self::FirstLove => "szerelem1-label",
            Self::SecondLove => "szerelem2-label",
        }
    }

    /// Id of the `<div>` wrapping the field's error slot.
    pub fn wrapper_id(self) -> &'static str {
        match self {
            Self::Name => "kolto-div-wrapper",
            Self::Era => "korszak-div-wrapper",
            Self::FirstLove => "szerelem-div-wrapper",
            Self::SecondLove => "szerelem2-div-wrapper",
        }
    }

    pub fn error_slot_id(self) -> &'static str {
        match self {
            Self::Name => "nev-error",
            Self::Era => "korszak-error",
            Self::FirstLove => "szerelem1-error",
            Self::SecondLove => "szerelem2-error",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Költő neve",
            Self::Era => "Korszak",
            Self::FirstLove => "Szerelme",
            Self::SecondLove => "Másik szerelme",
        }
    }

    /// Message shown in the error slot when the field is required but empty.
    pub fn missing_message(self) -> &'static str {
        match self {
            Self::Name => "Kérem adja meg a költő nevét!",
            Self::Era => "Kérem adja meg a korszakot!",
            Self::FirstLove => "Kérem adja meg az első szerelmet!",
            Self::SecondLove => "Kérem adja meg a másik szerelmet!",
        }
    }

    /// Looks a field up by its input element id.
    pub fn from_input_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.input_id() == id)
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// One value per text field, indexed by [`TextField`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PerField<T>([T; 4]);

impl<T> PerField<T> {
    pub fn get(&self, field: TextField) -> &T {
        &self.0[field.index()]
    }

    pub fn get_mut(&mut self, field: TextField) -> &mut T {
        &mut self.0[field.index()]
    }

    pub fn set(&mut self, field: TextField, value: T) {
        self.0[field.index()] = value;
    }

    pub fn iter(&self) -> impl Iterator<Item = (TextField, &T)> {
        TextField::ALL.into_iter().zip(self.0.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn element_ids_are_unique() {
        let mut ids = HashSet::new();
        for field in TextField::ALL {
            assert!(ids.insert(field.input_id()));
            assert!(ids.insert(field.label_id()));
            assert!(ids.insert(field.wrapper_id()));
            assert!(ids.insert(field.error_slot_id()));
        }
        for id in [FORM_ID, TABLE_ID, TOGGLE_ID, SUBMIT_ID] {
            assert!(ids.insert(id), "duplicate id {id}");
        }
    }

    #[test]
    fn lookup_by_input_id() {
        assert_eq!(TextField::from_input_id("szerelem2"), Some(TextField::SecondLove));
        assert_eq!(TextField::from_input_id("masodik"), None);
    }

    #[test]
    fn per_field_follows_form_order() {
        let mut values = PerField::<u8>::default();
        values.set(TextField::Era, 7);
        *values.get_mut(TextField::SecondLove) += 1;
        let collected: Vec<_> = values.iter().map(|(field, value)| (field, *value)).collect();
        assert_eq!(
            collected,
            vec![
                (TextField::Name, 0),
                (TextField::Era, 7),
                (TextField::FirstLove, 0),
                (TextField::SecondLove, 1),
            ]
        );
    }
}
