//! Fixed construction order of the form.

use serde::Serialize;

use crate::field::{SUBMIT_ID, SUBMIT_LABEL, TOGGLE_ID, TOGGLE_LABEL, TextField};

/// One element the form builder appends to the form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum FormItem {
    /// `<label for=...>` in front of an input.
    Label {
        id: &'static str,
        for_input: &'static str,
        text: &'static str,
    },
    LineBreak,
    TextInput(TextField),
    /// Wrapper `<div>` holding the field's error slot.
    ErrorSlot(TextField),
    /// The "had a second love" checkbox.
    Toggle,
    SubmitButton {
        id: &'static str,
        text: &'static str,
    },
}

fn text_field(field: TextField) -> [FormItem; 4] {
    [
        FormItem::Label {
            id: field.label_id(),
            for_input: field.input_id(),
            text: field.label(),
        },
        FormItem::LineBreak,
        FormItem::TextInput(field),
        FormItem::ErrorSlot(field),
    ]
}

/// Every form element in the order it is appended.
pub fn form_layout() -> Vec<FormItem> {
    let mut items = Vec::with_capacity(22);
    items.extend(text_field(TextField::Name));
    items.extend(text_field(TextField::Era));
    items.extend(text_field(TextField::FirstLove));
    items.push(FormItem::Label {
        id: "masodik-label",
        for_input: TOGGLE_ID,
        text: TOGGLE_LABEL,
    });
    items.push(FormItem::Toggle);
    items.push(FormItem::LineBreak);
    items.extend(text_field(TextField::SecondLove));
    items.push(FormItem::SubmitButton {
        id: SUBMIT_ID,
        text: SUBMIT_LABEL,
    });
    items
}
