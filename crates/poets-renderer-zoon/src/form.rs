//! Builds the `<form>` from the core's form layout and wires its events
//! back into the page.

use poets_scene::field::{ERROR_CLASS, FORM_ID, TOGGLE_ID};
use poets_scene::{FormItem, TextField};
use zoon::wasm_bindgen::JsCast;
use zoon::*;

use crate::dom::{bind, element_by_id, listen};
use crate::page::PoetsPage;

const ERROR_COLOR: &str = "#c0392b";

type HtmlEl = RawHtmlEl<web_sys::HtmlElement>;

pub fn form_element(page: &PoetsPage, items: &[FormItem]) -> HtmlEl {
    let page = page.clone();
    RawHtmlEl::new("form")
        .attr("id", FORM_ID)
        .children(items.iter().map(|item| form_item(&page, *item)))
        .after_insert(move |form| {
            listen(&form, "submit", move |event| {
                event.prevent_default();
                page.submit();
            });
        })
}

fn form_item(page: &PoetsPage, item: FormItem) -> HtmlEl {
    match item {
        FormItem::Label {
            id,
            for_input,
            text,
        } => RawHtmlEl::new("label")
            .attr("id", id)
            .attr("for", for_input)
            .child(Text::new(text)),
        FormItem::LineBreak => RawHtmlEl::new("br"),
        FormItem::TextInput(field) => text_input(page, field),
        FormItem::ErrorSlot(field) => RawHtmlEl::new("div")
            .attr("id", field.wrapper_id())
            .child(error_slot(page, field)),
        FormItem::Toggle => toggle(page),
        FormItem::SubmitButton { id, text } => RawHtmlEl::new("button")
            .attr("id", id)
            .attr("type", "submit")
            .child(Text::new(text)),
    }
}

fn text_input(page: &PoetsPage, field: TextField) -> HtmlEl {
    let page = page.clone();
    RawHtmlEl::new("input")
        .attr("id", field.input_id())
        .attr("type", "text")
        .attr("autocomplete", "off")
        .after_insert(move |element| {
            let input = element.unchecked_into::<web_sys::HtmlInputElement>();
            bind(page.view().text(field).signal_cloned(), {
                let input = input.clone();
                move |text| {
                    if input.value() != text {
                        input.set_value(&text);
                    }
                }
            });
            if field == TextField::SecondLove {
                bind(page.view().second_love_disabled().signal(), {
                    let input = input.clone();
                    move |disabled| input.set_disabled(disabled)
                });
            }
            let target = input.clone();
            listen(&input, "input", move |_| page.text_input(field, target.value()));
        })
}

fn toggle(page: &PoetsPage) -> HtmlEl {
    let page = page.clone();
    RawHtmlEl::new("input")
        .attr("id", TOGGLE_ID)
        .attr("type", "checkbox")
        .after_insert(move |element| {
            let checkbox = element.unchecked_into::<web_sys::HtmlInputElement>();
            bind(page.view().has_second_love().signal(), {
                let checkbox = checkbox.clone();
                move |checked| checkbox.set_checked(checked)
            });
            let target = checkbox.clone();
            listen(&checkbox, "change", move |_| page.toggle(target.checked()));
        })
}

fn error_slot(page: &PoetsPage, field: TextField) -> HtmlEl {
    let slot = page.view().error_slot(field).clone();
    RawHtmlEl::new("div")
        .attr("id", field.error_slot_id())
        .style("color", ERROR_COLOR)
        .after_insert(move |element| {
            bind(slot.signal(), move |message| {
                element.set_text_content(message);
                element.set_class_name(if message.is_some() { ERROR_CLASS } else { "" });
            });
        })
}

/// Dispatches a submit to the form, as pressing the button does.
pub fn request_submit() {
    let Some(form) = element_by_id::<web_sys::HtmlFormElement>(FORM_ID) else {
        zoon::eprintln!("Cannot submit: no '#{FORM_ID}' form on the page");
        return;
    };
    if let Err(error) = form.request_submit() {
        zoon::eprintln!("Failed to submit the form: {error:?}");
    }
}
