//! Renders a [`TableScene`] as a `<table>` element.

use poets_scene::field::TABLE_ID;
use poets_scene::{Cell, Row, TableScene};
use zoon::*;

use crate::config::LOG_DEBUG;
use crate::view::PoetView;

/// Holder of the table. Each new scene replaces the whole `<table>`.
pub fn table_panel(view: &PoetView) -> impl Element + use<> {
    El::new().child_signal(view.table().signal_cloned().map(|scene| {
        if LOG_DEBUG {
            zoon::println!("[poets] rendering table with {} rows", scene.rows.len());
        }
        table_element(&scene)
    }))
}

pub fn table_element(scene: &TableScene) -> RawHtmlEl<web_sys::HtmlElement> {
    let header_row = RawHtmlEl::new("tr")
        .attr("id", "thead-tr")
        .children(scene.header.iter().map(|cell| cell_element("th", cell)));

    RawHtmlEl::new("table")
        .attr("id", TABLE_ID)
        .child(RawHtmlEl::new("thead").attr("id", "thead").child(header_row))
        .child(
            RawHtmlEl::new("tbody")
                .attr("id", "tbody")
                .children(scene.rows.iter().map(row_element)),
        )
}

fn row_element(row: &Row) -> RawHtmlEl<web_sys::HtmlElement> {
    RawHtmlEl::new("tr")
        .attr("id", &row.id)
        .children(row.cells.iter().map(|cell| cell_element("td", cell)))
}

fn cell_element(tag: &str, cell: &Cell) -> RawHtmlEl<web_sys::HtmlElement> {
    let mut element = RawHtmlEl::new(tag);
    if let Some(id) = &cell.id {
        element = element.attr("id", id);
    }
    if cell.col_span > 1 {
        element = element.attr("colspan", &cell.col_span.to_string());
    }
    element.child(Text::new(cell.text.clone()))
}
