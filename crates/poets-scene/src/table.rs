//! Renderer-independent description of the poets table.

use serde::{Deserialize, Serialize};

use crate::field::LOVE_HEADER;
use crate::record::{Loves, PoetRecord};

/// One `<th>` or `<td>`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub id: Option<String>,
    pub text: String,
    pub col_span: u32,
}

impl Cell {
    fn plain(text: &str) -> Self {
        Self {
            id: None,
            text: text.to_owned(),
            col_span: 1,
        }
    }
}

/// One body `<tr>`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Row {
    pub id: String,
    pub cells: Vec<Cell>,
}

/// Header row plus one row per record.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableScene {
    pub header: Vec<Cell>,
    pub rows: Vec<Row>,
}

impl TableScene {
    /// Number of grid columns the header covers.
    pub fn column_count(&self) -> u32 {
        self.header.iter().map(|cell| cell.col_span).sum()
    }
}

/// Builds the whole table from scratch.
pub fn render_table<S: AsRef<str>>(headers: &[S], records: &[PoetRecord]) -> TableScene {
    let header = headers
        .iter()
        .enumerate()
        .map(|(i, header)| {
            let header = header.as_ref();
            Cell {
                id: Some(format!("thead-th-{i}")),
                text: header.to_owned(),
                col_span: if header == LOVE_HEADER { 2 } else { 1 },
            }
        })
        .collect();

    let rows = records
        .iter()
        .enumerate()
        .map(|(i, record)| {
            let mut cells = vec![Cell::plain(record.name()), Cell::plain(record.era())];
            match record.loves() {
                Loves::WithTwoLoves { first, second } => {
                    cells.push(Cell::plain(first));
                    cells.push(Cell::plain(second));
                }
                Loves::WithOneLove(love) => cells.push(Cell {
                    id: Some(format!("{i}-szerelem1")),
                    text: love.clone(),
                    col_span: 2,
                }),
            }
            Row {
                id: format!("thead-tr-{i}"),
                cells,
            }
        })
        .collect();

    TableScene { header, rows }
}
