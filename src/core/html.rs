// src/core/html.rs
//
// The only place that touches `scraper`. Specs read pages through
// `Document` and get owned tables/rows/cells back, so every page shape
// assumption ("the table after this heading") is spelled out by name.

use scraper::{ElementRef, Html};

pub struct Document {
    html: Html,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Link {
    pub href: String,
    pub text: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Cell {
    /// Stripped text pieces joined with nothing in between.
    pub text: String,
    /// Stripped text pieces joined with single spaces.
    pub spaced: String,
    /// First `<a href>` inside the cell.
    pub link: Option<Link>,
    /// Text of the first `<b>` inside the cell.
    pub bold: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Row {
    pub cells: Vec<Cell>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Table {
    pub rows: Vec<Row>,
}

impl Table {
    /// Every `<td>` of the table, row by row.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.rows.iter().flat_map(|r| r.cells.iter())
    }
}

impl Document {
    pub fn parse(src: &str) -> Self {
        Self { html: Html::parse_document(src) }
    }

    fn elements(&self) -> impl Iterator<Item = ElementRef<'_>> {
        self.html.root_element().descendants().filter_map(ElementRef::wrap)
    }

    /// Is there a `<tag>` whose trimmed text is exactly `label`?
    pub fn has_heading(&self, tag: &str, label: &str) -> bool {
        self.elements().any(|el| is_labeled(el, tag, label))
    }

    pub fn table_by_id(&self, id: &str) -> Option<Table> {
        self.elements()
            .find(|el| el.value().name() == "table" && el.value().attr("id") == Some(id))
            .map(read_table)
    }

    /// First `<table>` after the first `<tag>` labeled `label`, in document order.
    pub fn table_after_heading(&self, tag: &str, label: &str) -> Option<Table> {
        let mut els = self.elements();
        els.by_ref().find(|el| is_labeled(*el, tag, label))?;
        els.find(|el| el.value().name() == "table").map(read_table)
    }

    /// Every `<tr>` in the document.
    pub fn rows(&self) -> Vec<Row> {
        named(self.html.root_element(), "tr").map(read_row).collect()
    }
}

/* ---------- helpers ---------- */

fn named<'a>(el: ElementRef<'a>, name: &'a str) -> impl Iterator<Item = ElementRef<'a>> + 'a {
    el.descendants()
        .skip(1)
        .filter_map(ElementRef::wrap)
        .filter(move |e| e.value().name() == name)
}

fn pieces(el: ElementRef<'_>) -> Vec<&str> {
    el.text().map(str::trim).filter(|t| !t.is_empty()).collect()
}

fn is_labeled(el: ElementRef<'_>, tag: &str, label: &str) -> bool {
    el.value().name() == tag && pieces(el).join(" ") == label
}

fn read_table(table: ElementRef<'_>) -> Table {
    Table { rows: named(table, "tr").map(read_row).collect() }
}

fn read_row(tr: ElementRef<'_>) -> Row {
    Row { cells: named(tr, "td").map(read_cell).collect() }
}

fn read_cell(td: ElementRef<'_>) -> Cell {
    let parts = pieces(td);
    let link = named(td, "a").find_map(|a| {
        a.value().attr("href").map(|href| Link { href: s!(href), text: pieces(a).join("") })
    });
    let bold = named(td, "b").next().map(|b| pieces(b).join(""));
    Cell { text: parts.join(""), spaced: parts.join(" "), link, bold }
}
