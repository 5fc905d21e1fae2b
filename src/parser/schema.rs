// File: ./src/parser/schema.rs
//! The fixed column layout of the schedule spreadsheet.
//!
//! Each column must yield a set number of logical fields no matter how many
//! the cell really held. Reordering columns in the sheet means editing
//! `COLUMNS`, nothing else.
use crate::parser::tokenizer::first_cell;

/// What a spreadsheet column holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    Federation,
    ClubName,
    Levels,
    /// Venue, street, second street line, city.
    Address,
    /// "caller/cuer"
    Talent,
    /// "hh:mm - hh:mm comment"
    TimeAndComment,
    ClubLogo,
    /// Latitude, longitude.
    Geo,
    Directions,
    CallerPhoto,
    CuerPhoto,
    Contact,
    Cost,
}

#[derive(Debug, Clone, Copy)]
pub struct ColumnSpec {
    pub column: Column,
    pub fields: usize,
}

const fn col(column: Column, fields: usize) -> ColumnSpec {
    ColumnSpec { column, fields }
}

/// Columns A..M of the sheet, in order.
pub const COLUMNS: [ColumnSpec; 13] = [
    col(Column::Federation, 1),
    col(Column::ClubName, 1),
    col(Column::Levels, 1),
    col(Column::Address, 4),
    col(Column::Talent, 1),
    col(Column::TimeAndComment, 1),
    col(Column::ClubLogo, 1),
    col(Column::Geo, 2),
    col(Column::Directions, 1),
    col(Column::CallerPhoto, 1),
    col(Column::CuerPhoto, 1),
    col(Column::Contact, 1),
    col(Column::Cost, 1),
];

/// Number of logical fields every row expands to.
pub const FIELD_COUNT: usize = {
    let mut total = 0;
    let mut i = 0;
    while i < COLUMNS.len() {
        total += COLUMNS[i].fields;
        i += 1;
    }
    total
};

/// Index of the first logical field produced by `column`.
pub fn field_offset(column: Column) -> usize {
    COLUMNS
        .iter()
        .take_while(|spec| spec.column != column)
        .map(|spec| spec.fields)
        .sum()
}

/// A row expanded to `FIELD_COUNT` logical fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowFields(Vec<String>);

impl RowFields {
    /// First field of `column`.
    pub fn get(&self, column: Column) -> &str {
        self.nth(column, 0)
    }

    /// `n`-th field of `column`, or "" past the column's width.
    pub fn nth(&self, column: Column, n: usize) -> &str {
        let width = COLUMNS
            .iter()
            .find(|spec| spec.column == column)
            .map_or(0, |spec| spec.fields);
        if n >= width {
            return "";
        }
        self.0
            .get(field_offset(column) + n)
            .map_or("", String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Expands `row` into exactly `FIELD_COUNT` fields.
///
/// Missing cells and short cells are padded with empty strings; surplus
/// sub-fields are dropped. Never fails.
pub fn normalize_row(row: &str) -> RowFields {
    let mut fields = Vec::with_capacity(FIELD_COUNT);
    let mut ix = 0;

    for spec in &COLUMNS {
        let cell = if ix < row.len() {
            row.get(ix..).map(first_cell)
        } else {
            None
        };

        let mut produced = cell.as_ref().map_or(&[][..], |c| c.fields.as_slice()).iter();
        for _ in 0..spec.fields {
            fields.push(produced.next().cloned().unwrap_or_default());
        }

        if let Some(cell) = cell {
            ix += cell.consumed;
            if cell.quoted && row.as_bytes().get(ix) == Some(&b',') {
                ix += 1;
            }
        }
    }

    debug_assert_eq!(fields.len(), FIELD_COUNT);
    RowFields(fields)
}
