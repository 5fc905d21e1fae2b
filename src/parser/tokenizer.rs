// File: ./src/parser/tokenizer.rs
//! Reads the first spreadsheet cell off the front of a row.
//!
//! The sheet is exported as plain comma separated text. A cell whose text
//! contained commas comes out wrapped in double quotes, and each comma
//! separated piece inside the quotes is a logical sub-field of its own
//! (the address cell "IOOF Hall, Wever" holds a venue and a city).

/// The sub-fields of one spreadsheet cell and how much of the row it used.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    /// Never empty: an empty cell yields one empty string.
    pub fields: Vec<String>,
    /// Bytes of the row taken by this cell.
    ///
    /// For plain cells this includes the terminating comma (and may run one
    /// past the end of the row). For quoted cells it stops at the end of the
    /// piece holding the closing quote; the comma after it is left for the
    /// caller to skip.
    pub consumed: usize,
    pub quoted: bool,
}

impl Cell {
    fn empty(consumed: usize) -> Self {
        Self {
            fields: vec![String::new()],
            consumed,
            quoted: false,
        }
    }
}

/// Tokenizes the first cell of `rest`.
pub fn first_cell(rest: &str) -> Cell {
    if rest.is_empty() {
        return Cell::empty(0);
    }
    if rest.starts_with(',') {
        return Cell::empty(1);
    }

    let Some(quoted) = rest.strip_prefix('"') else {
        let value = rest.split(',').next().unwrap_or_default();
        return Cell {
            fields: vec![value.to_string()],
            consumed: value.len() + 1,
            quoted: false,
        };
    };

    let mut fields = Vec::new();
    // The opening quote is part of the first piece's original length.
    let mut consumed = 1;

    for (i, piece) in quoted.split(',').enumerate() {
        if i > 0 {
            consumed += 1;
        }
        consumed += piece.len();

        if let Some(close) = piece.find('"') {
            fields.push(piece[..close].to_string());
            break;
        }
        fields.push(piece.to_string());
    }

    Cell {
        fields,
        consumed,
        quoted: true,
    }
}
