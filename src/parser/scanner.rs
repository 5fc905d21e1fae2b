// File: ./src/parser/scanner.rs
//! Digit scanning shared by the date, time and day-of-month parsers.

/// Result of a scan: the value (if any) and where scanning stopped.
///
/// `next` is a byte offset into the scanned text. It may equal the text
/// length but never exceeds it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scan<T> {
    pub value: Option<T>,
    pub next: usize,
}

impl<T> Scan<T> {
    pub fn found(value: T, next: usize) -> Self {
        Self {
            value: Some(value),
            next,
        }
    }

    pub fn missing(next: usize) -> Self {
        Self { value: None, next }
    }

    pub fn is_found(&self) -> bool {
        self.value.is_some()
    }
}

/// Finds the first run of ASCII digits at or after `start` and reads it as
/// a decimal number.
///
/// On success `next` points just past the last digit. When no digit exists,
/// `value` is `None` and `next` is the text length.
pub fn find_positive_integer(text: &str, start: usize) -> Scan<u32> {
    let bytes = text.as_bytes();
    let mut ix = start.min(bytes.len());

    while ix < bytes.len() && !bytes[ix].is_ascii_digit() {
        ix += 1;
    }

    let mut accumulator: u32 = 0;
    let mut found = false;
    while ix < bytes.len() && bytes[ix].is_ascii_digit() {
        accumulator = accumulator
            .saturating_mul(10)
            .saturating_add(u32::from(bytes[ix] - b'0'));
        found = true;
        ix += 1;
    }

    if found {
        Scan::found(accumulator, ix)
    } else {
        Scan::missing(ix)
    }
}
