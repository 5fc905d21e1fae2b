// File: ./src/parser/talent.rs
//! Caller and cuer names from the talent column.

/// Caller and cuer from the combined "caller/cuer" cell.
///
/// Only the first slash separates; anything after it belongs to the cuer.
pub fn split_talent(cell: &str) -> (String, String) {
    match cell.split_once('/') {
        Some((caller, cuer)) => (caller.to_string(), cuer.to_string()),
        None => (cell.to_string(), String::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn caller_and_cuer() {
        assert_eq!(
            split_talent("Jane Doe/John Roe"),
            ("Jane Doe".to_string(), "John Roe".to_string())
        );
    }

    #[test]
    fn caller_only() {
        assert_eq!(
            split_talent("Jane Doe"),
            ("Jane Doe".to_string(), String::new())
        );
    }

    #[test]
    fn extra_slashes_stay_with_cuer() {
        assert_eq!(split_talent("A/B/C"), ("A".to_string(), "B/C".to_string()));
    }
}
