// File: ./src/parser/address.rs
//! Works out which of the address sub-fields is the city.
//!
//! The address cell holds one to four parts: venue, street, second street
//! line, city ("IOOF Hall, Wever" is venue and city). The venue always goes
//! to the first address line; this module places the other three.

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressTail {
    pub address2: Option<String>,
    pub address3: Option<String>,
    pub city: Option<String>,
}

pub fn resolve_address(second: &str, third: &str, fourth: &str) -> AddressTail {
    if second.trim().is_empty() {
        // Everything was in one part.
        return AddressTail::default();
    }

    if !fourth.trim().is_empty() {
        AddressTail {
            address2: Some(second.to_string()),
            address3: Some(third.to_string()),
            city: Some(fourth.to_string()),
        }
    } else if !third.trim().is_empty() {
        AddressTail {
            address2: Some(second.to_string()),
            address3: None,
            city: Some(third.to_string()),
        }
    } else {
        AddressTail {
            city: Some(second.to_string()),
            ..AddressTail::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn venue_only() {
        assert_eq!(resolve_address("", "", ""), AddressTail::default());
        assert_eq!(resolve_address(" ", "x", "y"), AddressTail::default());
    }

    #[test]
    fn venue_and_city() {
        let a = resolve_address("IOOF Hall", "", "");
        assert_eq!(a.city.as_deref(), Some("IOOF Hall"));
        assert_eq!(a.address2, None);
        assert_eq!(a.address3, None);
    }

    #[test]
    fn venue_street_city() {
        let a = resolve_address("123 Main", "Wever", "");
        assert_eq!(a.address2.as_deref(), Some("123 Main"));
        assert_eq!(a.city.as_deref(), Some("Wever"));
        assert_eq!(a.address3, None);
    }

    #[test]
    fn all_four_parts() {
        let a = resolve_address("123 Main", "Suite 4", "Morrison IL");
        assert_eq!(a.address2.as_deref(), Some("123 Main"));
        assert_eq!(a.address3.as_deref(), Some("Suite 4"));
        assert_eq!(a.city.as_deref(), Some("Morrison IL"));
    }
}
