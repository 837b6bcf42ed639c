//! Release year as stored in the catalog.
//!
//! The catalog keeps `release_year` either as a JSON integer or as a string,
//! depending on who wrote the record. [`ReleaseYear`] preserves whichever
//! form it was given so a record serializes back exactly as stored, while
//! filtering always goes through the text form.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A release year in its stored representation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ReleaseYear {
    /// Stored as a JSON integer.
    Number(i64),
    /// Stored as a JSON string.
    Text(String),
}

impl ReleaseYear {
    /// Returns the text form used for equality filtering.
    pub fn as_text(&self) -> String {
        match self {
            ReleaseYear::Number(n) => n.to_string(),
            ReleaseYear::Text(s) => s.clone(),
        }
    }

    /// Returns the numeric value if the year is, or parses as, an integer.
    pub fn as_number(&self) -> Option<i64> {
        match self {
            ReleaseYear::Number(n) => Some(*n),
            ReleaseYear::Text(s) => s.trim().parse().ok(),
        }
    }

    /// True if the text form equals `year` exactly.
    pub fn matches(&self, year: &str) -> bool {
        match self {
            ReleaseYear::Text(s) => s == year,
            ReleaseYear::Number(n) => n.to_string() == year,
        }
    }

    /// Compares by year, ignoring whether it was stored as a number or text.
    ///
    /// Numeric years order by value and come before non-numeric ones.
    /// Non-numeric years order lexicographically. Ties fall back to the text
    /// form.
    pub fn cmp_value(&self, other: &Self) -> Ordering {
        let by_value = match (self.as_number(), other.as_number()) {
            (Some(a), Some(b)) => a.cmp(&b),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        };
        by_value.then_with(|| self.as_text().cmp(&other.as_text()))
    }

    /// True if the text form is empty or only whitespace.
    pub fn is_blank(&self) -> bool {
        match self {
            ReleaseYear::Number(_) => false,
            ReleaseYear::Text(s) => s.trim().is_empty(),
        }
    }
}

impl fmt::Display for ReleaseYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReleaseYear::Number(n) => write!(f, "{}", n),
            ReleaseYear::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for ReleaseYear {
    fn from(n: i64) -> Self {
        ReleaseYear::Number(n)
    }
}

impl From<&str> for ReleaseYear {
    fn from(s: &str) -> Self {
        ReleaseYear::Text(s.to_string())
    }
}

impl From<String> for ReleaseYear {
    fn from(s: String) -> Self {
        ReleaseYear::Text(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_string_and_integer_forms() {
        let text: ReleaseYear = serde_json::from_str("\"2008\"").unwrap();
        assert_eq!(text, ReleaseYear::Text("2008".into()));

        let number: ReleaseYear = serde_json::from_str("2016").unwrap();
        assert_eq!(number, ReleaseYear::Number(2016));
    }

    #[test]
    fn serializes_in_stored_form() {
        assert_eq!(
            serde_json::to_string(&ReleaseYear::from("2013")).unwrap(),
            "\"2013\""
        );
        assert_eq!(
            serde_json::to_string(&ReleaseYear::from(2013)).unwrap(),
            "2013"
        );
    }

    #[test]
    fn matches_is_string_equality() {
        assert!(ReleaseYear::from("2008").matches("2008"));
        assert!(ReleaseYear::from(2008).matches("2008"));
        assert!(!ReleaseYear::from("2008").matches(" 2008"));
        assert!(!ReleaseYear::from("2008").matches("02008"));
    }

    fn cmp(a: impl Into<ReleaseYear>, b: impl Into<ReleaseYear>) -> Ordering {
        a.into().cmp_value(&b.into())
    }

    #[test]
    fn numeric_years_order_by_value() {
        assert_eq!(cmp("999", "2003"), Ordering::Less);
        assert_eq!(cmp(2003i64, "2006"), Ordering::Less);
        assert_eq!(cmp("2011", "2011"), Ordering::Equal);
    }

    #[test]
    fn non_numeric_years_sort_last() {
        assert_eq!(cmp("2022", "unknown"), Ordering::Less);
        assert_eq!(cmp("tba", "soon"), Ordering::Greater);
    }

    #[test]
    fn representation_does_not_affect_order() {
        assert_eq!(cmp(2013i64, "2013"), Ordering::Equal);
        assert_eq!(cmp("2013", 2013i64), Ordering::Equal);
    }

    #[test]
    fn blank_detection() {
        assert!(ReleaseYear::from("  ").is_blank());
        assert!(!ReleaseYear::from(0).is_blank());
    }
}
