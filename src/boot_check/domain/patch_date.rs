use serde::{Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;

/// Expected number of `-` separated components in a patch level (`YYYY-MM-DD`)
const DATE_COMPONENTS: usize = 3;

/// PatchDate value object representing a parsed `YYYY-MM-DD` security patch level
///
/// Components are compared in field order (year, month, day), so the derived
/// ordering is the component-wise comparison with early exit. No calendar
/// validation is done: `2016-02-31` is a valid patch date as far as ordering goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PatchDate {
    year: u32,
    month: u32,
    day: u32,
}

impl PatchDate {
    pub fn new(year: u32, month: u32, day: u32) -> Self {
        Self { year, month, day }
    }

    /// Parses a `YYYY-MM-DD` string
    ///
    /// Returns `None` unless the input splits on `-` into exactly three
    /// non-empty components made only of ASCII digits.
    pub fn parse(value: &str) -> Option<Self> {
        let parts: Vec<&str> = value.split('-').collect();
        if parts.len() != DATE_COMPONENTS {
            return None;
        }

        let mut numbers = [0u32; DATE_COMPONENTS];
        for (slot, part) in numbers.iter_mut().zip(&parts) {
            *slot = parse_component(part)?;
        }

        Some(Self::new(numbers[0], numbers[1], numbers[2]))
    }

    pub fn year(&self) -> u32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }
}

fn parse_component(part: &str) -> Option<u32> {
    if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    part.parse().ok()
}

impl fmt::Display for PatchDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

impl Serialize for PatchDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Result of comparing a candidate patch level against a threshold
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateOrdering {
    /// Candidate is strictly earlier than the threshold
    Before,
    /// Candidate is equal to or later than the threshold
    AtOrAfter,
    /// Candidate (or threshold) is not a `YYYY-MM-DD` date
    Unparseable,
}

impl DateOrdering {
    /// Compares a parsed candidate against a threshold
    pub fn between(candidate: &PatchDate, threshold: &PatchDate) -> Self {
        match candidate.cmp(threshold) {
            Ordering::Less => DateOrdering::Before,
            Ordering::Equal | Ordering::Greater => DateOrdering::AtOrAfter,
        }
    }

    /// Whether the device counts as unpatched for this ordering.
    /// Unparseable patch levels are treated as before the threshold.
    pub fn is_before(self) -> bool {
        matches!(self, DateOrdering::Before | DateOrdering::Unparseable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_date() {
        let date = PatchDate::parse("2016-11-05").unwrap();
        assert_eq!(date.year(), 2016);
        assert_eq!(date.month(), 11);
        assert_eq!(date.day(), 5);
    }

    #[test]
    fn test_parse_does_not_validate_calendar() {
        assert_eq!(PatchDate::parse("2016-02-31"), Some(PatchDate::new(2016, 2, 31)));
    }

    #[test]
    fn test_parse_rejects_wrong_component_count() {
        assert!(PatchDate::parse("2016-11").is_none());
        assert!(PatchDate::parse("2016-11-05-01").is_none());
        assert!(PatchDate::parse("").is_none());
        assert!(PatchDate::parse("unknown").is_none());
    }

    #[test]
    fn test_parse_rejects_non_numeric_components() {
        assert!(PatchDate::parse("not-a-date").is_none());
        assert!(PatchDate::parse("2016-1x-05").is_none());
        assert!(PatchDate::parse("2016-11-").is_none());
        assert!(PatchDate::parse("2016-+1-05").is_none());
        assert!(PatchDate::parse(" 2016-11-05").is_none());
    }

    #[test]
    fn test_parse_rejects_overflowing_component() {
        assert!(PatchDate::parse("99999999999-11-05").is_none());
    }

    #[test]
    fn test_ordering_is_component_wise() {
        let threshold = PatchDate::new(2016, 11, 5);
        assert!(PatchDate::new(2015, 12, 31) < threshold);
        assert!(PatchDate::new(2016, 10, 30) < threshold);
        assert!(PatchDate::new(2016, 11, 4) < threshold);
        assert!(PatchDate::new(2016, 11, 6) > threshold);
        assert!(PatchDate::new(2017, 1, 1) > threshold);
    }

    #[test]
    fn test_display_pads_components() {
        assert_eq!(PatchDate::new(2017, 1, 5).to_string(), "2017-01-05");
    }

    #[test]
    fn test_serialize_as_string() {
        let json = serde_json::to_string(&PatchDate::new(2016, 11, 5)).unwrap();
        assert_eq!(json, "\"2016-11-05\"");
    }

    #[test]
    fn test_date_ordering_is_before() {
        assert!(DateOrdering::Before.is_before());
        assert!(DateOrdering::Unparseable.is_before());
        assert!(!DateOrdering::AtOrAfter.is_before());
    }
}
