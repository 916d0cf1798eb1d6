//! Helpers for authoring contiguous code ranges.

/// Inclusive numeric span rendered as bare code strings
/// (e.g., `numeric_span(196, 199)` -> `["196", "197", "198", "199"]`).
pub(crate) fn numeric_span(first: u32, last: u32) -> Vec<String> {
    (first..=last).map(|n| n.to_string()).collect()
}

/// Inclusive numeric span with a leading chapter letter, zero-padded to two
/// digits (e.g., `lettered_span('C', 30, 34)` -> `["C30", ..., "C34"]`).
pub(crate) fn lettered_span(letter: char, first: u32, last: u32) -> Vec<String> {
    (first..=last).map(|n| format!("{letter}{n:02}")).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_span_is_inclusive() {
        assert_eq!(numeric_span(196, 199), vec!["196", "197", "198", "199"]);
    }

    #[test]
    fn test_lettered_span_pads() {
        assert_eq!(lettered_span('C', 8, 10), vec!["C08", "C09", "C10"]);
    }
}
