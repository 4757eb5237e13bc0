//! A single dot-separated component of a version tag.
//!
//! Components come in three shapes: a bare number ("7"), a number carrying a
//! pre-release qualifier ("0-M1", "0-RC2"), or something unparseable. Each
//! component is parsed once; comparison then works on the parsed value and
//! never fails — unparseable input compares equal to everything.

use std::cmp::Ordering;

/// One parsed component of a dotted version string
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VersionPart {
    /// Plain numeric component, e.g. "7"
    Release(u64),
    /// Numeric component with a pre-release qualifier, e.g. "0-M1"
    Qualified { base: u64, qualifier: Qualifier },
    /// Component whose numeric prefix did not parse
    Malformed,
}

/// Pre-release qualifier attached to a version component.
///
/// Only the leading letter takes part in comparison ("RC1" is compared under
/// the letter 'R'), followed by the trailing ordinal. A qualifier whose
/// ordinal is missing or has trailing junk keeps its letter but becomes
/// incomparable at the ordinal stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Qualifier {
    /// First character of the qualifier segment, None when the segment is empty
    pub letter: Option<char>,
    /// Number following the letter(s), None when absent or unparseable
    pub ordinal: Option<u64>,
}

impl Qualifier {
    /// Parse the text after the '-' separator (e.g. "M1", "RC12")
    pub fn parse(segment: &str) -> Self {
        let letter = segment.chars().next();
        let ordinal = segment
            .find(|c: char| c.is_ascii_digit())
            .and_then(|index| segment[index..].parse::<u64>().ok());
        Qualifier { letter, ordinal }
    }

    /// Compare two qualifiers.
    ///
    /// Qualifiers under different letters are not comparable and yield
    /// `Equal` — M/A/RC have no defined relative order here. Callers must
    /// treat such ties as "unknown", not "same release".
    pub fn compare(&self, other: &Qualifier) -> Ordering {
        match (self.letter, other.letter) {
            (Some(a), Some(b)) if a == b => match (self.ordinal, other.ordinal) {
                (Some(a), Some(b)) => a.cmp(&b),
                _ => Ordering::Equal,
            },
            _ => Ordering::Equal,
        }
    }
}

impl VersionPart {
    /// Parse one dot-separated component.
    ///
    /// The text before the first '-' must be a number; everything after it
    /// is the qualifier. A non-numeric prefix yields [VersionPart::Malformed]
    /// rather than an error.
    pub fn parse(part: &str) -> Self {
        let (base, qualifier) = match part.split_once('-') {
            Some((base, qualifier)) => (base, Some(qualifier)),
            None => (part, None),
        };

        let base = match base.parse::<u64>() {
            Ok(value) => value,
            Err(_) => return VersionPart::Malformed,
        };

        match qualifier {
            None => VersionPart::Release(base),
            Some(segment) => VersionPart::Qualified {
                base,
                qualifier: Qualifier::parse(segment),
            },
        }
    }

    /// Compare two parsed components.
    ///
    /// Numeric values decide first; on a tie, a bare number outranks the
    /// same number with a qualifier ("0" is later than "0-M1"). Malformed
    /// components compare equal to everything.
    pub fn compare(&self, other: &VersionPart) -> Ordering {
        match (self, other) {
            (VersionPart::Malformed, _) | (_, VersionPart::Malformed) => Ordering::Equal,
            (VersionPart::Release(a), VersionPart::Release(b)) => a.cmp(b),
            (VersionPart::Release(a), VersionPart::Qualified { base: b, .. }) => {
                a.cmp(b).then(Ordering::Greater)
            }
            (VersionPart::Qualified { base: a, .. }, VersionPart::Release(b)) => {
                a.cmp(b).then(Ordering::Less)
            }
            (
                VersionPart::Qualified {
                    base: a,
                    qualifier: qualifier_a,
                },
                VersionPart::Qualified {
                    base: b,
                    qualifier: qualifier_b,
                },
            ) => a.cmp(b).then_with(|| qualifier_a.compare(qualifier_b)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_release() {
        assert_eq!(VersionPart::parse("7"), VersionPart::Release(7));
        assert_eq!(VersionPart::parse("0"), VersionPart::Release(0));
        assert_eq!(VersionPart::parse("42"), VersionPart::Release(42));
    }

    #[test]
    fn test_parse_qualified() {
        let part = VersionPart::parse("0-M1");
        assert_eq!(
            part,
            VersionPart::Qualified {
                base: 0,
                qualifier: Qualifier {
                    letter: Some('M'),
                    ordinal: Some(1),
                },
            }
        );
    }

    #[test]
    fn test_parse_rc_uses_first_letter() {
        let part = VersionPart::parse("0-RC12");
        assert_eq!(
            part,
            VersionPart::Qualified {
                base: 0,
                qualifier: Qualifier {
                    letter: Some('R'),
                    ordinal: Some(12),
                },
            }
        );
    }

    #[test]
    fn test_parse_malformed() {
        assert_eq!(VersionPart::parse("x"), VersionPart::Malformed);
        assert_eq!(VersionPart::parse(""), VersionPart::Malformed);
        assert_eq!(VersionPart::parse("-M1"), VersionPart::Malformed);
    }

    #[test]
    fn test_parse_qualifier_without_digits() {
        let part = VersionPart::parse("0-M");
        assert_eq!(
            part,
            VersionPart::Qualified {
                base: 0,
                qualifier: Qualifier {
                    letter: Some('M'),
                    ordinal: None,
                },
            }
        );
    }

    #[test]
    fn test_compare_numeric() {
        assert_eq!(
            VersionPart::parse("1").compare(&VersionPart::parse("2")),
            Ordering::Less
        );
        assert_eq!(
            VersionPart::parse("10").compare(&VersionPart::parse("9")),
            Ordering::Greater
        );
        assert_eq!(
            VersionPart::parse("3").compare(&VersionPart::parse("3")),
            Ordering::Equal
        );
    }

    #[test]
    fn test_numeric_value_decides_before_qualifier() {
        // Qualifiers are irrelevant once the bare numbers differ
        assert_eq!(
            VersionPart::parse("1-M9").compare(&VersionPart::parse("2-M1")),
            Ordering::Less
        );
        assert_eq!(
            VersionPart::parse("2-A1").compare(&VersionPart::parse("1")),
            Ordering::Greater
        );
    }

    #[test]
    fn test_unqualified_is_later() {
        assert_eq!(
            VersionPart::parse("0").compare(&VersionPart::parse("0-M1")),
            Ordering::Greater
        );
        assert_eq!(
            VersionPart::parse("0-M1").compare(&VersionPart::parse("0")),
            Ordering::Less
        );
    }

    #[test]
    fn test_same_letter_compares_ordinals() {
        assert_eq!(
            VersionPart::parse("0-M1").compare(&VersionPart::parse("0-M2")),
            Ordering::Less
        );
        assert_eq!(
            VersionPart::parse("0-RC3").compare(&VersionPart::parse("0-RC1")),
            Ordering::Greater
        );
        assert_eq!(
            VersionPart::parse("0-A5").compare(&VersionPart::parse("0-A5")),
            Ordering::Equal
        );
    }

    #[test]
    fn test_cross_letter_qualifiers_tie() {
        // M vs A vs RC have no relative order; the tie is part of the contract
        assert_eq!(
            VersionPart::parse("0-M1").compare(&VersionPart::parse("0-A1")),
            Ordering::Equal
        );
        assert_eq!(
            VersionPart::parse("0-RC1").compare(&VersionPart::parse("0-M2")),
            Ordering::Equal
        );
    }

    #[test]
    fn test_malformed_compares_equal() {
        assert_eq!(
            VersionPart::parse("x").compare(&VersionPart::parse("7")),
            Ordering::Equal
        );
        assert_eq!(
            VersionPart::parse("7").compare(&VersionPart::parse("")),
            Ordering::Equal
        );
    }

    #[test]
    fn test_empty_qualifier_ties_against_other_letters() {
        assert_eq!(
            VersionPart::parse("0-").compare(&VersionPart::parse("0-M1")),
            Ordering::Equal
        );
        // The bare number still outranks the dangling qualifier
        assert_eq!(
            VersionPart::parse("0").compare(&VersionPart::parse("0-")),
            Ordering::Greater
        );
    }
}
