use std::cmp::Ordering;
use std::fmt;

use regex::Regex;

use crate::domain::part::VersionPart;

/// Matches full-release tags: chains of numbers joined by dots.
const RELEASE_PATTERN: &str = r"^[0-9]+(\.[0-9]+)*$";

/// Additionally allows one trailing -A/-M/-RC pre-release qualifier.
const PRERELEASE_PATTERN: &str = r"^[0-9]+(\.[0-9]+)*(-(A|M|RC)[0-9]+)?$";

/// A version tag: the raw string plus its parsed components.
///
/// Parsing never fails; components that don't follow the numeric grammar
/// come out as [VersionPart::Malformed] and compare equal to everything.
/// Callers that need strict validation should pre-filter with
/// [VersionTag::is_well_formed].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionTag {
    raw: String,
    parts: Vec<VersionPart>,
}

impl VersionTag {
    /// Parse a raw tag string into its dot-separated components
    pub fn parse(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let parts = raw.split('.').map(VersionPart::parse).collect();
        VersionTag { raw, parts }
    }

    /// The original tag string
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// The parsed components
    pub fn parts(&self) -> &[VersionPart] {
        &self.parts
    }

    /// Check whether a tag string follows the release-version grammar.
    ///
    /// With `releases_only` set, pre-release tags like "7.0.0-M1" are
    /// rejected along with everything else that is not a plain dotted
    /// number chain.
    pub fn is_well_formed(tag: &str, releases_only: bool) -> bool {
        let pattern = if releases_only {
            RELEASE_PATTERN
        } else {
            PRERELEASE_PATTERN
        };
        Regex::new(pattern)
            .map(|re| re.is_match(tag))
            .unwrap_or(false)
    }

    /// Return true when this tag's version is at-or-before `other`'s.
    ///
    /// Walks `other`'s components left to right; the first unequal component
    /// decides. A tag that runs out of components while still undecided is
    /// before, and a tag that completes the walk is before when it has no
    /// more components than `other`. Note this makes the relation reflexive
    /// ("x before x" is true) rather than a strict less-than; callers that
    /// need strict ordering must handle equal tags themselves.
    pub fn is_before(&self, other: &VersionTag) -> bool {
        for (index, their_part) in other.parts.iter().enumerate() {
            let our_part = match self.parts.get(index) {
                Some(part) => part,
                None => return true,
            };
            match our_part.compare(their_part) {
                Ordering::Less => return true,
                Ordering::Greater => return false,
                Ordering::Equal => {}
            }
        }
        self.parts.len() <= other.parts.len()
    }
}

impl fmt::Display for VersionTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw)
    }
}
