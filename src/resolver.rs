//! String-level entry points for the version tag resolver.
//!
//! Thin wrappers over the parsed domain types for callers that work on raw
//! tag lists, such as the output of a "tags containing commit" query. None
//! of these functions fail: malformed input degrades to "incomparable"
//! instead (pre-filter with [is_well_formed_tag] when strictness matters).

use std::cmp::Ordering;

use crate::domain::{TagSet, VersionPart, VersionTag};

/// Check whether a tag string follows the release-version grammar
/// (`N(.N)*`, optionally with one trailing `-A/-M/-RC` qualifier).
/// With `releases_only` set, pre-release tags are rejected too.
pub fn is_well_formed_tag(tag: &str, releases_only: bool) -> bool {
    VersionTag::is_well_formed(tag, releases_only)
}

/// Compare two single dot-separated version components.
///
/// Returns a negative value when `a` precedes `b`, positive when it follows,
/// and 0 when they are equal or not comparable.
pub fn compare_version_part(a: &str, b: &str) -> i32 {
    match VersionPart::parse(a).compare(&VersionPart::parse(b)) {
        Ordering::Less => -1,
        Ordering::Equal => 0,
        Ordering::Greater => 1,
    }
}

/// Return true when `a`'s version is at-or-before `b`'s.
pub fn tag_before(a: &str, b: &str) -> bool {
    VersionTag::parse(a).is_before(&VersionTag::parse(b))
}

/// Reduce a tag list to its frontier: the tags not strictly dominated by
/// another tag in the list. Input order is preserved.
pub fn reduce_tags(tags: &[String]) -> Vec<String> {
    TagSet::from_strings(tags)
        .frontier()
        .iter()
        .map(|tag| tag.as_str().to_string())
        .collect()
}
