use crate::domain::tag::VersionTag;

/// The tags attached to one query result, e.g. every tag containing a
/// given commit.
///
/// Holds tags in the order they arrived; reduction preserves that order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TagSet {
    tags: Vec<VersionTag>,
}

impl TagSet {
    /// Build a set from already-parsed tags
    pub fn new(tags: Vec<VersionTag>) -> Self {
        TagSet { tags }
    }

    /// Parse raw strings into a set
    pub fn from_strings<S: AsRef<str>>(tags: &[S]) -> Self {
        TagSet {
            tags: tags
                .iter()
                .map(|tag| VersionTag::parse(tag.as_ref()))
                .collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    /// All tags in arrival order
    pub fn tags(&self) -> &[VersionTag] {
        &self.tags
    }

    /// Reduce the set to its frontier: the tags not strictly dominated by
    /// any other tag in the set.
    ///
    /// A tag is dropped when some other tag is after it and not also before
    /// it. Ties never exclude: identical tags are mutually at-or-before, and
    /// tags under different qualifier letters are incomparable, so both
    /// sides survive. The frontier is therefore a set of candidates, not
    /// provably unique latest tags. O(n²), which is fine for the tag counts
    /// a single commit accrues.
    pub fn frontier(&self) -> Vec<VersionTag> {
        self.tags
            .iter()
            .filter(|tag| {
                !self
                    .tags
                    .iter()
                    .any(|other| tag.is_before(other) && !other.is_before(tag))
            })
            .cloned()
            .collect()
    }
}
