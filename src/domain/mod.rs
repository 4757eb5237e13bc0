//! Domain logic - pure version-tag rules independent of any tag source

pub mod frontier;
pub mod part;
pub mod tag;

pub use frontier::TagSet;
pub use part::{Qualifier, VersionPart};
pub use tag::VersionTag;
