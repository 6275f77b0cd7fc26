pub mod filters;
pub mod item;
pub mod tags;

pub use filters::{FilterDraft, FilterField, FilterState};
pub use item::{Category, Item};
pub use tags::{TagBadge, TagInfo, TagVocabulary};
