mod browse;
mod debounce;

pub use browse::{BrowseSession, BrowseView};
pub use debounce::Debouncer;
