// Word dictionary - stores translation pairs and tracks recent additions

mod confirm;
mod recent;
mod store;

pub use confirm::DuplicateConfirmer;
pub use recent::{RecentList, DEFAULT_RECENT_LIMIT};
pub use store::{
    DictionaryError, DictionaryStore, InsertOutcome, LookupResult, DEFAULT_DICTIONARY_FILE,
};
