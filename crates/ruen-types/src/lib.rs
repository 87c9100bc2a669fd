pub mod types;

pub use types::{AppEvent, ExamplePair, HistoryEntry, LookupResult, TranslationEntry};
