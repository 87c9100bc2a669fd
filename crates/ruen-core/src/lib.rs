pub mod error;
pub mod history;
pub mod input;
pub mod preprocess;
pub mod render;

pub use error::{HistoryError, ParseError};
pub use history::{FileLog, HistoryLog, HistoryStore, MemoryLog};
pub use render::{Rendered, render_markdown, render_rich};
