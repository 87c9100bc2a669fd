use std::fmt;

use chrono::{DateTime, Local};

/// Status line messages
#[derive(Debug, Clone)]
pub enum Status<'a> {
    Ready,
    LookingUp(&'a str),
    Found(DateTime<Local>),
    NotFound(&'a str),
    Copied(DateTime<Local>),
    HistoryCopied(DateTime<Local>),
    HistoryDisplayed(&'a str),
    ParseError,
    FetchFailed(&'a str),
}

impl fmt::Display for Status<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Ready => write!(
                f,
                "Ready - Type using English keyboard, characters convert to Russian automatically"
            ),
            Status::LookingUp(word) => write!(f, "Looking up Russian word: {word}"),
            Status::Found(at) => write!(f, "Found - {}", at.format("%H:%M:%S")),
            Status::NotFound(word) => write!(f, "No translations found for {word}"),
            Status::Copied(at) => {
                write!(f, "Markdown copied to clipboard - {}", at.format("%H:%M:%S"))
            }
            Status::HistoryCopied(at) => write!(
                f,
                "History markdown copied to clipboard - {}",
                at.format("%H:%M:%S")
            ),
            Status::HistoryDisplayed(word) => write!(f, "History displayed - {word}"),
            Status::ParseError => write!(f, "Parse error"),
            Status::FetchFailed(reason) => {
                write!(f, "Word not found or network error: {reason}")
            }
        }
    }
}
