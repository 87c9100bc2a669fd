/// Failure to turn an upstream response into a `LookupResult`
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("No embedded dictionary data in page")]
    NoEmbeddedData,

    #[error("Malformed JSON: {0}")]
    MalformedJson(#[from] serde_json::Error),

    #[error("No dictionary entry in response")]
    NoEntry,
}

/// Failure reading or writing the history log
#[derive(Debug, thiserror::Error)]
pub enum HistoryError {
    #[error("History IO error: {0}")]
    Io(#[from] std::io::Error),
}
