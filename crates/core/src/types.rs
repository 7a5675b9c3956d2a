/// Movie identifiers are positive 64-bit integers taken verbatim from the data file.
pub type MovieId = i64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
