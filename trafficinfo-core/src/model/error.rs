#[derive(thiserror::Error, Debug)]
pub enum TrafficInfoError {
    #[error("Failed to fetch directions: {0}")]
    FetchError(String),
    #[error("Directions provider responded with status {status}: {message}")]
    ProviderStatusError { status: String, message: String },
    #[error("Failed to deserialize directions response: {source}")]
    ParseError { source: serde_json::Error },
    #[error("Route {0} in directions response has no legs")]
    MissingLegError(usize),
    #[error("Failed to append route {row_key} after {rows_written} rows were written: {message}")]
    SinkError {
        row_key: String,
        rows_written: usize,
        message: String,
    },
    #[error("Table store failure: {0}")]
    StoreError(String),
    #[error("Invalid commute schedule: {0}")]
    InvalidScheduleError(String),
    #[error("Invalid time zone '{0}'")]
    InvalidTimeZoneError(String),
}
