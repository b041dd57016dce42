use trafficinfo_core::TrafficInfoError;

#[derive(thiserror::Error, Debug)]
pub enum TrafficInfoAppError {
    #[error(transparent)]
    PipelineError(#[from] TrafficInfoError),
    #[error("Failed to load configuration: {0}")]
    ConfigurationError(String),
    #[error("Invalid storage connection string: {0}")]
    ConnectionStringError(String),
    #[error("Failed to open table store: {0}")]
    TableStoreError(String),
    #[error("Failed to build http client: {0}")]
    HttpClientError(String),
}
