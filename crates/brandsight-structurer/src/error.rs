use thiserror::Error;

/// Failure reaching or interpreting the structuring service.
///
/// Unlike fetcher failures, none of these are absorbed: any variant aborts
/// ingestion for the address being processed.
#[derive(Debug, Error)]
pub enum StructurerError {
    #[error("transport error reaching structuring service: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("structuring service returned HTTP status {status}")]
    UnexpectedStatus { status: u16 },

    #[error("structuring service response is not a valid completion envelope: {source}")]
    InvalidEnvelope {
        #[source]
        source: serde_json::Error,
    },

    #[error("structuring service envelope has no message content")]
    MissingContent,

    #[error("structuring service content is not a valid structured record: {source}")]
    InvalidContent {
        #[source]
        source: serde_json::Error,
    },
}
