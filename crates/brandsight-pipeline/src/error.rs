use thiserror::Error;

use brandsight_db::DbError;
use brandsight_structurer::StructurerError;

/// Failure that ended an ingestion run.
///
/// Both variants carry the address being processed when the run stopped,
/// which is the only partial-progress context a caller gets.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("structuring failed for {site_url}: {source}")]
    Structuring {
        site_url: String,
        #[source]
        source: StructurerError,
    },

    #[error("persistence failed for {site_url}: {source}")]
    Persistence {
        site_url: String,
        #[source]
        source: DbError,
    },
}

impl PipelineError {
    /// The address whose processing ended the run.
    #[must_use]
    pub fn site_url(&self) -> &str {
        match self {
            PipelineError::Structuring { site_url, .. }
            | PipelineError::Persistence { site_url, .. } => site_url,
        }
    }
}
