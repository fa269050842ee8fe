use thiserror::Error;

use crate::repositories::google_places_repo::PlacesApiError;

/// Terminal pipeline failures. Per-place detail and summarization failures
/// never surface here; those degrade the single record instead.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("configuration error: {0}")]
    Configuration(String),

    #[error("location unavailable: {0}")]
    LocationUnavailable(String),

    #[error("nearby search failed: {0}")]
    Search(#[from] PlacesApiError),
}
