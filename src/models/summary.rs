use serde::{Deserialize, Serialize};

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct ReviewSummary {
    pub place_id: String,
    pub summary_text: String,
}

/// What the summarization stage produced for one place. A failed provider
/// call degrades to `Unavailable` instead of dropping the place.
#[derive(Clone, Debug, PartialEq)]
pub enum SummaryOutcome {
    Summarized(ReviewSummary),
    NoReviews,
    Unavailable,
}
