use std::sync::Arc;

use futures::StreamExt;
use tracing::{info, warn};

use crate::models::criteria::FilterCriteria;
use crate::models::display::DisplayRecord;
use crate::models::location::{Location, LocationInput};
use crate::models::place::{PlaceDetail, PlaceSummary};
use crate::models::summary::{ReviewSummary, SummaryOutcome};
use crate::repositories::google_places_repo::GooglePlacesRepo;
use crate::repositories::review_summary_repo::ReviewSummaryRepo;
use crate::services::error::PipelineError;
use crate::services::{assembler, filter};

pub const MIN_RADIUS_METERS: u32 = 500;
pub const MAX_RADIUS_METERS: u32 = 10_000;

/// Detail lookups are independent and run at a fixed bound; `buffered`
/// preserves the provider's ranking order.
const DETAIL_LOOKUP_CONCURRENCY: usize = 4;

pub struct SearchRequest {
    pub location: LocationInput,
    pub radius_meters: u32,
    pub preference: Option<String>,
    pub criteria: FilterCriteria,
    pub limit: Option<usize>,
}

pub struct RestaurantSearchPipeline {
    places_repo: Arc<GooglePlacesRepo>,
    summary_repo: Arc<ReviewSummaryRepo>,
}

impl RestaurantSearchPipeline {
    pub fn new(places_repo: Arc<GooglePlacesRepo>, summary_repo: Arc<ReviewSummaryRepo>) -> Self {
        Self {
            places_repo,
            summary_repo,
        }
    }

    /// One full pass: resolve the location, search nearby, enrich, filter,
    /// summarize, assemble. Detail and summarization failures degrade the
    /// affected record; everything else aborts the run.
    pub async fn find_restaurants(
        &self,
        request: SearchRequest,
    ) -> Result<Vec<DisplayRecord>, PipelineError> {
        self.check_configuration()?;

        let location = self.resolve_location(&request.location).await?;
        let keyword = search_keyword(request.preference.as_deref());

        let summaries = self
            .places_repo
            .nearby_search(location, request.radius_meters, &keyword)
            .await?;
        if summaries.is_empty() {
            info!("Nearby search found nothing within {}m", request.radius_meters);
            return Ok(Vec::new());
        }

        let details = self.enrich_places(summaries).await;
        let mut filtered = filter::apply(details, &request.criteria);
        if let Some(limit) = request.limit {
            filtered.truncate(limit);
        }

        let mut records = Vec::with_capacity(filtered.len());
        for detail in filtered {
            let photo_url = detail
                .photos
                .first()
                .map(|photo| self.places_repo.photo_url(&photo.photo_reference));
            let summary = self.summarize_place(&detail).await;
            records.push(assembler::assemble(detail, photo_url, summary));
        }

        info!("Returning {} display records", records.len());
        Ok(records)
    }

    fn check_configuration(&self) -> Result<(), PipelineError> {
        if !self.places_repo.has_api_key() {
            return Err(PipelineError::Configuration(
                "Places API key is not set".to_string(),
            ));
        }
        if !self.summary_repo.has_api_key() {
            return Err(PipelineError::Configuration(
                "Summarization API key is not set".to_string(),
            ));
        }
        Ok(())
    }

    async fn resolve_location(&self, input: &LocationInput) -> Result<Location, PipelineError> {
        if let Some(coords) = input.coords {
            return Ok(coords);
        }

        if let Some(address) = input.address.as_deref() {
            return match self.places_repo.geocode_address(address).await {
                Ok(Some(location)) => Ok(location),
                Ok(None) => Err(PipelineError::LocationUnavailable(format!(
                    "no match found for address: {}",
                    address
                ))),
                Err(e) => Err(PipelineError::LocationUnavailable(e.to_string())),
            };
        }

        Err(PipelineError::LocationUnavailable(
            "neither coordinates nor an address were provided".to_string(),
        ))
    }

    /// Bounded-concurrency enrichment. A failed lookup drops only that place;
    /// result order follows the input order.
    async fn enrich_places(&self, summaries: Vec<PlaceSummary>) -> Vec<PlaceDetail> {
        let lookups = futures::stream::iter(summaries)
            .map(|summary| async move {
                let detail_res = self.places_repo.get_place_details(&summary.place_id).await;
                (summary, detail_res)
            })
            .buffered(DETAIL_LOOKUP_CONCURRENCY)
            .collect::<Vec<_>>()
            .await;

        let mut details = Vec::with_capacity(lookups.len());
        for (summary, detail_res) in lookups {
            match detail_res {
                Ok(detail) => details.push(detail),
                Err(e) => {
                    warn!("Skipping place {} after failed detail lookup due to: {}", summary.place_id, e);
                }
            }
        }
        details
    }

    async fn summarize_place(&self, detail: &PlaceDetail) -> SummaryOutcome {
        let review_texts: Vec<String> = detail
            .reviews
            .iter()
            .map(|review| review.text.clone())
            .filter(|text| !text.trim().is_empty())
            .collect();
        if review_texts.is_empty() {
            return SummaryOutcome::NoReviews;
        }

        match self.summary_repo.summarize_reviews(&review_texts).await {
            Ok(summary_text) => SummaryOutcome::Summarized(ReviewSummary {
                place_id: detail.place_id.clone(),
                summary_text,
            }),
            Err(e) => {
                warn!("Could not summarize reviews for place {} due to: {}", detail.place_id, e);
                SummaryOutcome::Unavailable
            }
        }
    }
}

fn search_keyword(preference: Option<&str>) -> String {
    match preference {
        Some(preference) if !preference.trim().is_empty() => {
            format!("restaurant {}", preference.trim())
        }
        _ => "restaurant".to_string(),
    }
}
