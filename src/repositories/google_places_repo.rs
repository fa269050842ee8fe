use std::collections::HashSet;

use serde::Deserialize;
use thiserror::Error;
use tracing::{info, warn};

use crate::models::location::Location;
use crate::models::place::{Geometry, PlaceDetail, PlaceSummary};

const BASE_URL: &str = "https://maps.googleapis.com/maps/api";

/// Nearby search never returns more than three pages from the provider.
pub const PAGE_LIMIT: usize = 3;

/// A freshly issued next_page_token takes a moment to become valid upstream.
const NEXT_PAGE_WARMUP_SECONDS: u64 = 2;

const PHOTO_MAX_WIDTH: u32 = 400;

const DETAIL_FIELDS: &str =
    "name,vicinity,formatted_address,price_level,rating,user_ratings_total,opening_hours,photo,review,url";

#[derive(Debug, Error)]
pub enum PlacesApiError {
    #[error("request to the places provider failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("places provider returned {status}: {message}")]
    Api { status: String, message: String },
}

pub struct GooglePlacesRepo {
    http_client: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl GooglePlacesRepo {
    pub fn new(http_client: reqwest::Client, api_key: String) -> Self {
        Self {
            http_client,
            api_key,
            base_url: BASE_URL.to_string(),
        }
    }

    /// Point the repo at a different host, for proxies and tests.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn has_api_key(&self) -> bool {
        !self.api_key.trim().is_empty()
    }

    pub async fn geocode_address(
        &self,
        address: &str,
    ) -> Result<Option<Location>, PlacesApiError> {
        let url = format!("{}/geocode/json", self.base_url);
        let params: Vec<(&str, String)> = vec![
            ("address", address.to_string()),
            ("key", self.api_key.clone()),
        ];

        let page: GeocodeResponse = self.fetch_provider_json(&url, &params).await?;
        match page.status.as_str() {
            "OK" => Ok(page.results.into_iter().next().map(|r| r.geometry.location)),
            "ZERO_RESULTS" => Ok(None),
            other => Err(PlacesApiError::Api {
                status: other.to_string(),
                message: page.error_message.unwrap_or_default(),
            }),
        }
    }

    /// Single flattened nearby search. Follows next_page_token up to
    /// PAGE_LIMIT pages and de-duplicates by place_id, so callers see one
    /// ordered sequence regardless of provider paging.
    pub async fn nearby_search(
        &self,
        location: Location,
        radius_meters: u32,
        keyword: &str,
    ) -> Result<Vec<PlaceSummary>, PlacesApiError> {
        let url = format!("{}/place/nearbysearch/json", self.base_url);

        let mut summaries: Vec<PlaceSummary> = Vec::new();
        let mut seen_place_ids: HashSet<String> = HashSet::new();
        let mut page_token: Option<String> = None;

        for page_number in 0..PAGE_LIMIT {
            let mut params: Vec<(&str, String)> = vec![
                ("location", format!("{},{}", location.lat, location.lng)),
                ("radius", radius_meters.to_string()),
                ("keyword", keyword.to_string()),
                ("type", "restaurant".to_string()),
                ("key", self.api_key.clone()),
            ];
            if let Some(token) = &page_token {
                tokio::time::sleep(tokio::time::Duration::from_secs(NEXT_PAGE_WARMUP_SECONDS)).await;
                params.push(("pagetoken", token.clone()));
            }

            let page: NearbySearchResponse = self.fetch_provider_json(&url, &params).await?;
            match page.status.as_str() {
                "OK" | "ZERO_RESULTS" => {}
                other => {
                    return Err(PlacesApiError::Api {
                        status: other.to_string(),
                        message: page.error_message.unwrap_or_default(),
                    });
                }
            }

            for summary in page.results {
                if seen_place_ids.insert(summary.place_id.clone()) {
                    summaries.push(summary);
                } else {
                    warn!("Dropping duplicated place_id: {} from page {}", summary.place_id, page_number + 1);
                }
            }

            page_token = page.next_page_token;
            if page_token.is_none() {
                break;
            }
        }

        info!("Nearby search produced {} candidate places", summaries.len());
        Ok(summaries)
    }

    pub async fn get_place_details(
        &self,
        place_id: &str,
    ) -> Result<PlaceDetail, PlacesApiError> {
        let url = format!("{}/place/details/json", self.base_url);
        let params: Vec<(&str, String)> = vec![
            ("place_id", place_id.to_string()),
            ("fields", DETAIL_FIELDS.to_string()),
            ("key", self.api_key.clone()),
        ];

        let page: PlaceDetailsResponse = self.fetch_provider_json(&url, &params).await?;
        if page.status != "OK" {
            return Err(PlacesApiError::Api {
                status: page.status,
                message: page.error_message.unwrap_or_default(),
            });
        }

        let mut detail = page.result.ok_or_else(|| PlacesApiError::Api {
            status: "OK".to_string(),
            message: format!("details response for {} carried no result", place_id),
        })?;

        // The details endpoint does not echo the id back for a field-scoped
        // request; stamp it so place_id stays the join key downstream.
        detail.place_id = place_id.to_string();
        Ok(detail)
    }

    pub fn photo_url(&self, photo_reference: &str) -> String {
        format!(
            "{}/place/photo?maxwidth={}&photo_reference={}&key={}",
            self.base_url, PHOTO_MAX_WIDTH, photo_reference, self.api_key
        )
    }

    async fn fetch_provider_json<T: serde::de::DeserializeOwned>(
        &self,
        url: &str,
        params: &[(&str, String)],
    ) -> Result<T, PlacesApiError> {
        let response = self
            .http_client
            .get(url)
            .query(params)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(PlacesApiError::Api {
                status: status.as_u16().to_string(),
                message,
            });
        }

        Ok(response.json::<T>().await?)
    }
}

#[derive(Deserialize)]
struct NearbySearchResponse {
    #[serde(default)]
    results: Vec<PlaceSummary>,
    status: String,
    error_message: Option<String>,
    next_page_token: Option<String>,
}

#[derive(Deserialize)]
struct PlaceDetailsResponse {
    result: Option<PlaceDetail>,
    status: String,
    error_message: Option<String>,
}

#[derive(Deserialize)]
struct GeocodeResponse {
    #[serde(default)]
    results: Vec<GeocodeResult>,
    status: String,
    error_message: Option<String>,
}

#[derive(Deserialize)]
struct GeocodeResult {
    geometry: Geometry,
}
