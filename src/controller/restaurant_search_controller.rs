use std::sync::Arc;
use axum::extract::Query;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Extension, Router};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::warn;
use crate::controller::AppState;
use crate::models::criteria::FilterCriteria;
use crate::models::location::{Location, LocationInput};
use crate::repositories::google_places_repo::GooglePlacesRepo;
use crate::repositories::review_summary_repo::ReviewSummaryRepo;
use crate::services::error::PipelineError;
use crate::services::search_pipeline::{
    RestaurantSearchPipeline, SearchRequest, MAX_RADIUS_METERS, MIN_RADIUS_METERS,
};

pub fn router(app_state: AppState) -> Router {
    let places_repo = Arc::new(GooglePlacesRepo::new(
        app_state.http_client.clone(),
        app_state.config.google_api_key.clone(),
    ));
    let summary_repo = Arc::new(ReviewSummaryRepo::new(
        app_state.http_client,
        app_state.config.openai_api_key,
        app_state.config.summary_model,
    ));
    let pipeline = Arc::new(RestaurantSearchPipeline::new(places_repo, summary_repo));

    Router::new()
        .route("/", get(find_restaurants))
        .route_layer(Extension(pipeline))
}

#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct FindRestaurantsParams {
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    pub address: Option<String>,
    pub radius: u32,
    pub preference: Option<String>,
    pub max_price_level: Option<u8>,
    #[serde(default)]
    pub exclude_unknown_price: bool,
    pub limit: Option<usize>,
}

pub async fn find_restaurants(
    Extension(pipeline): Extension<Arc<RestaurantSearchPipeline>>,
    Query(query): Query<FindRestaurantsParams>,
) -> impl IntoResponse {
    if query.radius < MIN_RADIUS_METERS || query.radius > MAX_RADIUS_METERS {
        return (
            StatusCode::BAD_REQUEST,
            format!(
                "Search radius must be between {} and {} meters",
                MIN_RADIUS_METERS, MAX_RADIUS_METERS
            ),
        ).into_response();
    }

    let coords = match (query.lat, query.lng) {
        (Some(lat), Some(lng)) => Some(Location { lat, lng }),
        (None, None) => None,
        _ => {
            return (
                StatusCode::BAD_REQUEST,
                "Both lat and lng must be provided together"
            ).into_response();
        }
    };

    let request = SearchRequest {
        location: LocationInput {
            coords,
            address: query.address,
        },
        radius_meters: query.radius,
        preference: query.preference,
        criteria: FilterCriteria {
            max_price_level: query.max_price_level,
            exclude_unknown_price: query.exclude_unknown_price,
        },
        limit: query.limit,
    };

    let search_res = pipeline.find_restaurants(request).await;
    return match search_res {
        Ok(records) => {
            (
                StatusCode::OK,
                json!(&records).to_string()
            ).into_response()
        }
        Err(e @ PipelineError::LocationUnavailable(_)) => {
            warn!("Could not resolve a search location due to: {}", e);
            (StatusCode::BAD_REQUEST, e.to_string()).into_response()
        }
        Err(e @ PipelineError::Configuration(_)) => {
            warn!("Search rejected by the configuration check due to: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response()
        }
        Err(e @ PipelineError::Search(_)) => {
            warn!("Something went wrong searching for restaurants due to: {}", e);
            (StatusCode::BAD_GATEWAY, e.to_string()).into_response()
        }
    };
}
