use serde::{Deserialize, Serialize};
use serde_with::{serde_as, TimestampSeconds};
use time::OffsetDateTime;

use crate::models::location::Location;

/// One candidate restaurant as returned by a nearby search. List order
/// follows the provider's relevance ranking.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct PlaceSummary {
    pub place_id: String,
    pub name: String,
    pub geometry: Geometry,
    pub rating: Option<f64>,
    pub user_ratings_total: Option<u32>,
    pub price_level: Option<u8>,
}

#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq)]
pub struct Geometry {
    pub location: Location,
}

/// The enriched view of a place. Shares its place_id with the summary it was
/// looked up from; the details endpoint does not echo the id back when asked
/// for specific fields, so the repository stamps it after parsing.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct PlaceDetail {
    #[serde(default)]
    pub place_id: String,
    pub name: String,
    pub vicinity: Option<String>,
    pub formatted_address: Option<String>,
    pub rating: Option<f64>,
    pub user_ratings_total: Option<u32>,
    pub price_level: Option<u8>,
    #[serde(default)]
    pub photos: Vec<Photo>,
    pub opening_hours: Option<OpeningHours>,
    #[serde(default)]
    pub reviews: Vec<Review>,
    pub url: Option<String>,
}

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct Photo {
    pub photo_reference: String,
    pub height: i64,
    pub width: i64,
}

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct OpeningHours {
    pub open_now: Option<bool>,
    #[serde(default)]
    pub weekday_text: Vec<String>,
}

#[serde_as]
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct Review {
    pub author_name: String,
    pub rating: Option<f64>,
    #[serde(default)]
    pub text: String,
    #[serde_as(as = "TimestampSeconds<i64>")]
    pub time: OffsetDateTime,
}
