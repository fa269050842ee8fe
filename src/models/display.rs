use serde::{Deserialize, Serialize};

/// Display-ready record, one per restaurant. Every field is always present in
/// the serialized shape; optional sub-fields come through as null/empty or as
/// an explicit placeholder string rather than being omitted.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct DisplayRecord {
    pub place_id: String,
    pub name: String,
    pub address: String,
    pub price_level: Option<u8>,
    pub rating: Option<f64>,
    pub user_ratings_total: Option<u32>,
    pub photo_url: Option<String>,
    pub opening_hours: Vec<String>,
    pub maps_url: Option<String>,
    pub review_summary: String,
}
