use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq)]
pub struct Location {
    pub lat: f64,
    pub lng: f64,
}

/// Raw location signal as supplied by the caller. Device coordinates take
/// precedence over the address, which is only geocoded as a fallback.
#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct LocationInput {
    pub coords: Option<Location>,
    pub address: Option<String>,
}
