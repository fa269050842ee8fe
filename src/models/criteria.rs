use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Serialize, Deserialize, Debug, Default)]
pub struct FilterCriteria {
    pub max_price_level: Option<u8>,
    pub exclude_unknown_price: bool,
}
