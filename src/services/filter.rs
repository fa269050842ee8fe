use crate::models::criteria::FilterCriteria;
use crate::models::place::PlaceDetail;

/// Budget filter over the enriched list. Keeps the provider's ranking order;
/// only drops entries, never re-sorts.
pub fn apply(details: Vec<PlaceDetail>, criteria: &FilterCriteria) -> Vec<PlaceDetail> {
    details
        .into_iter()
        .filter(|detail| passes(detail.price_level, criteria))
        .collect()
}

fn passes(price_level: Option<u8>, criteria: &FilterCriteria) -> bool {
    match price_level {
        Some(level) => criteria
            .max_price_level
            .map_or(true, |max_level| level <= max_level),
        None => !criteria.exclude_unknown_price,
    }
}
