use crate::models::display::DisplayRecord;
use crate::models::place::PlaceDetail;
use crate::models::summary::SummaryOutcome;

pub const NO_REVIEWS_SUMMARY: &str = "No reviews available.";
pub const SUMMARY_UNAVAILABLE: &str = "Review processing unavailable.";
pub const ADDRESS_UNAVAILABLE: &str = "Address unavailable";

/// Pure mapping into the display shape. Missing optional fields become
/// explicit placeholders so every record renders the same way.
pub fn assemble(
    detail: PlaceDetail,
    photo_url: Option<String>,
    summary: SummaryOutcome,
) -> DisplayRecord {
    let address = detail
        .formatted_address
        .or(detail.vicinity)
        .unwrap_or_else(|| ADDRESS_UNAVAILABLE.to_string());

    let review_summary = match summary {
        SummaryOutcome::Summarized(review_summary) => review_summary.summary_text,
        SummaryOutcome::NoReviews => NO_REVIEWS_SUMMARY.to_string(),
        SummaryOutcome::Unavailable => SUMMARY_UNAVAILABLE.to_string(),
    };

    DisplayRecord {
        place_id: detail.place_id,
        name: detail.name,
        address,
        price_level: detail.price_level,
        rating: detail.rating,
        user_ratings_total: detail.user_ratings_total,
        photo_url,
        opening_hours: detail
            .opening_hours
            .map(|hours| hours.weekday_text)
            .unwrap_or_default(),
        maps_url: detail.url,
        review_summary,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::place::OpeningHours;
    use crate::models::summary::ReviewSummary;
    use pretty_assertions::assert_eq;

    fn bare_detail(place_id: &str) -> PlaceDetail {
        PlaceDetail {
            place_id: place_id.to_string(),
            name: "Somewhere".to_string(),
            vicinity: None,
            formatted_address: None,
            rating: None,
            user_ratings_total: None,
            price_level: None,
            photos: Vec::new(),
            opening_hours: None,
            reviews: Vec::new(),
            url: None,
        }
    }

    #[test]
    fn record_keeps_the_place_id_it_came_from() {
        let record = assemble(bare_detail("p42"), None, SummaryOutcome::NoReviews);
        assert_eq!(record.place_id, "p42");
    }

    #[test]
    fn missing_fields_become_placeholders() {
        let record = assemble(bare_detail("p1"), None, SummaryOutcome::Unavailable);
        assert_eq!(record.address, ADDRESS_UNAVAILABLE);
        assert_eq!(record.review_summary, SUMMARY_UNAVAILABLE);
        assert_eq!(record.photo_url, None);
        assert!(record.opening_hours.is_empty());
        assert_eq!(record.maps_url, None);
    }

    #[test]
    fn present_fields_are_carried_through() {
        let mut detail = bare_detail("p1");
        detail.formatted_address = Some("12 Temple St".to_string());
        detail.opening_hours = Some(OpeningHours {
            open_now: Some(true),
            weekday_text: vec!["Monday: 9 AM - 5 PM".to_string()],
        });
        detail.url = Some("https://maps.google.com/?cid=1".to_string());

        let summary = SummaryOutcome::Summarized(ReviewSummary {
            place_id: "p1".to_string(),
            summary_text: "Diners love it.".to_string(),
        });
        let record = assemble(detail, Some("https://example.com/photo".to_string()), summary);

        assert_eq!(record.address, "12 Temple St");
        assert_eq!(record.review_summary, "Diners love it.");
        assert_eq!(record.opening_hours, vec!["Monday: 9 AM - 5 PM".to_string()]);
        assert_eq!(record.photo_url.as_deref(), Some("https://example.com/photo"));
        assert_eq!(record.maps_url.as_deref(), Some("https://maps.google.com/?cid=1"));
    }

    #[test]
    fn vicinity_backfills_a_missing_formatted_address() {
        let mut detail = bare_detail("p1");
        detail.vicinity = Some("Chinatown".to_string());
        let record = assemble(detail, None, SummaryOutcome::NoReviews);
        assert_eq!(record.address, "Chinatown");
        assert_eq!(record.review_summary, NO_REVIEWS_SUMMARY);
    }
}
