/// Tag text that marks a review as coming from a verified trip.
const TRIP_VERIFIED: &str = "trip verified";

/// The two atomic fields carved out of a composite `review_bodies` value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitBody {
    pub verified: bool,
    pub review: Option<String>,
}

/// Split `"<tag>|<body>"` into a verification flag and the review text.
///
/// Parts are assigned positionally: the text before the first `|` lands in
/// the tag slot and the rest in the body slot. A value without a delimiter
/// therefore fills only the tag slot, and the swap below moves it into the
/// body. The swap fires only when the body is empty and the tag is not.
pub fn split_review_body(raw: Option<&str>) -> SplitBody {
    let (mut tag, mut body) = match raw {
        None => (None, None),
        Some(text) => match text.split_once('|') {
            Some((tag, body)) => (Some(tag), Some(body)),
            None => (Some(text), None),
        },
    };

    if body.is_none() && tag.is_some() {
        std::mem::swap(&mut tag, &mut body);
    }

    SplitBody {
        verified: tag.map(is_trip_verified).unwrap_or(false),
        review: clean_text(body),
    }
}

/// Case-insensitive check for the "Trip Verified" marker.
pub fn is_trip_verified(tag: &str) -> bool {
    tag.to_lowercase().contains(TRIP_VERIFIED)
}

/// Strip the parentheses the scraper leaves around country names.
pub fn clean_country(raw: Option<&str>) -> Option<String> {
    let stripped = raw?.replace(['(', ')'], "");
    clean_text(Some(&stripped))
}

/// Trim surrounding whitespace; blank text becomes null.
pub fn clean_text(raw: Option<&str>) -> Option<String> {
    let trimmed = raw?.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Star ratings arrive as `4` or, after a float round-trip, `4.0`.
pub fn parse_rating(raw: Option<&str>) -> Option<i32> {
    let text = raw?.trim();
    if let Ok(value) = text.parse::<i32>() {
        return Some(value);
    }
    match text.parse::<f64>() {
        Ok(value) if value.is_finite() && value.fract() == 0.0 => Some(value as i32),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_tagged_body() {
        let split = split_review_body(Some("Trip Verified|Great flight"));
        assert!(split.verified);
        assert_eq!(split.review.as_deref(), Some("Great flight"));
    }

    #[test]
    fn test_split_body_without_delimiter() {
        let split = split_review_body(Some("Average flight"));
        assert!(!split.verified);
        assert_eq!(split.review.as_deref(), Some("Average flight"));
    }

    #[test]
    fn test_verified_tag_is_case_insensitive() {
        let split = split_review_body(Some("✅ trip VERIFIED |  Lovely crew "));
        assert!(split.verified);
        assert_eq!(split.review.as_deref(), Some("Lovely crew"));
    }

    #[test]
    fn test_unverified_tag() {
        let split = split_review_body(Some("Not Verified|Lost my bag"));
        assert!(!split.verified);
        assert_eq!(split.review.as_deref(), Some("Lost my bag"));
    }

    #[test]
    fn test_body_only_text_mentioning_verification_is_not_a_tag() {
        // Without a delimiter the text is the body, so the tag is absent.
        let split = split_review_body(Some("Trip Verified but awful"));
        assert!(!split.verified);
        assert_eq!(split.review.as_deref(), Some("Trip Verified but awful"));
    }

    #[test]
    fn test_null_body() {
        let split = split_review_body(None);
        assert!(!split.verified);
        assert_eq!(split.review, None);
    }

    #[test]
    fn test_only_first_delimiter_splits() {
        let split = split_review_body(Some("Trip Verified|Seat 1|Seat 2"));
        assert!(split.verified);
        assert_eq!(split.review.as_deref(), Some("Seat 1|Seat 2"));
    }

    #[test]
    fn test_clean_country() {
        assert_eq!(
            clean_country(Some("(United Kingdom)")).as_deref(),
            Some("United Kingdom")
        );
        assert_eq!(clean_country(Some("()")), None);
        assert_eq!(clean_country(None), None);
    }

    #[test]
    fn test_parse_rating() {
        assert_eq!(parse_rating(Some("4")), Some(4));
        assert_eq!(parse_rating(Some("3.0")), Some(3));
        assert_eq!(parse_rating(Some(" 5 ")), Some(5));
        assert_eq!(parse_rating(Some("2.5")), None);
        assert_eq!(parse_rating(Some("")), None);
        assert_eq!(parse_rating(Some("nan")), None);
        assert_eq!(parse_rating(None), None);
    }
}
