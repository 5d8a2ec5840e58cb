/// Map the scraper's lowercase `yes`/`no` flags to a tri-state boolean.
/// Matching is exact and case-sensitive; anything else stays unknown.
pub fn yes_no(raw: Option<&str>) -> Option<bool> {
    match raw? {
        "yes" => Some(true),
        "no" => Some(false),
        _ => None,
    }
}
