use chrono::NaiveDate;
use std::cmp::Ordering;

/// Newest review date first; rows without a date go last.
fn newest_first(a: Option<NaiveDate>, b: Option<NaiveDate>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => b.cmp(&a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Sort rows by review date descending and number them `0..N`.
///
/// The sort is stable, so ties keep their input order. Ids are ranks, not
/// keys: a new scrape renumbers everything.
pub fn assign_ids<T, F>(mut rows: Vec<T>, review_date: F) -> Vec<(usize, T)>
where
    F: Fn(&T) -> Option<NaiveDate>,
{
    rows.sort_by(|a, b| newest_first(review_date(a), review_date(b)));
    rows.into_iter().enumerate().collect()
}
