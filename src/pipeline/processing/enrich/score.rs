use crate::domain::Experience;

/// Mean of the service ratings that are present. Missing ratings are left
/// out of the mean rather than counted as zero.
pub fn service_score(ratings: &[Option<i32>]) -> Option<f64> {
    let present: Vec<f64> = ratings.iter().flatten().map(|r| f64::from(*r)).collect();
    if present.is_empty() {
        None
    } else {
        Some(present.iter().sum::<f64>() / present.len() as f64)
    }
}

/// Experience tier from the value-for-money rating alone; the overall score
/// plays no part.
pub fn experience(money_value: Option<i32>) -> Experience {
    match money_value {
        Some(1..=2) => Experience::Poor,
        Some(3) => Experience::Fair,
        Some(4..=5) => Experience::Good,
        _ => Experience::Unknown,
    }
}
