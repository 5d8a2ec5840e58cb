//! Stage counters for the review pipeline.
//!
//! Recorded through the `metrics` facade; they are no-ops unless the host
//! process installs a recorder.

/// Counters for the cleaning stages
pub mod clean {
    /// Record how many raw rows entered the pipeline
    pub fn rows_loaded(count: usize) {
        ::metrics::counter!("reviews_clean_rows_loaded_total").increment(count as u64);
    }

    /// Record a review date that was left null
    pub fn review_date_unparsed(count: usize) {
        ::metrics::counter!("reviews_clean_review_date_unparsed_total").increment(count as u64);
    }

    /// Record a flight month that was left null
    pub fn flight_month_unparsed(count: usize) {
        ::metrics::counter!("reviews_clean_flight_month_unparsed_total").increment(count as u64);
    }

    /// Record ids handed out by the ranking stage
    pub fn ids_assigned(count: usize) {
        ::metrics::counter!("reviews_clean_ids_assigned_total").increment(count as u64);
    }
}

/// Counters for the feature-engineering stages
pub mod enrich {
    /// Record rows whose route produced no destination
    pub fn route_unparsed(count: usize) {
        ::metrics::counter!("reviews_enrich_route_unparsed_total").increment(count as u64);
    }

    /// Record rows without any canonical aircraft code
    pub fn aircraft_unmatched(count: usize) {
        ::metrics::counter!("reviews_enrich_aircraft_unmatched_total").increment(count as u64);
    }

    /// Record the experience tier given to a row
    pub fn experience_assigned(tier: &str) {
        ::metrics::counter!("reviews_enrich_experience_total", "tier" => tier.to_string())
            .increment(1);
    }

    /// Record recommended flags that were neither yes nor no
    pub fn recommended_unmapped(count: usize) {
        ::metrics::counter!("reviews_enrich_recommended_unmapped_total").increment(count as u64);
    }
}

/// Counters for whole runs
pub mod run {
    /// Record a finished run and its duration
    pub fn completed(rows: usize, duration_secs: f64) {
        ::metrics::counter!("reviews_runs_completed_total").increment(1);
        ::metrics::histogram!("reviews_run_duration_seconds").record(duration_secs);
        ::metrics::histogram!("reviews_run_rows").record(rows as f64);
    }

    /// Record a failed run
    pub fn failed(stage: &str) {
        ::metrics::counter!("reviews_runs_failed_total", "stage" => stage.to_string()).increment(1);
    }
}
