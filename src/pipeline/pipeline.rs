use serde::{Deserialize, Serialize};
use std::time::Instant;
use tracing::{info, instrument, warn};

use crate::domain::{CleanReview, ProcessedReview, RawReview};
use crate::observability::metrics;
use crate::pipeline::processing::{clean, enrich};

/// Rows that came through with a field recovered as null.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecoveryStats {
    pub unparsed_review_dates: usize,
    pub unparsed_flight_months: usize,
    pub rows_without_route: usize,
    pub rows_without_aircraft_code: usize,
    pub unmapped_recommended: usize,
}

/// Result of a complete pipeline run
#[derive(Debug, Clone)]
pub struct PipelineResult {
    pub input_rows: usize,
    pub clean: Vec<CleanReview>,
    pub processed: Vec<ProcessedReview>,
    pub recovery: RecoveryStats,
}

pub struct Pipeline;

impl Pipeline {
    /// Field splitter, date normalizer, identity assigner and renamer.
    #[instrument(skip(raw), fields(rows = raw.len()))]
    pub fn clean(raw: Vec<RawReview>) -> (Vec<CleanReview>, RecoveryStats) {
        let input_rows = raw.len();
        metrics::clean::rows_loaded(input_rows);

        let with_flight_text = raw.iter().filter(|r| r.date_flown.is_some()).count();
        let clean = clean::clean_reviews(raw);

        let unparsed_review_dates = clean.iter().filter(|r| r.date_review.is_none()).count();
        let unparsed_flight_months = with_flight_text
            - clean.iter().filter(|r| r.month_year_fly.is_some()).count();

        metrics::clean::review_date_unparsed(unparsed_review_dates);
        metrics::clean::flight_month_unparsed(unparsed_flight_months);
        metrics::clean::ids_assigned(clean.len());

        if unparsed_review_dates > 0 {
            warn!("{} of {} review dates could not be parsed", unparsed_review_dates, input_rows);
        }
        info!("Cleaned {} reviews", clean.len());

        let stats = RecoveryStats {
            unparsed_review_dates,
            unparsed_flight_months,
            ..Default::default()
        };
        (clean, stats)
    }

    /// Route parser, aircraft normalizer, score/experience deriver, boolean
    /// coercer and the final reorder.
    #[instrument(skip(clean), fields(rows = clean.len()))]
    pub fn enrich(clean: Vec<CleanReview>) -> (Vec<ProcessedReview>, RecoveryStats) {
        let had_recommended_text: Vec<bool> = clean
            .iter()
            .map(|r| r.recommended.is_some())
            .collect();

        let processed = enrich::enrich_reviews(clean);

        let rows_without_route = processed
            .iter()
            .filter(|r| r.route.is_some() && r.destination.is_none())
            .count();
        let rows_without_aircraft_code = processed
            .iter()
            .filter(|r| r.aircraft.is_some() && r.aircraft_1.is_none() && r.aircraft_2.is_none())
            .count();
        let unmapped_recommended = processed
            .iter()
            .zip(&had_recommended_text)
            .filter(|(r, had_text)| **had_text && r.recommended.is_none())
            .count();

        metrics::enrich::route_unparsed(rows_without_route);
        metrics::enrich::aircraft_unmatched(rows_without_aircraft_code);
        metrics::enrich::recommended_unmapped(unmapped_recommended);
        for review in &processed {
            metrics::enrich::experience_assigned(review.experience.as_str());
        }

        info!("Enriched {} reviews", processed.len());

        let stats = RecoveryStats {
            rows_without_route,
            rows_without_aircraft_code,
            unmapped_recommended,
            ..Default::default()
        };
        (processed, stats)
    }

    /// Run every stage in order over the raw table.
    pub fn run(raw: Vec<RawReview>) -> PipelineResult {
        let started = Instant::now();
        let input_rows = raw.len();

        let (clean, clean_stats) = Self::clean(raw);
        let (processed, enrich_stats) = Self::enrich(clean.clone());

        let recovery = RecoveryStats {
            unparsed_review_dates: clean_stats.unparsed_review_dates,
            unparsed_flight_months: clean_stats.unparsed_flight_months,
            rows_without_route: enrich_stats.rows_without_route,
            rows_without_aircraft_code: enrich_stats.rows_without_aircraft_code,
            unmapped_recommended: enrich_stats.unmapped_recommended,
        };

        let duration = started.elapsed().as_secs_f64();
        metrics::run::completed(processed.len(), duration);
        info!(
            "Pipeline finished: {} rows in, {} rows out in {:.3}s",
            input_rows,
            processed.len(),
            duration
        );

        PipelineResult {
            input_rows,
            clean,
            processed,
            recovery,
        }
    }
}
