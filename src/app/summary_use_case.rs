use anyhow::{Context, Result};
use chrono::NaiveDate;
use tracing::info;

use crate::app::ports::ReviewSourcePort;
use crate::pipeline::processing::summary::{compare, Comparison, MetricsReport};

/// Use case for the dashboard KPIs over the processed table
pub struct SummaryUseCase {
    source: Box<dyn ReviewSourcePort>,
}

impl SummaryUseCase {
    pub fn new(source: Box<dyn ReviewSourcePort>) -> Self {
        Self { source }
    }

    pub async fn report(&self, as_of: NaiveDate, comparison: Comparison) -> Result<MetricsReport> {
        let processed = self
            .source
            .load_processed()
            .await
            .context("loading processed table")?;

        let report = compare(&processed.rows, as_of, comparison);
        info!(
            "Summarized {} reviews as of {} against {}",
            report.overall.review_count, as_of, comparison
        );
        Ok(report)
    }
}
