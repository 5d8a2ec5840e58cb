use anyhow::{Context, Result};
use chrono::{NaiveDate, Utc};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::{error, info};

use airline_reviews::app::document_use_case::DocumentUseCase;
use airline_reviews::app::summary_use_case::SummaryUseCase;
use airline_reviews::app::transform_use_case::TransformUseCase;
use airline_reviews::config::PipelineConfig;
use airline_reviews::domain::RunManifest;
use airline_reviews::infra::{
    CsvReviewSource, CsvTableOutputAdapter, JsonManifestAdapter, NdjsonDocumentOutputAdapter,
};
use airline_reviews::observability::init_logging;
use airline_reviews::pipeline::processing::summary::Comparison;

#[derive(Parser)]
#[command(name = "airline_reviews")]
#[command(about = "Cleans and enriches scraped airline customer reviews")]
#[command(version = "0.1.0")]
struct Cli {
    /// Path to a TOML config file (defaults to ./config.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Directory holding the input and output tables
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Raw table to clean and processed tables
    Transform,
    /// Raw table to clean table only
    Clean,
    /// Clean table to processed table
    Enrich,
    /// Processed table to NDJSON documents for semantic search
    Documents,
    /// Print dashboard KPIs as JSON
    Summary {
        /// previous-month, previous-year or all-time
        #[arg(long, default_value = "previous-month")]
        compare: Comparison,
        /// Reference date (YYYY-MM-DD), defaults to today
        #[arg(long)]
        as_of: Option<NaiveDate>,
    },
}

fn source(config: &PipelineConfig) -> Box<CsvReviewSource> {
    Box::new(CsvReviewSource::new(
        config.raw_path(),
        config.clean_path(),
        config.processed_path(),
    ))
}

fn transform_use_case(config: &PipelineConfig) -> TransformUseCase {
    TransformUseCase::new(
        source(config),
        Box::new(CsvTableOutputAdapter::new(
            config.clean_path(),
            config.processed_path(),
        )),
        Box::new(JsonManifestAdapter::new(config.manifest_path())),
    )
}

fn print_manifest(manifest: &RunManifest, config: &PipelineConfig) {
    println!("\n📊 Run {}:", manifest.run_id);
    println!("   Input: {} ({} rows)", manifest.input_file, manifest.input_rows);
    if let Some(rows) = manifest.clean_rows {
        println!("   Clean: {} ({} rows)", config.clean_path().display(), rows);
    }
    if let Some(rows) = manifest.processed_rows {
        println!("   Processed: {} ({} rows)", config.processed_path().display(), rows);
    }
    let recovery = &manifest.recovery;
    println!("   Unparsed review dates: {}", recovery.unparsed_review_dates);
    println!("   Unparsed flight months: {}", recovery.unparsed_flight_months);
    println!("   Rows without route: {}", recovery.rows_without_route);
    println!("   Rows without aircraft code: {}", recovery.rows_without_aircraft_code);
    println!("   Manifest: {}", config.manifest_path().display());
}

async fn run(cli: Cli, config: PipelineConfig) -> Result<()> {
    match cli.command {
        Commands::Transform => {
            println!("🔄 Running full transform...");
            let manifest = transform_use_case(&config).run_full().await?;
            print_manifest(&manifest, &config);
        }
        Commands::Clean => {
            println!("🧹 Running cleaning stages...");
            let manifest = transform_use_case(&config).run_clean_only().await?;
            print_manifest(&manifest, &config);
        }
        Commands::Enrich => {
            println!("🔨 Running feature stages...");
            let manifest = transform_use_case(&config).run_enrich_only().await?;
            print_manifest(&manifest, &config);
        }
        Commands::Documents => {
            println!("📄 Exporting documents...");
            let use_case = DocumentUseCase::new(
                source(&config),
                Box::new(NdjsonDocumentOutputAdapter::new(config.documents_path())),
            );
            let count = use_case.export().await?;
            println!("✅ Wrote {} documents to {}", count, config.documents_path().display());
        }
        Commands::Summary { compare, as_of } => {
            let as_of = as_of.unwrap_or_else(|| Utc::now().date_naive());
            let report = SummaryUseCase::new(source(&config))
                .report(as_of, compare)
                .await?;
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    let cli = Cli::parse();

    let mut config = PipelineConfig::load(cli.config.as_deref()).context("loading configuration")?;
    if let Some(dir) = &cli.data_dir {
        config.override_data_dir(dir);
    }

    init_logging(config.log_dir());
    info!("Data directory: {}", config.paths.data_dir.display());

    if let Err(e) = run(cli, config).await {
        error!("Run failed: {:#}", e);
        println!("❌ {:#}", e);
        std::process::exit(1);
    }
    Ok(())
}
