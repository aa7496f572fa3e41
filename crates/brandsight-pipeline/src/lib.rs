//! Orchestration of one full ingestion run.
//!
//! A run processes the requested address through scrape → structure →
//! persist, then repeats the same sequence for each competitor address the
//! structuring step suggested. Fan-out is exactly one level deep — the
//! competitors' own suggestions are never followed — and strictly serial:
//! competitor *i* is fully persisted before competitor *i+1* starts, and the
//! first failure anywhere ends the run. Records persisted before the failure
//! stay persisted; there is no rollback and no retry.

mod error;

pub use error::PipelineError;

use serde::Serialize;
use sqlx::PgPool;

use brandsight_core::StructuredInsights;
use brandsight_db::save_brand_insights;
use brandsight_scraper::{collect_insights, SiteClient};
use brandsight_structurer::Structurer;

/// Result of a completed run: the requested brand's structured record plus
/// the records of every competitor processed.
#[derive(Debug, Serialize)]
pub struct IngestOutcome {
    pub main_brand: StructuredInsights,
    pub competitors: Vec<StructuredInsights>,
}

/// Runs one full ingestion for `site_url`.
///
/// Revisits are not deduplicated: a competitor suggestion looping back to
/// the requested address triggers a fresh re-ingestion, which the replace
/// semantics of persistence keep harmless.
///
/// # Errors
///
/// Returns [`PipelineError::Structuring`] when the structuring service fails
/// for any address in the chain, and [`PipelineError::Persistence`] when a
/// write fails. The error names the address being processed; competitors
/// after it are never attempted.
pub async fn ingest_brand(
    pool: &PgPool,
    site: &SiteClient,
    structurer: &Structurer,
    site_url: &str,
) -> Result<IngestOutcome, PipelineError> {
    let main_brand = ingest_one(pool, site, structurer, site_url).await?;

    let mut competitors = Vec::with_capacity(main_brand.competitors.len());
    for competitor_url in &main_brand.competitors {
        let record = ingest_one(pool, site, structurer, competitor_url).await?;
        competitors.push(record);
    }

    Ok(IngestOutcome {
        main_brand,
        competitors,
    })
}

/// Scrape, structure, and persist a single address.
async fn ingest_one(
    pool: &PgPool,
    site: &SiteClient,
    structurer: &Structurer,
    site_url: &str,
) -> Result<StructuredInsights, PipelineError> {
    tracing::info!(site_url, "ingesting brand");
    let raw = collect_insights(site, site_url).await;

    let structured = structurer.structure(&raw, site_url).await.map_err(|e| {
        tracing::error!(site_url, error = %e, "structuring failed; aborting run");
        PipelineError::Structuring {
            site_url: site_url.to_owned(),
            source: e,
        }
    })?;

    save_brand_insights(pool, site_url, &structured)
        .await
        .map_err(|e| {
            tracing::error!(site_url, error = %e, "persisting brand failed; aborting run");
            PipelineError::Persistence {
                site_url: site_url.to_owned(),
                source: e,
            }
        })?;

    tracing::info!(
        site_url,
        products = structured.products_catalog.len(),
        competitors = structured.competitors.len(),
        "brand ingested"
    );
    Ok(structured)
}
