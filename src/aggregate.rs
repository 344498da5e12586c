// Concurrent fan-out over all source profiles.
use std::sync::Arc;

use futures::future::join_all;
use tracing::{info, warn};

use crate::dedup::dedup_and_filter;
use crate::extract;
use crate::extract::profiles::{SourceProfile, profiles};
use crate::fetch::Fetcher;
use crate::model::{Listing, ScrapeResponse, SearchQuery, SourceError, SourceStatus, SourceSummary};
use crate::rank::rank;

pub struct AggregateOutcome {
    /// Successful batches concatenated in source order.
    pub listings: Vec<Listing>,
    /// One summary per source, fulfilled or rejected, in source order.
    pub sources: Vec<SourceSummary>,
}

/// Fires all source pipelines concurrently and waits for every one to settle.
///
/// A failed source never fails the aggregate: it is logged, contributes zero
/// listings and shows up as `rejected` in the summary. Total latency is
/// bounded by the slowest fetch, each of which carries its own timeout.
pub async fn aggregate(fetcher: Arc<dyn Fetcher>, query: &SearchQuery) -> AggregateOutcome {
    let tasks: Vec<_> = profiles()
        .into_iter()
        .map(|profile| {
            let fetcher = fetcher.clone();
            let query = query.clone();
            async move {
                let source = profile.source;
                (source, scrape_source(fetcher.as_ref(), &profile, &query).await)
            }
        })
        .collect();

    let mut listings = Vec::new();
    let mut sources = Vec::with_capacity(crate::model::Source::ALL.len());
    for (source, outcome) in join_all(tasks).await {
        match outcome {
            Ok(batch) => {
                info!(%source, count = batch.len(), "source fulfilled");
                sources.push(SourceSummary {
                    source,
                    status: SourceStatus::Fulfilled,
                    count: batch.len(),
                });
                listings.extend(batch);
            }
            Err(err) => {
                warn!(%source, error = %err, "source rejected");
                sources.push(SourceSummary {
                    source,
                    status: SourceStatus::Rejected,
                    count: 0,
                });
            }
        }
    }

    AggregateOutcome { listings, sources }
}

async fn scrape_source(
    fetcher: &dyn Fetcher,
    profile: &SourceProfile,
    query: &SearchQuery,
) -> Result<Vec<Listing>, SourceError> {
    let url = profile.search_url(query);
    let html = fetcher.fetch(&url).await?;
    Ok(extract::extract_listings(&html, profile, query)?)
}

/// Full search pipeline: fan-out, merge, dedup, rank.
pub async fn run_search(fetcher: Arc<dyn Fetcher>, query: &SearchQuery) -> ScrapeResponse {
    let outcome = aggregate(fetcher, query).await;
    let mut listings = dedup_and_filter(outcome.listings);
    rank(&mut listings);

    ScrapeResponse {
        success: true,
        total: listings.len(),
        data: listings,
        sources: outcome.sources,
    }
}
