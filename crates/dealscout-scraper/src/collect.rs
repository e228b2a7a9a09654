//! Sequential per-provider aggregation.
//!
//! `collect_all` drives render → extract → evaluate for each configured
//! provider, one at a time. A provider whose page cannot be fetched (or
//! whose card selector matches nothing) is recorded as failed and skipped;
//! the remaining providers still run. Accepted deals are concatenated in
//! configuration order, and the caller performs the final ranking sort.

use std::time::Duration;

use dealscout_core::{Deal, FilterCriteria, ProviderConfig};
use scraper::Html;

use crate::error::ScrapeError;
use crate::extract::{compile_selectors, extract_candidates, CompiledSelectors};
use crate::normalize::evaluate;
use crate::renderer::HttpRenderer;

/// What happened to one provider during a scan.
#[derive(Debug, Clone)]
pub struct ProviderOutcome {
    pub provider: String,
    /// Candidate cards that survived extraction.
    pub candidates_seen: usize,
    /// Deals accepted from this provider.
    pub deals_found: usize,
    /// Set when the provider was skipped: render failure or a card selector
    /// that matched nothing on the fetched page.
    pub error: Option<String>,
}

/// Aggregate result of one scan across all configured providers.
#[derive(Debug)]
pub struct ScanOutcome {
    /// Accepted deals, concatenated in provider configuration order.
    /// Unranked: sort stably by [`Deal::total_score`] descending to rank.
    pub deals: Vec<Deal>,
    /// One entry per provider, in configuration order.
    pub outcomes: Vec<ProviderOutcome>,
}

impl ScanOutcome {
    /// Number of providers that failed outright.
    #[must_use]
    pub fn failed_providers(&self) -> usize {
        self.outcomes.iter().filter(|o| o.error.is_some()).count()
    }
}

/// Runs the full pipeline across `providers`, strictly sequentially.
///
/// Every selector set is compiled before the first fetch, so a malformed
/// selector aborts the run up front instead of surfacing mid-scan.
/// `inter_provider_delay_ms` is slept between page fetches (politeness;
/// skipped before the first).
///
/// # Errors
///
/// Returns [`ScrapeError::InvalidSelector`] for a selector that fails to
/// compile. Per-provider fetch failures do NOT error: they are recorded in
/// the returned outcomes and the scan continues.
pub async fn collect_all(
    renderer: &HttpRenderer,
    providers: &[ProviderConfig],
    criteria: &FilterCriteria,
    inter_provider_delay_ms: u64,
) -> Result<ScanOutcome, ScrapeError> {
    let compiled: Vec<CompiledSelectors> = providers
        .iter()
        .map(compile_selectors)
        .collect::<Result<_, _>>()?;

    let mut deals = Vec::new();
    let mut outcomes = Vec::with_capacity(providers.len());
    let mut is_first = true;

    for (provider, selectors) in providers.iter().zip(&compiled) {
        if !is_first && inter_provider_delay_ms > 0 {
            tokio::time::sleep(Duration::from_millis(inter_provider_delay_ms)).await;
        }
        is_first = false;

        tracing::info!(provider = %provider.name, url = %provider.url, "fetching deals page");

        let body = match renderer.render(&provider.url).await {
            Ok(body) => body,
            Err(e) => {
                tracing::error!(
                    provider = %provider.name,
                    error = %e,
                    "failed to render provider page; continuing with remaining providers"
                );
                outcomes.push(ProviderOutcome {
                    provider: provider.name.clone(),
                    candidates_seen: 0,
                    deals_found: 0,
                    error: Some(e.to_string()),
                });
                continue;
            }
        };

        let (candidates_seen, accepted) = scrape_document(&body, selectors, provider, criteria);

        let error = if candidates_seen == 0 {
            tracing::warn!(
                provider = %provider.name,
                "card selector matched nothing; page may have been restructured"
            );
            Some("card selector matched no listings".to_string())
        } else {
            tracing::info!(
                provider = %provider.name,
                candidates = candidates_seen,
                accepted = accepted.len(),
                "provider scan complete"
            );
            None
        };

        outcomes.push(ProviderOutcome {
            provider: provider.name.clone(),
            candidates_seen,
            deals_found: accepted.len(),
            error,
        });
        deals.extend(accepted);
    }

    Ok(ScanOutcome { deals, outcomes })
}

/// Parses one fetched page and runs extract → evaluate over its cards.
///
/// Synchronous on purpose: the parsed document must not be held across an
/// await point, so all querying happens here before the next fetch.
fn scrape_document(
    body: &str,
    selectors: &CompiledSelectors,
    provider: &ProviderConfig,
    criteria: &FilterCriteria,
) -> (usize, Vec<Deal>) {
    let document = Html::parse_document(body);
    let mut candidates_seen = 0;
    let mut accepted = Vec::new();

    for candidate in extract_candidates(&document, selectors) {
        candidates_seen += 1;
        let title = candidate.title.clone();
        match evaluate(candidate, &provider.name, criteria) {
            Ok(deal) => accepted.push(deal),
            Err(rejection) => {
                tracing::debug!(
                    provider = %provider.name,
                    title = %title,
                    reason = %rejection,
                    "candidate rejected"
                );
            }
        }
    }

    (candidates_seen, accepted)
}

#[cfg(test)]
#[path = "collect_test.rs"]
mod tests;
