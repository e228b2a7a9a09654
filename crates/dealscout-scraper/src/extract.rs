//! Field extraction from a rendered listing page.
//!
//! A provider's selector set is compiled once before any page is fetched;
//! a selector that fails to compile is a configuration error, not a scrape
//! failure. Extraction itself never errors: cards missing their title or
//! price substructure are skipped, and missing departure/link fields are
//! carried as `None` for the normalizer to resolve.

use dealscout_core::{ProviderConfig, SelectorSet};
use scraper::{ElementRef, Html, Selector};

use crate::error::ScrapeError;

/// The selector set of one provider, compiled for querying.
#[derive(Debug)]
pub struct CompiledSelectors {
    pub card: Selector,
    pub title: Selector,
    pub price: Selector,
    pub departure: Option<Selector>,
    pub link: Option<Selector>,
}

/// Raw strings pulled from one listing card. Ephemeral: produced per card
/// and consumed by the normalizer in the same pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateFields {
    pub title: String,
    pub price_text: String,
    /// `None` when the provider publishes no per-listing departure element.
    pub departure_text: Option<String>,
    /// `None` when the provider exposes no per-card link.
    pub link: Option<String>,
}

/// Compiles a provider's selector set.
///
/// # Errors
///
/// Returns [`ScrapeError::InvalidSelector`] naming the offending field; the
/// caller treats this as fatal before any scraping begins.
pub fn compile_selectors(provider: &ProviderConfig) -> Result<CompiledSelectors, ScrapeError> {
    let SelectorSet {
        card,
        title,
        price,
        departure,
        link,
    } = &provider.selectors;

    let compile = |field: &'static str, selector: &str| {
        Selector::parse(selector).map_err(|_| ScrapeError::InvalidSelector {
            provider: provider.name.clone(),
            field,
            selector: selector.to_owned(),
        })
    };

    Ok(CompiledSelectors {
        card: compile("card", card)?,
        title: compile("title", title)?,
        price: compile("price", price)?,
        departure: departure
            .as_deref()
            .map(|s| compile("departure", s))
            .transpose()?,
        link: link.as_deref().map(|s| compile("link", s)).transpose()?,
    })
}

/// Yields one [`CandidateFields`] per listing card, in document order.
///
/// Cards whose title or price lookup fails (or yields only whitespace) are
/// skipped silently; candidate listings routinely lack the expected
/// substructure. The iterator borrows the parsed document and cannot be
/// restarted once consumed.
pub fn extract_candidates<'a>(
    document: &'a Html,
    selectors: &'a CompiledSelectors,
) -> impl Iterator<Item = CandidateFields> + 'a {
    document.select(&selectors.card).filter_map(|card| {
        let Some(title) = first_text(card, &selectors.title) else {
            tracing::debug!("skipping card without a title element");
            return None;
        };

        let Some(price_text) = first_text(card, &selectors.price) else {
            tracing::debug!(title = %title, "skipping card without a price element");
            return None;
        };

        let departure_text = selectors
            .departure
            .as_ref()
            .and_then(|sel| first_text(card, sel));

        let link = selectors.link.as_ref().and_then(|sel| {
            card.select(sel)
                .next()
                .and_then(|el| el.value().attr("href"))
                .map(str::to_owned)
        });

        Some(CandidateFields {
            title,
            price_text,
            departure_text,
            link,
        })
    })
}

/// Text of the first element under `scope` matching `selector`, trimmed.
/// Returns `None` for no match or whitespace-only text.
fn first_text(scope: ElementRef<'_>, selector: &Selector) -> Option<String> {
    let text = scope
        .select(selector)
        .next()?
        .text()
        .collect::<String>()
        .trim()
        .to_owned();
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

#[cfg(test)]
#[path = "extract_test.rs"]
mod tests;
