//! Normalization and acceptance filtering of extracted candidates.
//!
//! `evaluate` turns a [`CandidateFields`] into a scored [`Deal`] or a typed
//! [`Rejection`]. A rejection is an expected outcome, not an error: malformed
//! prices and off-budget listings are everyday scrape results, and callers
//! log them at `debug` rather than surfacing them.

use dealscout_core::{Deal, FilterCriteria};

use crate::extract::CandidateFields;
use crate::score::score_title;

/// Why a candidate was not accepted. Predicates are checked in this order
/// and short-circuit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// Title contains an excluded destination term.
    ExcludedDestination,
    /// Price text does not parse as a non-negative integer.
    UnparseablePrice,
    /// Parsed price exceeds the budget ceiling.
    OverBudget,
    /// Departure text does not contain the home city.
    WrongDeparture,
    /// Title contains none of the profile keywords.
    NoKeywordMatch,
}

impl std::fmt::Display for Rejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rejection::ExcludedDestination => write!(f, "excluded destination"),
            Rejection::UnparseablePrice => write!(f, "unparseable price"),
            Rejection::OverBudget => write!(f, "over budget"),
            Rejection::WrongDeparture => write!(f, "wrong departure city"),
            Rejection::NoKeywordMatch => write!(f, "no keyword match"),
        }
    }
}

/// Applies the acceptance predicates to one candidate and, on acceptance,
/// constructs the scored [`Deal`].
///
/// A candidate with no departure text is treated as departing from the home
/// city: providers without per-listing departure data always pass the
/// departure filter. The budget check is boundary-inclusive.
///
/// # Errors
///
/// Returns the first failing [`Rejection`]; see the enum for the order.
pub fn evaluate(
    candidate: CandidateFields,
    provider: &str,
    criteria: &FilterCriteria,
) -> Result<Deal, Rejection> {
    let title_lower = candidate.title.to_lowercase();

    if criteria
        .excluded_terms
        .iter()
        .any(|term| title_lower.contains(&term.to_lowercase()))
    {
        return Err(Rejection::ExcludedDestination);
    }

    let Some(price_cad) = parse_price(&candidate.price_text) else {
        return Err(Rejection::UnparseablePrice);
    };

    if price_cad > criteria.budget_cad {
        return Err(Rejection::OverBudget);
    }

    let departure_city = candidate
        .departure_text
        .unwrap_or_else(|| criteria.departure_city.clone());
    if !departure_city
        .to_lowercase()
        .contains(&criteria.departure_city.to_lowercase())
    {
        return Err(Rejection::WrongDeparture);
    }

    if !criteria
        .keywords
        .iter()
        .any(|keyword| title_lower.contains(&keyword.to_lowercase()))
    {
        return Err(Rejection::NoKeywordMatch);
    }

    let scores = score_title(&candidate.title);

    Ok(Deal {
        provider: provider.to_owned(),
        title: candidate.title,
        price_cad,
        departure_city,
        link: candidate.link.unwrap_or_default(),
        party_score: scores.party,
        food_score: scores.food,
        drinks_score: scores.drinks,
    })
}

/// Parses a listing price into whole dollars.
///
/// Strips `$` currency symbols and `,` thousands separators, then requires
/// the remainder to be a plain non-negative integer. Vendor placeholders like
/// `"Call for price"` yield `None`.
fn parse_price(text: &str) -> Option<u32> {
    let cleaned: String = text
        .trim()
        .chars()
        .filter(|c| *c != '$' && *c != ',')
        .collect();
    cleaned.parse::<u32>().ok()
}

#[cfg(test)]
#[path = "normalize_test.rs"]
mod tests;
