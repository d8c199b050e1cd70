//! Substring search over campaign lists.
//!
//! Search is naive and case-insensitive by contract: the query is lowercased
//! and split into word tokens, and a campaign matches only if every token
//! matches (logical AND across tokens). A token matches directly against the
//! campaign's title or description; only when that direct match fails does the
//! fallback check the campaign's politicians (name, resolved region name, or
//! raw state code, OR-accumulated across all politicians). The fallback is
//! evaluated fresh for each token, independent of other tokens' results.

use crate::domain::Campaign;
use crate::infrastructure::regions;

/// Splits a query into lowercase word tokens.
///
/// Word characters are alphanumerics and underscores; every other character
/// separates tokens. A query with no word characters yields no tokens.
pub(crate) fn tokenize(search_text: &str) -> Vec<String> {
    let lowered = search_text.to_lowercase();
    lowered
        .split(|c: char| !c.is_alphanumeric() && c != '_')
        .filter(|token| !token.is_empty())
        .map(String::from)
        .collect()
}

/// Returns the campaigns from `candidates` matching every token of the query.
///
/// An empty token set (query with no word characters) matches nothing, as does
/// an empty candidate list. Relative candidate order is preserved.
pub(crate) fn search(candidates: &[Campaign], search_text: &str) -> Vec<Campaign> {
    let tokens = tokenize(search_text);
    let _span = tracing::debug_span!(
        "search",
        candidates = candidates.len(),
        tokens = tokens.len()
    )
    .entered();

    let results: Vec<Campaign> = candidates
        .iter()
        .filter(|campaign| campaign_matches(campaign, &tokens))
        .cloned()
        .collect();

    tracing::debug!(results = results.len(), "search pass complete");
    results
}

fn campaign_matches(campaign: &Campaign, tokens: &[String]) -> bool {
    if tokens.is_empty() {
        return false;
    }
    tokens.iter().all(|token| token_matches(campaign, token))
}

fn token_matches(campaign: &Campaign, token: &str) -> bool {
    let direct = campaign.description.to_lowercase().contains(token)
        || campaign.title.to_lowercase().contains(token);
    if direct {
        return true;
    }
    campaign.politicians.iter().any(|politician| {
        let region = regions::region_name(&politician.state_code).unwrap_or("");
        politician.name.to_lowercase().contains(token)
            || region.to_lowercase().contains(token)
            || politician.state_code.to_lowercase().contains(token)
    })
}
