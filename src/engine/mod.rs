use std::sync::Arc;

use anyhow::Result;
use tracing::debug;

use crate::catalog::{Catalog, Offer};
use crate::matcher::{Matcher, parse_matches};
use crate::prompts::matching::build_matching_prompt;

/// A match joined back against its catalog row — what the shell renders.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredOffer {
    pub id: usize,
    pub relevance_score: u8,
    pub reason: String,
    pub offer: Offer,
}

/// The matching pipeline. Wires together the catalog, the prompt, a
/// Matcher and the response parser: one query in, scored offers out.
pub struct MatchEngine {
    matcher: Box<dyn Matcher>,
    catalog: Arc<Catalog>,
}

impl MatchEngine {
    pub fn new(matcher: Box<dyn Matcher>, catalog: Arc<Catalog>) -> Self {
        Self { matcher, catalog }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Run one matching query against the external model.
    ///
    /// Any failure — transport, service, or an unparseable completion —
    /// comes back as an error for the caller to surface; there is no retry
    /// and no partial result.
    pub async fn find_matches(&self, query: &str) -> Result<Vec<ScoredOffer>> {
        let prompt = build_matching_prompt(query, &self.catalog);
        debug!(prompt_chars = prompt.len(), offers = self.catalog.len(), "sending matching prompt");

        let completion = self.matcher.complete(&prompt).await?;
        let matches = parse_matches(&completion, self.catalog.len())?;
        debug!(matches = matches.len(), "parsed match results");

        // parse_matches already bounds-checked the ids, so every lookup hits
        Ok(matches
            .into_iter()
            .filter_map(|m| {
                self.catalog.get(m.id).map(|offer| ScoredOffer {
                    id: m.id,
                    relevance_score: m.relevance_score,
                    reason: m.reason,
                    offer: offer.clone(),
                })
            })
            .collect())
    }
}
