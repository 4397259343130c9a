pub mod gemini;
pub mod mock;

use anyhow::{Result, anyhow};
use async_trait::async_trait;
use serde::Deserialize;
use tracing::warn;

use crate::consts::MAX_MATCHES;

/// One model-produced match: an offer id paired with a relevance score and
/// a short explanation. Lives only for the duration of a query.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchResult {
    /// 1-based offer id, guaranteed by [`parse_matches`] to fall within
    /// the catalog.
    pub id: usize,
    /// Relevance in percent, clamped into `0..=100`.
    pub relevance_score: u8,
    pub reason: String,
}

/// The borrowed judgement. Could be Gemini, or a script in tests.
#[async_trait]
pub trait Matcher: Send + Sync {
    /// Send one prompt to the model and return the raw completion text.
    /// One best-effort call: no retries, no backoff, no app-level timeout.
    async fn complete(&self, prompt: &str) -> Result<String>;
}

/// Shape the model is asked to produce, one array element per match.
#[derive(Deserialize)]
struct RawMatch {
    id: i64,
    relevance_score: i64,
    reason: String,
}

/// Parse completion text into match results.
///
/// Fails closed: the text must be a JSON array of objects with integer
/// `id`, integer `relevance_score` and string `reason` (optionally wrapped
/// in markdown fences), or the whole response is rejected. The text is
/// never evaluated or interpreted as anything but data.
///
/// Entries whose id falls outside `[1, catalog_len]` are skipped with a
/// warning; scores outside `0..=100` are clamped. At most
/// [`MAX_MATCHES`] entries are kept.
pub fn parse_matches(text: &str, catalog_len: usize) -> Result<Vec<MatchResult>> {
    let json = extract_json(text);

    let raw: Vec<RawMatch> = serde_json::from_str(json)
        .map_err(|e| anyhow!("model response is not a valid match list: {}\nraw: {}", e, text))?;

    let mut matches = Vec::new();
    for entry in raw {
        if entry.id < 1 || entry.id as usize > catalog_len {
            warn!(id = entry.id, catalog_len, "skipping match with out-of-range offer id");
            continue;
        }

        let score = entry.relevance_score.clamp(0, 100) as u8;
        if i64::from(score) != entry.relevance_score {
            warn!(
                id = entry.id,
                relevance_score = entry.relevance_score,
                "clamped out-of-range relevance score"
            );
        }

        matches.push(MatchResult {
            id: entry.id as usize,
            relevance_score: score,
            reason: entry.reason,
        });

        if matches.len() == MAX_MATCHES {
            break;
        }
    }

    Ok(matches)
}

/// Extract JSON from text that may be wrapped in markdown code fences.
fn extract_json(text: &str) -> &str {
    let trimmed = text.trim();

    if let Some(after) = trimmed.strip_prefix("```json")
        && let Some(json) = after.strip_suffix("```")
    {
        return json.trim();
    }
    if let Some(after) = trimmed.strip_prefix("```")
        && let Some(json) = after.strip_suffix("```")
    {
        return json.trim();
    }

    trimmed
}
