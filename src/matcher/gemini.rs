use anyhow::{Result, bail};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::Matcher;
use crate::consts::DEFAULT_MODEL;

const API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// A matcher that calls the Gemini generateContent API.
///
/// One plain request per query: fixed model, no sampling or length
/// parameters, no retries. Whatever timeout reqwest ships with is the only
/// one in play.
pub struct GeminiMatcher {
    model: String,
    api_key: String,
    client: reqwest::Client,
}

impl GeminiMatcher {
    /// The credential is taken up front so a missing key is a construction
    /// error at startup, not a surprise on the first query.
    pub fn new(api_key: String, model: Option<String>) -> Result<Self> {
        if api_key.trim().is_empty() {
            bail!("Gemini API key is empty. Set GEMINI_API_KEY.");
        }
        Ok(Self {
            model: model.unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            api_key,
            client: reqwest::Client::new(),
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl Matcher for GeminiMatcher {
    async fn complete(&self, prompt: &str) -> Result<String> {
        let url = format!("{}/{}:generateContent", API_BASE, self.model);

        let body = ApiRequest {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
        };

        let resp = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await?;

        if !resp.status().is_success() {
            let status = resp.status();
            let text = resp.text().await.unwrap_or_default();
            bail!("Gemini API error ({}): {}", status, text);
        }

        let api_resp: ApiResponse = resp.json().await?;

        // Concatenate the text parts of the first candidate
        let text: String = api_resp
            .candidates
            .into_iter()
            .next()
            .map(|candidate| {
                candidate
                    .content
                    .parts
                    .into_iter()
                    .filter_map(|part| part.text)
                    .collect::<Vec<_>>()
                    .join("")
            })
            .unwrap_or_default();

        if text.is_empty() {
            bail!("Gemini API returned empty response");
        }

        Ok(text)
    }
}

// --- API types ---

#[derive(Serialize)]
struct ApiRequest<'a> {
    contents: Vec<Content<'a>>,
}

#[derive(Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Deserialize)]
struct ApiResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    text: Option<String>,
}
