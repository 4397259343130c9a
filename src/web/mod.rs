//! The presentation shell: one form in, one results page out. Pure glue
//! around [`MatchEngine`] — all matching logic lives there.

pub mod render;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use axum::{
    Form, Router,
    extract::State,
    response::Html,
    routing::{get, post},
};
use serde::Deserialize;
use tracing::{error, info};

use crate::engine::MatchEngine;
use render::{Notice, render_index, render_results};

pub struct AppState {
    pub engine: MatchEngine,
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/match", post(find_matches))
        .with_state(state)
}

/// Bind and serve until the process is stopped.
pub async fn serve(addr: SocketAddr, state: Arc<AppState>) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "listening");
    axum::serve(listener, router(state)).await?;
    Ok(())
}

async fn index() -> Html<String> {
    Html(render_index())
}

#[derive(Deserialize)]
struct MatchForm {
    query: String,
}

async fn find_matches(
    State(state): State<Arc<AppState>>,
    Form(form): Form<MatchForm>,
) -> Html<String> {
    let query = form.query.trim();

    // Local validation: no external call for an empty query
    if query.is_empty() {
        let notice = Notice::Warning("Please enter a search query.".to_string());
        return Html(render_results(query, &[], Some(&notice)));
    }

    match state.engine.find_matches(query).await {
        Ok(matches) if matches.is_empty() => {
            let notice = Notice::Info("No relevant matches found.".to_string());
            Html(render_results(query, &[], Some(&notice)))
        }
        Ok(matches) => {
            info!(query, matches = matches.len(), "query matched");
            Html(render_results(query, &matches, None))
        }
        Err(e) => {
            // Failure is surfaced, not retried: the user sees the error and
            // an empty result
            error!(query, error = %e, "matching failed");
            let notice = Notice::Error(format!("Matching failed: {:#}", e));
            Html(render_results(query, &[], Some(&notice)))
        }
    }
}
