//! HTML rendering for the web shell. Plain string assembly — the pages are
//! two screens of markup, not worth a template engine.

use crate::engine::ScoredOffer;

const STYLE: &str = "body{font-family:sans-serif;max-width:640px;margin:2rem auto;padding:0 1rem}\
input[type=text]{width:100%;padding:.5rem;box-sizing:border-box}\
button{margin-top:.5rem;padding:.5rem 1rem}\
details{border:1px solid #ccc;border-radius:4px;margin:.5rem 0;padding:.5rem}\
summary{cursor:pointer;font-weight:bold}\
.warning{background:#fff3cd;padding:.75rem;border-radius:4px}\
.error{background:#f8d7da;padding:.75rem;border-radius:4px}\
.info{background:#d1ecf1;padding:.75rem;border-radius:4px}";

/// A one-line message shown above the results.
#[derive(Debug, Clone, PartialEq)]
pub enum Notice {
    Warning(String),
    Error(String),
    Info(String),
}

impl Notice {
    fn class(&self) -> &'static str {
        match self {
            Notice::Warning(_) => "warning",
            Notice::Error(_) => "error",
            Notice::Info(_) => "info",
        }
    }

    fn message(&self) -> &str {
        match self {
            Notice::Warning(m) | Notice::Error(m) | Notice::Info(m) => m,
        }
    }
}

/// Escape text for interpolation into HTML. Everything that came from the
/// user, the dataset or the model goes through here.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

fn page(body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\"><head><meta charset=\"utf-8\">\
         <title>Spare Capacity Marketplace</title><style>{STYLE}</style></head>\
         <body><h1>Open Innovation Marketplace for Spare Capacity</h1>\
         <p>Find unused logistics capacity fast.</p>{body}</body></html>"
    )
}

fn form(query: &str) -> String {
    format!(
        "<form method=\"post\" action=\"/match\">\
         <label for=\"query\">Describe your need:</label>\
         <input type=\"text\" id=\"query\" name=\"query\" value=\"{}\" \
         placeholder=\"E.g., Looking for 10 tons of truck space from Delhi to Kolkata\">\
         <button type=\"submit\">Find Matches</button></form>",
        escape_html(query)
    )
}

/// The landing page: just the form.
pub fn render_index() -> String {
    page(&form(""))
}

/// The results page: form (pre-filled), optional notice, one expandable
/// block per match.
pub fn render_results(query: &str, matches: &[ScoredOffer], notice: Option<&Notice>) -> String {
    let mut body = form(query);

    if let Some(notice) = notice {
        body.push_str(&format!(
            "<p class=\"{}\">{}</p>",
            notice.class(),
            escape_html(notice.message())
        ));
    }

    if !matches.is_empty() {
        body.push_str("<h2>Top Matches Found:</h2>");
        for m in matches {
            body.push_str(&render_match(m));
        }
    }

    page(&body)
}

fn render_match(m: &ScoredOffer) -> String {
    format!(
        "<details><summary>Match #{id} - {score}% Relevance</summary>\
         <p><strong>Type:</strong> {offer_type}</p>\
         <p><strong>Location:</strong> {location}</p>\
         <p><strong>Description:</strong> {description}</p>\
         <p><strong>Availability:</strong> {from} to {to}</p>\
         <p><strong>AI Reasoning:</strong> {reason}</p></details>",
        id = m.id,
        score = m.relevance_score,
        offer_type = escape_html(&m.offer.offer_type),
        location = escape_html(&m.offer.location),
        description = escape_html(&m.offer.description),
        from = escape_html(&m.offer.available_from),
        to = escape_html(&m.offer.available_to),
        reason = escape_html(&m.reason),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Offer;

    fn scored_offer() -> ScoredOffer {
        ScoredOffer {
            id: 1,
            relevance_score: 85,
            reason: "matches capacity and origin".to_string(),
            offer: Offer {
                offer_type: "Truck".to_string(),
                location: "Delhi".to_string(),
                description: "10 ton space".to_string(),
                available_from: "2024-01-01".to_string(),
                available_to: "2024-01-10".to_string(),
            },
        }
    }

    #[test]
    fn escape_html_covers_specials() {
        assert_eq!(
            escape_html(r#"<b>"a" & 'b'</b>"#),
            "&lt;b&gt;&quot;a&quot; &amp; &#39;b&#39;&lt;/b&gt;"
        );
    }

    #[test]
    fn escape_html_passes_plain_text() {
        assert_eq!(escape_html("10 tons Delhi"), "10 tons Delhi");
    }

    #[test]
    fn index_has_form() {
        let html = render_index();
        assert!(html.contains("action=\"/match\""));
        assert!(html.contains("name=\"query\""));
        assert!(html.contains("Find Matches"));
    }

    #[test]
    fn results_render_expandable_match() {
        let html = render_results("need 10 tons", &[scored_offer()], None);
        assert!(html.contains("<summary>Match #1 - 85% Relevance</summary>"));
        assert!(html.contains("<strong>Type:</strong> Truck"));
        assert!(html.contains("<strong>Location:</strong> Delhi"));
        assert!(html.contains("<strong>Description:</strong> 10 ton space"));
        assert!(html.contains("<strong>Availability:</strong> 2024-01-01 to 2024-01-10"));
        assert!(html.contains("<strong>AI Reasoning:</strong> matches capacity and origin"));
    }

    #[test]
    fn results_keep_query_in_form() {
        let html = render_results("need 10 tons", &[], None);
        assert!(html.contains("value=\"need 10 tons\""));
    }

    #[test]
    fn results_show_notice() {
        let notice = Notice::Warning("Please enter a search query.".to_string());
        let html = render_results("", &[], Some(&notice));
        assert!(html.contains("class=\"warning\""));
        assert!(html.contains("Please enter a search query."));
    }

    #[test]
    fn model_text_is_escaped() {
        let mut m = scored_offer();
        m.reason = "<script>alert(1)</script>".to_string();
        let html = render_results("q", &[m], None);
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn query_is_escaped_in_form() {
        let html = render_results("\"><script>", &[], None);
        assert!(!html.contains("\"><script>"));
    }
}
