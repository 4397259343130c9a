use crate::catalog::Catalog;

const INTRO: &str =
    "You are an AI assistant helping to find the best matching spare capacity offers.";
const TASK_HEADER: &str = "Task:";
const TASKS: &[&str] = &[
    "Identify which offers most closely match the user's request.",
    "Return a list of up to 5 offers with a relevance score (0-100) and a short explanation.",
];
const FORMAT_HEADER: &str = "Format your response strictly as a JSON array in this structure:";
const FORMAT: &str = r#"[{"id": <int>, "relevance_score": <int>, "reason": "<explanation>"}]"#;
const RULES: &str = "Output JSON only. No markdown, no extra text, no extra keys.";

/// Render the user request and the full catalog into one instruction block.
///
/// Every offer is included, enumerated by its 1-based id — no filtering or
/// truncation happens here, so the prompt grows linearly with the catalog.
/// Fine for the small datasets this is meant for; it will not scale past
/// them and deliberately does not try to.
pub fn build_matching_prompt(query: &str, catalog: &Catalog) -> String {
    let mut offers_desc = String::new();
    for (idx, offer) in catalog.iter().enumerate() {
        offers_desc.push_str(&format!(
            "{}. [{}] in {} | {} | Available: {} to {}\n",
            idx + 1,
            offer.offer_type,
            offer.location,
            offer.description,
            offer.available_from,
            offer.available_to,
        ));
    }

    let tasks = TASKS
        .iter()
        .enumerate()
        .map(|(i, task)| format!("{}. {}", i + 1, task))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "{intro}\n\nUser Request: \"{query}\"\n\nHere are the available offers:\n{offers_desc}\n{task_header}\n{tasks}\n\n{format_header}\n{format}\n{rules}\n",
        intro = INTRO,
        query = query,
        offers_desc = offers_desc,
        task_header = TASK_HEADER,
        tasks = tasks,
        format_header = FORMAT_HEADER,
        format = FORMAT,
        rules = RULES
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Offer;
    use crate::consts::MAX_MATCHES;

    fn offer(offer_type: &str, location: &str) -> Offer {
        Offer {
            offer_type: offer_type.to_string(),
            location: location.to_string(),
            description: "some capacity".to_string(),
            available_from: "2024-01-01".to_string(),
            available_to: "2024-01-10".to_string(),
        }
    }

    #[test]
    fn prompt_lists_every_offer_once_in_order() {
        let catalog = Catalog::from_offers(vec![
            offer("Truck", "Delhi"),
            offer("Warehouse", "Mumbai"),
            offer("Van", "Pune"),
        ]);

        let prompt = build_matching_prompt("need space", &catalog);
        for id in 1..=3 {
            assert_eq!(
                prompt.matches(&format!("{}. [", id)).count(),
                1,
                "offer id {} should appear exactly once",
                id
            );
        }
        let first = prompt.find("1. [Truck]").unwrap();
        let second = prompt.find("2. [Warehouse]").unwrap();
        let third = prompt.find("3. [Van]").unwrap();
        assert!(first < second && second < third);
    }

    #[test]
    fn prompt_contains_verbatim_query() {
        let catalog = Catalog::from_offers(vec![offer("Truck", "Delhi")]);
        let prompt = build_matching_prompt("need 10 tons Delhi to Kolkata", &catalog);
        assert!(prompt.contains("User Request: \"need 10 tons Delhi to Kolkata\""));
    }

    #[test]
    fn prompt_renders_offer_fields() {
        let catalog = Catalog::from_offers(vec![offer("Truck", "Delhi")]);
        let prompt = build_matching_prompt("anything", &catalog);
        assert!(prompt.contains("1. [Truck] in Delhi | some capacity | Available: 2024-01-01 to 2024-01-10"));
    }

    #[test]
    fn prompt_states_output_contract() {
        let catalog = Catalog::from_offers(vec![offer("Truck", "Delhi")]);
        let prompt = build_matching_prompt("anything", &catalog);
        assert!(prompt.contains("\"id\""));
        assert!(prompt.contains("\"relevance_score\""));
        assert!(prompt.contains("\"reason\""));
        assert!(prompt.contains(&format!("up to {}", MAX_MATCHES)));
    }

    #[test]
    fn prompt_has_no_markdown_fences() {
        let catalog = Catalog::from_offers(vec![offer("Truck", "Delhi")]);
        let prompt = build_matching_prompt("anything", &catalog);
        assert!(!prompt.contains("```"));
    }
}
