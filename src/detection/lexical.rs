use crate::config::ScoringConfig;

const URGENCY_WEIGHT: u32 = 5;
const URGENCY_CAP: u32 = 25;
const LURE_WEIGHT: u32 = 3;
const LURE_CAP: u32 = 15;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LexicalScores {
    pub body_urgency: u32,
    pub lexical: u32,
}

/// Scan the body for the two configured vocabularies. Matching is
/// case-insensitive substring containment (a term inside a larger word still
/// counts); each term counts at most once no matter how often it repeats.
pub fn analyze_body(body: &str, config: &ScoringConfig) -> LexicalScores {
    let body_lower = body.to_lowercase();

    let urgency_hits = count_distinct_terms(&body_lower, &config.urgency_terms);
    let lure_hits = count_distinct_terms(&body_lower, &config.lure_terms);

    LexicalScores {
        body_urgency: (urgency_hits * URGENCY_WEIGHT).min(URGENCY_CAP),
        lexical: (lure_hits * LURE_WEIGHT).min(LURE_CAP),
    }
}

fn count_distinct_terms(body_lower: &str, terms: &[String]) -> u32 {
    terms
        .iter()
        .filter(|term| body_lower.contains(&term.to_lowercase()))
        .count() as u32
}
