use crate::config::ScoringConfig;
use crate::domain_utils::DomainParser;

use lazy_static::lazy_static;
use regex::Regex;
use url::Url;

lazy_static! {
    static ref URL_REGEX: Regex =
        Regex::new(r"(?i)https?://[\w\-.:/?#%&=+]+").expect("static URL pattern");
    static ref DIGIT_RUN_REGEX: Regex = Regex::new(r"\d{5,}").expect("static digit pattern");
}

const LONG_DOMAIN_SCORE: u32 = 5;
const PUNYCODE_SCORE: u32 = 10;
const RISK_TLD_SCORE: u32 = 5;
const DIGIT_RUN_SCORE: u32 = 5;
const URL_SCORE_CAP: u32 = 30;

const PUNYCODE_PREFIX: &str = "xn--";
const LONG_DOMAIN_THRESHOLD: usize = 20;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct UrlAnalysis {
    /// Summed per-URL scores, capped at 30 for the whole message.
    pub score: u32,
    /// URLs whose own score was non-zero, in extraction order.
    pub suspicious_urls: Vec<String>,
    /// Every extracted URL, duplicates included.
    pub url_count: usize,
}

/// Extract URL-like substrings from the body and score each one against the
/// domain heuristics. Each URL is scored in isolation; only URLs that score
/// on their own merits are flagged, and the cap applies to the summed total
/// afterwards.
pub fn analyze_urls(body: &str, config: &ScoringConfig, domains: &DomainParser) -> UrlAnalysis {
    let mut analysis = UrlAnalysis::default();
    let mut total = 0u32;

    for m in URL_REGEX.find_iter(body) {
        let raw = m.as_str();
        analysis.url_count += 1;

        let url_score = score_url(raw, config, domains);
        if url_score > 0 {
            analysis.suspicious_urls.push(raw.to_string());
        }
        total += url_score;
    }

    analysis.score = total.min(URL_SCORE_CAP);
    analysis
}

fn score_url(raw: &str, config: &ScoringConfig, domains: &DomainParser) -> u32 {
    // Unparseable hosts degrade to empty parts rather than erroring out
    let host = Url::parse(raw)
        .ok()
        .and_then(|u| u.host_str().map(|h| h.to_string()))
        .unwrap_or_default();
    let parts = domains.parse(&host);
    let registrable = parts.registrable();

    let mut score = 0;
    if registrable.len() > LONG_DOMAIN_THRESHOLD {
        score += LONG_DOMAIN_SCORE;
    }
    if parts.domain.starts_with(PUNYCODE_PREFIX) {
        score += PUNYCODE_SCORE;
    }
    if !parts.suffix.is_empty() && config.is_risk_tld(&parts.suffix) {
        score += RISK_TLD_SCORE;
    }
    if DIGIT_RUN_REGEX.is_match(&registrable) {
        score += DIGIT_RUN_SCORE;
    }

    if score > 0 {
        log::debug!("suspicious url {raw} ({registrable}): +{score}");
    }
    score
}
