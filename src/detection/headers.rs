use crate::message::MailContext;

const MISSING_RELAY_SCORE: u32 = 15;
const SPF_FAIL_SCORE: u32 = 15;

/// Header anomaly sub-score. A legitimate message normally accumulates
/// several Received relay hops; near-absence is anomalous. Both rules are
/// additive and the result is uncapped.
pub fn analyze_headers(ctx: &MailContext) -> u32 {
    let mut score = 0;

    if ctx.received_count() <= 1 {
        score += MISSING_RELAY_SCORE;
    }

    if ctx
        .authentication_results_text()
        .to_lowercase()
        .contains("spf=fail")
    {
        score += SPF_FAIL_SCORE;
    }

    score
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx_with(received: usize, auth: Option<&str>) -> MailContext {
        MailContext {
            received: (0..received).map(|i| format!("from hop{i}")).collect(),
            authentication_results: auth.map(|s| s.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_few_received_headers_scores() {
        assert_eq!(analyze_headers(&ctx_with(0, None)), 15);
        assert_eq!(analyze_headers(&ctx_with(1, None)), 15);
        assert_eq!(analyze_headers(&ctx_with(2, None)), 0);
        assert_eq!(analyze_headers(&ctx_with(5, None)), 0);
    }

    #[test]
    fn test_spf_fail_scores() {
        let auth = "mx.example.org; spf=fail smtp.mailfrom=bad.example";
        assert_eq!(analyze_headers(&ctx_with(3, Some(auth))), 15);
        let pass = "mx.example.org; spf=pass smtp.mailfrom=example.net";
        assert_eq!(analyze_headers(&ctx_with(3, Some(pass))), 0);
    }

    #[test]
    fn test_spf_fail_match_is_case_insensitive() {
        let auth = "mx.example.org; SPF=FAIL";
        assert_eq!(analyze_headers(&ctx_with(3, Some(auth))), 15);
    }

    #[test]
    fn test_rules_are_additive() {
        let auth = "mx.example.org; spf=fail";
        assert_eq!(analyze_headers(&ctx_with(1, Some(auth))), 30);
    }
}
