use crate::config::ScoringConfig;
use crate::detection::{headers, lexical, urls, ScoreBreakdown};
use crate::domain_utils::DomainParser;
use crate::message::MailContext;
use crate::report::{IndicatorReport, RiskLevel};

/// Runs the three detector families over a message snapshot and assembles
/// the classified report. Holds only rule data; every analysis call is a
/// pure function of the context, so contexts can be analyzed in parallel.
pub struct Analyzer {
    config: ScoringConfig,
    domains: DomainParser,
}

impl Analyzer {
    pub fn new(config: ScoringConfig) -> Self {
        Analyzer {
            config,
            domains: DomainParser::default(),
        }
    }

    pub fn with_domain_parser(config: ScoringConfig, domains: DomainParser) -> Self {
        Analyzer { config, domains }
    }

    pub fn analyze(&self, ctx: &MailContext) -> IndicatorReport {
        let header_anomalies = headers::analyze_headers(ctx);
        let lexical_scores = lexical::analyze_body(ctx.body_text(), &self.config);
        let url_analysis = urls::analyze_urls(ctx.body_text(), &self.config, &self.domains);

        let scores = ScoreBreakdown {
            header_anomalies,
            body_urgency: lexical_scores.body_urgency,
            suspicious_urls: url_analysis.score,
            lexical: lexical_scores.lexical,
        };
        let total_score = scores.total();
        let risk_level = RiskLevel::from_score(total_score);

        log::debug!(
            "headers={header_anomalies} urgency={} urls={} lexical={} total={total_score} -> {risk_level}",
            scores.body_urgency,
            scores.suspicious_urls,
            scores.lexical,
        );

        IndicatorReport {
            subject: ctx.subject_text().to_string(),
            from_header: ctx.from_text().to_string(),
            scores,
            total_score,
            risk_level,
            url_count: url_analysis.url_count,
            suspicious_urls: url_analysis.suspicious_urls,
        }
    }
}

impl Default for Analyzer {
    fn default() -> Self {
        Analyzer::new(ScoringConfig::default())
    }
}
