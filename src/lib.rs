pub mod analyzer;
pub mod config;
pub mod detection;
pub mod domain_utils;
pub mod message;
pub mod report;

pub use analyzer::Analyzer;
pub use config::ScoringConfig;
pub use detection::ScoreBreakdown;
pub use domain_utils::{DomainParser, DomainParts};
pub use message::MailContext;
pub use report::{IndicatorReport, RiskLevel};
