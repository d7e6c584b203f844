use crate::detection::ScoreBreakdown;
use serde::{Deserialize, Serialize};
use std::fmt;

const HIGH_THRESHOLD: u32 = 70;
const MEDIUM_THRESHOLD: u32 = 40;

/// Three-band classification of the total score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    /// Boundary-inclusive on the lower edge of each band.
    pub fn from_score(total: u32) -> Self {
        if total >= HIGH_THRESHOLD {
            RiskLevel::High
        } else if total >= MEDIUM_THRESHOLD {
            RiskLevel::Medium
        } else {
            RiskLevel::Low
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RiskLevel::Low => write!(f, "low"),
            RiskLevel::Medium => write!(f, "medium"),
            RiskLevel::High => write!(f, "high"),
        }
    }
}

/// The analysis verdict for one message. Immutable once returned; the field
/// names are the serialized report contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndicatorReport {
    pub subject: String,
    #[serde(rename = "from")]
    pub from_header: String,
    pub scores: ScoreBreakdown,
    pub total_score: u32,
    pub risk_level: RiskLevel,
    pub url_count: usize,
    pub suspicious_urls: Vec<String>,
}
