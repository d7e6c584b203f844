pub mod headers;
pub mod lexical;
pub mod urls;

use serde::{Deserialize, Serialize};

/// The four independent sub-scores. Each counter only ever grows during a
/// pass; `body_urgency`, `lexical` and `suspicious_urls` arrive here already
/// capped by their detectors, `header_anomalies` is uncapped.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub header_anomalies: u32,
    pub body_urgency: u32,
    pub suspicious_urls: u32,
    pub lexical: u32,
}

impl ScoreBreakdown {
    pub fn total(&self) -> u32 {
        self.header_anomalies + self.body_urgency + self.suspicious_urls + self.lexical
    }
}
