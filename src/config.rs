use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Scoring rule data: the term vocabularies and TLD set the detectors match
/// against. Kept out of the detector logic so rules can be tuned from a YAML
/// file without a rebuild.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScoringConfig {
    /// Terms that signal manufactured urgency ("act now" pressure).
    #[serde(default = "default_urgency_terms")]
    pub urgency_terms: Vec<String>,
    /// Terms that signal a common phishing lure (money, credentials).
    #[serde(default = "default_lure_terms")]
    pub lure_terms: Vec<String>,
    /// TLDs with disproportionate abuse rates.
    #[serde(default = "default_risk_tlds")]
    pub risk_tlds: Vec<String>,
}

fn default_urgency_terms() -> Vec<String> {
    [
        "urgent",
        "immediately",
        "action required",
        "verify",
        "password",
        "suspend",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

fn default_lure_terms() -> Vec<String> {
    [
        "invoice", "payment", "refund", "account", "security", "update",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

fn default_risk_tlds() -> Vec<String> {
    ["zip", "kim", "work", "top"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

impl Default for ScoringConfig {
    fn default() -> Self {
        ScoringConfig {
            urgency_terms: default_urgency_terms(),
            lure_terms: default_lure_terms(),
            risk_tlds: default_risk_tlds(),
        }
    }
}

impl ScoringConfig {
    pub fn load_from_file(path: &Path) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: ScoringConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Write the built-in defaults out as YAML so an operator has a complete
    /// file to edit.
    pub fn generate_default(path: &Path) -> anyhow::Result<()> {
        let yaml = serde_yaml::to_string(&ScoringConfig::default())?;
        fs::write(path, yaml)?;
        Ok(())
    }

    pub fn is_risk_tld(&self, suffix: &str) -> bool {
        self.risk_tlds.iter().any(|t| t == suffix)
    }
}
