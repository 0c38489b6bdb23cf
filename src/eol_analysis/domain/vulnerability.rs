use serde::{Deserialize, Serialize};

/// Severity level of a vulnerability
///
/// The four known levels come from the dataset vocabulary. Anything else is
/// kept verbatim in `Other` so it can still be counted and ranked (lowest).
///
/// Variant order defines `Ord`, so ordered maps iterate critical first.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Severity {
    Critical,
    High,
    Medium,
    Low,
    Other(String),
}

impl Severity {
    pub fn as_str(&self) -> &str {
        match self {
            Severity::Critical => "critical",
            Severity::High => "high",
            Severity::Medium => "medium",
            Severity::Low => "low",
            Severity::Other(raw) => raw,
        }
    }
}

impl From<String> for Severity {
    fn from(value: String) -> Self {
        match value.as_str() {
            "critical" => Severity::Critical,
            "high" => Severity::High,
            "medium" => Severity::Medium,
            "low" => Severity::Low,
            _ => Severity::Other(value),
        }
    }
}

impl From<&str> for Severity {
    fn from(value: &str) -> Self {
        Severity::from(value.to_string())
    }
}

impl From<Severity> for String {
    fn from(severity: Severity) -> Self {
        match severity {
            Severity::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single known vulnerability affecting one version
///
/// `score` is a CVSS-like value (0-10). It is only used for max/sort and is
/// not checked against `severity`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vulnerability {
    pub cve: String,
    pub severity: Severity,
    pub score: f64,
}

impl Vulnerability {
    pub fn new(cve: impl Into<String>, severity: Severity, score: f64) -> Self {
        Self {
            cve: cve.into(),
            severity,
            score,
        }
    }
}
