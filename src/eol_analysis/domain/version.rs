use super::severity_breakdown::SeverityBreakdown;
use super::vulnerability::{Severity, Vulnerability};
use serde::{Deserialize, Serialize};

/// Support lifecycle status of a released version
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum VersionStatus {
    Current,
    Maintenance,
    EndOfLife,
    Deprecated,
    Other(String),
}

impl VersionStatus {
    pub fn as_str(&self) -> &str {
        match self {
            VersionStatus::Current => "current",
            VersionStatus::Maintenance => "maintenance",
            VersionStatus::EndOfLife => "end-of-life",
            VersionStatus::Deprecated => "deprecated",
            VersionStatus::Other(raw) => raw,
        }
    }

    pub fn is_end_of_life(&self) -> bool {
        matches!(self, VersionStatus::EndOfLife)
    }
}

impl From<String> for VersionStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "current" => VersionStatus::Current,
            "maintenance" => VersionStatus::Maintenance,
            "end-of-life" => VersionStatus::EndOfLife,
            "deprecated" => VersionStatus::Deprecated,
            _ => VersionStatus::Other(value),
        }
    }
}

impl From<&str> for VersionStatus {
    fn from(value: &str) -> Self {
        VersionStatus::from(value.to_string())
    }
}

impl From<VersionStatus> for String {
    fn from(status: VersionStatus) -> Self {
        match status {
            VersionStatus::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl std::fmt::Display for VersionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One released version of a package
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Version {
    pub version: String,
    pub status: VersionStatus,
    #[serde(default)]
    pub release_date: String,
    #[serde(default)]
    pub hero_devs_supported: bool,
    #[serde(default)]
    pub vulnerabilities: Vec<Vulnerability>,
}

impl Version {
    pub fn new(version: impl Into<String>, status: VersionStatus) -> Self {
        Self {
            version: version.into(),
            status,
            release_date: String::new(),
            hero_devs_supported: false,
            vulnerabilities: Vec::new(),
        }
    }

    pub fn with_release_date(mut self, release_date: impl Into<String>) -> Self {
        self.release_date = release_date.into();
        self
    }

    pub fn with_hero_devs_support(mut self, supported: bool) -> Self {
        self.hero_devs_supported = supported;
        self
    }

    pub fn with_vulnerability(mut self, vulnerability: Vulnerability) -> Self {
        self.vulnerabilities.push(vulnerability);
        self
    }

    pub fn is_end_of_life(&self) -> bool {
        self.status.is_end_of_life()
    }

    pub fn vulnerability_count(&self) -> usize {
        self.vulnerabilities.len()
    }

    /// Number of this version's vulnerabilities with the given severity
    pub fn count_with_severity(&self, severity: &Severity) -> usize {
        self.vulnerabilities
            .iter()
            .filter(|v| &v.severity == severity)
            .count()
    }

    /// Highest score among this version's vulnerabilities, 0 when none
    pub fn max_score(&self) -> f64 {
        self.vulnerabilities
            .iter()
            .fold(0.0, |max, v| f64::max(max, v.score))
    }

    pub fn severity_breakdown(&self) -> SeverityBreakdown {
        SeverityBreakdown::from_vulnerabilities(&self.vulnerabilities)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_round_trip_known_values() {
        for raw in ["current", "maintenance", "end-of-life", "deprecated"] {
            let status = VersionStatus::from(raw);
            assert!(!matches!(status, VersionStatus::Other(_)));
            assert_eq!(status.as_str(), raw);
        }
    }

    #[test]
    fn test_status_unknown_kept_verbatim() {
        let status = VersionStatus::from("beta");
        assert_eq!(status, VersionStatus::Other("beta".to_string()));
        assert!(!status.is_end_of_life());
    }

    #[test]
    fn test_deserialize_camel_case_fields() {
        let json = r#"{
            "version": "4.17.21",
            "status": "end-of-life",
            "releaseDate": "2021-02-20",
            "heroDevsSupported": true,
            "vulnerabilities": [{"cve": "CVE-1", "severity": "low", "score": 2.0}]
        }"#;
        let version: Version = serde_json::from_str(json).unwrap();
        assert_eq!(version.version, "4.17.21");
        assert!(version.is_end_of_life());
        assert_eq!(version.release_date, "2021-02-20");
        assert!(version.hero_devs_supported);
        assert_eq!(version.vulnerability_count(), 1);
    }

    #[test]
    fn test_deserialize_missing_optional_fields() {
        let json = r#"{"version": "1.0.0", "status": "current"}"#;
        let version: Version = serde_json::from_str(json).unwrap();
        assert!(version.release_date.is_empty());
        assert!(!version.hero_devs_supported);
        assert!(version.vulnerabilities.is_empty());
    }

    #[test]
    fn test_max_score_defaults_to_zero() {
        let version = Version::new("1.0.0", VersionStatus::Current);
        assert_eq!(version.max_score(), 0.0);
    }

    #[test]
    fn test_count_with_severity() {
        let version = Version::new("1.0.0", VersionStatus::Current)
            .with_vulnerability(Vulnerability::new("CVE-1", Severity::High, 7.0))
            .with_vulnerability(Vulnerability::new("CVE-2", Severity::High, 8.1))
            .with_vulnerability(Vulnerability::new("CVE-3", Severity::Low, 1.0));
        assert_eq!(version.count_with_severity(&Severity::High), 2);
        assert_eq!(version.count_with_severity(&Severity::Critical), 0);
        assert_eq!(version.max_score(), 8.1);
    }
}
