use super::vulnerability::{Severity, Vulnerability};
use serde::Serialize;
use std::collections::BTreeMap;

/// Count of vulnerabilities per severity
///
/// Only severities that actually occur are present; a missing severity is
/// never stored as zero. Iteration order is critical, high, medium, low,
/// then unrecognized severities.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SeverityBreakdown(BTreeMap<Severity, usize>);

impl SeverityBreakdown {
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts every vulnerability in the iterator
    pub fn from_vulnerabilities<'a, I>(vulnerabilities: I) -> Self
    where
        I: IntoIterator<Item = &'a Vulnerability>,
    {
        let mut breakdown = Self::new();
        for vulnerability in vulnerabilities {
            breakdown.record(&vulnerability.severity);
        }
        breakdown
    }

    pub fn record(&mut self, severity: &Severity) {
        *self.0.entry(severity.clone()).or_insert(0) += 1;
    }

    /// Adds all counts from another breakdown into this one
    pub fn merge(&mut self, other: &SeverityBreakdown) {
        for (severity, count) in &other.0 {
            *self.0.entry(severity.clone()).or_insert(0) += count;
        }
    }

    /// Count for a severity, 0 when absent
    pub fn get(&self, severity: &Severity) -> usize {
        self.0.get(severity).copied().unwrap_or(0)
    }

    pub fn contains(&self, severity: &Severity) -> bool {
        self.0.contains_key(severity)
    }

    pub fn total(&self) -> usize {
        self.0.values().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Severity, usize)> {
        self.0.iter().map(|(severity, count)| (severity, *count))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vuln(severity: &str) -> Vulnerability {
        Vulnerability::new("CVE-TEST", Severity::from(severity), 5.0)
    }

    #[test]
    fn test_empty_breakdown() {
        let breakdown = SeverityBreakdown::new();
        assert!(breakdown.is_empty());
        assert_eq!(breakdown.total(), 0);
        assert_eq!(breakdown.get(&Severity::Critical), 0);
    }

    #[test]
    fn test_absent_severities_are_not_zero_filled() {
        let vulns = [vuln("high"), vuln("high")];
        let breakdown = SeverityBreakdown::from_vulnerabilities(&vulns);
        assert_eq!(breakdown.len(), 1);
        assert!(!breakdown.contains(&Severity::Low));
        assert_eq!(breakdown.get(&Severity::High), 2);
    }

    #[test]
    fn test_merge_sums_counts() {
        let mut left = SeverityBreakdown::from_vulnerabilities(&[vuln("low"), vuln("critical")]);
        let right = SeverityBreakdown::from_vulnerabilities(&[vuln("critical")]);
        left.merge(&right);
        assert_eq!(left.get(&Severity::Critical), 2);
        assert_eq!(left.get(&Severity::Low), 1);
        assert_eq!(left.total(), 3);
    }

    #[test]
    fn test_iteration_is_most_severe_first() {
        let vulns = [vuln("low"), vuln("weird"), vuln("critical"), vuln("medium")];
        let breakdown = SeverityBreakdown::from_vulnerabilities(&vulns);
        let order: Vec<&str> = breakdown.iter().map(|(s, _)| s.as_str()).collect();
        assert_eq!(order, vec!["critical", "medium", "low", "weird"]);
    }

    #[test]
    fn test_serializes_as_string_keyed_map() {
        let breakdown = SeverityBreakdown::from_vulnerabilities(&[vuln("critical")]);
        let json = serde_json::to_string(&breakdown).unwrap();
        assert_eq!(json, r#"{"critical":1}"#);
    }
}
