use crate::eol_analysis::domain::{Severity, Vulnerability};
use std::cmp::Ordering;

/// SeverityRank policy for ordering vulnerabilities by urgency
///
/// Rank order:
/// 1. critical (4)
/// 2. high (3)
/// 3. medium (2)
/// 4. low (1)
/// 5. anything unrecognized (0)
///
/// Within the same rank, a higher score comes first.
pub struct SeverityRank;

impl SeverityRank {
    /// Numeric rank of a severity, higher is more severe
    pub fn of(severity: &Severity) -> u8 {
        match severity {
            Severity::Critical => 4,
            Severity::High => 3,
            Severity::Medium => 2,
            Severity::Low => 1,
            Severity::Other(_) => 0,
        }
    }

    /// Most urgent first: rank descending, then score descending
    ///
    /// Returns `Equal` for the same rank and score, so a stable sort keeps
    /// their original order.
    pub fn most_urgent_first(a: &Vulnerability, b: &Vulnerability) -> Ordering {
        Self::of(&b.severity)
            .cmp(&Self::of(&a.severity))
            .then_with(|| b.score.total_cmp(&a.score))
    }
}
