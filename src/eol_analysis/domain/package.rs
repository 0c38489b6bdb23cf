use super::severity_breakdown::SeverityBreakdown;
use super::version::Version;
use super::vulnerability::Vulnerability;
use serde::{Deserialize, Serialize};

/// A package and its released versions
///
/// `versions[0]` is treated as the latest version. No date-based resolution
/// is performed; the dataset order is authoritative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Package {
    pub name: String,
    #[serde(default)]
    pub versions: Vec<Version>,
}

impl Package {
    pub fn new(name: impl Into<String>, versions: Vec<Version>) -> Self {
        Self {
            name: name.into(),
            versions,
        }
    }

    pub fn latest_version(&self) -> Option<&Version> {
        self.versions.first()
    }

    /// True when at least one version is end-of-life
    pub fn has_end_of_life_version(&self) -> bool {
        self.versions.iter().any(Version::is_end_of_life)
    }

    pub fn eol_version_count(&self) -> usize {
        self.versions.iter().filter(|v| v.is_end_of_life()).count()
    }

    /// True when at least one version is covered by HeroDevs NES
    pub fn has_hero_devs_support(&self) -> bool {
        self.versions.iter().any(|v| v.hero_devs_supported)
    }

    pub fn total_vulnerabilities(&self) -> usize {
        self.versions.iter().map(Version::vulnerability_count).sum()
    }

    pub fn max_severity_score(&self) -> f64 {
        self.versions
            .iter()
            .fold(0.0, |max, v| f64::max(max, v.max_score()))
    }

    /// Every vulnerability of every version, in version order
    pub fn vulnerabilities(&self) -> impl Iterator<Item = (&Version, &Vulnerability)> {
        self.versions
            .iter()
            .flat_map(|version| version.vulnerabilities.iter().map(move |v| (version, v)))
    }

    pub fn severity_breakdown(&self) -> SeverityBreakdown {
        SeverityBreakdown::from_vulnerabilities(self.vulnerabilities().map(|(_, v)| v))
    }
}
