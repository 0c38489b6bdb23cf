use crate::application::view_models::{
    EcosystemPageView, EmptyListReason, HomePageView, PackagePageView,
};
use crate::eol_analysis::domain::{Severity, SeverityBreakdown, Version};
use crate::eol_analysis::services::{
    EcosystemSummary, FlattenedVulnerability, PackageDetail, PackageSummary, SortField, SortState,
    UNKNOWN_STATUS,
};
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;

/// Markdown table header for the ecosystem overview
const ECOSYSTEM_TABLE_HEADER: &str =
    "| Ecosystem | Packages | EOL Packages | Vulnerabilities | HeroDevs NES | By Severity |\n";
const ECOSYSTEM_TABLE_SEPARATOR: &str =
    "|-----------|----------|--------------|-----------------|--------------|-------------|\n";

/// Markdown table header for the package list
const PACKAGE_TABLE_HEADER: &str =
    "| Package Name | Latest Version | Status | EOL Versions | Vulnerabilities | HeroDevs NES |\n";
const PACKAGE_TABLE_SEPARATOR: &str =
    "|--------------|----------------|--------|--------------|-----------------|--------------|\n";

/// Markdown table header for the version history of a package
const VERSION_TABLE_HEADER: &str =
    "| Version | Status | Release Date | Vulnerabilities | Critical | High | Medium | Low | NES |\n";
const VERSION_TABLE_SEPARATOR: &str =
    "|---------|--------|--------------|-----------------|----------|------|--------|-----|-----|\n";

/// Markdown table header for the flattened vulnerability list
const VULN_TABLE_HEADER: &str = "| CVE ID | Severity | CVSS | Affected Version |\n";
const VULN_TABLE_SEPARATOR: &str = "|--------|----------|------|------------------|\n";

const NOT_AVAILABLE: &str = "N/A";

/// MarkdownFormatter adapter rendering page views as Markdown tables
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Escapes pipe characters and newlines for safe Markdown table rendering
    fn escape_markdown_table_cell(text: &str) -> String {
        text.replace('|', "\\|").replace('\n', " ")
    }

    fn ecosystem_icon(ecosystem: &str) -> &'static str {
        match ecosystem.to_lowercase().as_str() {
            "maven" => "☕",
            "ruby" => "💎",
            "pip" => "🐍",
            "apt" => "🐧",
            "snapd" | "flatpak" => "📱",
            _ => "📦",
        }
    }

    fn severity_badge(severity: &Severity) -> &'static str {
        match severity {
            Severity::Critical => "🔴",
            Severity::High => "🟠",
            Severity::Medium => "🟡",
            Severity::Low => "🔵",
            Severity::Other(_) => "⚪",
        }
    }

    /// Uppercases the first character of each run of letters and digits and
    /// lowercases the rest (`end-of-life` -> `End-Of-Life`)
    fn title_case(text: &str) -> String {
        let mut word_start = true;
        text.chars()
            .flat_map(|c| {
                let cased: Vec<char> = if !c.is_alphanumeric() {
                    vec![c]
                } else if word_start {
                    c.to_uppercase().collect()
                } else {
                    c.to_lowercase().collect()
                };
                word_start = !c.is_alphanumeric();
                cased
            })
            .collect()
    }

    /// `Critical: 1, High: 2`, most severe first; `-` when empty
    fn format_breakdown(breakdown: &SeverityBreakdown) -> String {
        if breakdown.is_empty() {
            return "-".to_string();
        }
        breakdown
            .iter()
            .map(|(severity, count)| {
                format!(
                    "{} {}: {}",
                    Self::severity_badge(severity),
                    Self::escape_markdown_table_cell(&Self::title_case(severity.as_str())),
                    count
                )
            })
            .collect::<Vec<_>>()
            .join(", ")
    }

    fn format_count_or_dash(count: usize) -> String {
        if count == 0 {
            "-".to_string()
        } else {
            count.to_string()
        }
    }

    fn format_flag(flag: bool) -> &'static str {
        if flag {
            "✅"
        } else {
            "-"
        }
    }

    fn format_release_date(version: &Version) -> &str {
        if version.release_date.is_empty() {
            NOT_AVAILABLE
        } else {
            &version.release_date
        }
    }
}

impl Default for MarkdownFormatter {
    fn default() -> Self {
        Self::new()
    }
}

/// Ecosystems page
impl MarkdownFormatter {
    fn render_ecosystem_row(output: &mut String, summary: &EcosystemSummary) {
        output.push_str(&format!(
            "| {} {} | {} | {} | {} | {} | {} |\n",
            Self::ecosystem_icon(&summary.ecosystem),
            Self::escape_markdown_table_cell(&summary.ecosystem),
            summary.package_count,
            summary.eol_package_count,
            summary.total_vulnerabilities,
            summary.hero_devs_package_count,
            Self::format_breakdown(&summary.vulnerabilities_by_severity)
        ));
    }

    fn render_support_hint(output: &mut String) {
        output.push_str("## Need Extended Support?\n\n");
        output.push_str(
            "Request HeroDevs Never-Ending Support for an end-of-life package with \
             `eol-report request-support <ECOSYSTEM> <PACKAGE>`.\n",
        );
    }
}

/// Packages page
impl MarkdownFormatter {
    fn render_package_list_summary(output: &mut String, view: &EcosystemPageView<'_>) {
        output.push_str(&format!("{} packages found", view.total_packages));
        if view.is_filtered() {
            output.push_str(&format!(" ({} shown)", view.shown_count()));
        }
        output.push_str("\n\n");

        if !view.search.is_empty() {
            output.push_str(&format!(
                "Search: `{}`\n\n",
                view.search.replace('`', "'")
            ));
        }

        let sort_buttons: Vec<String> = [SortField::Name, SortField::Vulnerabilities, SortField::Status]
            .into_iter()
            .map(|field| Self::sort_label(&view.sort, field))
            .collect();
        output.push_str(&format!("Sort: {}\n\n", sort_buttons.join(" | ")));
    }

    fn sort_label(sort: &SortState, field: SortField) -> String {
        let label = Self::title_case(field.as_str());
        match sort.indicator(field) {
            "" => label,
            arrow => format!("**{} {}**", label, arrow),
        }
    }

    fn render_package_row(output: &mut String, package: &PackageSummary<'_>) {
        let vulnerabilities = if package.total_vulnerabilities == 0 {
            "0".to_string()
        } else {
            format!(
                "{} ({})",
                package.total_vulnerabilities,
                package
                    .vulnerabilities_by_severity
                    .iter()
                    .map(|(severity, _)| Self::severity_badge(severity))
                    .collect::<String>()
            )
        };

        output.push_str(&format!(
            "| {} | {} | {} | {} | {} | {} |\n",
            Self::escape_markdown_table_cell(package.name),
            Self::escape_markdown_table_cell(package.latest_version),
            Self::escape_markdown_table_cell(&Self::title_case(package.status)),
            package.eol_version_count,
            vulnerabilities,
            Self::format_flag(package.has_hero_devs_support)
        ));
    }

    fn render_empty_list(output: &mut String, reason: EmptyListReason) {
        output.push_str("### 🔍 No packages found\n\n");
        match reason {
            EmptyListReason::NoMatches => {
                output.push_str("No packages match your search criteria.\n");
            }
            EmptyListReason::EmptyEcosystem => {
                output.push_str("This ecosystem doesn't have any packages yet.\n");
            }
        }
    }
}

/// Package detail page
impl MarkdownFormatter {
    fn render_package_overview(output: &mut String, ecosystem: &str, detail: &PackageDetail<'_>) {
        output.push_str(&format!(
            "# {} {}\n\n",
            Self::ecosystem_icon(ecosystem),
            Self::escape_markdown_table_cell(detail.name())
        ));
        output.push_str(&format!(
            "{} package · {} version(s) tracked\n\n",
            ecosystem,
            detail.versions().len()
        ));

        let latest = detail.latest_version();
        let latest_label = latest.map_or_else(
            || NOT_AVAILABLE.to_string(),
            |v| format!("{} ({})", v.version, Self::format_release_date(v)),
        );
        let status = latest.map_or(UNKNOWN_STATUS, |v| v.status.as_str());
        let total = detail.total_vulnerabilities();
        let vulnerabilities = if total == 0 {
            "0".to_string()
        } else {
            format!(
                "{} ({})",
                total,
                Self::format_breakdown(&detail.vulnerabilities_by_severity())
            )
        };

        output.push_str("| Latest Version | Status | Total Vulnerabilities | EOL Versions |\n");
        output.push_str("|----------------|--------|-----------------------|--------------|\n");
        output.push_str(&format!(
            "| {} | {} | {} | {} |\n\n",
            Self::escape_markdown_table_cell(&latest_label),
            Self::escape_markdown_table_cell(&Self::title_case(status)),
            vulnerabilities,
            detail.eol_version_count()
        ));

        if detail.has_hero_devs_support() {
            output.push_str("✅ HeroDevs NES available\n\n");
        }
    }

    fn render_version_history(output: &mut String, versions: &[Version]) {
        output.push_str("## Version History\n\n");
        if versions.is_empty() {
            output.push_str("*No versions tracked*\n\n");
            return;
        }

        output.push_str(VERSION_TABLE_HEADER);
        output.push_str(VERSION_TABLE_SEPARATOR);
        for version in versions {
            let nes = if version.hero_devs_supported {
                "✅"
            } else {
                "Request Support"
            };
            output.push_str(&format!(
                "| {} | {} | {} | {} | {} | {} | {} | {} | {} |\n",
                Self::escape_markdown_table_cell(&version.version),
                Self::escape_markdown_table_cell(&Self::title_case(version.status.as_str())),
                Self::escape_markdown_table_cell(Self::format_release_date(version)),
                version.vulnerability_count(),
                Self::format_count_or_dash(version.count_with_severity(&Severity::Critical)),
                Self::format_count_or_dash(version.count_with_severity(&Severity::High)),
                Self::format_count_or_dash(version.count_with_severity(&Severity::Medium)),
                Self::format_count_or_dash(version.count_with_severity(&Severity::Low)),
                nes
            ));
        }
        output.push('\n');
    }

    fn render_vulnerabilities(output: &mut String, vulnerabilities: &[FlattenedVulnerability<'_>]) {
        if vulnerabilities.is_empty() {
            return;
        }

        output.push_str("## Security Vulnerabilities\n\n");
        output.push_str(VULN_TABLE_HEADER);
        output.push_str(VULN_TABLE_SEPARATOR);
        for vulnerability in vulnerabilities {
            output.push_str(&format!(
                "| {} | {} {} | {}/10 | {} |\n",
                Self::escape_markdown_table_cell(vulnerability.cve),
                Self::severity_badge(vulnerability.severity),
                Self::escape_markdown_table_cell(&Self::title_case(
                    vulnerability.severity.as_str()
                )),
                vulnerability.score,
                Self::escape_markdown_table_cell(vulnerability.version)
            ));
        }
        output.push('\n');
    }
}

impl ReportFormatter for MarkdownFormatter {
    fn format_home(&self, view: &HomePageView) -> Result<String> {
        let mut output = String::new();
        output.push_str("# Browse Package Ecosystems\n\n");

        if view.is_empty() {
            output.push_str("*No ecosystem data available*\n\n");
        } else {
            output.push_str(ECOSYSTEM_TABLE_HEADER);
            output.push_str(ECOSYSTEM_TABLE_SEPARATOR);
            for summary in &view.ecosystems {
                Self::render_ecosystem_row(&mut output, summary);
            }
            output.push('\n');
        }

        Self::render_support_hint(&mut output);
        Ok(output)
    }

    fn format_ecosystem(&self, view: &EcosystemPageView<'_>) -> Result<String> {
        let mut output = String::new();
        output.push_str(&format!(
            "# {} {} Packages\n\n",
            Self::ecosystem_icon(&view.ecosystem),
            Self::escape_markdown_table_cell(&view.ecosystem)
        ));
        Self::render_package_list_summary(&mut output, view);

        match view.empty_reason {
            Some(reason) => Self::render_empty_list(&mut output, reason),
            None => {
                output.push_str(PACKAGE_TABLE_HEADER);
                output.push_str(PACKAGE_TABLE_SEPARATOR);
                for package in &view.packages {
                    Self::render_package_row(&mut output, package);
                }
            }
        }
        Ok(output)
    }

    fn format_package(&self, view: &PackagePageView<'_>) -> Result<String> {
        let mut output = String::new();

        let Some(detail) = view.detail else {
            output.push_str("# Package Not Found\n\n");
            output.push_str(&format!(
                "The package \"{}\" was not found in the {} ecosystem.\n",
                view.package, view.ecosystem
            ));
            return Ok(output);
        };

        Self::render_package_overview(&mut output, &view.ecosystem, &detail);
        Self::render_version_history(&mut output, detail.versions());
        Self::render_vulnerabilities(&mut output, &detail.all_vulnerabilities());
        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::view_models::{EcosystemPage, PackagePage};
    use crate::eol_analysis::domain::{Dataset, Ecosystem, Package, VersionStatus, Vulnerability};

    fn dataset() -> Dataset {
        Dataset::new(vec![
            Ecosystem::new(
                "npm",
                vec![
                    Package::new(
                        "left-pad",
                        vec![
                            Version::new("1.3.0", VersionStatus::EndOfLife)
                                .with_release_date("2018-04-09")
                                .with_hero_devs_support(true)
                                .with_vulnerability(Vulnerability::new(
                                    "CVE-2024-0001",
                                    Severity::High,
                                    7.5,
                                ))
                                .with_vulnerability(Vulnerability::new(
                                    "CVE-2024-0002",
                                    Severity::Critical,
                                    9.8,
                                )),
                            Version::new("1.0.0", VersionStatus::Deprecated),
                        ],
                    ),
                    Package::new(
                        "lodash",
                        vec![Version::new("4.17.21", VersionStatus::Current)],
                    ),
                ],
            ),
            Ecosystem::new("maven", vec![]),
        ])
    }

    #[test]
    fn test_title_case() {
        assert_eq!(MarkdownFormatter::title_case("end-of-life"), "End-Of-Life");
        assert_eq!(MarkdownFormatter::title_case("current"), "Current");
        assert_eq!(MarkdownFormatter::title_case("UNKNOWN"), "Unknown");
        assert_eq!(MarkdownFormatter::title_case("long term"), "Long Term");
        assert_eq!(MarkdownFormatter::title_case(""), "");
        assert_eq!(MarkdownFormatter::title_case("long-term support"), "Long-Term Support");
        assert_eq!(MarkdownFormatter::title_case("x86_64"), "X86_64");
    }

    #[test]
    fn test_ecosystem_icons() {
        assert_eq!(MarkdownFormatter::ecosystem_icon("npm"), "📦");
        assert_eq!(MarkdownFormatter::ecosystem_icon("maven"), "☕");
        assert_eq!(MarkdownFormatter::ecosystem_icon("ruby"), "💎");
        assert_eq!(MarkdownFormatter::ecosystem_icon("pip"), "🐍");
        assert_eq!(MarkdownFormatter::ecosystem_icon("apt"), "🐧");
        assert_eq!(MarkdownFormatter::ecosystem_icon("snapd"), "📱");
        assert_eq!(MarkdownFormatter::ecosystem_icon("flatpak"), "📱");
        assert_eq!(MarkdownFormatter::ecosystem_icon("cargo"), "📦");
    }

    #[test]
    fn test_escape_markdown_table_cell() {
        assert_eq!(
            MarkdownFormatter::escape_markdown_table_cell("a|b\nc"),
            "a\\|b c"
        );
    }

    #[test]
    fn test_format_breakdown_most_severe_first() {
        let mut breakdown = SeverityBreakdown::new();
        breakdown.record(&Severity::Low);
        breakdown.record(&Severity::Critical);
        breakdown.record(&Severity::Critical);
        assert_eq!(
            MarkdownFormatter::format_breakdown(&breakdown),
            "🔴 Critical: 2, 🔵 Low: 1"
        );
        assert_eq!(
            MarkdownFormatter::format_breakdown(&SeverityBreakdown::new()),
            "-"
        );
    }

    #[test]
    fn test_format_home() {
        let dataset = dataset();
        let output = MarkdownFormatter::new()
            .format_home(&HomePageView::from_dataset(&dataset))
            .unwrap();

        assert!(output.starts_with("# Browse Package Ecosystems"));
        assert!(output.contains("| 📦 npm | 2 | 1 | 2 | 1 | 🔴 Critical: 1, 🟠 High: 1 |"));
        assert!(output.contains("| ☕ maven | 0 | 0 | 0 | 0 | - |"));
        assert!(output.contains("## Need Extended Support?"));
    }

    #[test]
    fn test_format_home_empty_dataset() {
        let output = MarkdownFormatter::new()
            .format_home(&HomePageView::from_dataset(&Dataset::default()))
            .unwrap();
        assert!(output.contains("*No ecosystem data available*"));
        assert!(!output.contains(ECOSYSTEM_TABLE_HEADER));
    }

    #[test]
    fn test_format_ecosystem() {
        let dataset = dataset();
        let output = MarkdownFormatter::new()
            .format_ecosystem(&EcosystemPage::new("npm").view(&dataset))
            .unwrap();

        assert!(output.starts_with("# 📦 npm Packages"));
        assert!(output.contains("2 packages found\n"));
        assert!(!output.contains("shown"));
        assert!(output.contains("Sort: **Name ↑** | Vulnerabilities | Status"));
        assert!(output.contains("| left-pad | 1.3.0 | End-Of-Life | 1 | 2 (🔴🟠) | ✅ |"));
        assert!(output.contains("| lodash | 4.17.21 | Current | 0 | 0 | - |"));

        let left_pad = output.find("| left-pad").unwrap();
        let lodash = output.find("| lodash").unwrap();
        assert!(left_pad < lodash);
    }

    #[test]
    fn test_format_ecosystem_filtered_header() {
        let dataset = dataset();
        let mut page = EcosystemPage::new("npm");
        page.set_search("pad");
        page.toggle_sort(SortField::Vulnerabilities);
        page.toggle_sort(SortField::Vulnerabilities);

        let output = MarkdownFormatter::new()
            .format_ecosystem(&page.view(&dataset))
            .unwrap();

        assert!(output.contains("2 packages found (1 shown)"));
        assert!(output.contains("Search: `pad`"));
        assert!(output.contains("Sort: Name | **Vulnerabilities ↓** | Status"));
        assert!(!output.contains("| lodash"));
    }

    #[test]
    fn test_format_ecosystem_no_matches() {
        let dataset = dataset();
        let mut page = EcosystemPage::new("npm");
        page.set_search("zzz");

        let output = MarkdownFormatter::new()
            .format_ecosystem(&page.view(&dataset))
            .unwrap();

        assert!(output.contains("No packages found"));
        assert!(output.contains("No packages match your search criteria."));
        assert!(!output.contains(PACKAGE_TABLE_HEADER));
    }

    #[test]
    fn test_format_ecosystem_empty() {
        let dataset = dataset();
        let output = MarkdownFormatter::new()
            .format_ecosystem(&EcosystemPage::new("maven").view(&dataset))
            .unwrap();

        assert!(output.contains("0 packages found"));
        assert!(output.contains("This ecosystem doesn't have any packages yet."));
    }

    #[test]
    fn test_format_package() {
        let dataset = dataset();
        let output = MarkdownFormatter::new()
            .format_package(&PackagePage::new("npm", "left-pad").view(&dataset))
            .unwrap();

        assert!(output.starts_with("# 📦 left-pad"));
        assert!(output.contains("npm package · 2 version(s) tracked"));
        assert!(output.contains(
            "| 1.3.0 (2018-04-09) | End-Of-Life | 2 (🔴 Critical: 1, 🟠 High: 1) | 1 |"
        ));
        assert!(output.contains("✅ HeroDevs NES available"));
        assert!(output.contains("| 1.3.0 | End-Of-Life | 2018-04-09 | 2 | 1 | 1 | - | - | ✅ |"));
        assert!(output.contains("| 1.0.0 | Deprecated | N/A | 0 | - | - | - | - | Request Support |"));
        assert!(output.contains("## Security Vulnerabilities"));

        let critical = output.find("| CVE-2024-0002 | 🔴 Critical | 9.8/10 | 1.3.0 |").unwrap();
        let high = output.find("| CVE-2024-0001 | 🟠 High | 7.5/10 | 1.3.0 |").unwrap();
        assert!(critical < high);
    }

    #[test]
    fn test_format_package_without_vulnerabilities() {
        let dataset = dataset();
        let output = MarkdownFormatter::new()
            .format_package(&PackagePage::new("npm", "lodash").view(&dataset))
            .unwrap();

        assert!(output.contains("| 4.17.21 (N/A) | Current | 0 | 0 |"));
        assert!(!output.contains("## Security Vulnerabilities"));
        assert!(!output.contains("HeroDevs NES available"));
    }

    #[test]
    fn test_format_package_not_found() {
        let dataset = dataset();
        let output = MarkdownFormatter::new()
            .format_package(&PackagePage::new("npm", "right-pad").view(&dataset))
            .unwrap();

        assert_eq!(
            output,
            "# Package Not Found\n\nThe package \"right-pad\" was not found in the npm ecosystem.\n"
        );
    }

    #[test]
    fn test_format_package_without_versions() {
        let dataset = Dataset::new(vec![Ecosystem::new(
            "pip",
            vec![Package::new("ghost", vec![])],
        )]);
        let output = MarkdownFormatter::new()
            .format_package(&PackagePage::new("pip", "ghost").view(&dataset))
            .unwrap();

        assert!(output.contains("| N/A | Unknown | 0 | 0 |"));
        assert!(output.contains("*No versions tracked*"));
    }
}
