use crate::eol_analysis::domain::SupportRequest;
use crate::ports::outbound::SupportRequestSink;
use crate::shared::Result;

/// Hands support requests off by printing them to stderr
///
/// Used when no support log is configured.
pub struct StderrSupportRequestSink;

impl StderrSupportRequestSink {
    pub fn new() -> Self {
        Self
    }

    fn render(request: &SupportRequest) -> String {
        let mut lines = vec![
            "📨 Support request".to_string(),
            format!("   Name:      {}", request.name),
            format!("   Company:   {}", request.company_name),
            format!("   Phone:     {}", request.phone_number),
        ];
        if let (Some(package), Some(ecosystem)) = (&request.package_name, &request.ecosystem) {
            lines.push(format!("   Package:   {} ({})", package, ecosystem));
        }
        if !request.details.is_empty() {
            lines.push(format!("   Details:   {}", request.details));
        }
        lines.join("\n")
    }
}

impl Default for StderrSupportRequestSink {
    fn default() -> Self {
        Self::new()
    }
}

impl SupportRequestSink for StderrSupportRequestSink {
    fn submit(&self, request: &SupportRequest) -> Result<()> {
        eprintln!("{}", Self::render(request));
        Ok(())
    }
}
