use eol_report::adapters::outbound::console::StderrProgressReporter;
use eol_report::application::dto::{DatasetSource, OutputFormat};
use eol_report::application::factories::{
    FormatterFactory, PresenterFactory, PresenterType, RepositoryFactory, SinkFactory, SinkType,
};
use eol_report::application::use_cases::{BrowseReportUseCase, SubmitSupportRequestUseCase};
use eol_report::application::view_models::{EcosystemPage, PackagePage};
use eol_report::cli::{Args, Command};
use eol_report::config::{self, ConfigFile};
use eol_report::eol_analysis::services::{SortDirection, SortState};
use eol_report::ports::inbound::ReportQueryPort;
use eol_report::ports::outbound::{DatasetRepository, ProgressReporter, ReportFormatter};
use eol_report::shared::error::{ExitCode, ReportError};
use eol_report::shared::Result;
use std::path::{Path, PathBuf};
use std::process;

const DEFAULT_DATA_SOURCE: &str = "data.json";

#[tokio::main]
async fn main() {
    let exit_code = match run().await {
        Ok(()) => ExitCode::Success,
        Err(e) => {
            eprintln!("\n❌ An error occurred:\n");
            eprintln!("{}", e);

            // Display error chain
            for cause in e.chain().skip(1) {
                eprintln!("\nCaused by: {}", cause);
            }

            eprintln!();
            ExitCode::ApplicationError
        }
    };

    process::exit(exit_code.as_i32());
}

async fn run() -> Result<()> {
    // Clap exits with code 2 on invalid arguments
    let args = Args::parse_args();

    let config = load_config(args.config.as_deref())?.unwrap_or_default();

    let data_source = args
        .data
        .clone()
        .or_else(|| config.data_source.clone())
        .unwrap_or_else(|| DEFAULT_DATA_SOURCE.to_string());
    let format = args
        .format
        .or_else(|| config.output_format())
        .unwrap_or_default();

    let repository = RepositoryFactory::create(DatasetSource::parse(&data_source))?;
    let mut use_case = BrowseReportUseCase::new(repository, StderrProgressReporter::new());
    use_case.load().await?;

    let rendered = match args.command {
        Command::RequestSupport {
            ecosystem,
            package,
            name,
            company_name,
            phone_number,
            details,
            log,
        } => {
            let mut page = PackagePage::new(ecosystem, package);
            ensure_package_exists(&use_case, &page)?;

            page.request_support();
            let fields = page.support_form_mut().fields_mut()?;
            fields.name = name;
            fields.company_name = company_name;
            fields.phone_number = phone_number;
            fields.details = details;

            let sink = SinkFactory::create(SinkType::from_log(log.or(config.support_log)));
            SubmitSupportRequestUseCase::new(sink, StderrProgressReporter::new())
                .execute(&mut page)?;
            return Ok(());
        }
        Command::Ecosystems => create_formatter(format).format_home(&use_case.home_page())?,
        Command::Packages {
            ecosystem,
            search,
            sort,
        } => {
            let mut page = EcosystemPage::new(ecosystem);
            if let Some(field) = config.sort_field() {
                page = page.with_sort(SortState::new(field, SortDirection::Asc));
            }
            page.set_search(search);
            for field in sort {
                page.toggle_sort(field);
            }
            create_formatter(format).format_ecosystem(&use_case.ecosystem_page(&page))?
        }
        Command::Package { ecosystem, package } => {
            let page = PackagePage::new(ecosystem, package);
            create_formatter(format).format_package(&use_case.package_page(&page))?
        }
    };

    PresenterFactory::create(PresenterType::from_output(args.output)).present(&rendered)
}

fn create_formatter(format: OutputFormat) -> Box<dyn ReportFormatter> {
    eprintln!("{}", FormatterFactory::progress_message(format));
    FormatterFactory::create(format)
}

fn load_config(path: Option<&Path>) -> Result<Option<ConfigFile>> {
    match path {
        Some(path) => config::load_config_from_path(path).map(Some),
        None => {
            let discovered = config::discover_config(&PathBuf::from("."))?;
            if discovered.is_some() {
                eprintln!("📄 Auto-discovered config file: {}", config::CONFIG_FILENAME);
            }
            Ok(discovered)
        }
    }
}

/// The support form is only offered on the page of an existing package
fn ensure_package_exists<R, P>(
    use_case: &BrowseReportUseCase<R, P>,
    page: &PackagePage,
) -> Result<()>
where
    R: DatasetRepository,
    P: ProgressReporter,
{
    if use_case.package_page(page).is_found() {
        return Ok(());
    }

    Err(ReportError::Validation {
        message: format!(
            "The package \"{}\" was not found in the {} ecosystem.\n\n\
             💡 Hint: Run `eol-report packages {}` to list its packages.",
            page.package(),
            page.ecosystem(),
            page.ecosystem()
        ),
    }
    .into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_load_config_explicit_path() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("custom.yml");
        fs::write(&path, "format: json\n").unwrap();

        let config = load_config(Some(&path)).unwrap().unwrap();
        assert_eq!(config.output_format(), Some(OutputFormat::Json));
    }

    #[test]
    fn test_load_config_explicit_path_missing() {
        let result = load_config(Some(Path::new("/nonexistent/custom.yml")));
        assert!(result.is_err());
    }
}
