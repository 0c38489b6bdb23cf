use crate::adapters::outbound::filesystem::{FileSystemWriter, StdoutPresenter};
use crate::ports::outbound::OutputPresenter;
use std::path::PathBuf;

/// Where the rendered page goes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PresenterType {
    Stdout,
    File(PathBuf),
}

impl PresenterType {
    /// `--output` given means a file, otherwise stdout
    pub fn from_output(output: Option<PathBuf>) -> Self {
        output.map_or(PresenterType::Stdout, PresenterType::File)
    }
}

/// Factory for creating output presenters
pub struct PresenterFactory;

impl PresenterFactory {
    /// Creates a presenter instance for the specified type
    ///
    /// # Examples
    /// ```
    /// use eol_report::application::factories::{PresenterFactory, PresenterType};
    ///
    /// let presenter = PresenterFactory::create(PresenterType::Stdout);
    /// ```
    pub fn create(presenter_type: PresenterType) -> Box<dyn OutputPresenter> {
        match presenter_type {
            PresenterType::Stdout => Box::new(StdoutPresenter::new()),
            PresenterType::File(path) => Box::new(FileSystemWriter::new(path)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_from_output_without_path_is_stdout() {
        assert_eq!(PresenterType::from_output(None), PresenterType::Stdout);
    }

    #[test]
    fn test_from_output_with_path_is_file() {
        let path = PathBuf::from("report.md");
        assert_eq!(
            PresenterType::from_output(Some(path.clone())),
            PresenterType::File(path)
        );
    }

    #[test]
    fn test_file_presenter_writes_content() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("report.md");

        let presenter = PresenterFactory::create(PresenterType::File(path.clone()));
        presenter.present("# Ecosystems\n").unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "# Ecosystems\n");
    }
}
