use std::fmt;
use std::path::PathBuf;

/// Where the dataset document is loaded from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatasetSource {
    /// Local JSON file
    File(PathBuf),
    /// `http://` or `https://` URL
    Http(String),
}

impl DatasetSource {
    /// Classifies a `--data` / `data_source` value
    ///
    /// Anything starting with an http(s) scheme is a URL, everything else a path.
    pub fn parse(location: &str) -> Self {
        let lower = location.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            DatasetSource::Http(location.to_string())
        } else {
            DatasetSource::File(PathBuf::from(location))
        }
    }

    pub fn is_remote(&self) -> bool {
        matches!(self, DatasetSource::Http(_))
    }
}

impl fmt::Display for DatasetSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DatasetSource::File(path) => write!(f, "{}", path.display()),
            DatasetSource::Http(url) => write!(f, "{}", url),
        }
    }
}
