// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Catalog(CatalogError),
}

/// Specific error types for photo catalog problems.
/// Used to provide user-friendly, localized error messages.
#[derive(Debug, Clone)]
pub enum CatalogError {
    /// The catalog file could not be parsed as TOML.
    Malformed(String),

    /// A photo entry is missing its image source.
    MissingSource { index: usize },

    /// The path given on the command line is neither a catalog file
    /// nor a directory.
    UnsupportedPath(String),
}

impl CatalogError {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            CatalogError::Malformed(_) => "error-catalog-malformed",
            CatalogError::MissingSource { .. } => "error-catalog-missing-source",
            CatalogError::UnsupportedPath(_) => "error-catalog-unsupported-path",
        }
    }
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::Malformed(msg) => write!(f, "Malformed catalog: {}", msg),
            CatalogError::MissingSource { index } => {
                write!(f, "Photo entry {} has no image source", index)
            }
            CatalogError::UnsupportedPath(path) => {
                write!(f, "Not a catalog file or directory: {}", path)
            }
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Catalog(e) => write!(f, "Catalog Error: {}", e),
        }
    }
}

impl From<CatalogError> for Error {
    fn from(err: CatalogError) -> Self {
        Error::Catalog(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn catalog_error_missing_source_names_entry() {
        let err = CatalogError::MissingSource { index: 3 };
        assert!(format!("{}", err).contains('3'));
    }

    #[test]
    fn catalog_error_converts_to_error() {
        let err: Error = CatalogError::Malformed("unexpected key".into()).into();
        assert!(matches!(err, Error::Catalog(CatalogError::Malformed(_))));
    }

    #[test]
    fn catalog_error_i18n_keys() {
        assert_eq!(
            CatalogError::Malformed(String::new()).i18n_key(),
            "error-catalog-malformed"
        );
        assert_eq!(
            CatalogError::MissingSource { index: 0 }.i18n_key(),
            "error-catalog-missing-source"
        );
        assert_eq!(
            CatalogError::UnsupportedPath(String::new()).i18n_key(),
            "error-catalog-unsupported-path"
        );
    }
}
