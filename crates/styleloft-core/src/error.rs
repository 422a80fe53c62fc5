//! Error types for the Styleloft catalog

use thiserror::Error;

/// Main error type for catalog operations
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Banner override file was present but could not be parsed
    #[error("Banner file error: {0}")]
    BannerFile(#[from] serde_json::Error),

    /// Catalog CSV was present but could not be parsed
    #[error("Catalog CSV error: {0}")]
    CatalogCsv(#[from] csv::Error),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using CatalogError
pub type CatalogResult<T> = Result<T, CatalogError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let err = CatalogError::Io(io_err);
        assert_eq!(format!("{}", err), "IO error: no such file");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let cat_err: CatalogError = io_err.into();
        assert!(matches!(cat_err, CatalogError::Io(_)));
    }

    #[test]
    fn test_error_from_json() {
        let json_err = serde_json::from_str::<Vec<u8>>("not json").unwrap_err();
        let cat_err: CatalogError = json_err.into();
        assert!(matches!(cat_err, CatalogError::BannerFile(_)));
    }
}
