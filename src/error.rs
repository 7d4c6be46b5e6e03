use edge_color::EdgeError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Cannot open input {}: {source}", .path.display())]
    OpenInput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Output already exists: {} (use --force to overwrite)", .0.display())]
    OutputExists(PathBuf),

    #[error("Cannot write output {}: {source}", .path.display())]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Edge filter failed: {0}")]
    Pipeline(#[from] EdgeError),
}

impl AppError {
    /// Whether the input itself is malformed (as opposed to a file system
    /// or stream failure).
    pub fn is_bad_input(&self) -> bool {
        matches!(self, AppError::Pipeline(e) if e.is_format())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use edge_color::FormatError;

    #[test]
    fn test_open_input_message() {
        let error = AppError::OpenInput {
            path: PathBuf::from("missing.ppm"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        };
        assert_eq!(
            error.to_string(),
            "Cannot open input missing.ppm: no such file"
        );
        assert!(!error.is_bad_input());
    }

    #[test]
    fn test_output_exists_message() {
        let error = AppError::OutputExists(PathBuf::from("out.ppm"));
        assert_eq!(
            error.to_string(),
            "Output already exists: out.ppm (use --force to overwrite)"
        );
    }

    #[test]
    fn test_write_output_message() {
        let error = AppError::WriteOutput {
            path: PathBuf::from("/ro/out.ppm"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only"),
        };
        assert_eq!(error.to_string(), "Cannot write output /ro/out.ppm: read-only");
    }

    #[test]
    fn test_pipeline_from_edge_error() {
        let edge: EdgeError = FormatError::UnsupportedFormat { tag: '6' }.into();
        let error: AppError = edge.into();
        assert!(error.is_bad_input());
        assert_eq!(
            error.to_string(),
            "Edge filter failed: format error: unsupported raster format P6 (only P3 is supported)"
        );
    }

    #[test]
    fn test_pipeline_eof_is_not_bad_input() {
        let error = AppError::Pipeline(EdgeError::UnexpectedEof {
            expected: "red sample",
            offset: 12,
        });
        assert!(!error.is_bad_input());
    }
}
