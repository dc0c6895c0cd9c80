//! Report error types.

use tessera_shared::AppError;
use thiserror::Error;

/// Errors that can occur during report generation.
///
/// Missing preconditions and empty results are not errors; they are
/// regular [`ReportView`](super::ReportView) outcomes.
#[derive(Debug, Error)]
pub enum ReportError {
    /// The output surface could not take the rendered report.
    #[error("Report surface unavailable: {0}")]
    SurfaceUnavailable(String),
}

impl From<ReportError> for AppError {
    fn from(err: ReportError) -> Self {
        Self::Internal(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_surface_error_maps_to_internal() {
        let err: AppError = ReportError::SurfaceUnavailable("closed".into()).into();
        assert_eq!(err.error_code(), "INTERNAL_ERROR");
        assert_eq!(
            err.to_string(),
            "Internal error: Report surface unavailable: closed"
        );
    }
}
