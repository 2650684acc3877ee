//! Error types for the checked search entry points.

use thiserror::Error;
use tracing::warn;

/// Errors reported by the checked k-NN entry points.
///
/// The unchecked API never fails; only callers that hand in a signed `k`
/// through [`try_find_k_nearest_neighbors`](crate::try_find_k_nearest_neighbors)
/// or [`KnnSearch::try_with_k`](crate::KnnSearch::try_with_k) can see this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum SearchError {
    /// `k` was negative. The call is rejected before any distance is computed.
    #[error("invalid argument: k must be non-negative, got {k}")]
    InvalidArgument {
        /// The rejected value.
        k: i64,
    },
}

/// Converts a signed neighbor count into `usize`, rejecting negatives.
pub(crate) fn checked_k(k: i64) -> Result<usize, SearchError> {
    usize::try_from(k).map_err(|_| {
        warn!(k, "rejecting neighbor count");
        SearchError::InvalidArgument { k }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checked_k_accepts_zero_and_positive() {
        assert_eq!(checked_k(0), Ok(0));
        assert_eq!(checked_k(7), Ok(7));
    }

    #[test]
    fn test_checked_k_rejects_negative() {
        assert_eq!(checked_k(-1), Err(SearchError::InvalidArgument { k: -1 }));
        assert_eq!(
            checked_k(i64::MIN),
            Err(SearchError::InvalidArgument { k: i64::MIN })
        );
    }

    #[test]
    fn test_error_message() {
        let err = SearchError::InvalidArgument { k: -3 };
        assert_eq!(err.to_string(), "invalid argument: k must be non-negative, got -3");
    }
}
