/// Errors raised when importing a curve snapshot.
///
/// Interactive editing never fails; only data crossing the crate boundary
/// (JSON presets, host-provided snapshots) is validated.
#[derive(Debug, thiserror::Error)]
pub enum ChartError {
    #[error("invalid curve JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("curve needs at least 2 points, got {0}")]
    TooFewPoints(usize),
    #[error("first and last points must sit at x=0 and x=100")]
    EndpointNotPinned,
    #[error("point {0}: only the endpoints may be x-restricted")]
    RestrictionMismatch(usize),
    #[error("point {0} is not strictly right of its left neighbour")]
    Unsorted(usize),
    #[error("point {0} is closer to its left neighbour than the minimum gap")]
    TooClose(usize),
    #[error("point {index}: {field} out of range")]
    OutOfRange { index: usize, field: &'static str },
}
