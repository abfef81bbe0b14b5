//! User-visible allocation failures.

/// Why a booking request could not be served.
///
/// Both kinds are raised before any room state changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AllocationError {
    /// Requested room count outside the configured bounds.
    InvalidRequestSize { requested: i64, min: usize, max: usize },
    /// Not enough free rooms, or no phase of the search produced a candidate.
    NotEnoughRooms { requested: usize, available: usize },
}

impl std::fmt::Display for AllocationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AllocationError::InvalidRequestSize { min, max, .. } => {
                write!(f, "Can only book {}-{} rooms at once", min, max)
            }
            AllocationError::NotEnoughRooms { .. } => write!(f, "Not enough rooms available"),
        }
    }
}

impl std::error::Error for AllocationError {}
