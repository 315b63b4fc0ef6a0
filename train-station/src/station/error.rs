//! Station operation errors.

use crate::catalog::UnknownWagonType;
use crate::domain::DuplicateStation;

/// Errors from station operations.
///
/// All of them are local to the failed step: the station stays usable and
/// the operator can simply start again.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StationError {
    /// Departure and arrival name the same station
    #[error(transparent)]
    DuplicateStation(#[from] DuplicateStation),

    /// A sold wagon class is missing from the catalog
    #[error(transparent)]
    UnknownWagonType(#[from] UnknownWagonType),

    /// A train operation was requested before any direction was created
    #[error("no train has been created yet")]
    NoActiveTrain,

    /// The running passenger total no longer fits in a counter
    #[error("running passenger total overflowed")]
    PassengerOverflow,
}
