//! Booking boundary: request validation plus search, on a plain room list.
//!
//! This is the stateless half of a booking. The caller supplies the rooms
//! (typically a snapshot from the room store) and commits the result
//! itself.

use crate::config::{AllocationConfig, HotelLayout};
use crate::error::AllocationError;
use crate::room::Room;
use crate::search::{find_optimal_rooms, Allocation};

/// Check a requested room count against the configured bounds.
///
/// Takes a signed count so negative input from the wire is reported as an
/// invalid size rather than wrapping.
pub fn validate_request_size(
    num_rooms: i64,
    config: &AllocationConfig,
) -> Result<usize, AllocationError> {
    let invalid = AllocationError::InvalidRequestSize {
        requested: num_rooms,
        min: config.min_rooms,
        max: config.max_rooms,
    };
    let count = usize::try_from(num_rooms).map_err(|_| invalid.clone())?;
    if count < config.min_rooms || count > config.max_rooms {
        return Err(invalid);
    }
    Ok(count)
}

/// Pick `num_rooms` rooms of `hotel` from `rooms`, returned sorted by room
/// number.
///
/// Occupied rooms in the list are never picked.
pub fn allocate(
    rooms: &[Room],
    num_rooms: i64,
    hotel: &HotelLayout,
    config: &AllocationConfig,
) -> Result<Allocation, AllocationError> {
    let count = validate_request_size(num_rooms, config)?;
    let mut allocation = find_optimal_rooms(rooms, count, hotel, config)?;
    allocation.rooms.sort_by_key(|r| r.room_number);
    Ok(allocation)
}
