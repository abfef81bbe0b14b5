//! Room model and room numbering.
//!
//! A room is identified by its floor and its position counted from the
//! lift. The room number is derived from both, so `(floor, position)` and
//! `room_number` are interchangeable keys.

use serde::{Deserialize, Serialize};

use crate::constants::layout::{MAX_FLOOR, MAX_POSITION, ROOM_NUMBER_STRIDE};

/// A single hotel room and its booking flags.
///
/// Serializes with camelCase keys (`roomNumber`, `positionFromLift`,
/// `justBooked`) to match the booking front end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    pub room_number: u32,
    /// Floor, 1-based.
    pub floor: u8,
    /// Horizontal index on the floor, 1 = next to the lift.
    pub position_from_lift: u8,
    pub occupied: bool,
    /// Highlight for rooms picked by the most recent successful booking.
    pub just_booked: bool,
}

impl Room {
    /// Create an available room at `(floor, position)`.
    ///
    /// # Panics
    ///
    /// Panics if the floor or position is outside the building's range.
    pub fn new(floor: u8, position_from_lift: u8) -> Self {
        assert!(
            is_valid_location(floor, position_from_lift),
            "room location out of range: floor {floor}, position {position_from_lift}"
        );
        Self {
            room_number: room_number(floor, position_from_lift),
            floor,
            position_from_lift,
            occupied: false,
            just_booked: false,
        }
    }

    /// Whether the room can be picked by a booking.
    pub fn is_available(&self) -> bool {
        !self.occupied
    }

    /// Whether the floor, position, and derived number are consistent.
    pub fn is_well_formed(&self) -> bool {
        is_valid_location(self.floor, self.position_from_lift)
            && self.room_number == room_number(self.floor, self.position_from_lift)
    }
}

/// Room number for a floor and position: `floor * 100 + position`.
///
/// Floor 10 therefore numbers its rooms 1001, 1002, ...
pub fn room_number(floor: u8, position_from_lift: u8) -> u32 {
    floor as u32 * ROOM_NUMBER_STRIDE + position_from_lift as u32
}

/// Whether `(floor, position)` lies inside the room-number address range.
///
/// This does not know the corridor lengths; see
/// [`HotelLayout::contains`](crate::config::HotelLayout::contains).
pub fn is_valid_location(floor: u8, position_from_lift: u8) -> bool {
    (1..=MAX_FLOOR).contains(&floor) && (1..=MAX_POSITION).contains(&position_from_lift)
}
