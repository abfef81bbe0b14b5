//! Occupancy counts for a room set.

use serde::{Deserialize, Serialize};

use hotelbook_logic::room::Room;

/// Headline numbers for the room grid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OccupancyStats {
    pub total: usize,
    pub available: usize,
    pub occupied: usize,
    pub just_booked: usize,
}

impl OccupancyStats {
    pub fn from_rooms<'a>(rooms: impl IntoIterator<Item = &'a Room>) -> Self {
        rooms.into_iter().fold(Self::default(), |mut stats, room| {
            stats.total += 1;
            if room.occupied {
                stats.occupied += 1;
            } else {
                stats.available += 1;
            }
            if room.just_booked {
                stats.just_booked += 1;
            }
            stats
        })
    }

    /// Occupied share of the inventory, 0.0 for an empty set.
    pub fn occupancy_rate(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.occupied as f64 / self.total as f64
        }
    }
}
