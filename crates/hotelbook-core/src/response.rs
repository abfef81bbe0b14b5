//! JSON bodies returned to the booking front end.

use serde::{Deserialize, Serialize};

use hotelbook_logic::error::AllocationError;
use hotelbook_logic::room::Room;
use hotelbook_logic::search::Allocation;

/// Outcome of a booking request.
///
/// `{"success": true, "rooms": [...], "travelTime": 4}` on success,
/// `{"success": false, "error": "..."}` on failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rooms: Option<Vec<Room>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub travel_time: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl From<&Result<Allocation, AllocationError>> for BookingResponse {
    fn from(result: &Result<Allocation, AllocationError>) -> Self {
        match result {
            Ok(allocation) => Self {
                success: true,
                rooms: Some(allocation.rooms.clone()),
                travel_time: Some(allocation.travel_time),
                error: None,
            },
            Err(e) => Self {
                success: false,
                rooms: None,
                travel_time: None,
                error: Some(e.to_string()),
            },
        }
    }
}

/// Every room, for drawing the grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomsResponse {
    pub rooms: Vec<Room>,
}

/// Outcome of a random-occupancy request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RandomOccupancyResponse {
    pub success: bool,
    pub occupied_count: usize,
}

impl From<usize> for RandomOccupancyResponse {
    fn from(occupied_count: usize) -> Self {
        Self {
            success: true,
            occupied_count,
        }
    }
}
