//! Allocation settings and building layout.
//!
//! `AllocationConfig` carries the request bounds and the two search
//! thresholds; `HotelLayout` describes the room inventory. Both default to
//! the values in [`crate::constants`] and are checked by validators that
//! report every problem at once.
//!
//! ```
//! use hotelbook_logic::config::{validate_config, AllocationConfig, HotelLayout};
//!
//! let config = AllocationConfig::default();
//! assert!(validate_config(&config).is_empty());
//! assert_eq!(HotelLayout::default().build_inventory().len(), 97);
//! ```

use serde::{Deserialize, Serialize};

use crate::constants::{booking, layout, search};
use crate::room::Room;

/// Request bounds and search thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AllocationConfig {
    /// Fewest rooms one request may book.
    pub min_rooms: usize,
    /// Most rooms one request may book.
    pub max_rooms: usize,
    /// Cross-floor search is exhaustive when at most this many rooms are free.
    pub exact_search_threshold: usize,
    /// Rooms kept per starting floor in the approximate cross-floor search.
    pub approximate_pool_cap: usize,
}

impl Default for AllocationConfig {
    fn default() -> Self {
        Self {
            min_rooms: booking::MIN_ROOMS,
            max_rooms: booking::MAX_ROOMS,
            exact_search_threshold: search::EXACT_SEARCH_THRESHOLD,
            approximate_pool_cap: search::APPROXIMATE_POOL_CAP,
        }
    }
}

/// Shape of the building: how many floors and rooms per floor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HotelLayout {
    pub floors: u8,
    /// Rooms on every floor below the top one.
    pub rooms_per_floor: u8,
    pub top_floor_rooms: u8,
}

impl Default for HotelLayout {
    fn default() -> Self {
        Self {
            floors: layout::FLOORS,
            rooms_per_floor: layout::ROOMS_PER_FLOOR,
            top_floor_rooms: layout::TOP_FLOOR_ROOMS,
        }
    }
}

impl HotelLayout {
    /// Number of rooms this layout produces.
    pub fn room_count(&self) -> usize {
        if self.floors == 0 {
            return 0;
        }
        (self.floors as usize - 1) * self.rooms_per_floor as usize + self.top_floor_rooms as usize
    }

    /// Rooms on `floor`, or 0 for a floor the building does not have.
    pub fn corridor_length(&self, floor: u8) -> u8 {
        match floor {
            0 => 0,
            f if f < self.floors => self.rooms_per_floor,
            f if f == self.floors => self.top_floor_rooms,
            _ => 0,
        }
    }

    /// Whether `(floor, position)` is a room of this building.
    pub fn contains(&self, floor: u8, position_from_lift: u8) -> bool {
        (1..=self.corridor_length(floor)).contains(&position_from_lift)
    }

    /// Whether `room` sits inside this building with a consistent number.
    pub fn holds(&self, room: &Room) -> bool {
        room.is_well_formed() && self.contains(room.floor, room.position_from_lift)
    }

    /// Build every room, all available, in ascending room-number order.
    ///
    /// # Panics
    ///
    /// Panics if the layout addresses a floor or position outside the
    /// building's range; run [`validate_layout`] first for untrusted input.
    pub fn build_inventory(&self) -> Vec<Room> {
        let mut rooms = Vec::with_capacity(self.room_count());
        for floor in 1..=self.floors {
            let count = if floor == self.floors {
                self.top_floor_rooms
            } else {
                self.rooms_per_floor
            };
            for position in 1..=count {
                rooms.push(Room::new(floor, position));
            }
        }
        rooms
    }
}

/// Configuration validation error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A request must be allowed to book at least one room.
    ZeroMinRooms,
    /// Upper request bound below the lower one.
    MaxBelowMin { min: usize, max: usize },
    /// Approximate search pool too small to ever hold a full request.
    PoolCapBelowMaxRooms { cap: usize, max: usize },
    /// Floor count outside 1..=10.
    InvalidFloorCount(u8),
    /// Rooms per floor outside 1..=10.
    InvalidRoomsPerFloor(u8),
    /// Top-floor room count outside 1..=10.
    InvalidTopFloorRooms(u8),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::ZeroMinRooms => write!(f, "min_rooms must be at least 1"),
            ConfigError::MaxBelowMin { min, max } => {
                write!(f, "max_rooms ({}) is below min_rooms ({})", max, min)
            }
            ConfigError::PoolCapBelowMaxRooms { cap, max } => write!(
                f,
                "approximate_pool_cap ({}) is below max_rooms ({})",
                cap, max
            ),
            ConfigError::InvalidFloorCount(n) => write!(f, "invalid floor count: {}", n),
            ConfigError::InvalidRoomsPerFloor(n) => write!(f, "invalid rooms per floor: {}", n),
            ConfigError::InvalidTopFloorRooms(n) => write!(f, "invalid top floor rooms: {}", n),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Validate allocation settings, returning all errors found.
pub fn validate_config(config: &AllocationConfig) -> Vec<ConfigError> {
    let mut errors = Vec::new();

    if config.min_rooms == 0 {
        errors.push(ConfigError::ZeroMinRooms);
    }
    if config.max_rooms < config.min_rooms {
        errors.push(ConfigError::MaxBelowMin {
            min: config.min_rooms,
            max: config.max_rooms,
        });
    }
    if config.approximate_pool_cap < config.max_rooms {
        errors.push(ConfigError::PoolCapBelowMaxRooms {
            cap: config.approximate_pool_cap,
            max: config.max_rooms,
        });
    }

    errors
}

/// Validate a building layout, returning all errors found.
pub fn validate_layout(hotel: &HotelLayout) -> Vec<ConfigError> {
    let mut errors = Vec::new();

    if !(1..=layout::MAX_FLOOR).contains(&hotel.floors) {
        errors.push(ConfigError::InvalidFloorCount(hotel.floors));
    }
    if !(1..=layout::MAX_POSITION).contains(&hotel.rooms_per_floor) {
        errors.push(ConfigError::InvalidRoomsPerFloor(hotel.rooms_per_floor));
    }
    if !(1..=layout::MAX_POSITION).contains(&hotel.top_floor_rooms) {
        errors.push(ConfigError::InvalidTopFloorRooms(hotel.top_floor_rooms));
    }

    errors
}
