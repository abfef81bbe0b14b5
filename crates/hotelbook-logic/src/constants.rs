//! Booking constants: inventory shape, request bounds, travel units,
//! and search thresholds.
//!
//! These are plain constants with no runtime dependency. The defaults in
//! [`crate::config`] are built from them, and both the engine and the
//! headless harness refer to them by name.

pub mod layout {
    /// Floors in the default building (1-based, lowest floor nearest the lobby).
    pub const FLOORS: u8 = 10;
    /// Rooms on every floor except the top one.
    pub const ROOMS_PER_FLOOR: u8 = 10;
    /// Rooms on the top floor.
    pub const TOP_FLOOR_ROOMS: u8 = 7;
    /// Total rooms in the default building.
    pub const TOTAL_ROOMS: usize =
        (FLOORS as usize - 1) * ROOMS_PER_FLOOR as usize + TOP_FLOOR_ROOMS as usize;

    /// Highest floor number a room may carry.
    pub const MAX_FLOOR: u8 = 10;
    /// Highest position-from-lift a room may carry.
    pub const MAX_POSITION: u8 = 10;
    /// Room numbers are `floor * ROOM_NUMBER_STRIDE + position`.
    pub const ROOM_NUMBER_STRIDE: u32 = 100;
}

pub mod booking {
    /// Smallest number of rooms a single request may book.
    pub const MIN_ROOMS: usize = 1;
    /// Largest number of rooms a single request may book.
    pub const MAX_ROOMS: usize = 5;
}

pub mod travel {
    /// Minutes to move one floor by lift.
    pub const FLOOR_COST: u32 = 2;
    /// Minutes to walk past one room along a corridor.
    pub const POSITION_COST: u32 = 1;
}

pub mod search {
    /// Cross-floor searches over at most this many available rooms are exhaustive.
    pub const EXACT_SEARCH_THRESHOLD: usize = 30;
    /// Candidate pool size per starting floor in the approximate cross-floor search.
    pub const APPROXIMATE_POOL_CAP: usize = 20;
}

pub mod occupancy {
    /// Lowest occupancy rate drawn by the random-occupancy generator.
    pub const RANDOM_RATE_MIN: f64 = 0.3;
    /// Width of the occupancy rate range, so rates fall in `[MIN, MIN + SPAN)`.
    pub const RANDOM_RATE_SPAN: f64 = 0.4;
}
