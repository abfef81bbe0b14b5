//! HotelBook Core - Room Booking Engine
//!
//! Holds the hotel's room inventory and books groups of rooms so that the
//! walk between the farthest two rooms is as short as possible, preferring
//! groups on a single floor.
//!
//! # Architecture
//!
//! - **RoomRepository**: the only owner of room state (occupied and
//!   just-booked flags)
//! - **AllocationService**: validates a request, snapshots the free rooms,
//!   runs the search from `hotelbook-logic`, and commits the result, all
//!   under one lock
//! - **Collaborators**: reset and random occupancy share the same lock
//!
//! # Example
//!
//! ```rust
//! use hotelbook_core::prelude::*;
//!
//! let service = AllocationService::default();
//! let booking = service.allocate(3).unwrap();
//! assert_eq!(booking.rooms.len(), 3);
//! assert_eq!(booking.travel_time, 2);
//! ```

pub mod occupancy;
pub mod repository;
pub mod response;
pub mod service;
pub mod settings;
pub mod stats;

/// Commonly used types for convenient importing
pub mod prelude {
    pub use crate::repository::RoomRepository;
    pub use crate::response::{BookingResponse, RandomOccupancyResponse, RoomsResponse};
    pub use crate::service::AllocationService;
    pub use crate::settings::Settings;
    pub use crate::stats::OccupancyStats;
    pub use hotelbook_logic::error::AllocationError;
    pub use hotelbook_logic::room::Room;
    pub use hotelbook_logic::search::{Allocation, SearchPhase};
}
