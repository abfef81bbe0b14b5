//! Pure room allocation logic for HotelBook.
//!
//! This crate contains the booking logic that is independent of any room
//! store, transport, or runtime. Functions take plain room lists and return
//! results, making them unit-testable and reusable by the stateful engine,
//! the headless harness, and any future front end.
//!
//! # Module Overview
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`booking`] | Request size validation and the stateless `allocate` boundary |
//! | [`combinations`] | Lazy, restartable fixed-size subset enumeration |
//! | [`config`] | Allocation thresholds and building layout, with validation |
//! | [`constants`] | Inventory shape, request bounds, travel units, search thresholds |
//! | [`error`] | User-visible allocation failures |
//! | [`room`] | Room model and room numbering |
//! | [`search`] | Phased optimal allocation search |
//! | [`travel`] | Pairwise and group travel time |

pub mod booking;
pub mod combinations;
pub mod config;
pub mod constants;
pub mod error;
pub mod room;
pub mod search;
pub mod travel;
