//! Random occupancy generator.
//!
//! Fills the hotel to a random level for demos and load checks. It never
//! touches the just-booked highlight, and it starts from an empty hotel.

use rand::Rng;

use hotelbook_logic::constants::occupancy::{RANDOM_RATE_MIN, RANDOM_RATE_SPAN};

use crate::repository::RoomRepository;

/// Clear the store, then occupy each room with one shared random rate.
///
/// The rate is drawn from `[0.3, 0.7)`. Returns the number of rooms left
/// occupied.
pub fn apply_random_occupancy(repository: &mut RoomRepository, rng: &mut impl Rng) -> usize {
    repository.clear_occupancy();

    let rate = RANDOM_RATE_MIN + rng.gen::<f64>() * RANDOM_RATE_SPAN;
    let mut occupied = 0;
    for room in repository.rooms_mut() {
        if rng.gen::<f64>() < rate {
            room.occupied = true;
            occupied += 1;
        }
    }
    occupied
}
