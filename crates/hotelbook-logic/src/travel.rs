//! Travel time between rooms.
//!
//! Moving one floor costs [`FLOOR_COST`] minutes and walking past one room
//! costs [`POSITION_COST`]. A group of rooms is costed only between its two
//! extremes: order the group by `(floor, position)` and take the travel
//! time from the first room to the last. Rooms in between add nothing.

use crate::constants::travel::{FLOOR_COST, POSITION_COST};
use crate::room::Room;

/// Travel time between two rooms.
pub fn travel_time(a: &Room, b: &Room) -> u32 {
    let vertical = (a.floor as i32 - b.floor as i32).unsigned_abs() * FLOOR_COST;
    let horizontal =
        (a.position_from_lift as i32 - b.position_from_lift as i32).unsigned_abs() * POSITION_COST;
    vertical + horizontal
}

/// Travel time of a room group: first to last in `(floor, position)` order.
///
/// Groups of zero or one room cost nothing.
pub fn group_travel_time(rooms: &[Room]) -> u32 {
    let key = |r: &&Room| (r.floor, r.position_from_lift);
    match (rooms.iter().min_by_key(key), rooms.iter().max_by_key(key)) {
        (Some(first), Some(last)) if rooms.len() > 1 => travel_time(first, last),
        _ => 0,
    }
}
