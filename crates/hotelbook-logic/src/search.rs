//! Optimal room allocation search.
//!
//! The search runs in fixed phases, and the first phase that produces a
//! candidate wins outright:
//!
//! 1. **Same floor**: every floor with enough free rooms is tried, floors
//!    in ascending order. Contiguous windows along the corridor are scored
//!    first, then every subset of the floor. If any floor qualifies, the
//!    best same-floor group is returned even when a cheaper cross-floor
//!    group exists.
//! 2. **Cross floor, exact**: when at most `exact_search_threshold` rooms
//!    are free, every subset of all free rooms is scored.
//! 3. **Cross floor, approximate**: otherwise, for each starting floor the
//!    free rooms of that floor and the ones above it are gathered until
//!    there are enough, ordered by position from the lift alone, cut to
//!    `approximate_pool_cap` rooms, and every subset of that pool is
//!    scored. This bounds the work to C(20, 5) subsets per starting floor
//!    and may miss the true optimum.
//!
//! Candidates are compared with strict less-than on travel time, so among
//! equal-cost groups the first one evaluated is kept.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::combinations::combinations;
use crate::config::{AllocationConfig, HotelLayout};
use crate::error::AllocationError;
use crate::room::Room;
use crate::travel::group_travel_time;

/// Phase of the search that produced an allocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SearchPhase {
    SameFloor,
    CrossFloorExact,
    CrossFloorApproximate,
}

/// A chosen room group and its travel time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Allocation {
    pub rooms: Vec<Room>,
    pub travel_time: u32,
    pub phase: SearchPhase,
}

/// Best candidate seen so far. Equal cost never displaces the incumbent.
#[derive(Debug, Default)]
struct Incumbent {
    best: Option<(Vec<Room>, u32)>,
}

impl Incumbent {
    fn offer(&mut self, candidate: Vec<Room>) {
        let cost = group_travel_time(&candidate);
        let improves = match &self.best {
            Some((_, best_cost)) => cost < *best_cost,
            None => true,
        };
        if improves {
            self.best = Some((candidate, cost));
        }
    }

    fn into_allocation(self, phase: SearchPhase) -> Option<Allocation> {
        self.best.map(|(rooms, travel_time)| Allocation {
            rooms,
            travel_time,
            phase,
        })
    }
}

/// Group rooms by floor, keeping each floor's rooms in input order.
pub fn group_by_floor(rooms: &[Room]) -> BTreeMap<u8, Vec<Room>> {
    let mut floors: BTreeMap<u8, Vec<Room>> = BTreeMap::new();
    for room in rooms {
        floors.entry(room.floor).or_default().push(*room);
    }
    floors
}

/// Find the best `num_rooms` rooms among the free rooms of `available`.
///
/// Rooms flagged occupied are ignored. The returned group is in the order
/// the search produced it; see [`crate::booking::allocate`] for the
/// caller-facing form sorted by room number.
///
/// # Panics
///
/// Panics if `num_rooms` is zero, or if the snapshot holds the same room
/// twice or a room that `hotel` does not have (such as position 9 on a
/// seven-room top floor).
pub fn find_optimal_rooms(
    available: &[Room],
    num_rooms: usize,
    hotel: &HotelLayout,
    config: &AllocationConfig,
) -> Result<Allocation, AllocationError> {
    assert!(num_rooms > 0, "room search needs a positive room count");

    let mut free: Vec<Room> = available.iter().filter(|r| r.is_available()).copied().collect();
    for room in &free {
        assert!(hotel.holds(room), "malformed room in snapshot: {room:?}");
    }
    free.sort_by_key(|r| r.room_number);
    assert!(
        free.windows(2).all(|w| w[0].room_number != w[1].room_number),
        "duplicate room in snapshot"
    );

    let not_enough = AllocationError::NotEnoughRooms {
        requested: num_rooms,
        available: free.len(),
    };
    if free.len() < num_rooms {
        return Err(not_enough);
    }

    let floors = group_by_floor(&free);
    if let Some(found) = search_same_floor(&floors, num_rooms) {
        return Ok(found);
    }

    let cross_floor = if free.len() <= config.exact_search_threshold {
        search_cross_floor_exact(&free, num_rooms)
    } else {
        search_cross_floor_approximate(&floors, num_rooms, config.approximate_pool_cap)
    };
    cross_floor.ok_or(not_enough)
}

/// Best group lying entirely on one floor, or `None` if no floor has room.
pub fn search_same_floor(floors: &BTreeMap<u8, Vec<Room>>, num_rooms: usize) -> Option<Allocation> {
    let mut incumbent = Incumbent::default();

    for rooms in floors.values().filter(|rooms| rooms.len() >= num_rooms) {
        let mut corridor = rooms.clone();
        corridor.sort_by_key(|r| r.position_from_lift);

        for window in corridor.windows(num_rooms) {
            incumbent.offer(window.to_vec());
        }
        for subset in combinations(&corridor, num_rooms) {
            incumbent.offer(subset);
        }
    }

    incumbent.into_allocation(SearchPhase::SameFloor)
}

/// Best group over every subset of `free`, taken in the given order.
pub fn search_cross_floor_exact(free: &[Room], num_rooms: usize) -> Option<Allocation> {
    let mut incumbent = Incumbent::default();
    for subset in combinations(free, num_rooms) {
        incumbent.offer(subset);
    }
    incumbent.into_allocation(SearchPhase::CrossFloorExact)
}

/// Best group over bounded pools built from consecutive floors.
///
/// Pools are ordered by position from the lift only, with no floor key, and
/// the stable sort leaves lower floors first among equal positions.
pub fn search_cross_floor_approximate(
    floors: &BTreeMap<u8, Vec<Room>>,
    num_rooms: usize,
    pool_cap: usize,
) -> Option<Allocation> {
    let floor_rooms: Vec<&Vec<Room>> = floors.values().collect();
    let mut incumbent = Incumbent::default();

    for start in 0..floor_rooms.len() {
        let mut pool: Vec<Room> = Vec::new();
        for rooms in &floor_rooms[start..] {
            if pool.len() >= num_rooms {
                break;
            }
            pool.extend_from_slice(rooms);
        }
        if pool.len() < num_rooms {
            continue;
        }

        pool.sort_by_key(|r| r.position_from_lift);
        pool.truncate(pool_cap);
        for subset in combinations(&pool, num_rooms) {
            incumbent.offer(subset);
        }
    }

    incumbent.into_allocation(SearchPhase::CrossFloorApproximate)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rooms(spots: &[(u8, u8)]) -> Vec<Room> {
        let mut out: Vec<Room> = spots.iter().map(|&(f, p)| Room::new(f, p)).collect();
        out.sort_by_key(|r| r.room_number);
        out
    }

    fn find(available: &[Room], num_rooms: usize) -> Result<Allocation, AllocationError> {
        find_optimal_rooms(
            available,
            num_rooms,
            &HotelLayout::default(),
            &AllocationConfig::default(),
        )
    }

    fn numbers(allocation: &Allocation) -> Vec<u32> {
        let mut n: Vec<u32> = allocation.rooms.iter().map(|r| r.room_number).collect();
        n.sort_unstable();
        n
    }

    #[test]
    fn test_not_enough_free_rooms() {
        let free = rooms(&[(1, 1), (3, 2), (9, 9)]);
        let err = find(&free, 5).unwrap_err();
        assert_eq!(
            err,
            AllocationError::NotEnoughRooms {
                requested: 5,
                available: 3
            }
        );
    }

    #[test]
    fn test_occupied_rooms_are_skipped() {
        let mut all = HotelLayout::default().build_inventory();
        for room in all.iter_mut().filter(|r| r.floor == 1 && r.position_from_lift <= 2) {
            room.occupied = true;
        }
        let found = find(&all, 2).unwrap();
        assert_eq!(numbers(&found), vec![103, 104]);
    }

    #[test]
    fn test_single_room_prefers_lowest_floor_first_room() {
        let all = HotelLayout::default().build_inventory();
        let found = find(&all, 1).unwrap();
        assert_eq!(numbers(&found), vec![101]);
        assert_eq!(found.travel_time, 0);
    }

    #[test]
    fn test_full_hotel_picks_first_floor_window() {
        let all = HotelLayout::default().build_inventory();
        let found = find(&all, 5).unwrap();
        assert_eq!(found.phase, SearchPhase::SameFloor);
        assert_eq!(numbers(&found), vec![101, 102, 103, 104, 105]);
        assert_eq!(found.travel_time, 4);
    }

    #[test]
    fn test_same_floor_beats_cheaper_cross_floor() {
        let free = rooms(&[(1, 1), (2, 1), (5, 1), (5, 10)]);
        let found = find(&free, 2).unwrap();
        assert_eq!(found.phase, SearchPhase::SameFloor);
        assert_eq!(numbers(&found), vec![501, 510]);
        assert_eq!(found.travel_time, 9);
    }

    #[test]
    fn test_same_floor_picks_cheapest_floor() {
        // Floor 2 spreads wide, floor 6 is tight
        let free = rooms(&[(2, 1), (2, 10), (6, 4), (6, 5)]);
        let found = search_same_floor(&group_by_floor(&free), 2).unwrap();
        assert_eq!(numbers(&found), vec![604, 605]);
        assert_eq!(found.travel_time, 1);
    }

    #[test]
    fn test_same_floor_tie_keeps_lower_floor() {
        let free = rooms(&[(3, 2), (3, 4), (7, 6), (7, 8)]);
        let found = search_same_floor(&group_by_floor(&free), 2).unwrap();
        assert_eq!(numbers(&found), vec![302, 304]);
    }

    #[test]
    fn test_same_floor_first_window_wins_tie() {
        // Windows {1,2,9} and {2,9,10} both cost 8 and no subset is cheaper
        let free = rooms(&[(4, 1), (4, 2), (4, 9), (4, 10)]);
        let found = search_same_floor(&group_by_floor(&free), 3).unwrap();
        assert_eq!(numbers(&found), vec![401, 402, 409]);
        assert_eq!(found.travel_time, 8);
    }

    #[test]
    fn test_no_floor_qualifies() {
        let free = rooms(&[(1, 1), (2, 1), (3, 1)]);
        assert!(search_same_floor(&group_by_floor(&free), 2).is_none());
    }

    #[test]
    fn test_cross_floor_exact_small_inventory() {
        // One room per floor: closest pair is on adjacent floors
        let free = rooms(&[(1, 9), (3, 1), (4, 1), (8, 5)]);
        let found = find(&free, 2).unwrap();
        assert_eq!(found.phase, SearchPhase::CrossFloorExact);
        assert_eq!(numbers(&found), vec![301, 401]);
        assert_eq!(found.travel_time, 2);
    }

    #[test]
    fn test_cross_floor_exact_tie_keeps_first_in_room_order() {
        let free = rooms(&[(1, 1), (2, 1), (5, 3), (6, 3)]);
        let found = search_cross_floor_exact(&free, 2).unwrap();
        assert_eq!(numbers(&found), vec![101, 201]);
    }

    #[test]
    fn test_threshold_selects_approximate_branch() {
        // Four free rooms on each of ten floors: 40 > 30, and no floor holds 5
        let mut spots = Vec::new();
        for floor in 1..=10 {
            for position in 1..=4 {
                spots.push((floor, position));
            }
        }
        let free = rooms(&spots);
        let found = find(&free, 5).unwrap();
        assert_eq!(found.phase, SearchPhase::CrossFloorApproximate);
        // Pool from floor 1 stops after floor 2; an unbounded pool cut to
        // 20 would only hold positions 1-2 and land on floors 5-6
        assert_eq!(numbers(&found), vec![101, 102, 103, 104, 201]);
        assert_eq!(found.travel_time, 2);
    }

    #[test]
    fn test_raised_threshold_selects_exact_branch() {
        let mut spots = Vec::new();
        for floor in 1..=10 {
            for position in 1..=4 {
                spots.push((floor, position));
            }
        }
        let free = rooms(&spots);
        let config = AllocationConfig {
            exact_search_threshold: 40,
            ..AllocationConfig::default()
        };
        let found = find_optimal_rooms(&free, 5, &HotelLayout::default(), &config).unwrap();
        assert_eq!(found.phase, SearchPhase::CrossFloorExact);
        // Floor 1 plus 201: endpoints 101 and 201 cost one floor
        assert_eq!(numbers(&found), vec![101, 102, 103, 104, 201]);
        assert_eq!(found.travel_time, 2);
    }

    /// Odd floors free at positions 3-6, even floors at 1-4: 40 free rooms,
    /// four per floor.
    fn staggered_hotel() -> Vec<Room> {
        let mut spots = Vec::new();
        for floor in 1..=10u8 {
            let positions = if floor % 2 == 1 { [3, 4, 5, 6] } else { [1, 2, 3, 4] };
            for position in positions {
                spots.push((floor, position));
            }
        }
        rooms(&spots)
    }

    #[test]
    fn test_approximate_pool_orders_by_position_only() {
        // Pool for floors 1+2 by position: 201, 202, 103, 203, 104, 204, 105, 106.
        // The first subset reaching cost 2 takes three floor-2 rooms; a
        // floor-major pool would reach 103-106 + 203 first.
        let found = find(&staggered_hotel(), 5).unwrap();
        assert_eq!(found.phase, SearchPhase::CrossFloorApproximate);
        assert_eq!(numbers(&found), vec![103, 104, 201, 202, 203]);
        assert_eq!(found.travel_time, 2);
    }

    #[test]
    fn test_approximate_pool_stops_once_full() {
        // Gathering every floor above floor 1 and cutting to 20 would drop
        // 104 and 204 and move the pick to floors 3-4.
        let floors = group_by_floor(&staggered_hotel());
        let found = search_cross_floor_approximate(&floors, 5, 20).unwrap();
        assert_eq!(numbers(&found), vec![103, 104, 201, 202, 203]);
        assert_eq!(found.travel_time, 2);
    }

    #[test]
    fn test_approximate_pool_cap_truncates() {
        let free = rooms(&[(1, 1), (1, 2), (2, 9), (2, 10)]);
        let floors = group_by_floor(&free);
        // Cap of 2 leaves only the two position-1/2 rooms
        let found = search_cross_floor_approximate(&floors, 2, 2).unwrap();
        assert_eq!(numbers(&found), vec![101, 102]);
        assert!(search_cross_floor_approximate(&floors, 3, 2).is_none());
    }

    #[test]
    fn test_result_cost_matches_group() {
        let all = HotelLayout::default().build_inventory();
        for k in 1..=5 {
            let found = find(&all, k).unwrap();
            assert_eq!(found.rooms.len(), k);
            assert_eq!(found.travel_time, group_travel_time(&found.rooms));
        }
    }

    #[test]
    #[should_panic(expected = "positive room count")]
    fn test_zero_rooms_is_a_defect() {
        let _ = find(&[], 0);
    }

    #[test]
    #[should_panic(expected = "duplicate room")]
    fn test_duplicate_snapshot_is_a_defect() {
        let room = Room::new(1, 1);
        let _ = find(&[room, room], 1);
    }

    #[test]
    #[should_panic(expected = "malformed room")]
    fn test_room_past_top_floor_corridor_is_a_defect() {
        let mut past_end = Room::new(10, 7);
        past_end.position_from_lift = 9;
        past_end.room_number = 1009;
        let _ = find(&[past_end], 1);
    }

    #[test]
    fn test_custom_layout_bounds_the_snapshot() {
        let hotel = HotelLayout {
            floors: 2,
            rooms_per_floor: 3,
            top_floor_rooms: 2,
        };
        let free = hotel.build_inventory();
        let found = find_optimal_rooms(&free, 2, &hotel, &AllocationConfig::default()).unwrap();
        assert_eq!(numbers(&found), vec![101, 102]);

        let outside = rooms(&[(2, 3)]);
        let result = std::panic::catch_unwind(|| {
            find_optimal_rooms(&outside, 1, &hotel, &AllocationConfig::default())
        });
        assert!(result.is_err());
    }

    #[test]
    #[should_panic(expected = "malformed room")]
    fn test_out_of_range_room_is_a_defect() {
        let mut room = Room::new(1, 1);
        room.floor = 11;
        let _ = find(&[room], 1);
    }
}
