//! Room store: the single owner of room state.
//!
//! The repository hands out copies (snapshots) of its rooms and accepts a
//! small set of write operations. It does no locking itself; the
//! [`AllocationService`](crate::service::AllocationService) wraps it in a
//! mutex so every read-modify-write is serialized.

use std::collections::BTreeMap;

use hotelbook_logic::config::{validate_layout, ConfigError, HotelLayout};
use hotelbook_logic::room::Room;

use crate::stats::OccupancyStats;

/// Problems building a repository from a room list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InventoryError {
    /// Layout failed validation.
    Layout(Vec<ConfigError>),
    /// Room outside the layout, or room number not derived from its spot.
    MalformedRoom(u32),
    /// Two rooms share a room number.
    DuplicateRoom(u32),
}

impl std::fmt::Display for InventoryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InventoryError::Layout(errors) => {
                write!(f, "invalid layout:")?;
                for e in errors {
                    write!(f, " {};", e)?;
                }
                Ok(())
            }
            InventoryError::MalformedRoom(n) => write!(f, "malformed room {}", n),
            InventoryError::DuplicateRoom(n) => write!(f, "duplicate room {}", n),
        }
    }
}

impl std::error::Error for InventoryError {}

/// All rooms of one building, keyed by room number.
#[derive(Debug, Clone)]
pub struct RoomRepository {
    layout: HotelLayout,
    rooms: BTreeMap<u32, Room>,
}

impl Default for RoomRepository {
    /// The standard 97-room building, all rooms available.
    fn default() -> Self {
        let layout = HotelLayout::default();
        let rooms = layout
            .build_inventory()
            .into_iter()
            .map(|r| (r.room_number, r))
            .collect();
        Self { layout, rooms }
    }
}

impl RoomRepository {
    /// Build an all-available repository for a layout.
    pub fn from_layout(layout: &HotelLayout) -> Result<Self, InventoryError> {
        let errors = validate_layout(layout);
        if !errors.is_empty() {
            return Err(InventoryError::Layout(errors));
        }
        Self::from_rooms(*layout, layout.build_inventory())
    }

    /// Build a repository from explicit rooms of `layout`, flags included.
    ///
    /// The rooms need not cover the whole layout, but each must lie inside it.
    pub fn from_rooms(
        layout: HotelLayout,
        rooms: impl IntoIterator<Item = Room>,
    ) -> Result<Self, InventoryError> {
        let mut map = BTreeMap::new();
        for room in rooms {
            if !layout.holds(&room) {
                return Err(InventoryError::MalformedRoom(room.room_number));
            }
            if map.insert(room.room_number, room).is_some() {
                return Err(InventoryError::DuplicateRoom(room.room_number));
            }
        }
        Ok(Self { layout, rooms: map })
    }

    /// Building the rooms belong to.
    pub fn layout(&self) -> &HotelLayout {
        &self.layout
    }

    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    pub fn get(&self, room_number: u32) -> Option<&Room> {
        self.rooms.get(&room_number)
    }

    /// Every room, ascending by room number.
    pub fn rooms(&self) -> Vec<Room> {
        self.rooms.values().copied().collect()
    }

    /// Free rooms, ascending by room number.
    pub fn available(&self) -> Vec<Room> {
        self.rooms.values().filter(|r| r.is_available()).copied().collect()
    }

    pub fn stats(&self) -> OccupancyStats {
        OccupancyStats::from_rooms(self.rooms.values())
    }

    /// Record a successful booking.
    ///
    /// Clears the highlight on every room, then marks each listed room
    /// occupied and highlighted.
    ///
    /// # Panics
    ///
    /// Panics if a listed room is not in the store. Nothing is modified in
    /// that case.
    pub fn commit_booking(&mut self, room_numbers: &[u32]) {
        if let Some(missing) = room_numbers.iter().find(|n| !self.rooms.contains_key(*n)) {
            panic!("booking names unknown room {missing}");
        }
        self.clear_highlights();
        for number in room_numbers {
            if let Some(room) = self.rooms.get_mut(number) {
                room.occupied = true;
                room.just_booked = true;
            }
        }
    }

    /// Clear the just-booked highlight everywhere.
    pub fn clear_highlights(&mut self) {
        for room in self.rooms.values_mut() {
            room.just_booked = false;
        }
    }

    /// Free every room and clear every highlight.
    pub fn clear_occupancy(&mut self) {
        for room in self.rooms.values_mut() {
            room.occupied = false;
            room.just_booked = false;
        }
    }

    pub(crate) fn rooms_mut(&mut self) -> impl Iterator<Item = &mut Room> {
        self.rooms.values_mut()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_holds_97_available_rooms() {
        let repo = RoomRepository::default();
        assert_eq!(repo.len(), 97);
        assert_eq!(repo.available().len(), 97);
        assert!(repo.get(1007).is_some());
        assert!(repo.get(1008).is_none());
    }

    #[test]
    fn test_rooms_are_sorted() {
        let repo = RoomRepository::default();
        let numbers: Vec<u32> = repo.rooms().iter().map(|r| r.room_number).collect();
        assert!(numbers.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_from_layout_rejects_bad_layout() {
        let layout = HotelLayout {
            floors: 0,
            ..HotelLayout::default()
        };
        assert!(matches!(
            RoomRepository::from_layout(&layout),
            Err(InventoryError::Layout(_))
        ));
    }

    #[test]
    fn test_from_rooms_rejects_duplicates() {
        let room = Room::new(2, 2);
        assert_eq!(
            RoomRepository::from_rooms(HotelLayout::default(), [room, room]).unwrap_err(),
            InventoryError::DuplicateRoom(202)
        );
    }

    #[test]
    fn test_from_rooms_rejects_malformed() {
        let mut room = Room::new(2, 2);
        room.room_number = 5;
        assert_eq!(
            RoomRepository::from_rooms(HotelLayout::default(), [room]).unwrap_err(),
            InventoryError::MalformedRoom(5)
        );
    }

    #[test]
    fn test_from_rooms_rejects_rooms_outside_layout() {
        assert_eq!(
            RoomRepository::from_rooms(HotelLayout::default(), [Room::new(10, 8)]).unwrap_err(),
            InventoryError::MalformedRoom(1008)
        );

        let small = HotelLayout {
            floors: 2,
            rooms_per_floor: 3,
            top_floor_rooms: 1,
        };
        let repo = RoomRepository::from_rooms(small, [Room::new(1, 3), Room::new(2, 1)]).unwrap();
        assert_eq!(repo.layout(), &small);
        assert_eq!(
            RoomRepository::from_rooms(small, [Room::new(2, 2)]).unwrap_err(),
            InventoryError::MalformedRoom(202)
        );
    }

    #[test]
    fn test_commit_moves_highlight() {
        let mut repo = RoomRepository::default();
        repo.commit_booking(&[101, 102]);
        repo.commit_booking(&[305]);

        let r101 = repo.get(101).unwrap();
        assert!(r101.occupied && !r101.just_booked);
        let r305 = repo.get(305).unwrap();
        assert!(r305.occupied && r305.just_booked);
        assert_eq!(repo.stats().just_booked, 1);
        assert_eq!(repo.available().len(), 94);
    }

    #[test]
    fn test_commit_unknown_room_leaves_state() {
        let mut repo = RoomRepository::default();
        repo.commit_booking(&[101]);
        let before = repo.rooms();
        let outcome = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            repo.commit_booking(&[102, 9999]);
        }));
        assert!(outcome.is_err());
        assert_eq!(repo.rooms(), before);
    }

    #[test]
    fn test_clear_occupancy() {
        let mut repo = RoomRepository::default();
        repo.commit_booking(&[101, 202, 303]);
        repo.clear_occupancy();
        assert_eq!(repo.available().len(), 97);
        assert_eq!(repo.stats().just_booked, 0);
    }
}
