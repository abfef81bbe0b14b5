//! Allocation service - main entry point for booking rooms.
//!
//! Owns the room store behind a single mutex. Every writer (booking,
//! reset, random occupancy) holds the lock for its whole
//! read-search-commit cycle, so no other write can land between the
//! snapshot a booking searched and the commit that books it.

use std::sync::{Mutex, MutexGuard, PoisonError};

use rand::Rng;

use hotelbook_logic::booking::validate_request_size;
use hotelbook_logic::config::{validate_config, AllocationConfig, ConfigError};
use hotelbook_logic::error::AllocationError;
use hotelbook_logic::room::Room;
use hotelbook_logic::search::{find_optimal_rooms, Allocation};

use crate::occupancy::apply_random_occupancy;
use crate::repository::RoomRepository;
use crate::settings::{Settings, SettingsError};
use crate::stats::OccupancyStats;

/// Booking engine over one shared room store.
#[derive(Debug)]
pub struct AllocationService {
    store: Mutex<RoomRepository>,
    config: AllocationConfig,
}

impl Default for AllocationService {
    /// The standard 97-room hotel with default thresholds.
    fn default() -> Self {
        Self {
            store: Mutex::new(RoomRepository::default()),
            config: AllocationConfig::default(),
        }
    }
}

impl AllocationService {
    /// Create a service over `repository`, rejecting an invalid config.
    pub fn new(
        repository: RoomRepository,
        config: AllocationConfig,
    ) -> Result<Self, Vec<ConfigError>> {
        let errors = validate_config(&config);
        if !errors.is_empty() {
            return Err(errors);
        }
        Ok(Self {
            store: Mutex::new(repository),
            config,
        })
    }

    /// Create a service from loaded settings.
    pub fn from_settings(settings: &Settings) -> Result<Self, SettingsError> {
        let errors = settings.validate();
        if !errors.is_empty() {
            return Err(SettingsError::Invalid(errors));
        }
        let repository = RoomRepository::from_layout(&settings.layout)?;
        Ok(Self {
            store: Mutex::new(repository),
            config: settings.allocation,
        })
    }

    pub fn config(&self) -> &AllocationConfig {
        &self.config
    }

    // A panic while holding the lock can only come from the search's
    // invariant checks, which run before any write.
    fn lock(&self) -> MutexGuard<'_, RoomRepository> {
        self.store.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Book `num_rooms` rooms.
    ///
    /// On success the chosen rooms are occupied and highlighted, every
    /// other highlight is cleared, and the rooms come back sorted by room
    /// number with their committed flags. On failure nothing changes.
    pub fn allocate(&self, num_rooms: i64) -> Result<Allocation, AllocationError> {
        let count = match validate_request_size(num_rooms, &self.config) {
            Ok(count) => count,
            Err(e) => {
                log::warn!("Rejected booking of {} rooms: {}", num_rooms, e);
                return Err(e);
            }
        };

        let mut store = self.lock();
        let snapshot = store.available();
        log::debug!(
            "Searching {} free rooms for a group of {}",
            snapshot.len(),
            count
        );

        let searched = find_optimal_rooms(&snapshot, count, store.layout(), &self.config);
        let mut allocation = match searched {
            Ok(allocation) => allocation,
            Err(e) => {
                log::warn!(
                    "Rejected booking of {} rooms: {} ({} free)",
                    count,
                    e,
                    snapshot.len()
                );
                return Err(e);
            }
        };

        allocation.rooms.sort_by_key(|r| r.room_number);
        let picked: Vec<u32> = allocation.rooms.iter().map(|r| r.room_number).collect();
        store.commit_booking(&picked);
        allocation.rooms = picked
            .iter()
            .filter_map(|n| store.get(*n).copied())
            .collect();

        log::info!(
            "Booked {} rooms: {}, travel time: {} mins ({:?})",
            count,
            picked
                .iter()
                .map(|n| n.to_string())
                .collect::<Vec<_>>()
                .join(", "),
            allocation.travel_time,
            allocation.phase
        );
        Ok(allocation)
    }

    /// Free every room and clear every highlight.
    pub fn reset(&self) {
        self.lock().clear_occupancy();
        log::info!("All rooms reset");
    }

    /// Re-fill the hotel at a random occupancy level using the thread RNG.
    pub fn random_occupancy(&self) -> usize {
        self.random_occupancy_with(&mut rand::thread_rng())
    }

    /// Re-fill the hotel at a random occupancy level using `rng`.
    ///
    /// Returns the number of occupied rooms.
    pub fn random_occupancy_with(&self, rng: &mut impl Rng) -> usize {
        let mut store = self.lock();
        let occupied = apply_random_occupancy(&mut store, rng);
        log::info!(
            "Random occupancy applied: {}/{} rooms occupied ({:.0}%)",
            occupied,
            store.len(),
            store.stats().occupancy_rate() * 100.0
        );
        occupied
    }

    /// Every room, ascending by room number.
    pub fn rooms(&self) -> Vec<Room> {
        self.lock().rooms()
    }

    /// Free rooms, ascending by room number.
    pub fn available_rooms(&self) -> Vec<Room> {
        self.lock().available()
    }

    pub fn stats(&self) -> OccupancyStats {
        self.lock().stats()
    }
}
