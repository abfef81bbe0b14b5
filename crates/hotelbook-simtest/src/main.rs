//! HotelBook Headless Booking Harness
//!
//! Validates allocation logic and the booking engine without any
//! transport layer. Runs entirely in-process with no HTTP or UI.
//!
//! Usage:
//!   cargo run -p hotelbook-simtest
//!   cargo run -p hotelbook-simtest -- --verbose

use std::collections::HashSet;
use std::time::Instant;

use hotelbook_core::prelude::*;
use hotelbook_core::repository::RoomRepository;
use hotelbook_logic::booking::allocate;
use hotelbook_logic::config::{AllocationConfig, HotelLayout};
use hotelbook_logic::constants::{layout, search};
use hotelbook_logic::travel::{group_travel_time, travel_time};
use rand::rngs::StdRng;
use rand::SeedableRng;

// ── Test harness ────────────────────────────────────────────────────────

struct TestResult {
    name: String,
    passed: bool,
    detail: String,
}

fn main() {
    let verbose = std::env::args().any(|a| a == "--verbose");
    println!("=== HotelBook Booking Harness ===\n");

    let mut results = Vec::new();

    // 1. Inventory shape
    results.extend(validate_inventory(verbose));

    // 2. Travel time units
    results.extend(validate_travel_time(verbose));

    // 3. Search priority and tie-breaking
    results.extend(validate_search_priority(verbose));

    // 4. Request validation and failures
    results.extend(validate_failures(verbose));

    // 5. Highlight semantics
    results.extend(validate_highlights(verbose));

    // 6. Randomized occupancy sweep
    results.extend(validate_random_sweep(verbose));

    // 7. Search phase timing
    results.extend(validate_phase_timing(verbose));

    // 8. JSON bodies
    results.extend(validate_wire_format(verbose));

    // 9. Settings loading
    results.extend(validate_settings(verbose));

    // ── Summary ──
    println!();
    let passed = results.iter().filter(|r| r.passed).count();
    let failed = results.iter().filter(|r| !r.passed).count();
    let total = results.len();

    for r in &results {
        let icon = if r.passed { "✓" } else { "✗" };
        if !r.passed || verbose {
            println!("  {} {}: {}", icon, r.name, r.detail);
        }
    }

    println!(
        "\n=== RESULT: {}/{} passed, {} failed ===",
        passed, total, failed
    );

    if failed > 0 {
        std::process::exit(1);
    }
}

/// Full inventory with only the listed `(floor, position)` spots free.
fn hotel_with_free(spots: &[(u8, u8)]) -> Vec<Room> {
    let mut rooms = HotelLayout::default().build_inventory();
    for room in rooms.iter_mut() {
        room.occupied = !spots.contains(&(room.floor, room.position_from_lift));
    }
    rooms
}

fn numbers(rooms: &[Room]) -> Vec<u32> {
    rooms.iter().map(|r| r.room_number).collect()
}

// ── 1. Inventory ────────────────────────────────────────────────────────

fn validate_inventory(verbose: bool) -> Vec<TestResult> {
    println!("--- Inventory ---");
    let mut results = Vec::new();

    let rooms = HotelLayout::default().build_inventory();
    results.push(TestResult {
        name: "inventory_size".into(),
        passed: rooms.len() == layout::TOTAL_ROOMS && rooms.len() == 97,
        detail: format!("{} rooms", rooms.len()),
    });

    let unique_numbers: HashSet<u32> = rooms.iter().map(|r| r.room_number).collect();
    let unique_spots: HashSet<(u8, u8)> = rooms
        .iter()
        .map(|r| (r.floor, r.position_from_lift))
        .collect();
    results.push(TestResult {
        name: "inventory_unique".into(),
        passed: unique_numbers.len() == rooms.len() && unique_spots.len() == rooms.len(),
        detail: "room numbers and (floor, position) pairs unique".into(),
    });

    let top: Vec<u32> = rooms
        .iter()
        .filter(|r| r.floor == 10)
        .map(|r| r.room_number)
        .collect();
    results.push(TestResult {
        name: "inventory_top_floor".into(),
        passed: top == vec![1001, 1002, 1003, 1004, 1005, 1006, 1007],
        detail: format!("floor 10 rooms: {:?}", top),
    });

    let repo = RoomRepository::default();
    results.push(TestResult {
        name: "repository_matches_layout".into(),
        passed: repo.rooms() == rooms,
        detail: "default store equals built inventory".into(),
    });

    if verbose {
        let per_floor: Vec<usize> = (1..=10)
            .map(|f| rooms.iter().filter(|r| r.floor == f).count())
            .collect();
        println!("  rooms per floor: {:?}", per_floor);
    }

    results
}

// ── 2. Travel Time ──────────────────────────────────────────────────────

fn validate_travel_time(_verbose: bool) -> Vec<TestResult> {
    println!("--- Travel Time ---");
    let mut results = Vec::new();

    let vertical = travel_time(&Room::new(2, 1), &Room::new(5, 1));
    results.push(TestResult {
        name: "travel_vertical_units".into(),
        passed: vertical == 6,
        detail: format!("201 → 501 = {} (expect 6)", vertical),
    });

    let horizontal = travel_time(&Room::new(7, 2), &Room::new(7, 9));
    results.push(TestResult {
        name: "travel_horizontal_units".into(),
        passed: horizontal == 7,
        detail: format!("702 → 709 = {} (expect 7)", horizontal),
    });

    let three = group_travel_time(&[Room::new(3, 1), Room::new(3, 5), Room::new(3, 9)]);
    let two = group_travel_time(&[Room::new(3, 1), Room::new(3, 9)]);
    results.push(TestResult {
        name: "travel_endpoint_cost".into(),
        passed: three == 8 && two == 8,
        detail: format!("{{1,5,9}} = {}, {{1,9}} = {}", three, two),
    });

    let single = group_travel_time(&[Room::new(4, 4)]);
    results.push(TestResult {
        name: "travel_single_room".into(),
        passed: single == 0,
        detail: "one room costs nothing".into(),
    });

    results
}

// ── 3. Search Priority ──────────────────────────────────────────────────

fn validate_search_priority(verbose: bool) -> Vec<TestResult> {
    println!("--- Search Priority ---");
    let mut results = Vec::new();
    let hotel = HotelLayout::default();
    let config = AllocationConfig::default();

    let rooms = hotel_with_free(&[(5, 1), (5, 10), (1, 1), (2, 1)]);
    match allocate(&rooms, 2, &hotel, &config) {
        Ok(a) => results.push(TestResult {
            name: "same_floor_dominance".into(),
            passed: numbers(&a.rooms) == vec![501, 510] && a.travel_time == 9,
            detail: format!(
                "{:?} cost {} (cross-floor pair would cost 2)",
                numbers(&a.rooms),
                a.travel_time
            ),
        }),
        Err(e) => results.push(TestResult {
            name: "same_floor_dominance".into(),
            passed: false,
            detail: format!("unexpected error: {}", e),
        }),
    }

    let empty = hotel.build_inventory();
    match allocate(&empty, 5, &hotel, &config) {
        Ok(a) => results.push(TestResult {
            name: "tie_break_first_floor".into(),
            passed: numbers(&a.rooms) == vec![101, 102, 103, 104, 105] && a.travel_time == 4,
            detail: format!("{:?} cost {}", numbers(&a.rooms), a.travel_time),
        }),
        Err(e) => results.push(TestResult {
            name: "tie_break_first_floor".into(),
            passed: false,
            detail: format!("unexpected error: {}", e),
        }),
    }

    // Two free per floor on floors 1-5 → exhaustive cross-floor
    let mut spots = Vec::new();
    for floor in 1..=5 {
        spots.push((floor, 3));
        spots.push((floor, 7));
    }
    let exact = allocate(&hotel_with_free(&spots), 3, &hotel, &config);
    results.push(TestResult {
        name: "phase_cross_floor_exact".into(),
        passed: matches!(&exact, Ok(a) if a.phase == SearchPhase::CrossFloorExact),
        detail: format!("10 free rooms → {:?}", exact.as_ref().map(|a| a.phase)),
    });

    // Four free per floor on every floor → bounded approximate pools
    let mut spots = Vec::new();
    for floor in 1..=10 {
        for position in [1, 3, 5, 7] {
            spots.push((floor, position));
        }
    }
    let approximate = allocate(&hotel_with_free(&spots), 5, &hotel, &config);
    results.push(TestResult {
        name: "phase_cross_floor_approximate".into(),
        passed: matches!(&approximate, Ok(a) if a.phase == SearchPhase::CrossFloorApproximate),
        detail: format!(
            "40 free rooms (> {}) → {:?}",
            search::EXACT_SEARCH_THRESHOLD,
            approximate.as_ref().map(|a| a.phase)
        ),
    });

    if verbose {
        if let Ok(a) = &approximate {
            println!(
                "  approximate pick: {:?} cost {}",
                numbers(&a.rooms),
                a.travel_time
            );
        }
    }

    results
}

// ── 4. Failures ─────────────────────────────────────────────────────────

fn validate_failures(_verbose: bool) -> Vec<TestResult> {
    println!("--- Failures ---");
    let mut results = Vec::new();

    let service = AllocationService::default();
    service.allocate(2).ok();
    let before = service.rooms();
    let over_max = service.config().max_rooms as i64 + 1;
    for bad in [0, over_max, -1, -100] {
        let outcome = service.allocate(bad);
        results.push(TestResult {
            name: format!("invalid_size_{}", bad),
            passed: matches!(outcome, Err(AllocationError::InvalidRequestSize { .. }))
                && service.rooms() == before,
            detail: format!("{} rooms → {:?}", bad, outcome.err()),
        });
    }

    let repo = RoomRepository::from_rooms(
        HotelLayout::default(),
        hotel_with_free(&[(1, 1), (5, 5), (9, 9)]),
    );
    let short = repo.map(|repo| AllocationService::new(repo, AllocationConfig::default()));
    match short {
        Ok(Ok(service)) => {
            let before = service.rooms();
            let outcome = service.allocate(5);
            results.push(TestResult {
                name: "not_enough_rooms".into(),
                passed: matches!(outcome, Err(AllocationError::NotEnoughRooms { .. }))
                    && service.rooms() == before,
                detail: "5 requested, 3 free → NotEnoughRooms, store untouched".into(),
            });
        }
        _ => results.push(TestResult {
            name: "not_enough_rooms".into(),
            passed: false,
            detail: "could not build store".into(),
        }),
    }

    results
}

// ── 5. Highlights ───────────────────────────────────────────────────────

fn validate_highlights(_verbose: bool) -> Vec<TestResult> {
    println!("--- Highlights ---");
    let mut results = Vec::new();

    let service = AllocationService::default();
    let first = service.allocate(3);
    let second = service.allocate(2);
    let (Ok(first), Ok(second)) = (first, second) else {
        results.push(TestResult {
            name: "highlight_latest_only".into(),
            passed: false,
            detail: "bookings on an empty hotel failed".into(),
        });
        return results;
    };

    let first_numbers: HashSet<u32> = numbers(&first.rooms).into_iter().collect();
    let second_numbers: HashSet<u32> = numbers(&second.rooms).into_iter().collect();
    let rooms = service.rooms();
    let highlighted: HashSet<u32> = rooms
        .iter()
        .filter(|r| r.just_booked)
        .map(|r| r.room_number)
        .collect();
    let first_still_occupied = rooms
        .iter()
        .filter(|r| first_numbers.contains(&r.room_number))
        .all(|r| r.occupied && !r.just_booked);

    results.push(TestResult {
        name: "highlight_latest_only".into(),
        passed: highlighted == second_numbers && first_still_occupied,
        detail: format!(
            "first {:?}, second {:?}, highlighted {:?}",
            first_numbers, second_numbers, highlighted
        ),
    });

    service.reset();
    results.push(TestResult {
        name: "reset_clears_all".into(),
        passed: service.stats().available == 97 && service.stats().just_booked == 0,
        detail: "reset frees every room".into(),
    });

    results
}

// ── 6. Random Sweep ─────────────────────────────────────────────────────

fn validate_random_sweep(verbose: bool) -> Vec<TestResult> {
    println!("--- Random Occupancy Sweep ---");
    let mut results = Vec::new();

    let mut bookings = 0;
    let mut refusals = 0;
    let mut violations = Vec::new();
    let mut phases = [0usize; 3];

    for seed in 0..100u64 {
        let service = AllocationService::default();
        let mut rng = StdRng::seed_from_u64(seed);
        let occupied = service.random_occupancy_with(&mut rng);
        if !(0..=97).contains(&occupied) || service.stats().just_booked != 0 {
            violations.push(format!("seed {}: bad random occupancy", seed));
        }

        // Book until the hotel refuses, cycling request sizes
        for step in 0..60 {
            let k = 1 + (step % 5) as i64;
            let free: HashSet<u32> = numbers(&service.available_rooms()).into_iter().collect();
            match service.allocate(k) {
                Ok(a) => {
                    bookings += 1;
                    phases[match a.phase {
                        SearchPhase::SameFloor => 0,
                        SearchPhase::CrossFloorExact => 1,
                        SearchPhase::CrossFloorApproximate => 2,
                    }] += 1;
                    let picked = numbers(&a.rooms);
                    let distinct = picked.windows(2).all(|w| w[0] < w[1]);
                    if picked.len() != k as usize
                        || !distinct
                        || !picked.iter().all(|n| free.contains(n))
                        || a.travel_time != group_travel_time(&a.rooms)
                    {
                        violations.push(format!("seed {} step {}: {:?}", seed, step, picked));
                    }
                }
                Err(AllocationError::NotEnoughRooms { available, .. }) => {
                    refusals += 1;
                    if available >= k as usize {
                        violations.push(format!(
                            "seed {} step {}: refused {} with {} free",
                            seed, step, k, available
                        ));
                    }
                }
                Err(e) => violations.push(format!("seed {} step {}: {}", seed, step, e)),
            }
        }
    }

    results.push(TestResult {
        name: "sweep_invariants".into(),
        passed: violations.is_empty(),
        detail: if violations.is_empty() {
            format!("{} bookings, {} refusals, no violations", bookings, refusals)
        } else {
            format!("{} violations, first: {}", violations.len(), violations[0])
        },
    });

    results.push(TestResult {
        name: "sweep_reaches_cross_floor".into(),
        passed: phases[1] + phases[2] > 0,
        detail: format!(
            "same floor {}, exact {}, approximate {}",
            phases[0], phases[1], phases[2]
        ),
    });

    if verbose {
        println!(
            "  phases: same floor {}, exact {}, approximate {}",
            phases[0], phases[1], phases[2]
        );
    }

    results
}

// ── 7. Phase Timing ─────────────────────────────────────────────────────

fn validate_phase_timing(verbose: bool) -> Vec<TestResult> {
    println!("--- Phase Timing ---");
    let mut results = Vec::new();
    let hotel = HotelLayout::default();
    let config = AllocationConfig::default();

    // Exactly at the threshold: 3 free per floor × 10 floors = 30
    let mut spots = Vec::new();
    for floor in 1..=10u8 {
        for position in [2, 5, 7] {
            spots.push((floor, position));
        }
    }
    let rooms = hotel_with_free(&spots);
    let start = Instant::now();
    let exact = allocate(&rooms, 5, &hotel, &config);
    let exact_ms = start.elapsed().as_secs_f64() * 1000.0;
    results.push(TestResult {
        name: "exact_at_threshold".into(),
        passed: matches!(&exact, Ok(a) if a.phase == SearchPhase::CrossFloorExact),
        detail: format!("30 free rooms, k=5 in {:.1} ms", exact_ms),
    });

    // Worst case for pools: four free per floor, every pool hits the cap
    let mut spots = Vec::new();
    for floor in 1..=10u8 {
        for position in [1, 4, 6, 9] {
            spots.push((floor, position));
        }
    }
    let rooms = hotel_with_free(&spots);
    let start = Instant::now();
    let approximate = allocate(&rooms, 5, &hotel, &config);
    let approximate_ms = start.elapsed().as_secs_f64() * 1000.0;
    results.push(TestResult {
        name: "approximate_bounded".into(),
        passed: matches!(&approximate, Ok(a) if a.phase == SearchPhase::CrossFloorApproximate),
        detail: format!(
            "40 free rooms, pool cap {}, k=5 in {:.1} ms",
            search::APPROXIMATE_POOL_CAP,
            approximate_ms
        ),
    });

    if verbose {
        println!(
            "  exact {:.1} ms, approximate {:.1} ms",
            exact_ms, approximate_ms
        );
    }

    results
}

// ── 8. Wire Format ──────────────────────────────────────────────────────

fn validate_wire_format(_verbose: bool) -> Vec<TestResult> {
    println!("--- Wire Format ---");
    let mut results = Vec::new();

    let service = AllocationService::default();
    let booked = BookingResponse::from(&service.allocate(2));
    let value = serde_json::to_value(&booked).unwrap_or_default();
    results.push(TestResult {
        name: "booking_response_success".into(),
        passed: value["success"] == true
            && value["travelTime"] == 1
            && value["rooms"][0]["roomNumber"] == 101
            && value["rooms"][1]["justBooked"] == true,
        detail: value.to_string(),
    });

    let refused = BookingResponse::from(&service.allocate(7));
    let value = serde_json::to_value(&refused).unwrap_or_default();
    results.push(TestResult {
        name: "booking_response_error".into(),
        passed: value["success"] == false
            && value["error"] == "Can only book 1-5 rooms at once"
            && value.get("rooms").is_none(),
        detail: value.to_string(),
    });

    let occupied = service.random_occupancy_with(&mut StdRng::seed_from_u64(8));
    let value = serde_json::to_value(RandomOccupancyResponse::from(occupied)).unwrap_or_default();
    results.push(TestResult {
        name: "random_occupancy_response".into(),
        passed: value["success"] == true
            && value["occupiedCount"] == occupied
            && service.stats().occupied == occupied,
        detail: value.to_string(),
    });

    let listing = RoomsResponse {
        rooms: service.rooms(),
    };
    let parsed = serde_json::to_string(&listing)
        .and_then(|body| serde_json::from_str::<RoomsResponse>(&body));
    results.push(TestResult {
        name: "rooms_response_roundtrip".into(),
        passed: matches!(&parsed, Ok(p) if *p == listing),
        detail: format!("{} rooms", listing.rooms.len()),
    });

    results
}

// ── 9. Settings ─────────────────────────────────────────────────────────

fn validate_settings(_verbose: bool) -> Vec<TestResult> {
    println!("--- Settings ---");
    let mut results = Vec::new();

    let defaults = Settings::from_json("{}");
    results.push(TestResult {
        name: "settings_defaults".into(),
        passed: matches!(&defaults, Ok(s) if *s == Settings::default()),
        detail: "empty document gives defaults".into(),
    });

    let small = Settings::from_json(r#"{"layout": {"floors": 3, "top_floor_rooms": 4}}"#)
        .ok()
        .and_then(|s| AllocationService::from_settings(&s).ok());
    results.push(TestResult {
        name: "settings_small_building".into(),
        passed: small.as_ref().map(|s| s.stats().total) == Some(24),
        detail: format!(
            "3 floors, 4 rooms on top → {:?} rooms",
            small.as_ref().map(|s| s.stats().total)
        ),
    });

    let invalid = Settings::from_json(r#"{"allocation": {"min_rooms": 0}}"#);
    results.push(TestResult {
        name: "settings_rejects_invalid".into(),
        passed: invalid.is_err(),
        detail: match &invalid {
            Err(e) => e.to_string(),
            Ok(_) => "accepted zero minimum".into(),
        },
    });

    results
}
