// Copyright 2025 Skytrack Contributors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Flight-plan progress computation.
//!
//! Given the ordered waypoints of a flight plan and the aircraft's current
//! position, derives total route distance, distance remaining, distance
//! flown, and a clamped integer completion percentage. Waypoints carrying
//! the 0.0 "unset" sentinel in either axis are filtered out, never counted
//! as zero-length legs.

use crate::geo::{haversine_m, haversine_nm, Coordinate};
use crate::models::FlightPlanItem;

/// Aircraft within this distance of the final waypoint counts as arrived.
pub const ARRIVAL_SNAP_M: f64 = 2_000.0;

/// Derived progress metrics for one flight. Distances in nautical miles.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FlightProgress {
    pub total_distance_nm: f64,
    pub distance_to_go_nm: f64,
    pub distance_flown_nm: f64,
    /// Completion percentage, floored and clamped to [0, 100].
    pub percent_complete: u8,
}

fn valid_waypoints(waypoints: &[Coordinate]) -> Vec<Coordinate> {
    waypoints.iter().copied().filter(Coordinate::is_set).collect()
}

fn chain_distance_nm(points: &[Coordinate]) -> f64 {
    points
        .windows(2)
        .map(|pair| haversine_nm(pair[0], pair[1]))
        .sum()
}

/// Total great-circle distance of the flight plan in nautical miles.
///
/// Sentinel waypoints are excluded; fewer than two valid waypoints yields 0.
#[must_use]
pub fn total_distance_nm(waypoints: &[Coordinate]) -> f64 {
    let valid = valid_waypoints(waypoints);
    if valid.len() < 2 {
        return 0.0;
    }
    chain_distance_nm(&valid)
}

/// Distance remaining from `position` to the end of the route, in nautical
/// miles.
///
/// The valid waypoint closest to the aircraft, and everything before it, is
/// treated as already passed; the remainder is chained from the aircraft's
/// current position. Within [`ARRIVAL_SNAP_M`] of the final waypoint the
/// result snaps to 0.
#[must_use]
pub fn distance_to_go_nm(waypoints: &[Coordinate], position: Coordinate) -> f64 {
    let valid = valid_waypoints(waypoints);
    if valid.len() < 2 || !position.is_set() {
        return 0.0;
    }

    let last = valid[valid.len() - 1];
    if haversine_m(position, last) <= ARRIVAL_SNAP_M {
        return 0.0;
    }

    let mut closest = 0;
    let mut closest_m = f64::INFINITY;
    for (i, waypoint) in valid.iter().enumerate() {
        let d = haversine_m(*waypoint, position);
        if d < closest_m {
            closest_m = d;
            closest = i;
        }
    }

    let remaining = &valid[closest + 1..];
    if remaining.is_empty() {
        return 0.0;
    }

    haversine_nm(position, remaining[0]) + chain_distance_nm(remaining)
}

/// Compute all progress metrics for one flight-plan/position pair.
#[must_use]
pub fn compute_progress(waypoints: &[Coordinate], position: Coordinate) -> FlightProgress {
    let total_distance_nm = total_distance_nm(waypoints);
    let distance_to_go_nm = distance_to_go_nm(waypoints, position);
    let distance_flown_nm = total_distance_nm - distance_to_go_nm;

    let percent_complete = if total_distance_nm > 0.0 {
        let ratio = distance_flown_nm / total_distance_nm;
        (ratio * 100.0).floor().clamp(0.0, 100.0) as u8
    } else {
        0
    };

    FlightProgress {
        total_distance_nm,
        distance_to_go_nm,
        distance_flown_nm,
        percent_complete,
    }
}

/// Memoizing wrapper around [`compute_progress`].
///
/// Progress is recomputed only when either input differs from the previous
/// call; unrelated refreshes reuse the cached result.
#[derive(Debug, Default)]
pub struct ProgressCalculator {
    last: Option<(Vec<Coordinate>, Coordinate, FlightProgress)>,
}

impl ProgressCalculator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn compute(&mut self, waypoints: &[Coordinate], position: Coordinate) -> FlightProgress {
        if let Some((cached_waypoints, cached_position, cached)) = &self.last {
            if cached_waypoints == waypoints && *cached_position == position {
                return *cached;
            }
        }
        let progress = compute_progress(waypoints, position);
        self.last = Some((waypoints.to_vec(), position, progress));
        progress
    }
}

/// Fill each top-level item's `distance_from_previous` from the preceding
/// valid waypoint. Sentinel items and the first valid item stay `None`.
pub fn annotate_leg_distances(items: &mut [FlightPlanItem]) {
    let mut previous: Option<Coordinate> = None;
    for item in items.iter_mut() {
        let here = item.coordinate();
        if !here.is_set() {
            item.distance_from_previous = None;
            continue;
        }
        item.distance_from_previous = previous.map(|prev| haversine_nm(prev, here));
        previous = Some(here);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::{destination, initial_bearing};
    use crate::models::{FplLocation, WaypointKind};

    const LAX: Coordinate = Coordinate {
        latitude: 34.05,
        longitude: -118.24,
    };
    const JFK: Coordinate = Coordinate {
        latitude: 40.71,
        longitude: -74.00,
    };

    #[test]
    fn test_sentinel_waypoints_excluded_from_total() {
        let plan = [Coordinate::new(0.0, 0.0), LAX, JFK];
        let total = total_distance_nm(&plan);
        // LAX to JFK is roughly 2,145 nm; the sentinel adds nothing
        assert!((total - 2145.0).abs() < 2145.0 * 0.05, "got {total}");
    }

    #[test]
    fn test_progress_at_departure() {
        let plan = [Coordinate::new(0.0, 0.0), LAX, JFK];
        let progress = compute_progress(&plan, LAX);
        assert!(progress.distance_flown_nm.abs() < 1.0);
        assert_eq!(progress.percent_complete, 0);
    }

    #[test]
    fn test_progress_at_arrival() {
        let plan = [LAX, JFK];
        let progress = compute_progress(&plan, JFK);
        assert_eq!(progress.distance_to_go_nm, 0.0);
        assert_eq!(progress.percent_complete, 100);
    }

    #[test]
    fn test_arrival_snap_near_final_waypoint() {
        // ~1 km short of JFK, well inside the 2000 m snap radius
        let bearing = initial_bearing(JFK, LAX);
        let near = destination(JFK, 0.54, bearing);
        let plan = [LAX, JFK];
        assert_eq!(distance_to_go_nm(&plan, near), 0.0);
    }

    #[test]
    fn test_distance_to_go_monotone_along_route() {
        let mid = Coordinate::new(39.0, -95.0);
        let plan = [LAX, mid, JFK];

        let mut previous = f64::INFINITY;
        for step in 0..=20 {
            let t = f64::from(step) / 20.0;
            let position = Coordinate::new(
                LAX.latitude + (JFK.latitude - LAX.latitude) * t,
                LAX.longitude + (JFK.longitude - LAX.longitude) * t,
            );
            let to_go = distance_to_go_nm(&plan, position);
            // small tolerance for closest-point snapping jitter
            assert!(
                to_go <= previous + 25.0,
                "to_go {to_go} regressed past {previous} at t={t}"
            );
            previous = previous.min(to_go);
        }
    }

    #[test]
    fn test_percent_always_in_range() {
        let degenerate: [Coordinate; 0] = [];
        assert_eq!(compute_progress(&degenerate, LAX).percent_complete, 0);

        let single = [LAX];
        assert_eq!(compute_progress(&single, JFK).percent_complete, 0);

        // Aircraft far behind the route start must not push percent below 0
        let plan = [LAX, JFK];
        let behind = Coordinate::new(20.0, -155.0);
        let progress = compute_progress(&plan, behind);
        assert!(progress.percent_complete <= 100);
    }

    #[test]
    fn test_zero_total_distance_yields_zero_not_nan() {
        let plan = [Coordinate::new(0.0, 0.0), Coordinate::new(0.0, 5.0)];
        let progress = compute_progress(&plan, LAX);
        assert_eq!(progress.total_distance_nm, 0.0);
        assert_eq!(progress.percent_complete, 0);
    }

    #[test]
    fn test_calculator_memoizes_identical_inputs() {
        let plan = vec![LAX, JFK];
        let mut calc = ProgressCalculator::new();
        let first = calc.compute(&plan, LAX);
        let second = calc.compute(&plan, LAX);
        assert_eq!(first, second);

        let moved = calc.compute(&plan, JFK);
        assert_ne!(first.percent_complete, moved.percent_complete);
    }

    #[test]
    fn test_annotate_leg_distances_skips_sentinels() {
        let mut items = vec![item(0.0, 0.0), item(34.05, -118.24), item(40.71, -74.00)];
        annotate_leg_distances(&mut items);
        assert_eq!(items[0].distance_from_previous, None);
        assert_eq!(items[1].distance_from_previous, None);
        let leg = items[2].distance_from_previous.unwrap();
        assert!((leg - 2145.0).abs() < 2145.0 * 0.05, "got {leg}");
    }

    fn item(latitude: f64, longitude: f64) -> FlightPlanItem {
        FlightPlanItem {
            identifier: None,
            name: None,
            kind: WaypointKind::Waypoint,
            location: FplLocation {
                altitude: 0.0,
                latitude,
                longitude,
            },
            children: None,
            distance_from_previous: None,
        }
    }
}
