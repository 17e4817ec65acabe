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

//! Great-circle geometry and altitude color mapping.
//!
//! Pure spherical-earth math used by the progress calculator and the route
//! overlay: Haversine distance, initial bearing, destination points, the
//! antimeridian-crossing heuristic, and the altitude-to-color table used to
//! paint flight-path segments.

/// Mean Earth radius in meters.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Meters per nautical mile.
pub const METERS_PER_NM: f64 = 1852.0;

/// A geographic coordinate in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    #[must_use]
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Whether this coordinate carries real data.
    ///
    /// The feed uses exact 0.0 latitude or longitude as an "unset" sentinel
    /// for waypoints without a resolved location.
    #[must_use]
    pub fn is_set(&self) -> bool {
        self.latitude != 0.0 && self.longitude != 0.0
    }
}

/// Great-circle distance between two coordinates in meters (Haversine).
#[must_use]
pub fn haversine_m(a: Coordinate, b: Coordinate) -> f64 {
    let lat_a = a.latitude.to_radians();
    let lat_b = b.latitude.to_radians();
    let d_lat = (b.latitude - a.latitude).to_radians();
    let d_lon = (b.longitude - a.longitude).to_radians();

    let h = (d_lat / 2.0).sin().powi(2)
        + lat_a.cos() * lat_b.cos() * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_M * c
}

/// Great-circle distance between two coordinates in nautical miles.
#[must_use]
pub fn haversine_nm(a: Coordinate, b: Coordinate) -> f64 {
    haversine_m(a, b) / METERS_PER_NM
}

/// Initial bearing from `a` to `b` in degrees, normalized to [0, 360).
#[must_use]
pub fn initial_bearing(a: Coordinate, b: Coordinate) -> f64 {
    let lat_a = a.latitude.to_radians();
    let lat_b = b.latitude.to_radians();
    let d_lon = (b.longitude - a.longitude).to_radians();

    let y = d_lon.sin() * lat_b.cos();
    let x = lat_a.cos() * lat_b.sin() - lat_a.sin() * lat_b.cos() * d_lon.cos();

    (y.atan2(x).to_degrees() + 360.0) % 360.0
}

/// Destination point from `origin` along `bearing_deg` for `distance_nm`.
#[must_use]
pub fn destination(origin: Coordinate, distance_nm: f64, bearing_deg: f64) -> Coordinate {
    let angular = distance_nm * METERS_PER_NM / EARTH_RADIUS_M;
    let bearing = bearing_deg.to_radians();
    let lat = origin.latitude.to_radians();
    let lon = origin.longitude.to_radians();

    let dest_lat =
        (lat.sin() * angular.cos() + lat.cos() * angular.sin() * bearing.cos()).asin();
    let dest_lon = lon
        + (bearing.sin() * angular.sin() * lat.cos())
            .atan2(angular.cos() - lat.sin() * dest_lat.sin());

    Coordinate::new(dest_lat.to_degrees(), dest_lon.to_degrees())
}

/// Heuristic antimeridian-crossing test for a track segment.
///
/// True when the two longitudes have strictly opposite signs and the first
/// longitude, truncated to whole degrees, is more than 1 degree from zero: a
/// large jump across the +/-180 line rather than a small oscillation near the
/// prime meridian. A zero longitude on either end is signless and never
/// counts as a crossing. This is an approximation, not a rigorous
/// great-circle test; segments with a very short first leg near the
/// antimeridian are undefined.
#[must_use]
pub fn crosses_anti_meridian(first_lon: f64, second_lon: f64) -> bool {
    first_lon * second_lon < 0.0 && first_lon.trunc().abs() > 1.0
}

/// Convert feet to meters.
#[must_use]
pub fn feet_to_metres(feet: f64) -> f64 {
    feet * 0.3048
}

/// Color returned for altitudes below the lowest band (on or near the ground).
pub const GROUND_COLOR: &str = "#ffffff";

// Altitude bands in meters, highest first. Evaluated top-down; the first
// threshold the altitude exceeds wins.
const ALTITUDE_COLORS: &[(f64, &str)] = &[
    (13_000.0, "#ff0002"),
    (12_500.0, "#ff01e5"),
    (12_000.0, "#d901ff"),
    (11_500.0, "#ae02ff"),
    (11_000.0, "#9800ff"),
    (10_500.0, "#8000ff"),
    (10_000.0, "#6200ff"),
    (9_500.0, "#4e01ff"),
    (9_000.0, "#3800ff"),
    (8_500.0, "#2600ff"),
    (8_000.0, "#1400ff"),
    (7_500.0, "#0200ff"),
    (7_000.0, "#021eff"),
    (6_500.0, "#0230ff"),
    (6_000.0, "#0254ff"),
    (5_500.0, "#0278ff"),
    (5_000.0, "#0296ff"),
    (4_500.0, "#02a8ff"),
    (4_000.0, "#02c0ff"),
    (3_500.0, "#02eaff"),
    (3_000.0, "#02ffe4"),
    (2_500.0, "#02ffd2"),
    (2_000.0, "#02ff9c"),
    (1_500.0, "#02ff72"),
    (1_200.0, "#02ff36"),
    (1_000.0, "#02ff0c"),
    (800.0, "#1eff02"),
    (600.0, "#44ff00"),
    (400.0, "#ccff02"),
    (300.0, "#f0ff02"),
    (200.0, "#ffea02"),
    (100.0, "#ffe064"),
];

/// Map an altitude in meters to the route color for that band.
#[must_use]
pub fn color_for_altitude(altitude_m: f64) -> &'static str {
    ALTITUDE_COLORS
        .iter()
        .find(|(threshold, _)| altitude_m > *threshold)
        .map_or(GROUND_COLOR, |(_, color)| *color)
}
