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

//! Data model for the live flight feed.
//!
//! These types mirror the shapes the GraphQL backend returns. Aircraft
//! positions are ephemeral and replaced wholesale on every poll; airports are
//! fetched per session and long-lived; track points and flight-plan items are
//! per-selected-flight detail data.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::geo::Coordinate;

/// One live aircraft position from the batch flights query.
///
/// Replaced wholesale on every poll tick; `id` is the identity key.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AircraftPosition {
    pub id: String,
    pub latitude: f64,
    pub longitude: f64,
    /// Heading in degrees true.
    pub heading: f64,
    /// Altitude in feet, when the backend includes it.
    #[serde(default)]
    pub altitude: Option<f64>,
    /// Ground speed in knots, when the backend includes it.
    #[serde(default)]
    pub speed: Option<f64>,
}

impl AircraftPosition {
    #[must_use]
    pub fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.latitude, self.longitude)
    }
}

/// ATC facility type as reported by the backend (0-11).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(from = "u8")]
pub enum AtcType {
    Ground,
    Tower,
    Unicom,
    Clearance,
    Approach,
    Departure,
    Center,
    Atis,
    Aircraft,
    Recorded,
    Unknown,
    Unused,
}

impl From<u8> for AtcType {
    fn from(value: u8) -> Self {
        match value {
            0 => Self::Ground,
            1 => Self::Tower,
            2 => Self::Unicom,
            3 => Self::Clearance,
            4 => Self::Approach,
            5 => Self::Departure,
            6 => Self::Center,
            7 => Self::Atis,
            8 => Self::Aircraft,
            9 => Self::Recorded,
            10 => Self::Unknown,
            _ => Self::Unused,
        }
    }
}

impl AtcType {
    /// Single-letter glyph shown on airport markers, if this type has one.
    #[must_use]
    pub fn glyph(self) -> Option<char> {
        match self {
            Self::Ground => Some('G'),
            Self::Tower => Some('T'),
            Self::Unicom => Some('U'),
            Self::Clearance | Self::Center => Some('C'),
            Self::Approach => Some('A'),
            Self::Departure => Some('D'),
            Self::Atis => Some('S'),
            Self::Recorded => Some('R'),
            Self::Aircraft | Self::Unknown | Self::Unused => None,
        }
    }
}

/// An active ATC facility at an airport.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AtcFacility {
    #[serde(rename = "type")]
    pub facility: AtcType,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub start_time: Option<String>,
    #[serde(default)]
    pub atc_rank: Option<i32>,
    #[serde(default)]
    pub virtual_organization: Option<String>,
}

impl AtcFacility {
    /// Controller name with the feed's missing-field convention applied.
    #[must_use]
    pub fn display_username(&self) -> &str {
        self.username.as_deref().unwrap_or("Anonymous")
    }

    #[must_use]
    pub fn display_organization(&self) -> &str {
        self.virtual_organization.as_deref().unwrap_or("N/A")
    }
}

/// An airport record, keyed by ICAO code.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Airport {
    pub icao: String,
    #[serde(default)]
    pub iata: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub elevation: Option<f64>,
    #[serde(default)]
    pub atc: Vec<AtcFacility>,
    /// D-ATIS broadcast text, when published.
    #[serde(default)]
    pub atis: Option<String>,
    #[serde(rename = "has3dBuildings", default)]
    pub has_3d_buildings: bool,
    #[serde(default)]
    pub has_jetbridges: bool,
    #[serde(default)]
    pub has_safedock_units: bool,
    #[serde(default)]
    pub has_taxiway_routing: bool,
    #[serde(default)]
    pub inbounds: Option<i32>,
    #[serde(default)]
    pub outbounds: Option<i32>,
    #[serde(default)]
    pub timezone: Option<String>,
}

impl Airport {
    #[must_use]
    pub fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.latitude, self.longitude)
    }

    /// Concatenated glyphs for the active ATC services, marker order.
    #[must_use]
    pub fn service_glyphs(&self) -> String {
        self.atc
            .iter()
            .filter_map(|f| f.facility.glyph())
            .collect()
    }
}

/// One historical telemetry sample of a flight's track.
///
/// The backend compresses field names to single letters on the wire.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TrackPoint {
    #[serde(rename = "a")]
    pub altitude: f64,
    #[serde(rename = "b")]
    pub latitude: f64,
    #[serde(rename = "c")]
    pub longitude: f64,
    #[serde(rename = "h")]
    pub heading: f64,
    #[serde(rename = "i", default)]
    pub nearest_airport: Option<String>,
    #[serde(rename = "r")]
    pub reported_time: DateTime<Utc>,
    #[serde(rename = "s")]
    pub ground_speed: f64,
    #[serde(rename = "v")]
    pub vertical_speed: f64,
    #[serde(rename = "z", default)]
    pub aircraft_state: Option<i32>,
}

impl TrackPoint {
    #[must_use]
    pub fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.latitude, self.longitude)
    }
}

/// A takeoff or landing event sample attached to a flight.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FlightEvent {
    /// Heading or altitude, depending on the event list.
    #[serde(rename = "a")]
    pub value: f64,
    #[serde(rename = "b")]
    pub latitude: f64,
    #[serde(rename = "c")]
    pub longitude: f64,
    #[serde(rename = "r")]
    pub reported_time: DateTime<Utc>,
}

/// Waypoint type for flight-plan items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(from = "u8")]
pub enum WaypointKind {
    Waypoint,
    Airport,
    Navaid,
    Fix,
    Other,
}

impl From<u8> for WaypointKind {
    fn from(value: u8) -> Self {
        match value {
            0 => Self::Waypoint,
            1 => Self::Airport,
            2 => Self::Navaid,
            3 => Self::Fix,
            _ => Self::Other,
        }
    }
}

/// 3-D location of a flight-plan item.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct FplLocation {
    pub altitude: f64,
    pub latitude: f64,
    pub longitude: f64,
}

/// One waypoint of a flight plan.
///
/// The first and last items are semantically departure and arrival. Items
/// may nest children (SID/STAR fixes). `distance_from_previous` is computed
/// locally, never sent by the backend.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlightPlanItem {
    #[serde(default)]
    pub identifier: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub kind: WaypointKind,
    pub location: FplLocation,
    #[serde(default)]
    pub children: Option<Vec<FlightPlanItem>>,
    /// Great-circle distance from the previous valid waypoint, in nautical
    /// miles. `None` until annotated, and for sentinel-coordinate items.
    #[serde(skip)]
    pub distance_from_previous: Option<f64>,
}

impl FlightPlanItem {
    #[must_use]
    pub fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.location.latitude, self.location.longitude)
    }
}

/// A complete flight plan for one flight.
#[derive(Debug, Clone, PartialEq)]
pub struct FlightPlan {
    pub code: Option<String>,
    pub items: Vec<FlightPlanItem>,
}

impl FlightPlan {
    /// Top-level waypoint coordinates in plan order, sentinels included.
    #[must_use]
    pub fn waypoint_coordinates(&self) -> Vec<Coordinate> {
        self.items.iter().map(FlightPlanItem::coordinate).collect()
    }
}

/// The rich record for a selected flight.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlightDetail {
    pub id: String,
    pub latitude: f64,
    pub longitude: f64,
    pub heading: f64,
    pub speed: f64,
    pub altitude: f64,
    pub vertical_speed: f64,
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub callsign: Option<String>,
    #[serde(default)]
    pub aircraft: Option<String>,
    #[serde(default)]
    pub livery: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub org: Option<String>,
    #[serde(default)]
    pub takeoff_times: Vec<FlightEvent>,
    #[serde(default)]
    pub landing_times: Vec<FlightEvent>,
    #[serde(default)]
    pub track: Vec<TrackPoint>,
}

impl FlightDetail {
    #[must_use]
    pub fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.latitude, self.longitude)
    }

    #[must_use]
    pub fn display_username(&self) -> &str {
        self.username.as_deref().unwrap_or("Anonymous")
    }

    #[must_use]
    pub fn display_org(&self) -> &str {
        self.org.as_deref().unwrap_or("N/A")
    }
}

/// A server/world session; selecting one scopes all aircraft and airport
/// queries.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub id: String,
    pub name: String,
    pub user_count: i32,
    pub max_users: i32,
    #[serde(default)]
    pub world_type: Option<i32>,
    #[serde(rename = "type", default)]
    pub kind: Option<i32>,
    #[serde(default)]
    pub minimum_grade_level: Option<i32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_atc_glyph_mapping() {
        assert_eq!(AtcType::from(0).glyph(), Some('G'));
        assert_eq!(AtcType::from(1).glyph(), Some('T'));
        assert_eq!(AtcType::from(3).glyph(), Some('C'));
        assert_eq!(AtcType::from(6).glyph(), Some('C'));
        assert_eq!(AtcType::from(7).glyph(), Some('S'));
        assert_eq!(AtcType::from(8).glyph(), None);
        assert_eq!(AtcType::from(9).glyph(), Some('R'));
        assert_eq!(AtcType::from(11).glyph(), None);
    }

    #[test]
    fn test_service_glyphs_skips_blank_types() {
        let airport = Airport {
            icao: "KLAX".to_string(),
            iata: Some("LAX".to_string()),
            name: Some("Los Angeles Intl".to_string()),
            city: None,
            state: None,
            latitude: 33.9425,
            longitude: -118.4081,
            elevation: Some(125.0),
            atc: vec![
                facility(AtcType::Ground),
                facility(AtcType::Tower),
                facility(AtcType::Aircraft),
                facility(AtcType::Atis),
            ],
            atis: None,
            has_3d_buildings: true,
            has_jetbridges: true,
            has_safedock_units: false,
            has_taxiway_routing: true,
            inbounds: None,
            outbounds: None,
            timezone: None,
        };
        assert_eq!(airport.service_glyphs(), "GTS");
    }

    #[test]
    fn test_track_point_wire_names() {
        let json = r#"{
            "a": 35000.0, "b": 34.05, "c": -118.24, "h": 270.0,
            "i": "KLAX", "r": "2025-06-01T12:00:00Z",
            "s": 450.0, "v": -800.0, "z": 2
        }"#;
        let point: TrackPoint = serde_json::from_str(json).unwrap();
        assert_eq!(point.altitude, 35000.0);
        assert_eq!(point.nearest_airport.as_deref(), Some("KLAX"));
        assert_eq!(point.aircraft_state, Some(2));
    }

    #[test]
    fn test_missing_pilot_fields_display_defaults() {
        let json = r#"{
            "id": "f1", "latitude": 1.0, "longitude": 2.0, "heading": 90.0,
            "speed": 250.0, "altitude": 10000.0, "verticalSpeed": 0.0
        }"#;
        let flight: FlightDetail = serde_json::from_str(json).unwrap();
        assert_eq!(flight.display_username(), "Anonymous");
        assert_eq!(flight.display_org(), "N/A");
    }

    fn facility(facility: AtcType) -> AtcFacility {
        AtcFacility {
            facility,
            username: None,
            user_id: None,
            start_time: None,
            atc_rank: None,
            virtual_organization: None,
        }
    }
}
