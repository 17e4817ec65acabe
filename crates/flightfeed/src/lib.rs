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

//! Live flight feed library.
//!
//! This library provides a modular, reusable foundation for live
//! flight-tracking clients. The layers can be used independently or
//! composed together:
//!
//! - **Transport layer** ([`graphql`]): opaque request/response client for
//!   the GraphQL telemetry backend (sessions, flights, flight detail, flight
//!   plans, airports)
//! - **Model layer** ([`models`]): the aircraft/airport/track/flight-plan
//!   record shapes the backend returns
//! - **Geodesy layer** ([`geo`]): great-circle distance and bearing math,
//!   the antimeridian heuristic, and altitude color banding
//! - **Progress layer** ([`progress`]): flight-plan completion metrics
//!   derived from waypoints plus a live position
//!
//! # Quick Start
//!
//! ```no_run
//! use flightfeed::{FeedClient, ProgressCalculator};
//! use flightfeed::geo::Coordinate;
//!
//! # async fn example() -> Result<(), flightfeed::FeedError> {
//! let client = FeedClient::new("https://feed.example/graphql", None);
//!
//! let sessions = client.sessions().await?;
//! let session = &sessions[0].id;
//! let flights = client.flights(session).await?;
//!
//! if let Some(flight) = flights.first() {
//!     if let Some(plan) = client.flight_plan(&flight.id).await? {
//!         let mut calc = ProgressCalculator::new();
//!         let progress = calc.compute(
//!             &plan.waypoint_coordinates(),
//!             Coordinate::new(flight.latitude, flight.longitude),
//!         );
//!         println!("{}% complete", progress.percent_complete);
//!     }
//! }
//! # Ok(())
//! # }
//! ```

pub mod geo;
pub mod graphql;
pub mod models;
pub mod progress;

pub use geo::Coordinate;
pub use graphql::{FeedClient, FeedError};
pub use models::{
    AircraftPosition, Airport, AtcFacility, AtcType, FlightDetail, FlightEvent, FlightPlan,
    FlightPlanItem, Session, TrackPoint, WaypointKind,
};
pub use progress::{
    annotate_leg_distances, compute_progress, FlightProgress, ProgressCalculator,
};
