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

//! Query documents for the feed backend.

pub const GET_SESSIONS: &str = "\
query GET_SESSIONS {
  sessionsv2 {
    maxUsers
    worldType
    userCount
    type
    name
    minimumGradeLevel
    id
  }
}";

pub const GET_FLIGHTS: &str = "\
query Flightsv2($input: FlightsV2Input!) {
  flightsv2(input: $input) {
    id
    latitude
    longitude
    heading
  }
}";

pub const GET_FLIGHT: &str = "\
query Flightv2($input: FlightV2Input!) {
  flightv2(input: $input) {
    latitude
    longitude
    speed
    id
    userId
    altitude
    callsign
    aircraft
    verticalSpeed
    username
    heading
    org
    livery
    takeoffTimes {
      a
      b
      c
      r
    }
    landingTimes {
      a
      b
      c
      r
    }
    track {
      a
      b
      c
      h
      i
      r
      s
      v
      z
    }
  }
}";

pub const GET_FLIGHTPATH: &str = "\
query Flightv2($input: FlightV2Input!) {
  flightv2(input: $input) {
    track {
      a
      b
      c
      h
      i
      r
      s
      v
      z
    }
  }
}";

pub const GET_FLIGHTPLAN: &str = "\
query flightplan($flightplanId: String!) {
  flightplan(id: $flightplanId) {
    code
    flightPlan {
      flightPlanItems {
        identifier
        name
        type
        location {
          altitude
          latitude
          longitude
        }
        children {
          identifier
          name
          type
          location {
            altitude
            latitude
            longitude
          }
        }
      }
    }
  }
}";

pub const GET_AIRPORTS: &str = "\
query Airportsv2($input: AirportsV2Input!) {
  airportsv2(input: $input) {
    atc {
      atcRank
      startTime
      type
      userId
      username
      virtualOrganization
    }
    atis
    city
    elevation
    has3dBuildings
    hasJetbridges
    hasSafedockUnits
    hasTaxiwayRouting
    iata
    icao
    inbounds
    latitude
    longitude
    name
    outbounds
    state
    timezone
  }
}";
