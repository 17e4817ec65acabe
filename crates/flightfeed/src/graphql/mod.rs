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

//! GraphQL feed transport.
//!
//! Thin request/response client over the backend's GraphQL endpoint. Every
//! operation is an opaque POST of `{query, variables}` decoded through the
//! standard `{data, errors}` envelope; the backend owns the schema. The
//! bearer token is injected by the caller, never embedded here.

mod queries;

use log::debug;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::json;
use thiserror::Error;

use crate::models::{
    AircraftPosition, Airport, FlightDetail, FlightPlan, FlightPlanItem, Session, TrackPoint,
};

/// Errors produced by the feed transport.
#[derive(Debug, Error)]
pub enum FeedError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("feed returned errors: {0}")]
    Backend(String),

    #[error("malformed response: missing {0}")]
    MissingData(&'static str),
}

#[derive(Debug, Serialize)]
struct GraphQlRequest<'a, V: Serialize> {
    query: &'a str,
    variables: V,
}

#[derive(Debug, Deserialize)]
struct GraphQlError {
    message: String,
}

#[derive(Debug, Deserialize)]
struct GraphQlResponse<T> {
    data: Option<T>,
    #[serde(default)]
    errors: Option<Vec<GraphQlError>>,
}

/// Client for the live flight GraphQL backend.
///
/// Cheap to clone; wraps a shared [`reqwest::Client`].
#[derive(Debug, Clone)]
pub struct FeedClient {
    http: reqwest::Client,
    endpoint: String,
    token: Option<String>,
}

impl FeedClient {
    #[must_use]
    pub fn new(endpoint: impl Into<String>, token: Option<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: endpoint.into(),
            token,
        }
    }

    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn execute<V, T>(&self, query: &'static str, variables: V) -> Result<T, FeedError>
    where
        V: Serialize,
        T: DeserializeOwned,
    {
        let mut request = self
            .http
            .post(&self.endpoint)
            .json(&GraphQlRequest { query, variables });

        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let envelope: GraphQlResponse<T> = request
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        if let Some(errors) = envelope.errors {
            if !errors.is_empty() {
                let joined = errors
                    .into_iter()
                    .map(|e| e.message)
                    .collect::<Vec<_>>()
                    .join("; ");
                return Err(FeedError::Backend(joined));
            }
        }

        envelope.data.ok_or(FeedError::MissingData("data"))
    }

    /// List available sessions (servers/worlds).
    pub async fn sessions(&self) -> Result<Vec<Session>, FeedError> {
        #[derive(Deserialize)]
        struct Data {
            sessionsv2: Vec<Session>,
        }
        let data: Data = self.execute(queries::GET_SESSIONS, json!({})).await?;
        debug!("Fetched {} sessions", data.sessionsv2.len());
        Ok(data.sessionsv2)
    }

    /// Batch aircraft positions for one session.
    ///
    /// Positions are inherently stale; callers must always hit the network,
    /// never a response cache.
    pub async fn flights(&self, session: &str) -> Result<Vec<AircraftPosition>, FeedError> {
        #[derive(Deserialize)]
        struct Data {
            flightsv2: Vec<AircraftPosition>,
        }
        let variables = json!({ "input": { "session": session } });
        let data: Data = self.execute(queries::GET_FLIGHTS, variables).await?;
        debug!("Fetched {} flights for session {session}", data.flightsv2.len());
        Ok(data.flightsv2)
    }

    /// Full detail (including historical track) for one flight.
    ///
    /// Returns `Ok(None)` when the flight no longer exists on the session.
    pub async fn flight(&self, session: &str, id: &str) -> Result<Option<FlightDetail>, FeedError> {
        #[derive(Deserialize)]
        struct Data {
            flightv2: Option<FlightDetail>,
        }
        let variables = json!({ "input": { "id": id, "session": session } });
        let data: Data = self.execute(queries::GET_FLIGHT, variables).await?;
        Ok(data.flightv2)
    }

    /// Historical track only for one flight.
    pub async fn flight_path(&self, session: &str, id: &str) -> Result<Vec<TrackPoint>, FeedError> {
        #[derive(Deserialize)]
        struct Inner {
            track: Vec<TrackPoint>,
        }
        #[derive(Deserialize)]
        struct Data {
            flightv2: Option<Inner>,
        }
        let variables = json!({ "input": { "id": id, "session": session } });
        let data: Data = self.execute(queries::GET_FLIGHTPATH, variables).await?;
        Ok(data.flightv2.map(|inner| inner.track).unwrap_or_default())
    }

    /// Filed flight plan for one flight, flattened from the nested response.
    pub async fn flight_plan(&self, flight_id: &str) -> Result<Option<FlightPlan>, FeedError> {
        #[derive(Deserialize)]
        #[serde(rename_all = "camelCase")]
        struct Items {
            flight_plan_items: Vec<FlightPlanItem>,
        }
        #[derive(Deserialize)]
        #[serde(rename_all = "camelCase")]
        struct Plan {
            code: Option<String>,
            flight_plan: Items,
        }
        #[derive(Deserialize)]
        struct Data {
            flightplan: Option<Plan>,
        }
        let variables = json!({ "flightplanId": flight_id });
        let data: Data = self.execute(queries::GET_FLIGHTPLAN, variables).await?;
        Ok(data.flightplan.map(|plan| FlightPlan {
            code: plan.code,
            items: plan.flight_plan.flight_plan_items,
        }))
    }

    /// Batch airports for one session.
    pub async fn airports(&self, session: &str) -> Result<Vec<Airport>, FeedError> {
        #[derive(Deserialize)]
        struct Data {
            airportsv2: Vec<Airport>,
        }
        let variables = json!({ "input": { "session": session } });
        let data: Data = self.execute(queries::GET_AIRPORTS, variables).await?;
        debug!("Fetched {} airports for session {session}", data.airportsv2.len());
        Ok(data.airportsv2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_backend_errors_win_over_data() {
        let raw = r#"{"data": null, "errors": [{"message": "boom"}, {"message": "again"}]}"#;
        let envelope: GraphQlResponse<serde_json::Value> = serde_json::from_str(raw).unwrap();
        let errors = envelope.errors.unwrap();
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0].message, "boom");
    }

    #[test]
    fn test_flights_payload_decodes() {
        let raw = r#"{"flightsv2": [
            {"id": "f1", "latitude": 10.0, "longitude": 20.0, "heading": 45.0}
        ]}"#;
        #[derive(Deserialize)]
        struct Data {
            flightsv2: Vec<AircraftPosition>,
        }
        let data: Data = serde_json::from_str(raw).unwrap();
        assert_eq!(data.flightsv2.len(), 1);
        assert_eq!(data.flightsv2[0].id, "f1");
        assert!(data.flightsv2[0].altitude.is_none());
    }

    #[test]
    fn test_flight_plan_flattens_nested_shape() {
        let raw = r#"{"flightplan": {
            "code": "KLAX-KJFK",
            "flightPlan": {
                "flightPlanItems": [
                    {"identifier": "KLAX", "name": "Los Angeles", "type": 1,
                     "location": {"altitude": 0.0, "latitude": 33.94, "longitude": -118.41},
                     "children": null}
                ]
            }
        }}"#;
        #[derive(Deserialize)]
        #[serde(rename_all = "camelCase")]
        struct Items {
            flight_plan_items: Vec<FlightPlanItem>,
        }
        #[derive(Deserialize)]
        #[serde(rename_all = "camelCase")]
        struct Plan {
            code: Option<String>,
            flight_plan: Items,
        }
        #[derive(Deserialize)]
        struct Data {
            flightplan: Option<Plan>,
        }
        let data: Data = serde_json::from_str(raw).unwrap();
        let plan = data.flightplan.unwrap();
        assert_eq!(plan.code.as_deref(), Some("KLAX-KJFK"));
        assert_eq!(plan.flight_plan.flight_plan_items.len(), 1);
    }
}
