//! Client for the Red bus-stop API (`https://api.xor.cl/red/bus-stop/<stop id>`).
//!
//! One request returns every service that calls at the stop together with the
//! buses currently approaching it. Only the stop itself is typed. Services are
//! matched by `id` and their buses are forwarded as raw JSON, so a service
//! nobody asked for can carry whatever it likes without failing the stop.

use crate::error::BusStatusError;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Duration;

pub const DEFAULT_RED_API_URL: &str = "https://api.xor.cl/red/bus-stop/";

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RedStop {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub services: Option<Vec<RedService>>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct RedService {
    #[serde(default)]
    pub id: Value,
    #[serde(default)]
    pub buses: Value,
}

impl RedService {
    pub fn id(&self) -> Option<&str> {
        self.id.as_str()
    }

    /// Anything other than an array counts as no buses.
    pub fn into_buses(self) -> Vec<Bus> {
        match self.buses {
            Value::Array(buses) => buses.into_iter().map(Bus).collect(),
            _ => Vec::new(),
        }
    }
}

/// One approaching bus exactly as the API sent it: `id`, `meters_distance`,
/// `min_arrival_time`, `max_arrival_time` and any extra field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Bus(pub Value);

#[derive(Debug, Clone)]
pub struct RedApi {
    client: reqwest::Client,
    base_url: String,
}

impl RedApi {
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self, reqwest::Error> {
        let mut builder = reqwest::Client::builder();

        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self::with_client(builder.build()?, base_url))
    }

    pub fn with_client(client: reqwest::Client, base_url: &str) -> Self {
        let mut base_url = base_url.to_string();

        if !base_url.ends_with('/') {
            base_url.push('/');
        }

        Self { client, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn stop_url(&self, stop_id: &str) -> String {
        format!("{}{}", self.base_url, urlencoding::encode(stop_id))
    }

    pub async fn fetch_stop(&self, stop_id: &str) -> Result<RedStop, BusStatusError> {
        let url = self.stop_url(stop_id);

        tracing::debug!(stop_id, %url, "fetching stop");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|source| BusStatusError::Request {
                stop_id: stop_id.to_string(),
                source,
            })?;

        let status = response.status();

        if !status.is_success() {
            return Err(BusStatusError::UpstreamStatus {
                stop_id: stop_id.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|source| BusStatusError::Request {
                stop_id: stop_id.to_string(),
                source,
            })?;

        serde_json::from_str::<RedStop>(&body).map_err(|source| BusStatusError::Decode {
            stop_id: stop_id.to_string(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PG1790: &str = r#"{
        "id": "PG1790",
        "name": "Parada 3 / Mall Plaza Sur",
        "status_code": 0,
        "status_description": "Paradero con buses",
        "services": [
            {
                "id": "G38",
                "valid": true,
                "status_description": "En menos de 5 min.",
                "buses": [
                    {"id": "FLXT-12", "meters_distance": 830, "min_arrival_time": 2, "max_arrival_time": 4}
                ]
            },
            {
                "id": "G32",
                "valid": false,
                "status_description": "Fuera de horario de operacion para ese paradero"
            }
        ]
    }"#;

    #[test]
    fn decodes_stop_and_ignores_unknown_fields() {
        let stop: RedStop = serde_json::from_str(PG1790).unwrap();
        let services = stop.services.unwrap();

        assert_eq!(stop.id, "PG1790");
        assert_eq!(services.len(), 2);
        assert_eq!(services[0].id(), Some("G38"));
        assert_eq!(services[1].id(), Some("G32"));

        let buses = services[0].clone().into_buses();
        assert_eq!(buses[0].0["id"], "FLXT-12");
        assert_eq!(buses[0].0["meters_distance"], 830);
        assert!(services[1].clone().into_buses().is_empty());
    }

    #[test]
    fn malformed_services_still_decode() {
        let stop: RedStop = serde_json::from_str(
            r#"{
                "id": "PG1790",
                "name": "Parada 3 / Mall Plaza Sur",
                "services": [
                    {"id": "G38", "valid": true, "buses": [{"id": "FLXT-12", "meters_distance": 830, "min_arrival_time": 2, "max_arrival_time": 4}]},
                    {"id": "G32", "valid": null, "buses": [{"id": "BJFX-55", "meters_distance": null, "min_arrival_time": "?", "max_arrival_time": null}]},
                    {"id": null, "buses": null},
                    {"valid": false}
                ]
            }"#,
        )
        .unwrap();
        let services = stop.services.unwrap();

        assert_eq!(services.len(), 4);
        assert_eq!(services[2].id(), None);
        assert!(services[2].clone().into_buses().is_empty());
        assert_eq!(services[3], RedService::default());
        assert_eq!(services[1].clone().into_buses()[0].0["meters_distance"], Value::Null);
    }

    #[test]
    fn null_services_decode_as_absent() {
        let stop: RedStop =
            serde_json::from_str(r#"{"id": "PG741", "name": "Calle Nueva", "services": null}"#).unwrap();
        assert_eq!(stop.services, None);
    }

    #[test]
    fn buses_pass_through_verbatim() {
        let service: RedService = serde_json::from_str(
            r#"{"id":"G38","buses":[{"id":"XYZ-1","meters_distance":1250.5,"min_arrival_time":7,"max_arrival_time":9,"bus_plate_number":"XYZ1"}]}"#,
        )
        .unwrap();

        let json = serde_json::to_string(&service.into_buses()).unwrap();
        assert!(json.contains("\"meters_distance\":1250.5"));
        assert!(json.contains("\"min_arrival_time\":7"));
        assert!(json.contains("\"bus_plate_number\":\"XYZ1\""));
    }

    #[test]
    fn base_url_gets_trailing_slash() {
        let api = RedApi::with_client(reqwest::Client::new(), "http://localhost:9000/red/bus-stop");
        assert_eq!(api.base_url(), "http://localhost:9000/red/bus-stop/");
        assert_eq!(api.stop_url("PG1790"), "http://localhost:9000/red/bus-stop/PG1790");
    }

    #[test]
    fn stop_ids_are_escaped_into_one_segment() {
        let api = RedApi::with_client(reqwest::Client::new(), DEFAULT_RED_API_URL);
        assert_eq!(
            api.stop_url("../PG 1"),
            "https://api.xor.cl/red/bus-stop/..%2FPG%201"
        );
    }
}
