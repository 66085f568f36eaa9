//! `/api/bus-status`: fans out one Red API request per stop and reduces each
//! answer to the buses of a single route.
//!
//! The batch is all-or-nothing. The first failed stop fails the whole call and
//! its id ends up in the error body.

use crate::error::BusStatusError;
use crate::red_api::{Bus, RedApi, RedService, RedStop};
use actix_web::{HttpResponse, web};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusStatusQuery {
    pub stop_ids: Option<String>,
    pub route_id: Option<String>,
}

impl BusStatusQuery {
    /// Stop ids split on commas, kept verbatim, plus the route id.
    pub fn required(self) -> Result<(Vec<String>, String), BusStatusError> {
        match (self.stop_ids, self.route_id) {
            (Some(stop_ids), Some(route_id)) if !stop_ids.is_empty() && !route_id.is_empty() => {
                let stop_ids = stop_ids.split(',').map(String::from).collect();
                Ok((stop_ids, route_id))
            }
            _ => Err(BusStatusError::MissingParameters),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StopStatus {
    pub stop_id: String,
    pub stop_name: String,
    pub buses: Vec<Bus>,
}

impl RedStop {
    pub fn into_status(self, route_id: &str) -> StopStatus {
        let buses = self
            .services
            .unwrap_or_default()
            .into_iter()
            .find(|service| service.id() == Some(route_id))
            .map(RedService::into_buses)
            .unwrap_or_default();

        StopStatus {
            stop_id: self.id,
            stop_name: self.name,
            buses,
        }
    }
}

/// Output is in `stop_ids` order no matter which request finishes first.
pub async fn aggregate_bus_status(
    red_api: &RedApi,
    stop_ids: &[String],
    route_id: &str,
) -> Result<Vec<StopStatus>, BusStatusError> {
    let requests = stop_ids.iter().map(|stop_id| red_api.fetch_stop(stop_id));

    let stops = futures::future::try_join_all(requests).await?;

    Ok(stops
        .into_iter()
        .map(|stop| stop.into_status(route_id))
        .collect())
}

#[actix_web::get("/api/bus-status")]
#[tracing::instrument(name = "bus_status", skip(red_api, query), fields(stop_ids = ?query.stop_ids, route_id = ?query.route_id))]
pub async fn bus_status(
    query: web::Query<BusStatusQuery>,
    red_api: web::Data<RedApi>,
) -> Result<HttpResponse, BusStatusError> {
    let (stop_ids, route_id) = query.into_inner().required()?;

    match aggregate_bus_status(&red_api, &stop_ids, &route_id).await {
        Ok(statuses) => {
            tracing::debug!(stops = statuses.len(), "bus status ready");

            Ok(HttpResponse::Ok()
                .insert_header(("Cache-Control", "no-cache"))
                .json(statuses))
        }
        Err(err) => {
            let stop_id = err.stop_id();

            match std::error::Error::source(&err) {
                Some(source) => tracing::error!(stop_id, error = %err, %source, "bus status failed"),
                None => tracing::error!(stop_id, error = %err, "bus status failed"),
            }

            Err(err)
        }
    }
}
