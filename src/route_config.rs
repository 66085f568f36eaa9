//! Compiled-in routes and stops shown on the page.
//!
//! Stop order inside a direction is display order only. Stop ids are the ones
//! assigned by the Red API, so they can be passed straight to `/api/bus-status`.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StopRef {
    pub id: &'static str,
    pub name: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RouteConfig {
    pub id: &'static str,
    #[serde(rename = "IDA")]
    pub ida: &'static [StopRef],
    #[serde(rename = "VUELTA")]
    pub vuelta: &'static [StopRef],
}

const fn stop(id: &'static str, name: &'static str) -> StopRef {
    StopRef { id, name }
}

static ROUTES: [RouteConfig; 3] = [
    RouteConfig {
        id: "G38",
        ida: &[
            stop("PG1790", "Mall Plaza Sur (IDA)"),
            stop("PG1990", "Haras de Nos / Casas del Parque (IDA)"),
            stop("PG374", "Hospital El Pino (IDA)"),
        ],
        vuelta: &[
            stop("PG2047", "Hospital El Pino (VUELTA)"),
            stop("PG1981", "Haras de Nos / Casas del Parque (VUELTA)"),
            stop("PG1790", "Mall Plaza Sur (VUELTA)"),
        ],
    },
    RouteConfig {
        id: "G32",
        ida: &[
            stop("PG1990", "Haras de Nos / Casas del Parque (IDA)"),
            stop("PG741", "Estación San Bernardo (IDA)"),
        ],
        vuelta: &[
            stop("PG741", "Estación San Bernardo (VUELTA)"),
            stop("PG1981", "Haras de Nos (VUELTA)"),
        ],
    },
    RouteConfig {
        id: "G02",
        ida: &[
            stop("PG1751", "Josefa Denos (Casa Nico) (IDA)"),
            stop("PG728", "Estación Nos (IDA)"),
        ],
        vuelta: &[
            stop("PG1745", "Estación Nos (VUELTA)"),
            stop("PG1752", "Josefa Denos (Casa Nico) (VUELTA)"),
        ],
    },
];

pub fn routes() -> &'static [RouteConfig] {
    &ROUTES
}
