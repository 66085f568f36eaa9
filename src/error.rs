use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BusStatusError {
    #[error("Faltan los parámetros stopIds o routeId.")]
    MissingParameters,

    #[error("Error al obtener datos del paradero {stop_id} (HTTP {status})")]
    UpstreamStatus { stop_id: String, status: u16 },

    #[error("No se pudo contactar el servicio de buses para el paradero {stop_id}")]
    Request {
        stop_id: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Respuesta inválida del servicio de buses para el paradero {stop_id}")]
    Decode {
        stop_id: String,
        #[source]
        source: serde_json::Error,
    },
}

impl BusStatusError {
    /// Stop whose upstream fetch failed, if the error came from one.
    pub fn stop_id(&self) -> Option<&str> {
        match self {
            BusStatusError::MissingParameters => None,
            BusStatusError::UpstreamStatus { stop_id, .. }
            | BusStatusError::Request { stop_id, .. }
            | BusStatusError::Decode { stop_id, .. } => Some(stop_id),
        }
    }
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl ResponseError for BusStatusError {
    fn status_code(&self) -> StatusCode {
        match self {
            BusStatusError::MissingParameters => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code())
            .insert_header(("Cache-Control", "no-cache"))
            .json(ErrorBody {
                error: self.to_string(),
            })
    }
}
