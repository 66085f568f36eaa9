//! Sends plain-HTTP production traffic to HTTPS.
//!
//! TLS ends at the hosting proxy, which reports the client's scheme in
//! `x-forwarded-proto`. Anything other than `https` there, including a missing
//! header, gets a 301 to `https://<host><path>`. The query string is not
//! carried over.

use crate::config::RuntimeMode;
use actix_web::body::{EitherBody, MessageBody};
use actix_web::dev::{ServiceRequest, ServiceResponse};
use actix_web::http::header;
use actix_web::middleware::Next;
use actix_web::{Error, HttpResponse, web};

pub const FORWARDED_PROTO: &str = "x-forwarded-proto";

pub fn https_location(
    mode: RuntimeMode,
    forwarded_proto: Option<&str>,
    host: &str,
    path: &str,
) -> Option<String> {
    if mode != RuntimeMode::Production {
        return None;
    }

    match forwarded_proto {
        Some(proto) if proto.eq_ignore_ascii_case("https") => None,
        _ => Some(format!("https://{host}{path}")),
    }
}

/// Middleware for `actix_web::middleware::from_fn`. Reads the mode from
/// `web::Data<RuntimeMode>`, which defaults to development when absent.
pub async fn redirect_to_https<B: MessageBody>(
    req: ServiceRequest,
    next: Next<B>,
) -> Result<ServiceResponse<EitherBody<B>>, Error> {
    let mode = req
        .app_data::<web::Data<RuntimeMode>>()
        .map(|mode| *mode.get_ref())
        .unwrap_or_default();

    let forwarded_proto = req
        .headers()
        .get(FORWARDED_PROTO)
        .and_then(|value| value.to_str().ok());

    let host = match req
        .headers()
        .get(header::HOST)
        .and_then(|value| value.to_str().ok())
    {
        Some(host) => host.to_string(),
        None => req.connection_info().host().to_string(),
    };

    if let Some(location) = https_location(mode, forwarded_proto, &host, req.path()) {
        tracing::debug!(%location, path = req.path(), "redirecting to https");

        let response = HttpResponse::MovedPermanently()
            .insert_header((header::LOCATION, location))
            .finish();

        return Ok(req.into_response(response).map_into_right_body());
    }

    next.call(req).await.map(ServiceResponse::map_into_left_body)
}
