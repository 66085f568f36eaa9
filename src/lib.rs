//! Cuando viene la micro? Real-time bus arrivals for a handful of routes in
//! San Bernardo, backed by the Red bus-stop API.
//!
//! The `paradero` binary serves three things:
//! - `/` and `/api/routes`: the page and the compiled-in routes it renders
//! - `/api/bus-status`: fan-out over the Red API, one request per stop
//! - an HTTPS redirect in front of everything when running in production

#![deny(
    clippy::mutable_key_type,
    clippy::map_entry,
    clippy::boxed_local,
    clippy::let_unit_value,
    clippy::redundant_allocation,
    clippy::bool_comparison,
    clippy::bind_instead_of_map,
    clippy::vec_box,
    clippy::while_let_loop,
    clippy::useless_asref,
    clippy::repeat_once,
    clippy::deref_addrof,
    clippy::suspicious_map,
    clippy::single_char_pattern,
    clippy::for_kv_map,
    clippy::let_and_return,
    clippy::iter_nth,
    clippy::iter_cloned_collect,
    clippy::match_result_ok,
    clippy::cmp_owned,
    clippy::op_ref
)]

pub mod bus_status;
pub mod client_view;
pub mod config;
pub mod error;
pub mod https_redirect;
pub mod red_api;
pub mod route_config;

use actix_web::web;

/// Registers every endpoint. Shared state (`web::Data<RedApi>` and
/// `web::Data<RuntimeMode>`) is added by the caller.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(client_view::index)
        .service(client_view::route_list)
        .service(client_view::robots)
        .service(bus_status::bus_status);
}
