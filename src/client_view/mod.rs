//! The single page and the route configuration it renders from.

use crate::route_config::routes;
use actix_web::{HttpResponse, Responder};

const INDEX_HTML: &str = include_str!("index.html");

#[actix_web::get("/")]
pub async fn index() -> impl Responder {
    HttpResponse::Ok()
        .insert_header(("Content-Type", "text/html; charset=utf-8"))
        .body(INDEX_HTML)
}

#[actix_web::get("/api/routes")]
pub async fn route_list() -> impl Responder {
    HttpResponse::Ok()
        .insert_header(("Cache-Control", "public, max-age=3600"))
        .json(routes())
}

#[actix_web::get("/robots.txt")]
pub async fn robots() -> impl Responder {
    HttpResponse::Ok()
        .insert_header(("Content-Type", "text/plain"))
        .insert_header(("Cache-Control", "no-cache"))
        .body("User-agent: *\nDisallow: /api/")
}
