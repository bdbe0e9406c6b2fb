use actix_web::{HttpResponse, Responder, get, web};
use serde_json::json;
use tracing::error;

use crate::catalog::Catalog;

#[get("/ping")]
async fn ping() -> impl Responder {
    HttpResponse::Ok().body("pong")
}

/// Ready once the backing store answers and holds the seeded catalog.
#[get("/ready")]
async fn ready(catalog: web::Data<Catalog>) -> impl Responder {
    match catalog.size().await {
        Ok(count) if count > 0 => HttpResponse::Ok().json(json!({
            "status": "ok",
            "timezones": count,
        })),
        Ok(_) => HttpResponse::ServiceUnavailable().json(json!({
            "status": "unseeded",
            "timezones": 0,
        })),
        Err(e) => {
            error!("Readiness check failed: {}", e);
            HttpResponse::ServiceUnavailable().json(json!({ "status": "unavailable" }))
        }
    }
}

pub fn init(cfg: &mut web::ServiceConfig) {
    cfg.service(ping).service(ready);
}
