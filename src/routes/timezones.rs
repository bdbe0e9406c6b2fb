use actix_web::{HttpResponse, Responder, ResponseError, get, post, web};
use tracing::{debug, error};

use crate::catalog::Catalog;
use crate::config::Config;
use crate::error::TimezoneError;
use crate::handlers::timezones::{
    convert_timestamp, grouped_timezones, list_timezones, resolve_timezone,
};
use crate::models::requests::ConvertRequest;

#[get("/all")]
async fn all(catalog: web::Data<Catalog>) -> impl Responder {
    match list_timezones(&catalog).await {
        Ok(zones) => HttpResponse::Ok().json(zones),
        Err(e) => failure(e),
    }
}

#[get("/grouped")]
async fn grouped(catalog: web::Data<Catalog>) -> impl Responder {
    match grouped_timezones(&catalog).await {
        Ok(groups) => HttpResponse::Ok().json(groups),
        Err(e) => failure(e),
    }
}

#[post("/convert")]
async fn convert(catalog: web::Data<Catalog>, body: web::Json<ConvertRequest>) -> impl Responder {
    match convert_timestamp(&catalog, body.into_inner()).await {
        Ok(conversion) => HttpResponse::Ok().json(conversion),
        Err(e) => failure(e),
    }
}

#[get("/{region}/{city}")]
async fn zone(
    catalog: web::Data<Catalog>,
    config: web::Data<Config>,
    path: web::Path<(String, String)>,
) -> impl Responder {
    let (region, city) = path.into_inner();

    match resolve_timezone(&catalog, &region, &city, config.suffix_style).await {
        Ok(zone) => HttpResponse::Ok().json(zone),
        Err(e) => failure(e),
    }
}

fn failure(e: TimezoneError) -> HttpResponse {
    match &e {
        TimezoneError::Infrastructure(_) => error!("Timezone request failed: {}", e),
        _ => debug!("Timezone request rejected: {}", e),
    }
    e.error_response()
}

// malformed bodies get the same envelope as missing fields
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        debug!("Rejecting convert body: {}", err);
        TimezoneError::Validation(err.to_string()).into()
    })
}

pub fn init(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .service(all)
        .service(grouped)
        .service(convert)
        .service(zone);
}
