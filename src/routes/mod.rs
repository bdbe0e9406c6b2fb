pub mod health;
pub mod timezones;

use actix_web::web;

pub fn init(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/health").configure(health::init))
        .service(web::scope("/timezones").configure(timezones::init));
}
