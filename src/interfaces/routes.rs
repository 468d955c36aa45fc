use actix_web::web;

use crate::handlers::{home::home, system::{health_check, test_database}};

mod contact;
mod json_error;
mod projects;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(home)
        .service(test_database)
        .service(health_check);

    cfg.service(
        web::scope("/api")
            .configure(projects::config_routes)
            .configure(contact::config_routes)
    );

    cfg.configure(json_error::config_routes);
}
