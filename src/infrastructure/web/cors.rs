use actix_cors::Cors;

use crate::settings::AppConfig;

/// Builds the CORS middleware from the configured origins. A `*` entry
/// allows any origin.
pub fn build_cors(config: &AppConfig) -> Cors {
    let origins = config.cors_origins();

    let cors = Cors::default()
        .allow_any_method()
        .allow_any_header()
        .max_age(3600);

    if origins.iter().any(|o| o == "*") {
        return cors.allow_any_origin().send_wildcard();
    }

    origins
        .iter()
        .fold(cors, |cors, origin| cors.allowed_origin(origin))
        .supports_credentials()
}

#[cfg(test)]
mod tests {
    use actix_web::{http::header, test, web, App, HttpResponse};

    use super::*;

    async fn preflight(config: AppConfig, origin: &str) -> Option<String> {
        let app = test::init_service(
            App::new()
                .wrap(build_cors(&config))
                .route("/api/projects", web::get().to(HttpResponse::Ok)),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/projects")
            .insert_header((header::ORIGIN, origin))
            .to_request();
        let resp = test::call_service(&app, req).await;

        resp.headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .map(|v| v.to_str().unwrap().to_string())
    }

    #[actix_rt::test]
    async fn wildcard_allows_any_origin() {
        let allowed = preflight(AppConfig::default(), "https://anywhere.dev").await;

        assert_eq!(allowed.as_deref(), Some("*"));
    }

    #[actix_rt::test]
    async fn listed_origin_is_echoed_back() {
        let config = AppConfig {
            cors_allowed_origins: vec!["https://portfolio.dev".into()],
            ..AppConfig::default()
        };

        let allowed = preflight(config, "https://portfolio.dev").await;

        assert_eq!(allowed.as_deref(), Some("https://portfolio.dev"));
    }
}
