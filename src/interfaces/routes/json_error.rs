use actix_web::{
    web,
    http::StatusCode,
    ResponseError,
    HttpResponse,
    error::JsonPayloadError,
};
use serde_json::json;

use crate::errors::FieldError;

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(|err, _req| {
        tracing::debug!("Rejected JSON body: {}", err);
        JsonError::from(err).into()
    }));
}

/// Body extraction failure. Bodies that parse as JSON but do not fit the
/// expected shape are reported like validation failures.
#[derive(Debug)]
pub struct JsonError {
    message: String,
    status: StatusCode
}

impl std::fmt::Display for JsonError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl ResponseError for JsonError {
    fn status_code(&self) -> StatusCode {
        self.status
    }

    fn error_response(&self) -> HttpResponse<actix_web::body::BoxBody> {
        if self.status == StatusCode::UNPROCESSABLE_ENTITY {
            let details = vec![FieldError {
                field: "body".to_string(),
                message: self.message.clone(),
            }];
            return HttpResponse::build(self.status).json(json!({
                "error": "Validation failed",
                "details": details
            }));
        }

        HttpResponse::build(self.status).json(json!({ "error": self.message }))
    }
}

impl From<JsonPayloadError> for JsonError {
    fn from(err: JsonPayloadError) -> Self {
        let status = match &err {
            JsonPayloadError::Deserialize(_) => StatusCode::UNPROCESSABLE_ENTITY,
            JsonPayloadError::ContentType => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            JsonPayloadError::Overflow { .. } | JsonPayloadError::OverflowKnownLength { .. } => {
                StatusCode::PAYLOAD_TOO_LARGE
            }
            _ => StatusCode::BAD_REQUEST,
        };

        let message = match err {
            JsonPayloadError::Deserialize(e) => e.to_string(),
            other => format!("JSON payload error: {}", other),
        };

        JsonError { message, status }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_are_unprocessable() {
        let serde_err = serde_json::from_str::<crate::entities::contact_me::ContactMeForm>(
            r#"{"name": "Ada", "email": "ada@example.com"}"#,
        )
        .unwrap_err();

        let err = JsonError::from(JsonPayloadError::Deserialize(serde_err));

        assert_eq!(err.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
        assert!(err.to_string().contains("message"));
    }

    #[test]
    fn wrong_content_type_is_unsupported() {
        let err = JsonError::from(JsonPayloadError::ContentType);

        assert_eq!(err.status_code(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
    }

    #[test]
    fn oversized_bodies_are_rejected() {
        let err = JsonError::from(JsonPayloadError::Overflow { limit: 10 });

        assert_eq!(err.status_code(), StatusCode::PAYLOAD_TOO_LARGE);
    }
}
