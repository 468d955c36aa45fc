use actix_web::{web, HttpResponse, Responder};
use tracing::instrument;

use crate::{entities::contact_me::ContactMeForm, errors::AppError, AppState};

#[instrument(skip(state, form))]
pub async fn create_contact_me(
    state: web::Data<AppState>,
    form: web::Json<ContactMeForm>,
) -> Result<impl Responder, AppError> {
    let response = state.contact_handler
        .create_contact_message(form.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(response))
}
