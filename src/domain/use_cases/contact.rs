use crate::{
    entities::contact_me::{ContactMeForm, ContactMeResponse, ContactMessageInsert},
    errors::AppError,
    repositories::contact_me::ContactMeRepository,
};
use tracing::warn;
use validator::Validate;

pub struct ContactMeHandler<R>
where
    R: ContactMeRepository,
{
    pub contact_repo: R,
}

impl<R> ContactMeHandler<R>
where
    R: ContactMeRepository,
{
    pub fn new(contact_repo: R) -> Self {
        ContactMeHandler { contact_repo }
    }

    /// Handles the creation of a new contact message.
    ///
    /// The message is accepted even when the store is unreachable; the
    /// response then carries no id.
    pub async fn create_contact_message(
        &self,
        request: ContactMeForm
    ) -> Result<ContactMeResponse, AppError> {
        request.validate()?;

        let new_msg = ContactMessageInsert::from(request);

        let id = match self.contact_repo.create_contact_message(&new_msg).await {
            Ok(id) => Some(id),
            Err(e) if e.is_unavailable() => {
                warn!("Contact message not stored: {}", e);
                None
            }
            Err(e) => return Err(e.into()),
        };

        Ok(ContactMeResponse::ok(id))
    }
}
