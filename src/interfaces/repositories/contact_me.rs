use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

use crate::{
    entities::{collection::Collection, contact_me::ContactMessageInsert},
    errors::StoreError,
    repositories::{document_store::{Fields, StoreClient}, store_repo::StoreContactMeRepo},
};

#[cfg_attr(test, automock)]
#[async_trait]
pub trait ContactMeRepository: Send + Sync {
    async fn create_contact_message(&self, msg: &ContactMessageInsert) -> Result<String, StoreError>;
}

impl StoreContactMeRepo {
    pub fn new(store: StoreClient) -> Self {
        StoreContactMeRepo { store }
    }
}

#[async_trait]
impl ContactMeRepository for StoreContactMeRepo {
    async fn create_contact_message(&self, msg: &ContactMessageInsert) -> Result<String, StoreError> {
        let fields: Fields = match serde_json::to_value(msg)? {
            serde_json::Value::Object(fields) => fields,
            _ => return Err(StoreError::InvalidDocument("contact message is not an object".into())),
        };

        self.store
            .create_document(ContactMessageInsert::NAME, fields)
            .await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use chrono::Utc;

    use super::*;
    use crate::db::memory::MemoryStore;
    use crate::repositories::document_store::{DocumentStore, Filter};

    fn message() -> ContactMessageInsert {
        ContactMessageInsert {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            subject: Some("Hi".into()),
            message: "Hello".into(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[actix_rt::test]
    async fn message_is_stored_in_contactmessage() {
        let memory = MemoryStore::new();
        let repo = StoreContactMeRepo::new(StoreClient::new(Arc::new(memory.clone())));

        let id = repo.create_contact_message(&message()).await.unwrap();

        let stored = memory.get_documents("contactmessage", &Filter::new(), None).await.unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].id, id);
        assert_eq!(stored[0].fields["email"], "ada@example.com");
        assert!(stored[0].fields["created_at"]["$date"].is_string());
    }

    #[actix_rt::test]
    async fn every_submission_is_a_new_record() {
        let memory = MemoryStore::new();
        let repo = StoreContactMeRepo::new(StoreClient::new(Arc::new(memory.clone())));

        repo.create_contact_message(&message()).await.unwrap();
        repo.create_contact_message(&message()).await.unwrap();

        assert_eq!(memory.count("contactmessage"), 2);
    }
}
