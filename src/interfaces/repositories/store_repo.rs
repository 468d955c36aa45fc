use crate::repositories::document_store::StoreClient;

#[derive(Clone)]
pub struct StoreProjectRepo {
    pub store: StoreClient,
}

#[derive(Clone)]
pub struct StoreContactMeRepo {
    pub store: StoreClient,
}
