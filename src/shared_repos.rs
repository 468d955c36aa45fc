use crate::repositories::{
    document_store::StoreClient,
    store_repo::{StoreContactMeRepo, StoreProjectRepo},
};

#[derive(Clone)]
pub struct SharedRepositories {
    pub project_repo: StoreProjectRepo,
    pub contact_repo: StoreContactMeRepo,
}

impl SharedRepositories {
    pub fn new(store: StoreClient) -> Self {
        let project_repo = StoreProjectRepo::new(store.clone());
        let contact_repo = StoreContactMeRepo::new(store);

        SharedRepositories {
            project_repo,
            contact_repo,
        }
    }
}
