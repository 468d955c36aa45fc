pub mod contact_me;
pub mod document_store;
pub mod project;
pub mod store_repo;
