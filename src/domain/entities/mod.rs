pub mod collection;
pub mod contact_me;
pub mod product;
pub mod project;
pub mod user;
