mod domain;
mod interfaces;
mod infrastructure;
pub mod errors;
pub mod settings;
pub mod constants;
pub mod graceful_shutdown;
pub mod shared_repos;
pub mod telemetry;

pub use domain::{entities, use_cases};
pub use interfaces::{handlers, repositories, routes};
pub use infrastructure::{db, web};

use repositories::{
    document_store::StoreClient,
    store_repo::{StoreContactMeRepo, StoreProjectRepo},
};
use shared_repos::SharedRepositories;
use use_cases::{contact::ContactMeHandler, projects::ProjectHandler};

pub struct AppState {
    pub store: StoreClient,
    pub project_handler: AppProjectHandler,
    pub contact_handler: AppContactHandler,
    pub database_url_set: bool,
}

pub type AppProjectHandler = ProjectHandler<StoreProjectRepo>;
pub type AppContactHandler = ContactMeHandler<StoreContactMeRepo>;

impl AppState {
    pub fn new(config: &settings::AppConfig, store: StoreClient) -> Self {
        let repos = SharedRepositories::new(store.clone());

        AppState {
            store,
            project_handler: ProjectHandler::new(repos.project_repo),
            contact_handler: ContactMeHandler::new(repos.contact_repo),
            database_url_set: config.database_url_is_set(),
        }
    }
}
