use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

use crate::{
    entities::{collection::Collection, project::{Project, ProjectDocument}},
    errors::StoreError,
    repositories::{
        document_store::{Filter, StoreClient},
        store_repo::StoreProjectRepo,
    },
};

#[cfg_attr(test, automock)]
#[async_trait]
pub trait ProjectRepository: Send + Sync {
    async fn list_projects(&self, category: Option<String>) -> Result<Vec<Project>, StoreError>;
    async fn get_project_by_slug(&self, slug: &str) -> Result<Option<Project>, StoreError>;
}

impl StoreProjectRepo {
    pub fn new(store: StoreClient) -> Self {
        StoreProjectRepo { store }
    }
}

#[async_trait]
impl ProjectRepository for StoreProjectRepo {
    async fn list_projects(&self, category: Option<String>) -> Result<Vec<Project>, StoreError> {
        let filter = match category {
            Some(category) => Filter::new().where_eq("category", category),
            None => Filter::new(),
        };

        let records = self.store
            .get_documents(ProjectDocument::NAME, &filter, None)
            .await?;

        Ok(records.into_iter().map(Project::from).collect())
    }

    async fn get_project_by_slug(&self, slug: &str) -> Result<Option<Project>, StoreError> {
        let records = self.store
            .get_documents(ProjectDocument::NAME, &Filter::new().where_eq("slug", slug), Some(1))
            .await?;

        Ok(records.into_iter().next().map(Project::from))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::db::memory::MemoryStore;
    use crate::repositories::document_store::Fields;
    use serde_json::{json, Value};

    async fn seeded_repo(docs: Vec<Value>) -> StoreProjectRepo {
        let store = StoreClient::new(Arc::new(MemoryStore::new()));
        for doc in docs {
            let fields: Fields = doc.as_object().cloned().unwrap();
            store.create_document(ProjectDocument::NAME, fields).await.unwrap();
        }
        StoreProjectRepo::new(store)
    }

    #[actix_rt::test]
    async fn list_filters_by_category() {
        let repo = seeded_repo(vec![
            json!({ "title": "A", "slug": "a", "category": "Furniture" }),
            json!({ "title": "B", "slug": "b", "category": "UI" }),
        ])
        .await;

        let projects = repo.list_projects(Some("Furniture".into())).await.unwrap();

        assert_eq!(projects.len(), 1);
        assert_eq!(projects[0].slug(), Some("a"));
    }

    #[actix_rt::test]
    async fn every_stored_record_is_listed_whatever_its_shape() {
        let repo = seeded_repo(vec![
            json!({ "title": "A", "slug": "a", "category": "UI", "year": 2021 }),
            json!({ "slug": "float", "year": 2023.0 }),
            json!({ "slug": "text", "year": "last year" }),
            json!({ "slug": "untitled", "category": "UI" }),
        ])
        .await;

        let projects = repo.list_projects(None).await.unwrap();

        let slugs: Vec<_> = projects.iter().filter_map(Project::slug).collect();
        assert_eq!(slugs, vec!["a", "float", "text", "untitled"]);
        assert_eq!(projects[2].year(), Some(&json!("last year")));
    }

    #[actix_rt::test]
    async fn slug_lookup_finds_records_outside_the_declared_shape() {
        let repo = seeded_repo(vec![json!({ "slug": "draft", "category": "UI" })]).await;

        let project = repo.get_project_by_slug("draft").await.unwrap().unwrap();

        assert_eq!(project.slug(), Some("draft"));
        assert!(!project.fields.contains_key("title"));
    }

    #[actix_rt::test]
    async fn slug_lookup_returns_none_when_missing() {
        let repo = seeded_repo(vec![json!({ "title": "A", "slug": "a", "category": "UI" })]).await;

        assert!(repo.get_project_by_slug("a").await.unwrap().is_some());
        assert!(repo.get_project_by_slug("zzz").await.unwrap().is_none());
    }

    #[actix_rt::test]
    async fn disabled_store_surfaces_as_error() {
        let repo = StoreProjectRepo::new(StoreClient::disabled());

        assert_eq!(repo.list_projects(None).await, Err(StoreError::Disabled));
    }
}
