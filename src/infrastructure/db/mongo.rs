use async_trait::async_trait;
use bson::{doc, Bson, Document};
use futures::TryStreamExt;
use serde_json::Value;
use mongodb::{
    options::{ClientOptions, FindOptions},
    Client, Collection, Database,
};
use tracing::info;

use crate::{
    constants::DEFAULT_DATABASE_NAME,
    errors::StoreError,
    repositories::document_store::{DocumentStore, Fields, Filter, Record},
};

#[derive(Debug, Clone)]
pub struct MongoStore {
    client: Client,
    database: String,
}

impl MongoStore {
    /// Parses the connection string and builds a client. The driver connects
    /// lazily, so an unreachable server surfaces on the first query.
    ///
    /// The database is `database_name` when given, otherwise the one named in
    /// the connection string, otherwise [`DEFAULT_DATABASE_NAME`].
    pub async fn connect(database_url: &str, database_name: Option<&str>) -> Result<Self, StoreError> {
        let options = ClientOptions::parse(database_url).await?;

        let database = database_name
            .map(str::to_string)
            .or_else(|| options.default_database.clone())
            .unwrap_or_else(|| DEFAULT_DATABASE_NAME.to_string());

        let client = Client::with_options(options)?;
        info!("Document store client created for database '{}'", database);

        Ok(MongoStore { client, database })
    }

    fn db(&self) -> Database {
        self.client.database(&self.database)
    }

    fn collection(&self, name: &str) -> Collection<Document> {
        self.db().collection(name)
    }
}

/// Fields are read as relaxed extended JSON, so `{"$date": ...}` becomes a
/// BSON date.
fn to_document(fields: &Fields) -> Result<Document, StoreError> {
    let bson = Bson::try_from(Value::Object(fields.clone()))
        .map_err(|e| StoreError::InvalidDocument(e.to_string()))?;

    match bson {
        Bson::Document(document) => Ok(document),
        other => Err(StoreError::InvalidDocument(format!("expected a document, got {}", other))),
    }
}

fn id_to_string(id: &Bson) -> String {
    match id {
        Bson::ObjectId(oid) => oid.to_hex(),
        Bson::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn to_record(mut document: Document) -> Result<Record, StoreError> {
    let id = document
        .remove("_id")
        .map(|id| id_to_string(&id))
        .ok_or_else(|| StoreError::InvalidDocument("record has no _id".into()))?;

    match Bson::Document(document).into_relaxed_extjson() {
        Value::Object(fields) => Ok(Record { id, fields }),
        other => Err(StoreError::InvalidDocument(format!("expected a document, got {}", other))),
    }
}

#[async_trait]
impl DocumentStore for MongoStore {
    async fn create_document(&self, collection: &str, doc: Fields) -> Result<String, StoreError> {
        let result = self.collection(collection)
            .insert_one(to_document(&doc)?)
            .await?;

        Ok(id_to_string(&result.inserted_id))
    }

    async fn get_documents(&self, collection: &str, filter: &Filter, limit: Option<i64>) -> Result<Vec<Record>, StoreError> {
        let mut options = FindOptions::default();
        options.limit = limit;

        self.collection(collection)
            .find(to_document(filter.as_fields())?)
            .with_options(options)
            .await?
            .try_collect::<Vec<Document>>()
            .await?
            .into_iter()
            .map(to_record)
            .collect()
    }

    async fn list_collection_names(&self) -> Result<Vec<String>, StoreError> {
        Ok(self.db().list_collection_names().await?)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        self.db().run_command(doc! { "ping": 1 }).await?;
        Ok(())
    }

    fn database_name(&self) -> &str {
        &self.database
    }

    async fn close(&self) {
        self.client.clone().shutdown().await;
        info!("Document store client shut down");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bson::oid::ObjectId;
    use serde_json::json;

    #[test]
    fn object_ids_render_as_hex() {
        let oid = ObjectId::new();

        assert_eq!(id_to_string(&Bson::ObjectId(oid)), oid.to_hex());
        assert_eq!(id_to_string(&Bson::String("custom".into())), "custom");
    }

    #[test]
    fn records_lift_the_internal_id() {
        let oid = ObjectId::new();
        let document = doc! { "_id": oid, "slug": "chair", "year": 2023 };

        let record = to_record(document).unwrap();

        assert_eq!(record.id, oid.to_hex());
        assert!(!record.fields.contains_key("_id"));
        assert_eq!(record.fields["slug"], json!("chair"));
        assert_eq!(record.fields["year"], json!(2023));
    }

    #[test]
    fn record_without_id_is_invalid() {
        assert!(matches!(
            to_record(doc! { "slug": "chair" }),
            Err(StoreError::InvalidDocument(_))
        ));
    }

    #[test]
    fn extended_json_dates_become_bson_dates() {
        let fields = json!({ "created_at": { "$date": "2026-10-14T09:30:00.250Z" }, "name": "Ada" });

        let document = to_document(fields.as_object().unwrap()).unwrap();

        let at = document.get_datetime("created_at").unwrap();
        assert_eq!(at.timestamp_millis(), 1_791_970_200_250);
        assert_eq!(document.get_str("name").unwrap(), "Ada");
    }

    #[test]
    fn stored_dates_read_back_as_extended_json() {
        let at = bson::DateTime::from_millis(1_791_970_200_250);

        let record = to_record(doc! { "_id": "m1", "created_at": at }).unwrap();

        let rendered = record.fields["created_at"]["$date"].as_str().unwrap();
        assert!(rendered.starts_with("2026-10-14T09:30:00"));
    }

    #[test]
    fn filters_become_equality_documents() {
        let filter = Filter::new().where_eq("category", "Furniture");

        assert_eq!(to_document(filter.as_fields()).unwrap(), doc! { "category": "Furniture" });
        assert_eq!(to_document(Filter::new().as_fields()).unwrap(), doc! {});
    }
}
