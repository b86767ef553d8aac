use crate::error::AppError;
use futures::stream::TryStreamExt;
use mongodb::{
    bson::{Bson, Document},
    Client as MongoClient, Database,
};
use serde::Serialize;
use serde_json::Value;

/// Thin gateway over MongoDB collections. Store-native identifiers never
/// leave this module: `create` returns the new identifier as a plain string
/// and `list` rewrites `_id` into a string `id` field before returning.
#[derive(Clone)]
pub struct MongoDb {
    client: MongoClient,
    db: Database,
}

impl MongoDb {
    pub async fn connect(uri: &str, database: &str) -> Result<Self, AppError> {
        tracing::info!(uri = %uri, "Connecting to MongoDB");
        let client = MongoClient::with_uri_str(uri).await.map_err(|e| {
            tracing::error!("Failed to connect to MongoDB at {}: {}", uri, e);
            AppError::from(e)
        })?;
        let db = client.database(database);
        tracing::info!(database = %database, "Successfully connected to MongoDB database");
        Ok(Self { client, db })
    }

    /// Inserts `document` into the named collection, skipping unset optional
    /// fields through the document's own serde attributes.
    pub async fn create<T: Serialize>(
        &self,
        collection: &str,
        document: &T,
    ) -> Result<String, AppError> {
        let result = self
            .db
            .collection::<T>(collection)
            .insert_one(document, None)
            .await
            .map_err(|e| {
                tracing::error!("Failed to insert into collection {}: {}", collection, e);
                AppError::from(e)
            })?;

        Ok(id_to_string(result.inserted_id))
    }

    /// Full-collection scan. No filters, no pagination: volumes are assumed
    /// small.
    pub async fn list(&self, collection: &str) -> Result<Vec<Value>, AppError> {
        let mut cursor = self
            .db
            .collection::<Document>(collection)
            .find(None, None)
            .await
            .map_err(|e| {
                tracing::error!("Failed to query collection {}: {}", collection, e);
                AppError::from(e)
            })?;

        let mut documents = Vec::new();
        while let Some(mut raw) = cursor.try_next().await.map_err(AppError::from)? {
            let id = raw.remove("_id").map(id_to_string);
            let mut value = serde_json::to_value(&raw).map_err(|e| {
                AppError::InternalError(anyhow::anyhow!("Failed to serialize document: {}", e))
            })?;
            if let (Some(id), Some(fields)) = (id, value.as_object_mut()) {
                fields.insert("id".to_string(), Value::String(id));
            }
            documents.push(value);
        }

        Ok(documents)
    }

    pub async fn list_collection_names(&self) -> Result<Vec<String>, AppError> {
        self.db
            .list_collection_names(None)
            .await
            .map_err(AppError::from)
    }

    pub fn client(&self) -> &MongoClient {
        &self.client
    }
}

/// Converts a store-assigned identifier to its portable string form.
fn id_to_string(id: Bson) -> String {
    match id {
        Bson::ObjectId(oid) => oid.to_hex(),
        Bson::String(s) => s,
        other => other.to_string(),
    }
}
