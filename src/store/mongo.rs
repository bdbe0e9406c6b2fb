use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::oid::ObjectId;
use mongodb::bson::{self, Document, doc};
use mongodb::options::IndexOptions;
use mongodb::{Client, Collection, IndexModel};
use tracing::{error, info, warn};

use crate::error::{TimezoneError, TimezoneResult};
use crate::models::timezone::TimezoneDescriptor;
use crate::store::TimezoneStore;

pub struct MongoTimezoneStore {
    collection: Collection<TimezoneDescriptor>,
}

impl MongoTimezoneStore {
    pub async fn connect(uri: &str, database: &str, collection: &str) -> TimezoneResult<Self> {
        let client = Client::with_uri_str(uri).await?;
        info!("Connected to MongoDB, using {}.{}", database, collection);

        Ok(MongoTimezoneStore {
            collection: client.database(database).collection(collection),
        })
    }
}

/// Serializes the batch with client-generated `_id`s so a failed insert can
/// be undone without touching documents written by anyone else.
fn owned_documents(
    records: &[TimezoneDescriptor],
) -> TimezoneResult<(Vec<Document>, Vec<ObjectId>)> {
    let mut documents = Vec::with_capacity(records.len());
    let mut ids = Vec::with_capacity(records.len());

    for record in records {
        let mut document = bson::to_document(record)
            .map_err(|e| TimezoneError::Infrastructure(e.to_string()))?;
        let id = ObjectId::new();
        document.insert("_id", id);
        documents.push(document);
        ids.push(id);
    }

    Ok((documents, ids))
}

fn owned_by(ids: &[ObjectId]) -> Document {
    doc! { "_id": { "$in": ids.to_vec() } }
}

#[async_trait]
impl TimezoneStore for MongoTimezoneStore {
    async fn count(&self) -> TimezoneResult<u64> {
        Ok(self.collection.count_documents(doc! {}).await?)
    }

    async fn find_one(&self, identifier: &str) -> TimezoneResult<Option<TimezoneDescriptor>> {
        Ok(self
            .collection
            .find_one(doc! { "identifier": identifier })
            .await?)
    }

    async fn find_all(&self) -> TimezoneResult<Vec<TimezoneDescriptor>> {
        let cursor = self.collection.find(doc! {}).sort(doc! { "_id": 1 }).await?;
        Ok(cursor.try_collect().await?)
    }

    async fn insert_many(&self, records: &[TimezoneDescriptor]) -> TimezoneResult<()> {
        if records.is_empty() {
            return Ok(());
        }

        let (documents, ids) = owned_documents(records)?;
        let raw = self.collection.clone_with_type::<Document>();

        if let Err(err) = raw.insert_many(&documents).await {
            error!("Bulk insert of {} timezones failed: {}", records.len(), err);

            // insert_many is not transactional; drop whatever part of this batch made it in
            if let Err(cleanup) = raw.delete_many(owned_by(&ids)).await {
                warn!("Could not roll back partial timezone insert: {}", cleanup);
            }

            return Err(err.into());
        }

        Ok(())
    }

    async fn ensure_indexes(&self) -> TimezoneResult<()> {
        let index = IndexModel::builder()
            .keys(doc! { "identifier": 1 })
            .options(IndexOptions::builder().unique(true).build())
            .build();

        self.collection.create_index(index).await?;
        Ok(())
    }
}
