//! MongoDB-backed `JobStore`

use async_trait::async_trait;
use futures::TryStreamExt;
use jb_core::PageParams;
use mongodb::bson::{doc, from_document, Document};
use mongodb::options::FindOptions;
use mongodb::Collection;
use serde::Deserialize;

use crate::filter::JobFilter;
use crate::job::{GroupCount, Job, JobId};
use crate::store::{JobStore, StoreError, StoreResult};

/// Job repository over a MongoDB collection
pub struct MongoJobStore {
    collection: Collection<Job>,
}

impl MongoJobStore {
    pub fn new(collection: Collection<Job>) -> Self {
        Self { collection }
    }
}

#[async_trait]
impl JobStore for MongoJobStore {
    async fn find(&self, filter: &JobFilter, page: PageParams) -> StoreResult<Vec<Job>> {
        let options = FindOptions::builder()
            .sort(doc! { "postedAt": -1 })
            .skip(page.offset())
            .limit(page.limit)
            .build();

        let cursor = self.collection.find(filter.to_document(), options).await?;
        let jobs = cursor.try_collect().await?;

        Ok(jobs)
    }

    async fn count(&self, filter: &JobFilter) -> StoreResult<u64> {
        let count = self
            .collection
            .count_documents(filter.to_document(), None)
            .await?;

        Ok(count)
    }

    async fn find_by_id(&self, id: &JobId) -> StoreResult<Option<Job>> {
        let job = self
            .collection
            .find_one(doc! { "_id": id.as_object_id() }, None)
            .await?;

        Ok(job)
    }

    async fn distinct_values(&self, field: &str) -> StoreResult<Vec<String>> {
        let values = self.collection.distinct(field, None, None).await?;

        // Only text values are meaningful for the fields this service
        // aggregates; anything else would be a foreign document.
        Ok(values
            .into_iter()
            .filter_map(|v| v.as_str().map(str::to_string))
            .collect())
    }

    async fn group_count(&self, field: &str) -> StoreResult<Vec<GroupCount>> {
        let cursor = self
            .collection
            .aggregate(group_count_pipeline(field), None)
            .await?;
        let rows: Vec<Document> = cursor.try_collect().await?;

        let mut buckets = Vec::with_capacity(rows.len());
        for row in rows {
            let row: GroupRow =
                from_document(row).map_err(|e| StoreError::Decode(e.to_string()))?;
            if let Some(key) = row.key {
                buckets.push(GroupCount {
                    key,
                    count: row.count.max(0) as u64,
                });
            }
        }

        Ok(buckets)
    }
}

fn group_count_pipeline(field: &str) -> Vec<Document> {
    vec![doc! {
        "$group": {
            "_id": format!("${}", field),
            "count": { "$sum": 1 },
        }
    }]
}

#[derive(Debug, Deserialize)]
struct GroupRow {
    #[serde(rename = "_id")]
    key: Option<String>,
    count: i64,
}
