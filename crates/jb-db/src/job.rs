//! Job posting documents

use chrono::{DateTime, Utc};
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// A job posting as stored in the `jobs` collection.
///
/// `category` and `type` are kept as text: the collection is written by an
/// external ingester and the set of type values, while small, is owned by
/// the store schema rather than this service.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub title: String,
    pub company: String,
    pub description: String,
    pub category: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub location: String,
    #[serde(with = "mongodb::bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub posted_at: DateTime<Utc>,
}

/// A job identifier in the store's id format.
///
/// Parsing happens before any store access, so a malformed identifier never
/// turns into a store round-trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JobId(ObjectId);

impl JobId {
    pub fn parse(s: &str) -> Result<Self, InvalidJobId> {
        ObjectId::parse_str(s)
            .map(Self)
            .map_err(|_| InvalidJobId(s.to_string()))
    }

    pub fn as_object_id(&self) -> ObjectId {
        self.0
    }
}

impl std::fmt::Display for JobId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.to_hex())
    }
}

#[derive(Debug, Clone, thiserror::Error)]
#[error("Invalid job id: {0}")]
pub struct InvalidJobId(pub String);

/// One bucket of a grouped count aggregation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupCount {
    pub key: String,
    pub count: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_job_id_roundtrip() {
        let oid = ObjectId::new();
        let id = JobId::parse(&oid.to_hex()).unwrap();
        assert_eq!(id.as_object_id(), oid);
        assert_eq!(id.to_string(), oid.to_hex());
    }

    #[test]
    fn test_job_id_rejects_malformed() {
        assert!(JobId::parse("not-an-id").is_err());
        assert!(JobId::parse("").is_err());
        // correct length, non-hex characters
        assert!(JobId::parse("zzzzzzzzzzzzzzzzzzzzzzzz").is_err());
    }

    #[test]
    fn test_job_document_field_names() {
        let job = Job {
            id: ObjectId::new(),
            title: "Backend Engineer".to_string(),
            company: "Acme".to_string(),
            description: "Build services".to_string(),
            category: "Engineering".to_string(),
            kind: "full-time".to_string(),
            location: "Remote".to_string(),
            posted_at: Utc::now(),
        };

        let doc = mongodb::bson::to_document(&job).unwrap();
        assert!(doc.contains_key("_id"));
        assert!(doc.contains_key("type"));
        assert!(doc.contains_key("postedAt"));
        assert!(!doc.contains_key("posted_at"));
    }
}
