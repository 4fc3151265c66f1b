//! Listing filters
//!
//! `JobFilter` is the typed form of the listing query parameters. All
//! present predicates combine with AND; `search` expands into an OR over
//! the three text fields. Blank values count as absent, matching how the
//! HTTP layer hands them over.

use mongodb::bson::{doc, Document};

/// Filter predicates for listing job postings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JobFilter {
    /// Case-insensitive substring match on `company`.
    pub company: Option<String>,
    /// Exact match on `category`.
    pub category: Option<String>,
    /// Exact match on `type`.
    pub kind: Option<String>,
    /// Case-insensitive substring match on `location`.
    pub location: Option<String>,
    /// Case-insensitive substring match over `title`, `description`, and
    /// `company`, OR-combined.
    pub search: Option<String>,
}

impl JobFilter {
    pub fn is_empty(&self) -> bool {
        [
            &self.company,
            &self.category,
            &self.kind,
            &self.location,
            &self.search,
        ]
        .iter()
        .all(|v| present(v).is_none())
    }

    /// Translate into a MongoDB filter document.
    pub fn to_document(&self) -> Document {
        let mut filter = Document::new();

        if let Some(company) = present(&self.company) {
            filter.insert("company", contains(company));
        }
        if let Some(category) = present(&self.category) {
            filter.insert("category", category);
        }
        if let Some(kind) = present(&self.kind) {
            filter.insert("type", kind);
        }
        if let Some(location) = present(&self.location) {
            filter.insert("location", contains(location));
        }
        if let Some(search) = present(&self.search) {
            let clauses = vec![
                doc! { "title": contains(search) },
                doc! { "description": contains(search) },
                doc! { "company": contains(search) },
            ];
            filter.insert("$or", clauses);
        }

        filter
    }
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

/// Case-insensitive substring predicate. The needle is escaped so filter
/// values always match literally, never as a pattern.
fn contains(needle: &str) -> Document {
    doc! { "$regex": regex::escape(needle), "$options": "i" }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_filter() {
        let filter = JobFilter::default();
        assert!(filter.is_empty());
        assert_eq!(filter.to_document(), Document::new());
    }

    #[test]
    fn test_blank_values_are_absent() {
        let filter = JobFilter {
            company: Some("".to_string()),
            category: Some("   ".to_string()),
            ..Default::default()
        };
        assert!(filter.is_empty());
        assert_eq!(filter.to_document(), Document::new());
    }

    #[test]
    fn test_substring_fields_are_case_insensitive() {
        let filter = JobFilter {
            company: Some("acme".to_string()),
            location: Some("berlin".to_string()),
            ..Default::default()
        };

        let doc = filter.to_document();
        assert_eq!(
            doc.get_document("company").unwrap(),
            &doc! { "$regex": "acme", "$options": "i" }
        );
        assert_eq!(
            doc.get_document("location").unwrap(),
            &doc! { "$regex": "berlin", "$options": "i" }
        );
    }

    #[test]
    fn test_exact_fields() {
        let filter = JobFilter {
            category: Some("Engineering".to_string()),
            kind: Some("full-time".to_string()),
            ..Default::default()
        };

        let doc = filter.to_document();
        assert_eq!(doc.get_str("category").unwrap(), "Engineering");
        assert_eq!(doc.get_str("type").unwrap(), "full-time");
    }

    #[test]
    fn test_search_expands_to_or() {
        let filter = JobFilter {
            search: Some("rust".to_string()),
            ..Default::default()
        };

        let doc = filter.to_document();
        let clauses = doc.get_array("$or").unwrap();
        assert_eq!(clauses.len(), 3);

        let fields: Vec<&str> = clauses
            .iter()
            .map(|c| c.as_document().unwrap().keys().next().unwrap().as_str())
            .collect();
        assert_eq!(fields, vec!["title", "description", "company"]);
    }

    #[test]
    fn test_search_combines_with_field_filters() {
        let filter = JobFilter {
            kind: Some("contract".to_string()),
            search: Some("rust".to_string()),
            ..Default::default()
        };

        let doc = filter.to_document();
        assert_eq!(doc.get_str("type").unwrap(), "contract");
        assert!(doc.contains_key("$or"));
    }

    #[test]
    fn test_pattern_metacharacters_match_literally() {
        let filter = JobFilter {
            company: Some("C++ (Core)".to_string()),
            ..Default::default()
        };

        let doc = filter.to_document();
        let pattern = doc
            .get_document("company")
            .unwrap()
            .get_str("$regex")
            .unwrap();
        assert_eq!(pattern, regex::escape("C++ (Core)"));
        assert!(!pattern.contains("(Core)"));
    }

    #[test]
    fn test_values_are_trimmed() {
        let filter = JobFilter {
            category: Some("  Design ".to_string()),
            ..Default::default()
        };
        assert_eq!(filter.to_document().get_str("category").unwrap(), "Design");
    }
}
