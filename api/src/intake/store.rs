//! In-memory inquiry store.
//!
//! Append-only and process-scoped. Cloning the store is cheap and every clone
//! shares the same record list, so it can sit in the axum state and be handed
//! to any number of concurrent handlers.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use tracing::debug;

use super::types::{BusinessInquiry, InquiryRecord};

/// Shared, ordered list of accepted inquiries.
#[derive(Clone)]
pub struct InquiryStore {
    inner: Arc<StoreInner>,
}

struct StoreInner {
    opened_at: DateTime<Utc>,
    records: RwLock<Vec<InquiryRecord>>,
}

impl Default for InquiryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InquiryStore {
    /// Create an empty store. Records accepted later are never stamped
    /// earlier than this instant.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(StoreInner {
                opened_at: Utc::now(),
                records: RwLock::new(Vec::new()),
            }),
        }
    }

    pub fn opened_at(&self) -> DateTime<Utc> {
        self.inner.opened_at
    }

    /// Append an already-built record.
    pub async fn append(&self, record: InquiryRecord) {
        let mut records = self.inner.records.write().await;
        records.push(record);
        debug!(stored_inquiries = records.len(), "inquiry_store_appended");
    }

    /// Stamp and append an inquiry in one step.
    ///
    /// The reference id and timestamp are generated while the write guard is
    /// held, so insertion order and `receivedAt` order always agree.
    pub async fn accept(&self, inquiry: BusinessInquiry) -> InquiryRecord {
        let mut records = self.inner.records.write().await;
        let record = InquiryRecord::new(inquiry);
        records.push(record.clone());
        debug!(
            reference_id = %record.reference_id(),
            stored_inquiries = records.len(),
            "inquiry_store_appended"
        );
        record
    }

    /// Snapshot of all records in insertion order.
    pub async fn list(&self) -> Vec<InquiryRecord> {
        self.inner.records.read().await.clone()
    }

    pub async fn len(&self) -> usize {
        self.inner.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.inner.records.read().await.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    fn inquiry(owner: &str) -> BusinessInquiry {
        BusinessInquiry {
            owner_name: owner.to_string(),
            email: "owner@example.com".to_string(),
            phone: "555-0100".to_string(),
            business_name: "Sparkle Wash".to_string(),
            business_type: "Car wash".to_string(),
            locations: None,
            website: None,
            message: "Hello".to_string(),
        }
    }

    #[tokio::test]
    async fn test_new_store_is_empty() {
        let store = InquiryStore::new();
        assert!(store.is_empty().await);
        assert_eq!(store.len().await, 0);
        assert!(store.list().await.is_empty());
    }

    #[tokio::test]
    async fn test_append_preserves_order() {
        let store = InquiryStore::new();
        let first = InquiryRecord::new(inquiry("First"));
        let second = InquiryRecord::new(inquiry("Second"));

        store.append(first.clone()).await;
        store.append(second.clone()).await;

        assert_eq!(store.list().await, vec![first, second]);
    }

    #[tokio::test]
    async fn test_clones_share_records() {
        let store = InquiryStore::new();
        let handle = store.clone();

        handle.accept(inquiry("Shared")).await;

        assert_eq!(store.len().await, 1);
        assert_eq!(store.list().await[0].inquiry().owner_name, "Shared");
    }

    #[tokio::test]
    async fn test_concurrent_accepts_keep_every_record() {
        let store = InquiryStore::new();

        let tasks: Vec<_> = (0..64)
            .map(|i| {
                let store = store.clone();
                tokio::spawn(async move { store.accept(inquiry(&format!("Owner {i}"))).await })
            })
            .collect();

        for task in tasks {
            task.await.unwrap();
        }

        let records = store.list().await;
        assert_eq!(records.len(), 64);

        let ids: HashSet<_> = records.iter().map(|r| r.reference_id().to_string()).collect();
        assert_eq!(ids.len(), 64);

        assert!(records
            .windows(2)
            .all(|pair| pair[0].received_at() <= pair[1].received_at()));
        assert!(records.iter().all(|r| r.received_at() >= store.opened_at()));
    }
}
