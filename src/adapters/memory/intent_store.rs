//! In-process pending payment intent store.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

use crate::domain::foundation::{DomainError, OrderRef, Timestamp};
use crate::domain::payment::PendingPaymentIntent;
use crate::ports::PaymentIntentStore;

/// Intent storage backed by a process-local map.
///
/// `remove` takes the map lock for the whole lookup-and-delete, so exactly
/// one of any number of concurrent callers receives the intent.
///
/// # Panics
///
/// Methods panic if the internal lock is poisoned.
#[derive(Default)]
pub struct InMemoryIntentStore {
    intents: Mutex<HashMap<OrderRef, PendingPaymentIntent>>,
}

impl InMemoryIntentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of pending intents (for test assertions).
    pub fn len(&self) -> usize {
        self.intents
            .lock()
            .expect("InMemoryIntentStore: lock poisoned")
            .len()
    }

    /// Whether the store is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl PaymentIntentStore for InMemoryIntentStore {
    async fn put(&self, intent: &PendingPaymentIntent) -> Result<(), DomainError> {
        self.intents
            .lock()
            .expect("InMemoryIntentStore: lock poisoned")
            .insert(intent.order_ref, intent.clone());
        Ok(())
    }

    async fn find(
        &self,
        order_ref: &OrderRef,
    ) -> Result<Option<PendingPaymentIntent>, DomainError> {
        Ok(self
            .intents
            .lock()
            .expect("InMemoryIntentStore: lock poisoned")
            .get(order_ref)
            .cloned())
    }

    async fn remove(
        &self,
        order_ref: &OrderRef,
    ) -> Result<Option<PendingPaymentIntent>, DomainError> {
        Ok(self
            .intents
            .lock()
            .expect("InMemoryIntentStore: lock poisoned")
            .remove(order_ref))
    }

    async fn purge_older_than(&self, cutoff: Timestamp) -> Result<u64, DomainError> {
        let mut intents = self
            .intents
            .lock()
            .expect("InMemoryIntentStore: lock poisoned");
        let before = intents.len();
        intents.retain(|_, intent| !intent.created_at.is_before(&cutoff));
        Ok((before - intents.len()) as u64)
    }
}
