//! Pending payment intent store port.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, OrderRef, Timestamp};
use crate::domain::payment::PendingPaymentIntent;

/// Port for pending-intent storage.
#[async_trait]
pub trait PaymentIntentStore: Send + Sync {
    /// Stores an intent under its order reference.
    async fn put(&self, intent: &PendingPaymentIntent) -> Result<(), DomainError>;

    /// Looks up an intent without removing it.
    async fn find(&self, order_ref: &OrderRef)
        -> Result<Option<PendingPaymentIntent>, DomainError>;

    /// Removes and returns an intent.
    ///
    /// Removal is atomic: of any number of concurrent callers for the same
    /// order reference, exactly one receives the intent. Reconciliation uses
    /// this as its idempotency claim.
    async fn remove(&self, order_ref: &OrderRef)
        -> Result<Option<PendingPaymentIntent>, DomainError>;

    /// Deletes intents created before the cutoff; returns how many.
    async fn purge_older_than(&self, cutoff: Timestamp) -> Result<u64, DomainError>;
}
