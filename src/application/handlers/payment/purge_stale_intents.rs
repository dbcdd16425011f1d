//! PurgeStaleIntentsHandler - sweep for abandoned payment flows.
//!
//! A shopper who never returns from their bank leaves an intent behind
//! forever; an external scheduler invokes this sweep to drop them.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, Timestamp};
use crate::ports::PaymentIntentStore;

/// Command to purge intents created before the cutoff.
#[derive(Debug, Clone)]
pub struct PurgeStaleIntentsCommand {
    pub older_than: Timestamp,
}

pub struct PurgeStaleIntentsHandler {
    intents: Arc<dyn PaymentIntentStore>,
}

impl PurgeStaleIntentsHandler {
    pub fn new(intents: Arc<dyn PaymentIntentStore>) -> Self {
        Self { intents }
    }

    pub async fn handle(&self, cmd: PurgeStaleIntentsCommand) -> Result<u64, DomainError> {
        let purged = self.intents.purge_older_than(cmd.older_than).await?;
        if purged > 0 {
            tracing::info!(purged, "stale payment intents purged");
        }
        Ok(purged)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryIntentStore;
    use crate::domain::foundation::{OrderRef, OwnerId};
    use crate::domain::pass::PassKind;
    use crate::domain::payment::PendingPaymentIntent;

    #[tokio::test]
    async fn purges_only_intents_past_the_cutoff() {
        let intents = Arc::new(InMemoryIntentStore::new());
        let mut stale = PendingPaymentIntent::new(
            OrderRef::new(),
            OwnerId::new(),
            PassKind::Annual,
            "p",
            "blob",
        );
        stale.created_at = Timestamp::now().add_days(-3);
        intents.put(&stale).await.unwrap();
        intents
            .put(&PendingPaymentIntent::new(
                OrderRef::new(),
                OwnerId::new(),
                PassKind::SingleUse,
                "p",
                "blob",
            ))
            .await
            .unwrap();

        let handler = PurgeStaleIntentsHandler::new(intents.clone());
        let purged = handler
            .handle(PurgeStaleIntentsCommand {
                older_than: Timestamp::now().add_days(-1),
            })
            .await
            .unwrap();

        assert_eq!(purged, 1);
        assert_eq!(intents.len(), 1);
    }
}
