//! Occupancy counter service.
//!
//! The displayed occupancy is the number of checked-in owners plus a
//! manual adjustment operators use for walk-ins that bypass scanning.
//! The adjustment is process-lifetime state held by this service object;
//! a multi-instance deployment would need to move it to a shared store.

use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

use crate::domain::foundation::DomainError;
use crate::ports::UserDirectory;

/// Hard ceiling on displayed occupancy. Fixed in code, not configuration,
/// so an accidental override can never block check-ins.
pub const MAX_VISITORS: i64 = 500;

/// Process-wide occupancy state: derived checked-in count plus a bounded
/// manual adjustment.
///
/// # Invariants
///
/// - The displayed total never exceeds `MAX_VISITORS - 1` and never drops
///   below zero; increments and decrements at the bounds are no-ops.
/// - Only this service writes the adjustment.
pub struct OccupancyCounter {
    directory: Arc<dyn UserDirectory>,
    adjustment: AtomicI64,
}

impl OccupancyCounter {
    pub fn new(directory: Arc<dyn UserDirectory>) -> Self {
        Self {
            directory,
            adjustment: AtomicI64::new(0),
        }
    }

    /// Current displayed occupancy.
    pub async fn current(&self) -> Result<i64, DomainError> {
        let checked_in = self.directory.count_checked_in().await? as i64;
        Ok(checked_in + self.adjustment.load(Ordering::SeqCst))
    }

    /// Bumps the adjustment up by one unless the total is at capacity.
    ///
    /// Returns the resulting total. Concurrent calls are resolved by a
    /// compare-and-swap loop on the adjustment; lost updates cannot occur.
    pub async fn increment(&self) -> Result<i64, DomainError> {
        let checked_in = self.directory.count_checked_in().await? as i64;
        loop {
            let adj = self.adjustment.load(Ordering::SeqCst);
            if checked_in + adj >= MAX_VISITORS - 1 {
                tracing::debug!(total = checked_in + adj, "occupancy capacity reached");
                return Ok(checked_in + adj);
            }
            if self
                .adjustment
                .compare_exchange(adj, adj + 1, Ordering::SeqCst, Ordering::SeqCst)
                .is_ok()
            {
                return Ok(checked_in + adj + 1);
            }
        }
    }

    /// Bumps the adjustment down by one unless the total is already zero.
    ///
    /// Returns the resulting total.
    pub async fn decrement(&self) -> Result<i64, DomainError> {
        let checked_in = self.directory.count_checked_in().await? as i64;
        loop {
            let adj = self.adjustment.load(Ordering::SeqCst);
            if checked_in + adj <= 0 {
                tracing::debug!(total = checked_in + adj, "occupancy minimum reached");
                return Ok(checked_in + adj);
            }
            if self
                .adjustment
                .compare_exchange(adj, adj - 1, Ordering::SeqCst, Ordering::SeqCst)
                .is_ok()
            {
                return Ok(checked_in + adj - 1);
            }
        }
    }

    /// Zeroes the adjustment and checks out every owner.
    ///
    /// Invoked when the venue closes. The bulk checkout is one storage
    /// operation; the check-in ledger is untouched, history is permanent.
    pub async fn reset_on_venue_close(&self) -> Result<u64, DomainError> {
        self.adjustment.store(0, Ordering::SeqCst);
        let checked_out = self.directory.check_out_all().await?;
        tracing::info!(checked_out, "venue closed, all owners checked out");
        Ok(checked_out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use proptest::prelude::*;
    use std::sync::atomic::AtomicU64;

    use crate::domain::foundation::OwnerId;
    use crate::ports::Owner;

    /// Directory stub with a fixed checked-in population.
    struct FixedDirectory {
        checked_in: AtomicU64,
    }

    impl FixedDirectory {
        fn with_checked_in(n: u64) -> Self {
            Self {
                checked_in: AtomicU64::new(n),
            }
        }
    }

    #[async_trait]
    impl UserDirectory for FixedDirectory {
        async fn get_owner(&self, _id: &OwnerId) -> Result<Option<Owner>, DomainError> {
            Ok(None)
        }

        async fn claim_check_in(&self, _id: &OwnerId) -> Result<bool, DomainError> {
            self.checked_in.fetch_add(1, Ordering::SeqCst);
            Ok(true)
        }

        async fn check_out_all(&self) -> Result<u64, DomainError> {
            Ok(self.checked_in.swap(0, Ordering::SeqCst))
        }

        async fn count_checked_in(&self) -> Result<u64, DomainError> {
            Ok(self.checked_in.load(Ordering::SeqCst))
        }
    }

    fn counter_with(checked_in: u64) -> OccupancyCounter {
        OccupancyCounter::new(Arc::new(FixedDirectory::with_checked_in(checked_in)))
    }

    #[tokio::test]
    async fn current_is_checked_in_plus_adjustment() {
        let counter = counter_with(3);
        assert_eq!(counter.current().await.unwrap(), 3);
        counter.increment().await.unwrap();
        assert_eq!(counter.current().await.unwrap(), 4);
    }

    #[tokio::test]
    async fn increment_stops_below_capacity() {
        let counter = counter_with(3);
        // 3 checked in; 496 increments reach 499, the 497th is a no-op.
        for _ in 0..496 {
            counter.increment().await.unwrap();
        }
        assert_eq!(counter.current().await.unwrap(), MAX_VISITORS - 1);
        let after = counter.increment().await.unwrap();
        assert_eq!(after, MAX_VISITORS - 1);
    }

    #[tokio::test]
    async fn decrement_stops_at_zero() {
        let counter = counter_with(0);
        assert_eq!(counter.decrement().await.unwrap(), 0);
        counter.increment().await.unwrap();
        assert_eq!(counter.decrement().await.unwrap(), 0);
        assert_eq!(counter.decrement().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn decrement_can_offset_checked_in_owners() {
        let counter = counter_with(2);
        assert_eq!(counter.decrement().await.unwrap(), 1);
        assert_eq!(counter.decrement().await.unwrap(), 0);
        // Displayed total never drops below zero.
        assert_eq!(counter.decrement().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn reset_clears_adjustment_and_checks_everyone_out() {
        let counter = counter_with(5);
        counter.increment().await.unwrap();
        counter.increment().await.unwrap();

        let checked_out = counter.reset_on_venue_close().await.unwrap();
        assert_eq!(checked_out, 5);
        assert_eq!(counter.current().await.unwrap(), 0);
    }

    proptest! {
        /// After any interleaving of increments and decrements the displayed
        /// total stays within [0, MAX_VISITORS - 1].
        #[test]
        fn total_stays_bounded(checked_in in 0u64..600, ops in prop::collection::vec(any::<bool>(), 0..1000)) {
            let rt = tokio::runtime::Builder::new_current_thread()
                .build()
                .unwrap();
            rt.block_on(async {
                let counter = counter_with(checked_in);
                for inc in ops {
                    if inc {
                        counter.increment().await.unwrap();
                    } else {
                        counter.decrement().await.unwrap();
                    }
                    let total = counter.current().await.unwrap();
                    // The population itself may exceed capacity; the
                    // adjustment never pushes the total further out of range.
                    prop_assert!(total >= 0);
                    prop_assert!(total <= (MAX_VISITORS - 1).max(checked_in as i64));
                }
                Ok(())
            })?;
        }
    }
}
