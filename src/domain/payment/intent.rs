//! Pending payment intents.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{OrderRef, OwnerId, Timestamp};
use crate::domain::pass::PassKind;

/// A payment awaiting gateway confirmation.
///
/// Created when the gateway demands further shopper action (the iDEAL bank
/// redirect), deleted when the flow resolves. Carries everything needed to
/// materialize the purchased pass once the gateway authorises.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingPaymentIntent {
    /// Unique key for the flow; also embedded in the gateway return URL.
    pub order_ref: OrderRef,

    /// Buyer; becomes the pass owner on authorisation.
    pub owner_id: OwnerId,

    /// Kind of pass being bought.
    pub pass_kind: PassKind,

    /// Photo reference to stamp onto the created pass.
    pub photo_ref: String,

    /// Opaque gateway state, echoed back when submitting redirect details.
    pub gateway_payload: String,

    /// When the intent was created; used by the stale-intent sweep.
    pub created_at: Timestamp,
}

impl PendingPaymentIntent {
    pub fn new(
        order_ref: OrderRef,
        owner_id: OwnerId,
        pass_kind: PassKind,
        photo_ref: impl Into<String>,
        gateway_payload: impl Into<String>,
    ) -> Self {
        Self {
            order_ref,
            owner_id,
            pass_kind,
            photo_ref: photo_ref.into(),
            gateway_payload: gateway_payload.into(),
            created_at: Timestamp::now(),
        }
    }
}
