use chrono::{DateTime, Utc};

use crate::domain::entities::signed_request::SignedRequest;

/// Token identifying a completed purchase for consumption.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PurchaseToken(pub String);

/// Caller-supplied parameters for a purchase request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PurchaseConfig {
    /// Identifier of the product to purchase.
    pub product_id: String,
    /// Optional developer-attached payload, carried through the platform
    /// unchanged and echoed back on the resulting purchase record.
    pub developer_payload: Option<String>,
}

/// Record of a completed transaction, as reported by the platform.
///
/// A purchase stays in the player's pending set until its token is consumed.
/// Callers are responsible for validating `signed_request` against their own
/// backend before granting in-game effects; this crate performs no
/// validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Purchase {
    /// Platform identifier for the payment transaction.
    pub payment_id: String,
    /// Identifier of the purchased product.
    pub product_id: String,
    /// Time the platform recorded the purchase.
    pub purchase_time: DateTime<Utc>,
    /// Token to pass to consumption once the purchase has been provisioned.
    pub purchase_token: PurchaseToken,
    /// Developer payload attached at purchase time, if any.
    pub developer_payload: Option<String>,
    /// Signed purchase data for server-side verification (see
    /// [`SignedRequest`]).
    pub signed_request: SignedRequest,
}
