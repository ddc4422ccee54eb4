use chrono::serde::ts_seconds;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Data structure returned by the platform SDK for a completed purchase.
///
/// Purchases remain in the player's pending set until their token is
/// consumed. The `signedRequest` field carries the signed purchase data the
/// game's backend verifies before any in-game effect is granted.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PurchaseModel {
    /// The identifier for the payment transaction.
    #[serde(rename = "paymentID")]
    pub(crate) payment_id: String,
    /// The product's game-specified identifier.
    #[serde(rename = "productID")]
    pub(crate) product_id: String,
    /// The time the purchase occurred, in seconds since the epoch (Jan 1,
    /// 1970).
    #[serde(with = "ts_seconds")]
    pub(crate) purchase_time: DateTime<Utc>,
    /// The purchase token generated to identify this purchase, used for
    /// consumption.
    pub(crate) purchase_token: String,
    /// A developer-specified string attached at purchase time. May not be
    /// present.
    pub(crate) developer_payload: Option<String>,
    /// Signed purchase data for server-side verification.
    pub(crate) signed_request: String,
}

/// Purchase parameters sent to the platform SDK.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PurchaseConfigModel {
    /// The identifier of the product to purchase.
    #[serde(rename = "productID")]
    pub(crate) product_id: String,
    /// An optional developer-specified payload, attached to the purchase
    /// record the platform returns.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) developer_payload: Option<String>,
}
