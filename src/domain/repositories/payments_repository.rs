use async_trait::async_trait;

use crate::{
    domain::entities::{
        product::Product,
        purchase::{Purchase, PurchaseConfig, PurchaseToken},
    },
    errors::PaymentsError,
};

/// Purchase-flow operations of the platform SDK.
///
/// This is the substitution seam for the externally supplied platform
/// object: call sites depend only on this trait, so a test double (or an
/// alternative platform bridge) can be swapped in without touching them.
/// Implementations forward to the platform and return its results verbatim;
/// all purchase state (catalog availability, pending purchases, consumption
/// status) is owned and mutated by the platform, never locally.
#[async_trait]
pub trait PaymentsRepository: Send + Sync {
    /// Whether purchasing is available in the current session. Depends on
    /// the platform, device, and payment-service state; never fails.
    fn is_enabled(&self) -> bool;

    /// The set of products purchasable by the current player, localized for
    /// their region.
    ///
    /// Resolves with an empty list (not a failure) when purchasing is
    /// unsupported in the player's region. Fails when the platform is
    /// unsupported, the client cannot perform this operation, the payment
    /// subsystem is uninitialized, or the network call fails.
    async fn get_catalog(&self) -> Result<Vec<Product>, PaymentsError>;

    /// The player's purchases that have not yet been consumed.
    ///
    /// Callers must validate each purchase's signed request against their
    /// own backend before granting in-game effects. Same failure conditions
    /// as [`get_catalog`](PaymentsRepository::get_catalog).
    async fn get_purchases(&self) -> Result<Vec<Purchase>, PaymentsError>;

    /// Begin the native purchase interaction for the product named in
    /// `config`, resolving with the purchase record on success.
    ///
    /// In addition to the [`get_catalog`](PaymentsRepository::get_catalog)
    /// failure conditions, fails on invalid parameters, invalid operation
    /// state, or when the player cancels or rejects the interaction.
    async fn make_purchase(&self, config: PurchaseConfig) -> Result<Purchase, PaymentsError>;

    /// Mark `token`'s purchase as consumed, removing it from the player's
    /// pending set and making the product re-purchasable.
    ///
    /// In-game effects for the purchase must be granted strictly after this
    /// call resolves successfully, never before. Whether a duplicate
    /// consumption of the same token is idempotent is platform-defined; do
    /// not rely on it.
    async fn consume_purchase(&self, token: PurchaseToken) -> Result<(), PaymentsError>;
}
