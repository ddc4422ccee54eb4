use async_trait::async_trait;

use crate::{
    data::models::platform_sdk::{
        player_model::{PlayerModel, SignedAsidModel},
        product_model::ProductModel,
        purchase_model::{PurchaseConfigModel, PurchaseModel},
    },
    errors::PaymentsError,
};

/// Method surface of the externally hosted platform SDK object.
///
/// The hosted object is supplied by the platform runtime, not by this crate;
/// every method here corresponds one-to-one to an operation on that object
/// (`isEnabled`, `getCatalogAsync`, `getPurchasesAsync`,
/// `makePurchaseAsync`, `consumePurchaseAsync`, and the player-identity
/// accessors). Implementations return the platform's results and failures
/// unchanged.
#[async_trait]
pub(crate) trait PlatformSdkDatasource: Send + Sync {
    /// isEnabled:
    ///   Whether payments are available in the current session. Synchronous
    ///   and infallible.
    fn is_enabled(&self) -> bool;

    /// getCatalogAsync:
    ///   The purchasable products for the player's region. Resolves with an
    ///   empty list when purchases are unsupported in-region.
    async fn get_catalog(&self) -> Result<Vec<ProductModel>, PaymentsError>;

    /// getPurchasesAsync:
    ///   The player's unconsumed purchases.
    async fn get_purchases(&self) -> Result<Vec<PurchaseModel>, PaymentsError>;

    /// makePurchaseAsync:
    ///   Begin the native purchase interaction for the configured product.
    async fn make_purchase(
        &self,
        config: PurchaseConfigModel,
    ) -> Result<PurchaseModel, PaymentsError>;

    /// consumePurchaseAsync:
    ///   Consume the purchase identified by `purchase_token`, removing it
    ///   from the pending set and making its product re-purchasable.
    async fn consume_purchase(&self, purchase_token: &str) -> Result<(), PaymentsError>;

    /// player.getID / getName / getPhoto:
    ///   Snapshot of the current player's identity. Synchronous once the
    ///   platform session is initialized.
    fn get_player(&self) -> Result<PlayerModel, PaymentsError>;

    /// player.getSignedASIDAsync:
    ///   The application-scoped identifier plus signature.
    async fn get_signed_asid(&self) -> Result<SignedAsidModel, PaymentsError>;
}
