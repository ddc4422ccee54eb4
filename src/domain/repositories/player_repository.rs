use async_trait::async_trait;

use crate::{
    domain::entities::player::{Player, SignedAsid},
    errors::PaymentsError,
};

/// Player-identity operations of the platform SDK.
#[async_trait]
pub trait PlayerRepository: Send + Sync {
    /// Snapshot of the current player's identity record.
    ///
    /// Fails with the invalid-operation classification when the platform
    /// session has not finished initializing.
    fn get_player(&self) -> Result<Player, PaymentsError>;

    /// The application-scoped player identifier plus a signature the game's
    /// backend can verify.
    async fn get_signed_asid(&self) -> Result<SignedAsid, PaymentsError>;
}
