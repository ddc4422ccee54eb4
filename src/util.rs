use crate::{
    data::repositories::platform_repository_impl::PlatformRepositoryImpl,
    domain::{
        entities::{
            player::{Player, SignedAsid},
            product::Product,
            purchase::{Purchase, PurchaseConfig, PurchaseToken},
        },
        repositories::{
            payments_repository::PaymentsRepository, player_repository::PlayerRepository,
        },
    },
    errors::PaymentsError,
    sandbox::{SandboxPlatform, SandboxPlatformConfig},
};

/// Purchase-flow facade. Each call delegates to the wrapped repository; see
/// [`PaymentsRepository`] for the operation contracts.
pub struct PaymentsUtil<R: PaymentsRepository> {
    payments_repository: R,
}

impl<R: PaymentsRepository> PaymentsUtil<R> {
    /// Wrap a caller-supplied repository: the bridge to the hosted platform
    /// object in production, or a test double.
    pub fn new(payments_repository: R) -> Self {
        Self {
            payments_repository,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.payments_repository.is_enabled()
    }

    pub async fn get_catalog(&self) -> Result<Vec<Product>, PaymentsError> {
        self.payments_repository.get_catalog().await
    }

    pub async fn get_purchases(&self) -> Result<Vec<Purchase>, PaymentsError> {
        self.payments_repository.get_purchases().await
    }

    pub async fn make_purchase(&self, config: PurchaseConfig) -> Result<Purchase, PaymentsError> {
        self.payments_repository.make_purchase(config).await
    }

    pub async fn consume_purchase(&self, token: PurchaseToken) -> Result<(), PaymentsError> {
        self.payments_repository.consume_purchase(token).await
    }
}

impl PaymentsUtil<PlatformRepositoryImpl<SandboxPlatform>> {
    /// Facade backed by an in-memory sandbox platform.
    pub fn sandbox(config: SandboxPlatformConfig) -> Self {
        Self {
            payments_repository: PlatformRepositoryImpl::new(SandboxPlatform::new(config)),
        }
    }
}

/// Player-identity facade.
pub struct PlayerUtil<R: PlayerRepository> {
    player_repository: R,
}

impl<R: PlayerRepository> PlayerUtil<R> {
    pub fn new(player_repository: R) -> Self {
        Self { player_repository }
    }

    pub fn get_player(&self) -> Result<Player, PaymentsError> {
        self.player_repository.get_player()
    }

    pub async fn get_signed_asid(&self) -> Result<SignedAsid, PaymentsError> {
        self.player_repository.get_signed_asid().await
    }
}

impl PlayerUtil<PlatformRepositoryImpl<SandboxPlatform>> {
    /// Facade backed by an in-memory sandbox platform.
    pub fn sandbox(config: SandboxPlatformConfig) -> Self {
        Self {
            player_repository: PlatformRepositoryImpl::new(SandboxPlatform::new(config)),
        }
    }
}
