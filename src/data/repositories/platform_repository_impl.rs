use async_trait::async_trait;
use tracing::debug;

use crate::{
    data::{
        datasources::platform_sdk_datasource::PlatformSdkDatasource,
        models::platform_sdk::{
            player_model::{PlayerModel, SignedAsidModel},
            product_model::ProductModel,
            purchase_model::{PurchaseConfigModel, PurchaseModel},
        },
    },
    domain::{
        entities::{
            player::{Player, SignedAsid},
            product::Product,
            purchase::{Purchase, PurchaseConfig, PurchaseToken},
            signed_request::SignedRequest,
        },
        repositories::{
            payments_repository::PaymentsRepository, player_repository::PlayerRepository,
        },
    },
    errors::PaymentsError,
};

/// Forwards every operation to the platform SDK and maps its wire payloads
/// onto domain entities. No value is altered, dropped, or synthesized on the
/// way through, and failures propagate exactly as the platform raised them.
pub struct PlatformRepositoryImpl<D: PlatformSdkDatasource> {
    platform_sdk_datasource: D,
}

impl<D: PlatformSdkDatasource> PlatformRepositoryImpl<D> {
    pub(crate) fn new(platform_sdk_datasource: D) -> Self {
        Self {
            platform_sdk_datasource,
        }
    }
}

#[async_trait]
impl<D: PlatformSdkDatasource> PaymentsRepository for PlatformRepositoryImpl<D> {
    fn is_enabled(&self) -> bool {
        self.platform_sdk_datasource.is_enabled()
    }

    async fn get_catalog(&self) -> Result<Vec<Product>, PaymentsError> {
        let models = self.platform_sdk_datasource.get_catalog().await?;
        Ok(models.into_iter().map(Product::from_model).collect())
    }

    async fn get_purchases(&self) -> Result<Vec<Purchase>, PaymentsError> {
        let models = self.platform_sdk_datasource.get_purchases().await?;
        Ok(models.into_iter().map(Purchase::from_model).collect())
    }

    async fn make_purchase(&self, config: PurchaseConfig) -> Result<Purchase, PaymentsError> {
        debug!(product_id = %config.product_id, "forwarding purchase request to platform SDK");
        let model = self
            .platform_sdk_datasource
            .make_purchase(PurchaseConfigModel::from_config(config))
            .await?;
        Ok(Purchase::from_model(model))
    }

    async fn consume_purchase(&self, token: PurchaseToken) -> Result<(), PaymentsError> {
        debug!("forwarding consume request to platform SDK");
        self.platform_sdk_datasource
            .consume_purchase(&token.0)
            .await
    }
}

#[async_trait]
impl<D: PlatformSdkDatasource> PlayerRepository for PlatformRepositoryImpl<D> {
    fn get_player(&self) -> Result<Player, PaymentsError> {
        let model = self.platform_sdk_datasource.get_player()?;
        Ok(Player::from_model(model))
    }

    async fn get_signed_asid(&self) -> Result<SignedAsid, PaymentsError> {
        let model = self.platform_sdk_datasource.get_signed_asid().await?;
        Ok(SignedAsid::from_model(model))
    }
}

impl Product {
    fn from_model(m: ProductModel) -> Self {
        Product {
            title: m.title,
            product_id: m.product_id,
            description: m.description,
            image_uri: m.image_uri,
            price: m.price,
            price_currency_code: m.price_currency_code,
        }
    }
}

impl Purchase {
    fn from_model(m: PurchaseModel) -> Self {
        Purchase {
            payment_id: m.payment_id,
            product_id: m.product_id,
            purchase_time: m.purchase_time,
            purchase_token: PurchaseToken(m.purchase_token),
            developer_payload: m.developer_payload,
            signed_request: SignedRequest(m.signed_request),
        }
    }
}

impl Player {
    fn from_model(m: PlayerModel) -> Self {
        Player {
            id: m.id,
            name: m.name,
            photo: m.photo,
        }
    }
}

impl SignedAsid {
    fn from_model(m: SignedAsidModel) -> Self {
        SignedAsid {
            asid: m.asid,
            signature: SignedRequest(m.signature),
        }
    }
}

impl PurchaseConfigModel {
    fn from_config(config: PurchaseConfig) -> Self {
        PurchaseConfigModel {
            product_id: config.product_id,
            developer_payload: config.developer_payload,
        }
    }
}
