//! In-memory stand-in for the hosted platform SDK.
//!
//! The real platform object only exists inside the platform runtime. For
//! local development and tests, [`SandboxPlatform`] plays its role: it
//! serves a seeded catalog, tracks pending purchases, and enforces the same
//! observable contract (empty catalog for unsupported regions,
//! `PAYMENTS_NOT_INITIALIZED` while disabled, `INVALID_PARAM` for unknown
//! products and tokens). Signed requests produced here carry a fixed
//! placeholder signature and cannot pass backend verification.

use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use chrono::Utc;

use crate::{
    data::{
        datasources::platform_sdk_datasource::PlatformSdkDatasource,
        models::platform_sdk::{
            player_model::{PlayerModel, SignedAsidModel},
            product_model::ProductModel,
            purchase_model::{PurchaseConfigModel, PurchaseModel},
        },
    },
    domain::entities::{player::Player, product::Product},
    errors::{ErrorCode, PaymentsError},
};

/// Seed data for a sandbox session.
#[derive(Debug, Clone)]
pub struct SandboxPlatformConfig {
    /// Whether the payment subsystem is initialized. When `false`,
    /// `is_enabled` reports `false` and the asynchronous payment operations
    /// fail with `PAYMENTS_NOT_INITIALIZED`.
    pub enabled: bool,
    /// The identity reported for the current player.
    pub player: Player,
    /// The application-scoped identifier reported for the current player.
    pub asid: String,
    /// The catalog served to this session. An empty catalog models a region
    /// where purchasing is unsupported: `get_catalog` still resolves, with
    /// an empty list.
    pub catalog: Vec<Product>,
}

struct SandboxState {
    pending: Vec<PurchaseModel>,
    next_payment_number: u64,
}

/// Deterministic in-memory implementation of the platform SDK surface.
pub struct SandboxPlatform {
    enabled: bool,
    player: PlayerModel,
    asid: String,
    catalog: Vec<ProductModel>,
    state: Mutex<SandboxState>,
}

impl SandboxPlatform {
    pub fn new(config: SandboxPlatformConfig) -> Self {
        Self {
            enabled: config.enabled,
            player: PlayerModel {
                id: config.player.id,
                name: config.player.name,
                photo: config.player.photo,
            },
            asid: config.asid,
            catalog: config
                .catalog
                .into_iter()
                .map(|p| ProductModel {
                    title: p.title,
                    product_id: p.product_id,
                    description: p.description,
                    image_uri: p.image_uri,
                    price: p.price,
                    price_currency_code: p.price_currency_code,
                })
                .collect(),
            state: Mutex::new(SandboxState {
                pending: Vec::new(),
                next_payment_number: 0,
            }),
        }
    }

    fn state(&self) -> MutexGuard<'_, SandboxState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn require_payments_ready(&self) -> Result<(), PaymentsError> {
        if self.enabled {
            Ok(())
        } else {
            Err(PaymentsError::new(
                ErrorCode::PaymentsNotInitialized,
                "Payments have not been initialized for this session.",
            ))
        }
    }

    /// Two-part token in the platform's `signature.payload` layout. The
    /// signature part is a fixed placeholder, not an HMAC.
    fn placeholder_signed_request(&self, payload: serde_json::Value) -> String {
        let signature = URL_SAFE_NO_PAD.encode(b"sandbox-signature");
        let payload = URL_SAFE_NO_PAD.encode(payload.to_string());
        format!("{signature}.{payload}")
    }
}

#[async_trait]
impl PlatformSdkDatasource for SandboxPlatform {
    fn is_enabled(&self) -> bool {
        self.enabled
    }

    async fn get_catalog(&self) -> Result<Vec<ProductModel>, PaymentsError> {
        self.require_payments_ready()?;
        Ok(self.catalog.clone())
    }

    async fn get_purchases(&self) -> Result<Vec<PurchaseModel>, PaymentsError> {
        self.require_payments_ready()?;
        Ok(self.state().pending.clone())
    }

    async fn make_purchase(
        &self,
        config: PurchaseConfigModel,
    ) -> Result<PurchaseModel, PaymentsError> {
        self.require_payments_ready()?;
        if !self
            .catalog
            .iter()
            .any(|p| p.product_id == config.product_id)
        {
            return Err(PaymentsError::new(
                ErrorCode::InvalidParam,
                "No product with the given productID exists in the catalog.",
            ));
        }
        let mut state = self.state();
        state.next_payment_number += 1;
        let n = state.next_payment_number;
        let purchase = PurchaseModel {
            payment_id: format!("sandbox-payment-{n}"),
            signed_request: self.placeholder_signed_request(serde_json::json!({
                "algorithm": "HMAC-SHA256",
                "playerID": self.player.id,
                "productID": config.product_id,
                "issuedAt": Utc::now().timestamp(),
            })),
            product_id: config.product_id,
            purchase_time: Utc::now(),
            purchase_token: format!("sandbox-token-{n}"),
            developer_payload: config.developer_payload,
        };
        state.pending.push(purchase.clone());
        Ok(purchase)
    }

    async fn consume_purchase(&self, purchase_token: &str) -> Result<(), PaymentsError> {
        self.require_payments_ready()?;
        let mut state = self.state();
        let index = state
            .pending
            .iter()
            .position(|p| p.purchase_token == purchase_token)
            .ok_or_else(|| {
                PaymentsError::new(
                    ErrorCode::InvalidParam,
                    "No pending purchase matches the given purchase token.",
                )
            })?;
        state.pending.remove(index);
        Ok(())
    }

    fn get_player(&self) -> Result<PlayerModel, PaymentsError> {
        Ok(self.player.clone())
    }

    async fn get_signed_asid(&self) -> Result<SignedAsidModel, PaymentsError> {
        Ok(SignedAsidModel {
            asid: self.asid.clone(),
            signature: self.placeholder_signed_request(serde_json::json!({
                "algorithm": "HMAC-SHA256",
                "asid": self.asid,
                "issuedAt": Utc::now().timestamp(),
            })),
        })
    }
}
