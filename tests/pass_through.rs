//! Pass-through fidelity: everything the facade returns is exactly what the
//! underlying platform reported, and every failure classification survives
//! the trip unchanged.

use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc, Mutex,
};
use std::time::Duration;

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use tokio::sync::Notify;

use instant_payments::{
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
    errors::{ErrorCode, PaymentsError},
    util::{PaymentsUtil, PlayerUtil},
};

#[derive(Default)]
struct StubInner {
    enabled: AtomicBool,
    catalog: Mutex<Option<Result<Vec<Product>, PaymentsError>>>,
    purchases: Mutex<Option<Result<Vec<Purchase>, PaymentsError>>>,
    purchase_result: Mutex<Option<Result<Purchase, PaymentsError>>>,
    consume_result: Mutex<Option<Result<(), PaymentsError>>>,
    consume_gate: Mutex<Option<Arc<Notify>>>,
    player: Mutex<Option<Result<Player, PaymentsError>>>,
    signed_asid: Mutex<Option<Result<SignedAsid, PaymentsError>>>,
    seen_configs: Mutex<Vec<PurchaseConfig>>,
    seen_tokens: Mutex<Vec<PurchaseToken>>,
}

/// Programmable platform double. Each async result is configured once and
/// taken by the corresponding call.
#[derive(Clone, Default)]
struct StubPlatform {
    inner: Arc<StubInner>,
}

impl StubPlatform {
    fn set_enabled(&self, value: bool) {
        self.inner.enabled.store(value, Ordering::SeqCst);
    }

    fn set_catalog(&self, result: Result<Vec<Product>, PaymentsError>) {
        *self.inner.catalog.lock().unwrap() = Some(result);
    }

    fn set_purchases(&self, result: Result<Vec<Purchase>, PaymentsError>) {
        *self.inner.purchases.lock().unwrap() = Some(result);
    }

    fn set_purchase_result(&self, result: Result<Purchase, PaymentsError>) {
        *self.inner.purchase_result.lock().unwrap() = Some(result);
    }

    fn set_consume_result(&self, result: Result<(), PaymentsError>) {
        *self.inner.consume_result.lock().unwrap() = Some(result);
    }

    fn set_consume_gate(&self, gate: Arc<Notify>) {
        *self.inner.consume_gate.lock().unwrap() = Some(gate);
    }

    fn set_player(&self, result: Result<Player, PaymentsError>) {
        *self.inner.player.lock().unwrap() = Some(result);
    }

    fn set_signed_asid(&self, result: Result<SignedAsid, PaymentsError>) {
        *self.inner.signed_asid.lock().unwrap() = Some(result);
    }

    fn seen_configs(&self) -> Vec<PurchaseConfig> {
        self.inner.seen_configs.lock().unwrap().clone()
    }

    fn seen_tokens(&self) -> Vec<PurchaseToken> {
        self.inner.seen_tokens.lock().unwrap().clone()
    }
}

#[async_trait]
impl PaymentsRepository for StubPlatform {
    fn is_enabled(&self) -> bool {
        self.inner.enabled.load(Ordering::SeqCst)
    }

    async fn get_catalog(&self) -> Result<Vec<Product>, PaymentsError> {
        self.inner
            .catalog
            .lock()
            .unwrap()
            .take()
            .expect("catalog result not configured")
    }

    async fn get_purchases(&self) -> Result<Vec<Purchase>, PaymentsError> {
        self.inner
            .purchases
            .lock()
            .unwrap()
            .take()
            .expect("purchases result not configured")
    }

    async fn make_purchase(&self, config: PurchaseConfig) -> Result<Purchase, PaymentsError> {
        self.inner.seen_configs.lock().unwrap().push(config);
        self.inner
            .purchase_result
            .lock()
            .unwrap()
            .take()
            .expect("purchase result not configured")
    }

    async fn consume_purchase(&self, token: PurchaseToken) -> Result<(), PaymentsError> {
        let gate = self.inner.consume_gate.lock().unwrap().clone();
        if let Some(gate) = gate {
            gate.notified().await;
        }
        self.inner.seen_tokens.lock().unwrap().push(token);
        self.inner
            .consume_result
            .lock()
            .unwrap()
            .take()
            .expect("consume result not configured")
    }
}

#[async_trait]
impl PlayerRepository for StubPlatform {
    fn get_player(&self) -> Result<Player, PaymentsError> {
        self.inner
            .player
            .lock()
            .unwrap()
            .take()
            .expect("player result not configured")
    }

    async fn get_signed_asid(&self) -> Result<SignedAsid, PaymentsError> {
        self.inner
            .signed_asid
            .lock()
            .unwrap()
            .take()
            .expect("signed asid result not configured")
    }
}

fn sample_product() -> Product {
    Product {
        title: "100 Gems".to_string(),
        product_id: "gems.100".to_string(),
        description: Some("A pile of gems".to_string()),
        image_uri: Some("https://cdn.example.com/gems.png".to_string()),
        price: "$0.99".to_string(),
        price_currency_code: "USD".to_string(),
    }
}

fn sample_purchase() -> Purchase {
    Purchase {
        payment_id: "pay-81723".to_string(),
        product_id: "gems.100".to_string(),
        purchase_time: Utc.timestamp_opt(1_718_000_000, 0).unwrap(),
        purchase_token: PurchaseToken("tok-1".to_string()),
        developer_payload: Some("order-42".to_string()),
        signed_request: SignedRequest("c2ln.cGF5bG9hZA".to_string()),
    }
}

#[tokio::test]
async fn is_enabled_reports_the_platform_value() {
    let stub = StubPlatform::default();
    let util = PaymentsUtil::new(stub.clone());
    assert!(!util.is_enabled());
    stub.set_enabled(true);
    assert!(util.is_enabled());
}

#[tokio::test]
async fn catalog_is_returned_verbatim() {
    let stub = StubPlatform::default();
    stub.set_catalog(Ok(vec![sample_product()]));
    let util = PaymentsUtil::new(stub);
    assert_eq!(util.get_catalog().await.unwrap(), vec![sample_product()]);
}

#[tokio::test]
async fn unsupported_region_yields_an_empty_catalog_not_an_error() {
    let stub = StubPlatform::default();
    stub.set_catalog(Ok(Vec::new()));
    let util = PaymentsUtil::new(stub);
    assert_eq!(util.get_catalog().await.unwrap(), Vec::<Product>::new());
}

#[tokio::test]
async fn make_purchase_forwards_the_identical_config() {
    let stub = StubPlatform::default();
    stub.set_purchase_result(Ok(sample_purchase()));
    let util = PaymentsUtil::new(stub.clone());
    let config = PurchaseConfig {
        product_id: "p1".to_string(),
        developer_payload: Some("meta".to_string()),
    };
    let purchase = util.make_purchase(config.clone()).await.unwrap();
    assert_eq!(purchase, sample_purchase());
    assert_eq!(stub.seen_configs(), vec![config]);
}

#[tokio::test]
async fn a_cancelled_purchase_surfaces_the_platform_rejection() {
    let stub = StubPlatform::default();
    let rejection = PaymentsError::new(ErrorCode::UserInput, "Player closed the purchase dialog.");
    stub.set_purchase_result(Err(rejection.clone()));
    let util = PaymentsUtil::new(stub);
    let err = util
        .make_purchase(PurchaseConfig {
            product_id: "p1".to_string(),
            developer_payload: None,
        })
        .await
        .unwrap_err();
    assert_eq!(err, rejection);
}

#[tokio::test]
async fn consume_forwards_the_literal_token() {
    let stub = StubPlatform::default();
    stub.set_consume_result(Ok(()));
    let util = PaymentsUtil::new(stub.clone());
    util.consume_purchase(PurchaseToken("tok123".to_string()))
        .await
        .unwrap();
    assert_eq!(stub.seen_tokens(), vec![PurchaseToken("tok123".to_string())]);
}

#[tokio::test]
async fn every_error_classification_propagates_unchanged() {
    let codes = [
        ErrorCode::UnsupportedPlatform,
        ErrorCode::ClientUnsupportedOperation,
        ErrorCode::PaymentsNotInitialized,
        ErrorCode::InvalidParam,
        ErrorCode::NetworkFailure,
        ErrorCode::InvalidOperation,
        ErrorCode::UserInput,
        ErrorCode::Unknown("RATE_LIMITED".to_string()),
    ];
    for code in codes {
        let stub = StubPlatform::default();
        let injected = PaymentsError::new(code, "injected by test");
        stub.set_purchases(Err(injected.clone()));
        let util = PaymentsUtil::new(stub);
        assert_eq!(util.get_purchases().await.unwrap_err(), injected);
    }
}

/// The caller-level ordering invariant: in-game effects are granted only
/// after the consume call has resolved. The stub holds the consume call open
/// behind a gate; the effect flag must stay unset until the gate opens.
#[tokio::test]
async fn effects_are_granted_only_after_consume_resolves() {
    let gate = Arc::new(Notify::new());
    let stub = StubPlatform::default();
    stub.set_consume_result(Ok(()));
    stub.set_consume_gate(gate.clone());
    let util = PaymentsUtil::new(stub.clone());

    let effect_granted = Arc::new(AtomicBool::new(false));
    let granting_task = tokio::spawn({
        let effect_granted = effect_granted.clone();
        async move {
            util.consume_purchase(PurchaseToken("tok-1".to_string()))
                .await
                .unwrap();
            effect_granted.store(true, Ordering::SeqCst);
        }
    });

    tokio::time::sleep(Duration::from_millis(50)).await;
    assert!(
        !effect_granted.load(Ordering::SeqCst),
        "effect granted before consumption resolved"
    );

    gate.notify_one();
    granting_task.await.unwrap();
    assert!(effect_granted.load(Ordering::SeqCst));
    assert_eq!(stub.seen_tokens(), vec![PurchaseToken("tok-1".to_string())]);
}

#[tokio::test]
async fn player_identity_is_returned_verbatim() {
    let stub = StubPlatform::default();
    let player = Player {
        id: "player-1".to_string(),
        name: Some("Test Player".to_string()),
        photo: None,
    };
    stub.set_player(Ok(player.clone()));
    let util = PlayerUtil::new(stub);
    assert_eq!(util.get_player().unwrap(), player);
}

#[tokio::test]
async fn signed_asid_rejection_propagates_unchanged() {
    let stub = StubPlatform::default();
    let rejection = PaymentsError::new(
        ErrorCode::InvalidOperation,
        "Session is not yet initialized.",
    );
    stub.set_signed_asid(Err(rejection.clone()));
    let util = PlayerUtil::new(stub);
    assert_eq!(util.get_signed_asid().await.unwrap_err(), rejection);
}
