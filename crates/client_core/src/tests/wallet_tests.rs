use super::*;
use axum::{routing::post, Json, Router};
use tokio::net::TcpListener;

struct FixedAccounts(Vec<String>);

#[async_trait]
impl WalletProvider for FixedAccounts {
    async fn request_accounts(&self) -> Result<Vec<String>, WalletError> {
        Ok(self.0.clone())
    }
}

struct RefusingWallet;

#[async_trait]
impl WalletProvider for RefusingWallet {
    async fn request_accounts(&self) -> Result<Vec<String>, WalletError> {
        Err(WalletError::Rpc {
            code: 4001,
            message: "User rejected the request.".into(),
        })
    }
}

async fn spawn_rpc_server(reply: serde_json::Value) -> String {
    std::env::set_var("NO_PROXY", "127.0.0.1,localhost");
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    let app = Router::new().route(
        "/",
        post(move |Json(request): Json<serde_json::Value>| {
            let reply = reply.clone();
            async move {
                assert_eq!(request["method"], "eth_requestAccounts");
                Json(reply)
            }
        }),
    );
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    format!("http://{addr}/")
}

#[tokio::test]
async fn missing_provider_asks_user_to_install_a_wallet() {
    let outcome = connect_wallet(None).await;
    assert_eq!(outcome, ConnectOutcome::ProviderMissing);
    assert_eq!(
        outcome.status_message(),
        "Install a Web3 wallet like MetaMask to continue."
    );
}

#[tokio::test]
async fn connect_uses_first_account() {
    let wallet = FixedAccounts(vec!["0xFirst".into(), "0xSecond".into()]);
    let outcome = connect_wallet(Some(&wallet as &dyn WalletProvider)).await;
    assert_eq!(outcome, ConnectOutcome::Connected("0xFirst".into()));
}

#[tokio::test]
async fn refusal_or_empty_account_list_reads_as_rejection() {
    assert_eq!(
        connect_wallet(Some(&RefusingWallet as &dyn WalletProvider)).await,
        ConnectOutcome::Rejected
    );
    assert_eq!(
        connect_wallet(Some(&FixedAccounts(Vec::new()) as &dyn WalletProvider)).await,
        ConnectOutcome::Rejected
    );
}

#[tokio::test]
async fn json_rpc_provider_reads_result_and_error_members() {
    let ok_url = spawn_rpc_server(serde_json::json!({
        "jsonrpc": "2.0", "id": 1, "result": ["0xabc0000000000000000000000000000000001234"]
    }))
    .await;
    let provider = JsonRpcWalletProvider::new(ok_url);
    let accounts = provider.request_accounts().await.expect("accounts");
    assert_eq!(accounts, vec!["0xabc0000000000000000000000000000000001234"]);

    let denied_url = spawn_rpc_server(serde_json::json!({
        "jsonrpc": "2.0", "id": 1, "error": {"code": 4001, "message": "User rejected the request."}
    }))
    .await;
    let err = JsonRpcWalletProvider::new(denied_url)
        .request_accounts()
        .await
        .expect_err("must be refused");
    assert!(matches!(err, WalletError::Rpc { code: 4001, .. }), "{err}");

    let empty_url = spawn_rpc_server(serde_json::json!({ "jsonrpc": "2.0", "id": 1, "result": [] })).await;
    let err = JsonRpcWalletProvider::new(empty_url)
        .request_accounts()
        .await
        .expect_err("no accounts");
    assert!(matches!(err, WalletError::NoAccounts));
}

#[test]
fn provider_is_absent_without_configured_endpoint() {
    let settings = Settings::default();
    assert!(JsonRpcWalletProvider::from_settings(&settings).is_none());
    let settings = settings.with_wallet_rpc_url("http://127.0.0.1:8545");
    assert!(JsonRpcWalletProvider::from_settings(&settings).is_some());
}

#[test]
fn purchase_before_connect_is_refused_locally() {
    let mut bar = WalletBar::new();
    assert_eq!(bar.phase(), WalletPhase::Disconnected);
    assert_eq!(bar.begin_purchase(), None);
    assert_eq!(bar.status(), "Connect wallet first");
    assert_eq!(bar.phase(), WalletPhase::Disconnected);
}

#[test]
fn wallet_bar_walks_through_connect_and_purchase() {
    let mut bar = WalletBar::new();
    bar.apply_connect(ConnectOutcome::Connected(
        "0x1234567890abcdef1234567890abcdef12345678".into(),
    ));
    assert_eq!(bar.phase(), WalletPhase::Connected);
    assert_eq!(bar.status(), "Connected");
    assert_eq!(
        bar.address_label().as_deref(),
        Some("0x1234...5678 on Polygon")
    );

    let address = bar.begin_purchase().expect("connected");
    assert_eq!(address, "0x1234567890abcdef1234567890abcdef12345678");
    assert_eq!(bar.phase(), WalletPhase::PurchasePending);

    bar.apply_purchase(PurchaseOutcome::Purchased {
        token_symbol: "AT".into(),
        tx_hash: "0x9f8e7d6c5b4a".into(),
    });
    assert_eq!(bar.phase(), WalletPhase::PurchaseResult);
    assert_eq!(bar.status(), "Ticket purchased with AT • Tx: 0x9f8e7d6c...");
    assert!(bar.is_connected());
}

#[test]
fn failed_connect_keeps_bar_disconnected() {
    let mut bar = WalletBar::new();
    bar.apply_connect(ConnectOutcome::Rejected);
    assert_eq!(bar.status(), "Connection rejected");
    assert!(!bar.is_connected());
    bar.apply_connect(ConnectOutcome::ProviderMissing);
    assert_eq!(bar.phase(), WalletPhase::Disconnected);
}

#[test]
fn short_values_never_panic_when_truncated() {
    let mut bar = WalletBar::new();
    bar.apply_connect(ConnectOutcome::Connected("0x1".into()));
    assert_eq!(bar.address_label().as_deref(), Some("0x1...0x1 on Polygon"));

    let outcome = PurchaseOutcome::Purchased {
        token_symbol: "AT".into(),
        tx_hash: "0xé".into(),
    };
    assert_eq!(outcome.status_message(), "Ticket purchased with AT • Tx: 0xé...");
    assert_eq!(
        PurchaseOutcome::Rejected {
            detail: Some(String::new())
        }
        .status_message(),
        "Purchase failed"
    );
}
