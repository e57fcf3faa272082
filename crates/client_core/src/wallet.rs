//! Wallet connection and mock ticket purchase.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::{config::Settings, error::WalletError};

pub const WALLET_MISSING_STATUS: &str = "Install a Web3 wallet like MetaMask to continue.";
pub const CONNECTED_STATUS: &str = "Connected";
pub const CONNECTION_REJECTED_STATUS: &str = "Connection rejected";
pub const CONNECT_FIRST_STATUS: &str = "Connect wallet first";
pub const PURCHASE_PENDING_STATUS: &str = "Submitting purchase...";
pub const PURCHASE_FAILED_STATUS: &str = "Purchase failed";
pub const NETWORK_ERROR_STATUS: &str = "Network error";

const TX_HASH_PREVIEW_CHARS: usize = 10;

#[async_trait]
pub trait WalletProvider: Send + Sync {
    /// Asks the wallet for its account addresses; the first one is used.
    async fn request_accounts(&self) -> Result<Vec<String>, WalletError>;
}

/// Wallet reachable over JSON-RPC (`eth_requestAccounts`).
pub struct JsonRpcWalletProvider {
    http: Client,
    rpc_url: String,
}

#[derive(Debug, Deserialize)]
struct RpcResponse {
    #[serde(default)]
    result: Option<Vec<String>>,
    #[serde(default)]
    error: Option<RpcErrorObject>,
}

#[derive(Debug, Deserialize)]
struct RpcErrorObject {
    code: i64,
    #[serde(default)]
    message: String,
}

impl JsonRpcWalletProvider {
    pub fn new(rpc_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            rpc_url: rpc_url.into(),
        }
    }

    /// `None` when no wallet endpoint is configured.
    pub fn from_settings(settings: &Settings) -> Option<Self> {
        settings.wallet_rpc_url.as_deref().map(Self::new)
    }
}

#[async_trait]
impl WalletProvider for JsonRpcWalletProvider {
    async fn request_accounts(&self) -> Result<Vec<String>, WalletError> {
        let response: RpcResponse = self
            .http
            .post(&self.rpc_url)
            .json(&serde_json::json!({
                "jsonrpc": "2.0",
                "id": 1,
                "method": "eth_requestAccounts",
                "params": [],
            }))
            .send()
            .await?
            .json()
            .await?;

        if let Some(err) = response.error {
            return Err(WalletError::Rpc {
                code: err.code,
                message: err.message,
            });
        }
        match response.result {
            Some(accounts) if !accounts.is_empty() => Ok(accounts),
            _ => Err(WalletError::NoAccounts),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConnectOutcome {
    Connected(String),
    ProviderMissing,
    Rejected,
}

impl ConnectOutcome {
    pub fn status_message(&self) -> &'static str {
        match self {
            ConnectOutcome::Connected(_) => CONNECTED_STATUS,
            ConnectOutcome::ProviderMissing => WALLET_MISSING_STATUS,
            ConnectOutcome::Rejected => CONNECTION_REJECTED_STATUS,
        }
    }
}

pub async fn connect_wallet(provider: Option<&dyn WalletProvider>) -> ConnectOutcome {
    let Some(provider) = provider else {
        return ConnectOutcome::ProviderMissing;
    };
    match provider.request_accounts().await {
        Ok(accounts) => match accounts.into_iter().next() {
            Some(address) => ConnectOutcome::Connected(address),
            None => ConnectOutcome::Rejected,
        },
        Err(err) => {
            tracing::info!(error = %err, "wallet connection rejected");
            ConnectOutcome::Rejected
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PurchaseOutcome {
    Purchased { token_symbol: String, tx_hash: String },
    Rejected { detail: Option<String> },
    NetworkError,
}

impl PurchaseOutcome {
    pub fn status_message(&self) -> String {
        match self {
            PurchaseOutcome::Purchased {
                token_symbol,
                tx_hash,
            } => {
                let preview: String = tx_hash.chars().take(TX_HASH_PREVIEW_CHARS).collect();
                format!("Ticket purchased with {token_symbol} • Tx: {preview}...")
            }
            PurchaseOutcome::Rejected { detail } => match detail.as_deref() {
                Some(detail) if !detail.is_empty() => detail.to_string(),
                _ => PURCHASE_FAILED_STATUS.to_string(),
            },
            PurchaseOutcome::NetworkError => NETWORK_ERROR_STATUS.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalletPhase {
    Disconnected,
    Connected,
    PurchasePending,
    PurchaseResult,
}

/// View state of the wallet bar: the connected address plus one status line.
#[derive(Debug, Clone)]
pub struct WalletBar {
    address: Option<String>,
    phase: WalletPhase,
    status: String,
}

impl Default for WalletBar {
    fn default() -> Self {
        Self {
            address: None,
            phase: WalletPhase::Disconnected,
            status: String::new(),
        }
    }
}

impl WalletBar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn address(&self) -> Option<&str> {
        self.address.as_deref()
    }

    pub fn phase(&self) -> WalletPhase {
        self.phase
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn is_connected(&self) -> bool {
        self.address.is_some()
    }

    /// `0x1234...abcd on Polygon`
    pub fn address_label(&self) -> Option<String> {
        self.address.as_deref().map(|address| {
            let chars: Vec<char> = address.chars().collect();
            let head: String = chars.iter().take(6).collect();
            let tail: String = chars[chars.len().saturating_sub(4)..].iter().collect();
            format!("{head}...{tail} on Polygon")
        })
    }

    pub fn apply_connect(&mut self, outcome: ConnectOutcome) {
        self.status = outcome.status_message().to_string();
        if let ConnectOutcome::Connected(address) = outcome {
            self.address = Some(address);
            self.phase = WalletPhase::Connected;
        }
    }

    /// Returns the address to purchase with, or records why no purchase can start.
    pub fn begin_purchase(&mut self) -> Option<String> {
        match self.address.clone() {
            Some(address) => {
                self.phase = WalletPhase::PurchasePending;
                self.status = PURCHASE_PENDING_STATUS.to_string();
                Some(address)
            }
            None => {
                self.status = CONNECT_FIRST_STATUS.to_string();
                None
            }
        }
    }

    pub fn apply_purchase(&mut self, outcome: PurchaseOutcome) {
        self.status = outcome.status_message();
        self.phase = WalletPhase::PurchaseResult;
    }
}

#[cfg(test)]
#[path = "tests/wallet_tests.rs"]
mod tests;
