use reqwest::Client;
use serde::de::DeserializeOwned;
use shared::{
    domain::Face,
    error::{ApiErrorBody, ApiRejection},
    protocol::{ItemsResponse, PurchaseRequest, PurchaseResponse},
};
use tracing::{debug, info, warn};

pub mod carousel;
pub mod config;
pub mod error;
pub mod panel;
pub mod wallet;

pub use carousel::{CarouselController, RingLayout, SegmentView, FACE_COUNT};
pub use config::{load_settings, Settings};
pub use error::{ConfigError, ContentError, PurchaseError, WalletError};
pub use panel::{ContentPanel, FaceContent, PanelView, Panels};
pub use wallet::{
    connect_wallet, ConnectOutcome, JsonRpcWalletProvider, PurchaseOutcome, WalletBar,
    WalletPhase, WalletProvider,
};

/// HTTP access to the Avang backend. Cheap to clone; clones share one connection pool.
#[derive(Debug, Clone)]
pub struct AvangClient {
    http: Client,
    base_url: String,
    event_id: String,
}

impl AvangClient {
    pub fn new(settings: &Settings) -> Self {
        Self::with_http(Client::new(), settings)
    }

    pub fn with_http(http: Client, settings: &Settings) -> Self {
        Self {
            http,
            base_url: config::normalize_backend_url(&settings.backend_url),
            event_id: settings.event_id.clone(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn event_id(&self) -> &str {
        &self.event_id
    }

    pub fn url_for(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }

    /// Fetches the `items` list from a content endpoint.
    ///
    /// The body is decoded whatever the HTTP status; a non-JSON body is an error
    /// and a JSON body without `items` is an empty list. Entries that do not fit
    /// `T` are skipped so a bad record never hides the ones around it.
    pub async fn fetch_items<T: DeserializeOwned>(
        &self,
        endpoint: &str,
    ) -> Result<Vec<T>, ContentError> {
        let response = self
            .http
            .get(self.url_for(endpoint))
            .send()
            .await
            .map_err(|source| ContentError::Transport {
                endpoint: endpoint.to_string(),
                source,
            })?;
        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|source| ContentError::Transport {
                endpoint: endpoint.to_string(),
                source,
            })?;
        let parsed: ItemsResponse =
            serde_json::from_slice(&body).map_err(|source| ContentError::Decode {
                endpoint: endpoint.to_string(),
                source,
            })?;
        let (items, skipped) = parsed.decode_items();
        if skipped > 0 {
            warn!(endpoint, skipped, "skipped malformed items");
        }
        debug!(endpoint, status = status.as_u16(), count = items.len(), "fetched items");
        Ok(items)
    }

    /// Like [`fetch_items`](Self::fetch_items), but any failure reads as an empty list.
    pub async fn load_items<T: DeserializeOwned>(&self, endpoint: &str) -> Vec<T> {
        match self.fetch_items(endpoint).await {
            Ok(items) => items,
            Err(err) => {
                debug!(endpoint, error = %err, "content fetch failed; showing empty state");
                Vec::new()
            }
        }
    }

    pub async fn load_face(&self, face: Face) -> FaceContent {
        let endpoint = face.endpoint();
        match face {
            Face::Live => FaceContent::Live(self.load_items(endpoint).await),
            Face::LatestVideo => FaceContent::LatestVideo(self.load_items(endpoint).await),
            Face::Shows => FaceContent::Shows(self.load_items(endpoint).await),
            Face::Genres => FaceContent::Genres(self.load_items(endpoint).await),
        }
    }

    /// Submits one mock ticket purchase for `wallet_address`. Never retried.
    pub async fn purchase(&self, wallet_address: &str) -> PurchaseOutcome {
        match self.submit_purchase(wallet_address).await {
            Ok(receipt) => {
                info!(token = %receipt.token_symbol, "ticket purchased");
                PurchaseOutcome::Purchased {
                    token_symbol: receipt.token_symbol,
                    tx_hash: receipt.tx_hash,
                }
            }
            Err(PurchaseError::Rejected(rejection)) => {
                info!(status = rejection.status, "purchase rejected by server");
                PurchaseOutcome::Rejected {
                    detail: rejection.detail,
                }
            }
            Err(err) => {
                warn!(error = %err, "purchase request failed");
                PurchaseOutcome::NetworkError
            }
        }
    }

    async fn submit_purchase(&self, wallet_address: &str) -> Result<PurchaseResponse, PurchaseError> {
        let response = self
            .http
            .post(self.url_for("/api/purchase"))
            .json(&PurchaseRequest {
                wallet_address: wallet_address.to_string(),
                event_id: self.event_id.clone(),
            })
            .send()
            .await?;
        let status = response.status();
        let body = response.bytes().await?;

        if status.is_success() {
            return Ok(serde_json::from_slice(&body)?);
        }

        // Any JSON body counts as a server answer; only `detail` is read from it.
        let value: serde_json::Value = serde_json::from_slice(&body)?;
        let detail = value
            .get("detail")
            .and_then(|d| d.as_str())
            .map(str::to_string);
        Err(ApiRejection::new(status.as_u16(), ApiErrorBody { detail }).into())
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
