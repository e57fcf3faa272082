use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error body returned by the backend on rejected requests.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

#[derive(Debug, Error)]
#[error("api rejected request with status {status}: {}", .detail.as_deref().unwrap_or("no detail"))]
pub struct ApiRejection {
    pub status: u16,
    pub detail: Option<String>,
}

impl ApiRejection {
    pub fn new(status: u16, body: ApiErrorBody) -> Self {
        Self {
            status,
            detail: body.detail,
        }
    }
}

