//! Events flowing from the backend worker to the UI thread.

use client_core::{ConnectOutcome, FaceContent, PurchaseOutcome};

#[derive(Debug)]
pub enum UiEvent {
    FaceLoaded(FaceContent),
    WalletConnectFinished(ConnectOutcome),
    PurchaseFinished(PurchaseOutcome),
    BackendFailed(String),
}
