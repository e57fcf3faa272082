//! Backend worker: owns the tokio runtime and turns commands into UI events.

use std::{
    sync::Arc,
    thread::{self, JoinHandle},
};

use client_core::{connect_wallet, AvangClient, JsonRpcWalletProvider, Settings, WalletProvider};
use crossbeam_channel::{Receiver, Sender, TrySendError};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;

pub fn launch(
    settings: Settings,
    cmd_rx: Receiver<BackendCommand>,
    ui_tx: Sender<UiEvent>,
) -> JoinHandle<()> {
    thread::spawn(move || run_backend(settings, cmd_rx, ui_tx))
}

fn run_backend(settings: Settings, cmd_rx: Receiver<BackendCommand>, ui_tx: Sender<UiEvent>) {
    let runtime = match tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(err) => {
            tracing::error!("failed to build backend runtime: {err}");
            emit(
                &ui_tx,
                UiEvent::BackendFailed(format!("backend worker startup failure: {err}")),
            );
            return;
        }
    };

    let client = AvangClient::new(&settings);
    let wallet: Option<Arc<dyn WalletProvider>> = JsonRpcWalletProvider::from_settings(&settings)
        .map(|provider| Arc::new(provider) as Arc<dyn WalletProvider>);
    tracing::info!(
        backend = client.base_url(),
        wallet = wallet.is_some(),
        "backend worker started"
    );

    let mut in_flight: Vec<tokio::task::JoinHandle<()>> = Vec::new();
    while let Ok(cmd) = cmd_rx.recv() {
        in_flight.retain(|task| !task.is_finished());
        tracing::debug!(command = cmd.name(), "backend received command");

        match cmd {
            BackendCommand::LoadFace { face } => {
                let client = client.clone();
                let ui_tx = ui_tx.clone();
                in_flight.push(runtime.spawn(async move {
                    let content = client.load_face(face).await;
                    emit(&ui_tx, UiEvent::FaceLoaded(content));
                }));
            }
            BackendCommand::ConnectWallet => {
                let wallet = wallet.clone();
                let ui_tx = ui_tx.clone();
                in_flight.push(runtime.spawn(async move {
                    let outcome = connect_wallet(wallet.as_deref()).await;
                    emit(&ui_tx, UiEvent::WalletConnectFinished(outcome));
                }));
            }
            BackendCommand::Purchase { wallet_address } => {
                let client = client.clone();
                let ui_tx = ui_tx.clone();
                in_flight.push(runtime.spawn(async move {
                    let outcome = client.purchase(&wallet_address).await;
                    emit(&ui_tx, UiEvent::PurchaseFinished(outcome));
                }));
            }
            BackendCommand::Shutdown => break,
        }
    }

    for task in &in_flight {
        task.abort();
    }
    tracing::info!(aborted = in_flight.len(), "backend worker stopping");
    runtime.shutdown_background();
}

fn emit(ui_tx: &Sender<UiEvent>, event: UiEvent) {
    match ui_tx.try_send(event) {
        Ok(()) => {}
        Err(TrySendError::Full(_)) => tracing::warn!("backend->ui event queue is full; dropping event"),
        Err(TrySendError::Disconnected(_)) => {
            tracing::debug!("ui event queue closed; dropping event")
        }
    }
}
