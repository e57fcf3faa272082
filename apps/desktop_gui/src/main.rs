mod backend_bridge;
mod controller;
mod ui;

use anyhow::Context;
use clap::Parser;
use client_core::{load_settings, Settings};
use crossbeam_channel::bounded;
use eframe::egui;
use tracing_subscriber::EnvFilter;

use crate::{
    backend_bridge::commands::BackendCommand, controller::events::UiEvent, ui::AvangApp,
};

#[derive(Parser, Debug)]
#[command(name = "avang-desktop", about = "Avang carousel desktop client")]
struct Args {
    /// Overrides the configured backend base URL.
    #[arg(long)]
    backend_url: Option<String>,
    /// JSON-RPC endpoint of the wallet that supplies account addresses.
    #[arg(long)]
    wallet_rpc_url: Option<String>,
}

fn resolve_startup_settings(args: &Args, base: Settings) -> anyhow::Result<Settings> {
    let mut settings = base;
    if let Some(url) = &args.backend_url {
        settings = settings.with_backend_url(url);
    }
    if let Some(url) = &args.wallet_rpc_url {
        settings = settings.with_wallet_rpc_url(url);
    }
    settings.validate().context("invalid client settings")?;
    Ok(settings)
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    let settings = resolve_startup_settings(&args, load_settings())?;
    tracing::info!(backend = %settings.backend_url, "starting desktop client");

    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(64);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(256);
    let backend = backend_bridge::runtime::launch(settings, cmd_rx, ui_tx);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Avang")
            .with_inner_size([1200.0, 820.0])
            .with_min_inner_size([900.0, 680.0]),
        ..Default::default()
    };
    let result = eframe::run_native(
        "Avang",
        options,
        Box::new(move |_cc| Ok(Box::new(AvangApp::new(cmd_tx, ui_rx)))),
    );

    if backend.join().is_err() {
        tracing::error!("backend worker panicked");
    }
    result.map_err(|err| anyhow::anyhow!("desktop ui failed: {err}"))
}

#[cfg(test)]
mod tests {
    use super::{resolve_startup_settings, Args};
    use crate::{
        backend_bridge::commands::BackendCommand,
        controller::{events::UiEvent, orchestration::dispatch_backend_command},
        ui::AvangApp,
    };
    use client_core::{
        ConnectOutcome, FaceContent, PurchaseOutcome, Settings, WalletPhase,
    };
    use crossbeam_channel::bounded;
    use shared::{domain::Face, protocol::Genre};

    fn app_with_channels() -> (
        AvangApp,
        crossbeam_channel::Receiver<BackendCommand>,
        crossbeam_channel::Sender<UiEvent>,
    ) {
        let (cmd_tx, cmd_rx) = bounded(16);
        let (ui_tx, ui_rx) = bounded(16);
        let app = AvangApp::new(cmd_tx, ui_rx);
        (app, cmd_rx, ui_tx)
    }

    #[test]
    fn mounting_requests_every_face_once() {
        let (_app, cmd_rx, _ui_tx) = app_with_channels();
        let queued: Vec<BackendCommand> = cmd_rx.try_iter().collect();
        let expected: Vec<BackendCommand> = Face::ALL
            .iter()
            .map(|&face| BackendCommand::LoadFace { face })
            .collect();
        assert_eq!(queued, expected);
    }

    #[test]
    fn loaded_content_lands_in_matching_panel() {
        let (mut app, _cmd_rx, ui_tx) = app_with_channels();
        ui_tx
            .send(UiEvent::FaceLoaded(FaceContent::Genres(vec![Genre {
                id: None,
                name: "Highlife".into(),
                description: None,
                cover: None,
            }])))
            .expect("send");
        app.process_ui_events();
        assert!(app.panels.is_loaded(Face::Genres));
        assert!(!app.panels.is_loaded(Face::Live));
        assert_eq!(app.carousel.current_face(), Face::Live);
    }

    #[test]
    fn buying_before_connecting_stays_local() {
        let (mut app, cmd_rx, _ui_tx) = app_with_channels();
        let _mount: Vec<_> = cmd_rx.try_iter().collect();
        app.buy_ticket();
        assert_eq!(app.wallet.status(), "Connect wallet first");
        assert!(cmd_rx.try_recv().is_err());
    }

    #[test]
    fn wallet_flow_round_trips_through_backend_events() {
        let (mut app, cmd_rx, ui_tx) = app_with_channels();
        let _mount: Vec<_> = cmd_rx.try_iter().collect();

        app.connect_wallet();
        assert_eq!(cmd_rx.try_recv().ok(), Some(BackendCommand::ConnectWallet));
        ui_tx
            .send(UiEvent::WalletConnectFinished(ConnectOutcome::Connected(
                "0xabcdef0000000000000000000000000000009999".into(),
            )))
            .expect("send");
        app.process_ui_events();
        assert_eq!(app.wallet.phase(), WalletPhase::Connected);

        app.buy_ticket();
        assert_eq!(app.wallet.phase(), WalletPhase::PurchasePending);
        assert_eq!(
            cmd_rx.try_recv().ok(),
            Some(BackendCommand::Purchase {
                wallet_address: "0xabcdef0000000000000000000000000000009999".into()
            })
        );
        ui_tx
            .send(UiEvent::PurchaseFinished(PurchaseOutcome::Rejected {
                detail: Some("Event closed".into()),
            }))
            .expect("send");
        app.process_ui_events();
        assert_eq!(app.wallet.phase(), WalletPhase::PurchaseResult);
        assert_eq!(app.wallet.status(), "Event closed");
    }

    #[test]
    fn purchase_that_cannot_be_queued_reports_network_error() {
        let (mut app, cmd_rx, _ui_tx) = app_with_channels();
        app.wallet
            .apply_connect(ConnectOutcome::Connected("0xabc".into()));
        drop(cmd_rx);
        app.buy_ticket();
        assert_eq!(app.wallet.status(), "Network error");
        assert!(app.status.contains("Backend worker is not running"));
    }

    #[test]
    fn full_command_queue_is_reported_not_fatal() {
        let (cmd_tx, _cmd_rx) = bounded(1);
        let mut status = String::new();
        assert!(dispatch_backend_command(
            &cmd_tx,
            BackendCommand::ConnectWallet,
            &mut status
        ));
        assert!(!dispatch_backend_command(
            &cmd_tx,
            BackendCommand::ConnectWallet,
            &mut status
        ));
        assert_eq!(status, "UI command queue is full; please retry");
    }

    #[test]
    fn cli_flags_override_loaded_settings() {
        let args = Args {
            backend_url: Some("https://api.avang.tv/".into()),
            wallet_rpc_url: Some("http://127.0.0.1:8545".into()),
        };
        let settings = resolve_startup_settings(&args, Settings::default()).expect("valid");
        assert_eq!(settings.backend_url, "https://api.avang.tv");
        assert_eq!(settings.wallet_rpc_url.as_deref(), Some("http://127.0.0.1:8545"));

        let bad = Args {
            backend_url: Some("::not-a-url".into()),
            wallet_rpc_url: None,
        };
        assert!(resolve_startup_settings(&bad, Settings::default()).is_err());
    }
}
