use std::time::Duration;

use client_core::{CarouselController, Panels, PurchaseOutcome, RingLayout, WalletBar};
use crossbeam_channel::{Receiver, Sender};
use eframe::egui::{self, RichText};
use shared::domain::Face;

use crate::{
    backend_bridge::commands::BackendCommand,
    controller::{events::UiEvent, orchestration::dispatch_backend_command},
    ui::{
        cylinder::{self, NavAction},
        theme,
    },
};

pub struct AvangApp {
    cmd_tx: Sender<BackendCommand>,
    ui_rx: Receiver<UiEvent>,

    pub(crate) carousel: CarouselController,
    ring: RingLayout,
    pub(crate) panels: Panels,
    pub(crate) wallet: WalletBar,
    pub(crate) status: String,
    theme_applied: bool,
}

impl AvangApp {
    pub fn new(cmd_tx: Sender<BackendCommand>, ui_rx: Receiver<UiEvent>) -> Self {
        let mut app = Self {
            cmd_tx,
            ui_rx,
            carousel: CarouselController::new(),
            ring: RingLayout::default(),
            panels: Panels::default(),
            wallet: WalletBar::new(),
            status: String::new(),
            theme_applied: false,
        };
        app.mount();
        app
    }

    /// Each panel fetches exactly once, when the view is created.
    fn mount(&mut self) {
        for face in Face::ALL {
            dispatch_backend_command(
                &self.cmd_tx,
                BackendCommand::LoadFace { face },
                &mut self.status,
            );
        }
    }

    pub(crate) fn process_ui_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            match event {
                UiEvent::FaceLoaded(content) => {
                    tracing::debug!(face = %content.face(), items = content.len(), "panel content arrived");
                    self.panels.apply(content);
                }
                UiEvent::WalletConnectFinished(outcome) => self.wallet.apply_connect(outcome),
                UiEvent::PurchaseFinished(outcome) => self.wallet.apply_purchase(outcome),
                UiEvent::BackendFailed(message) => self.status = message,
            }
        }
    }

    pub(crate) fn connect_wallet(&mut self) {
        dispatch_backend_command(&self.cmd_tx, BackendCommand::ConnectWallet, &mut self.status);
    }

    pub(crate) fn buy_ticket(&mut self) {
        let Some(wallet_address) = self.wallet.begin_purchase() else {
            return;
        };
        let queued = dispatch_backend_command(
            &self.cmd_tx,
            BackendCommand::Purchase { wallet_address },
            &mut self.status,
        );
        if !queued {
            self.wallet.apply_purchase(PurchaseOutcome::NetworkError);
        }
    }

    fn show_header(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("avang_header").show(ctx, |ui| {
            ui.add_space(8.0);
            ui.horizontal(|ui| {
                ui.vertical(|ui| {
                    ui.label(RichText::new("Avang").color(theme::TEXT).strong().size(24.0));
                    ui.label(
                        RichText::new("Live TV • Music • Shows • Genres • Polygon monetization")
                            .color(theme::MUTED)
                            .size(12.0),
                    );
                });
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    self.show_wallet_bar(ui);
                });
            });
            ui.add_space(8.0);
        });
    }

    // Laid out right to left, so widgets are added in reverse reading order.
    fn show_wallet_bar(&mut self, ui: &mut egui::Ui) {
        if !self.wallet.status().is_empty() {
            ui.label(RichText::new(self.wallet.status()).color(theme::MUTED).size(11.0));
        }
        let buy = egui::Button::new(RichText::new("Buy Ticket (Mock)").color(theme::TEXT))
            .fill(theme::PURCHASE);
        if ui.add(buy).clicked() {
            self.buy_ticket();
        }
        match self.wallet.address_label() {
            Some(label) => {
                ui.label(RichText::new(label).color(theme::MUTED).size(11.0));
            }
            None => {
                let connect = egui::Button::new(RichText::new("Connect Wallet").color(theme::TEXT))
                    .fill(theme::ACCENT);
                if ui.add(connect).clicked() {
                    self.connect_wallet();
                }
            }
        }
    }

    fn show_footer(&self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("avang_footer").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(
                    RichText::new("Polygon-powered access with AT token • NFT tickets coming soon")
                        .color(theme::MUTED)
                        .size(12.0),
                );
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if !self.status.is_empty() {
                        ui.label(RichText::new(&self.status).color(theme::PURCHASE).size(11.0));
                    }
                });
            });
        });
    }

    fn show_carousel(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            match cylinder::nav_bar(ui) {
                Some(NavAction::Previous) => self.carousel.previous(),
                Some(NavAction::Next) => self.carousel.next(),
                None => {}
            }
            ui.add_space(12.0);
            cylinder::show(ui, &self.carousel, &self.ring, &self.panels);
        });
    }
}

impl eframe::App for AvangApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if !self.theme_applied {
            theme::apply(ctx);
            self.theme_applied = true;
        }
        self.process_ui_events();

        self.show_header(ctx);
        self.show_footer(ctx);
        self.show_carousel(ctx);

        ctx.request_repaint_after(Duration::from_millis(100));
    }
}

impl Drop for AvangApp {
    fn drop(&mut self) {
        // Aborts whatever is still in flight on the backend.
        let _ = self.cmd_tx.try_send(BackendCommand::Shutdown);
    }
}

