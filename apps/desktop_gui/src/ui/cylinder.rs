//! The rotating ring: segments painted with a painter, front face as live widgets.

use client_core::{CarouselController, Panels, RingLayout};
use eframe::egui::{self, RichText};

use crate::ui::{panels, theme};

/// Seconds the ring takes to settle on a new face.
const ROTATION_SECONDS: f32 = 0.7;
/// Share of the scene width taken by a head-on segment.
const FACE_WIDTH_RATIO: f32 = 0.62;

pub enum NavAction {
    Previous,
    Next,
}

pub fn nav_bar(ui: &mut egui::Ui) -> Option<NavAction> {
    let mut action = None;
    ui.horizontal(|ui| {
        if ui.button("◀").clicked() {
            action = Some(NavAction::Previous);
        }
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("▶").clicked() {
                action = Some(NavAction::Next);
            }
            ui.with_layout(egui::Layout::top_down(egui::Align::Center), |ui| {
                ui.label(
                    RichText::new("Avang • Circular Cylinder")
                        .color(theme::TEXT)
                        .strong()
                        .size(20.0),
                );
                ui.label(
                    RichText::new("Smooth 3D rotation across Live, Latest Video, Shows, and Genres")
                        .color(theme::MUTED)
                        .size(12.0),
                );
            });
        });
    });
    action
}

pub fn show(ui: &mut egui::Ui, carousel: &CarouselController, ring: &RingLayout, panels: &Panels) {
    let width = ui.available_width();
    let (scene, _) = ui.allocate_exact_size(egui::vec2(width, ring.height), egui::Sense::hover());

    let rotation = ui.ctx().animate_value_with_time(
        egui::Id::new("avang_cylinder_rotation"),
        carousel.rotation_degrees(),
        ROTATION_SECONDS,
    );

    let face_width = scene.width() * FACE_WIDTH_RATIO;
    let travel = (scene.width() - face_width) / 2.0;
    let scale = travel / ring.radius;
    let painter = ui.painter_at(scene);

    let mut front = None;
    for segment in ring.visible_segments(rotation) {
        let center_x = scene.center().x + segment.offset_x * scale;
        let half = face_width * segment.facing / 2.0;
        let rect = egui::Rect::from_min_max(
            egui::pos2(center_x - half, scene.top()),
            egui::pos2(center_x + half, scene.bottom()),
        );
        painter.rect_filled(rect.expand(1.0), 16.0, theme::BORDER);
        painter.rect_filled(rect, 16.0, theme::segment_fill(segment.brightness));

        if let Some(face) = segment.face {
            if face == carousel.current_face() {
                front = Some((rect, segment.facing));
            } else {
                painter.text(
                    rect.center(),
                    egui::Align2::CENTER_CENTER,
                    face.title(),
                    egui::FontId::proportional(14.0),
                    theme::MUTED.gamma_multiply(segment.brightness),
                );
            }
        }
    }

    // Content only becomes interactive once the ring has nearly settled.
    if let Some((rect, facing)) = front {
        if facing > 0.9 {
            let inner = rect.shrink(16.0);
            painter.rect_filled(
                egui::Rect::from_min_size(rect.min, egui::vec2(rect.width(), 44.0)),
                16.0,
                theme::PANEL_BAR,
            );
            ui.scope_builder(egui::UiBuilder::new().max_rect(inner), |ui| {
                egui::ScrollArea::vertical()
                    .id_salt("avang_front_face")
                    .show(ui, |ui| {
                        panels::show_face(ui, panels, carousel.current_face());
                    });
            });
        }
    }
}
