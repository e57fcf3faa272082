//! Per-face content rendering.

use client_core::{ContentPanel, PanelView, Panels};
use eframe::egui::{self, RichText};
use shared::{
    domain::Face,
    protocol::{Genre, LiveChannel, Show, Video},
};

use crate::ui::theme;

pub fn show_face(ui: &mut egui::Ui, panels: &Panels, face: Face) {
    panel_title_bar(ui, face);
    ui.add_space(8.0);
    match face {
        Face::Live => show_panel(ui, &panels.live, live_channel),
        Face::LatestVideo => show_panel(ui, &panels.latest_video, latest_video),
        Face::Shows => show_panel(ui, &panels.shows, show),
        Face::Genres => show_panel(ui, &panels.genres, genre),
    }
}

fn show_panel<T>(
    ui: &mut egui::Ui,
    panel: &ContentPanel<T>,
    render_item: impl FnOnce(&mut egui::Ui, &T),
) {
    match panel.view() {
        PanelView::Item(item) => render_item(ui, item),
        PanelView::Empty(message) => {
            ui.label(RichText::new(message).color(theme::MUTED));
        }
    }
}

fn panel_title_bar(ui: &mut egui::Ui, face: Face) {
    ui.horizontal(|ui| {
        ui.label(RichText::new(face.title()).color(theme::TEXT).strong().size(16.0));
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(
                RichText::new("Avang • Polygon Powered")
                    .color(theme::MUTED)
                    .size(11.0),
            );
        });
    });
    ui.separator();
}

fn player_link(ui: &mut egui::Ui, url: &str, embedded: bool) {
    let (rect, _) = ui.allocate_exact_size(
        egui::vec2(ui.available_width().min(360.0), 120.0),
        egui::Sense::hover(),
    );
    ui.painter().rect_filled(rect, 8.0, theme::PLAYER);
    ui.painter().text(
        rect.center(),
        egui::Align2::CENTER_CENTER,
        "▶",
        egui::FontId::proportional(32.0),
        theme::TEXT,
    );
    if url.is_empty() {
        return;
    }
    let label = if embedded {
        "Open embedded player"
    } else {
        "Open stream"
    };
    ui.hyperlink_to(label, url);
}

fn item_heading(ui: &mut egui::Ui, text: &str) {
    ui.label(RichText::new(text).color(theme::TEXT).strong().size(18.0));
}

fn live_channel(ui: &mut egui::Ui, channel: &LiveChannel) {
    player_link(ui, &channel.stream_url, channel.is_embed());
    ui.add_space(6.0);
    item_heading(ui, &channel.name);
    ui.label(RichText::new(channel.description_or_default()).color(theme::MUTED));
}

fn latest_video(ui: &mut egui::Ui, video: &Video) {
    player_link(ui, &video.video_url, video.is_embed());
    ui.add_space(6.0);
    item_heading(ui, &video.title);
    ui.label(RichText::new(video.byline()).color(theme::MUTED));
}

fn show(ui: &mut egui::Ui, show: &Show) {
    if let Some(poster) = &show.poster {
        ui.hyperlink_to("Poster", poster);
    }
    item_heading(ui, &show.title);
    ui.label(RichText::new(&show.schedule).color(theme::MUTED).size(12.0));
    ui.label(RichText::new(&show.synopsis).color(theme::MUTED));
}

fn genre(ui: &mut egui::Ui, genre: &Genre) {
    if let Some(cover) = &genre.cover {
        ui.hyperlink_to("Cover", cover);
    }
    item_heading(ui, &genre.name);
    if let Some(description) = &genre.description {
        ui.label(RichText::new(description).color(theme::MUTED));
    }
}
