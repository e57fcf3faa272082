use eframe::egui::{self, Color32};

pub const BACKGROUND: Color32 = Color32::from_rgb(2, 6, 23);
pub const PANEL_BAR: Color32 = Color32::from_rgb(18, 24, 48);
pub const BORDER: Color32 = Color32::from_rgb(40, 48, 78);
pub const TEXT: Color32 = Color32::from_rgb(230, 236, 250);
pub const MUTED: Color32 = Color32::from_rgb(160, 185, 225);
pub const ACCENT: Color32 = Color32::from_rgb(59, 130, 246);
pub const PURCHASE: Color32 = Color32::from_rgb(217, 70, 239);
pub const PLAYER: Color32 = Color32::from_rgb(8, 10, 18);

pub fn apply(ctx: &egui::Context) {
    let mut visuals = egui::Visuals::dark();
    visuals.panel_fill = BACKGROUND;
    visuals.window_fill = BACKGROUND;
    visuals.hyperlink_color = ACCENT;
    ctx.set_visuals(visuals);
}

/// Ring segment fill, lit by how squarely it faces the viewer.
pub fn segment_fill(brightness: f32) -> Color32 {
    let alpha = (brightness.clamp(0.0, 1.0) * 255.0).round() as u8;
    Color32::from_rgba_unmultiplied(20, 30, 60, alpha)
}
