//! UI layer for the desktop app: app shell, cylinder, panels and theme.

pub mod app;
pub mod cylinder;
pub mod panels;
pub mod theme;

pub use app::AvangApp;
