//! Drag-chess GUI application.
//!
//! A drag-and-drop chess board kept in sync with the authoritative engine
//! session: human gestures become move requests, the session answers with
//! its new position, and the board re-renders from that answer.

mod app;
mod board_view;
mod dispatch;
mod input;
mod notice;
mod promotion;
mod settings;
mod styles;
mod surface;

use app::App;
use iced::application;
use tracing_subscriber::EnvFilter;

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    application("Drag Chess", App::update, App::view)
        .subscription(App::subscription)
        .theme(App::theme)
        .window_size((styles::BOARD_SIZE + styles::PANEL_WIDTH + 80.0, 640.0))
        .run_with(App::new)
}
