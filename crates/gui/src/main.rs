//! Chess board GUI
//!
//! Two players share one board:
//! - Click a piece to see where it can go, click a highlighted square to move
//! - Undo, flip the board, start over
//! - Check, checkmate and stalemate are shown in the side panel

mod app;
mod assets;
mod board;
mod config;
mod error;
mod game;
mod styles;

use app::ChessApp;
use assets::PieceImages;
use config::DisplayConfig;
use error::AppError;
use iced::application;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), AppError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = DisplayConfig::discover()?;
    let images = PieceImages::load(&config.asset_dir, &config.asset_extension, config.square_size)?;
    info!(
        count = images.count(),
        dir = %config.asset_dir.display(),
        "piece images loaded"
    );

    let board_px = config.square_size * 8.0 + 4.0;
    let window = (
        board_px + styles::PANEL_WIDTH + styles::PADDING * 3.0,
        board_px.max(480.0) + styles::PADDING * 2.0,
    );

    application(ChessApp::title, ChessApp::update, ChessApp::view)
        .theme(ChessApp::theme)
        .window_size(window)
        .run_with(move || ChessApp::new(config, images))?;
    Ok(())
}
