#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};

/// Global data directory, set from command line
static DATA_DIR: OnceLock<PathBuf> = OnceLock::new();

/// Get the data directory (set from command line or default)
pub fn get_data_dir() -> PathBuf {
    DATA_DIR.get().cloned().unwrap_or_else(|| {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("styleloft")
    })
}

/// Styleloft - fashion deals storefront
#[derive(Parser, Debug)]
#[command(name = "styleloft-desktop")]
#[command(about = "Styleloft - desktop fashion-deals storefront")]
struct Args {
    /// Data directory holding banners.json and catalog.csv overrides
    #[arg(short, long)]
    data_dir: Option<PathBuf>,
}

fn main() {
    tracing_subscriber::fmt::init();

    let args = Args::parse();

    let data_dir = args.data_dir.unwrap_or_else(|| {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("styleloft")
    });

    // Store data directory globally
    let _ = DATA_DIR.set(data_dir.clone());

    tracing::info!("Starting Styleloft with data dir: {:?}", data_dir);

    // Wide storefront window
    let window_width = 1120.0;
    let window_height = 860.0;

    // Configure desktop window
    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Styleloft")
            .with_inner_size(dioxus::desktop::LogicalSize::new(window_width, window_height))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}
