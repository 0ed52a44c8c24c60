//! Wares Desktop Application
//!
//! A small desktop client for searching the product catalog.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod components;
mod config;
mod services;
mod state;
mod theme;
mod views;

fn main() {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("wares=debug".parse().unwrap()),
        )
        .init();

    tracing::info!("Starting Wares...");

    dioxus::launch(app::App);
}
