// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

mod app;
mod config;
mod logic;
mod models;
mod mvu;
mod ui;
mod utils;

use env_logger::Env;

use crate::config::FormConfig;

fn main() -> eframe::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let config = FormConfig::load().unwrap_or_else(|err| {
        log::warn!("Ignoring form config: {err:#}");
        FormConfig::default()
    });

    app::run(config)
}
