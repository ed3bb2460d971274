//! Tickerboard - GPUI stock market dashboard
//!
//! A desktop front end for the market-data API: top movers, a searchable
//! company directory, per-stock analysis charts and two-stock comparison.

mod analysis;
mod app;
mod companies;
mod comparison;
mod components;
mod dashboard;
mod keyboard;
mod navigation;
mod theme;

use anyhow::Context as _;
use app::TickerboardApp;
use gpui::*;
use std::sync::Arc;
use tickerboard_core::{Settings, TickerboardClient};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let settings = Settings::load();
    log::info!("Using API at {}", settings.api.base_url);

    let client = Arc::new(TickerboardClient::from_settings(&settings.api)?);
    let runtime = Arc::new(
        tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .enable_all()
            .build()
            .context("failed to start the async runtime")?,
    );

    Application::new().run(move |cx: &mut App| {
        let window_options = WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(Bounds {
                origin: Point::default(),
                size: Size {
                    width: px(1280.0),
                    height: px(860.0),
                },
            })),
            titlebar: Some(TitlebarOptions {
                title: Some("Tickerboard - Stock Market Dashboard".into()),
                appears_transparent: false,
                ..Default::default()
            }),
            ..Default::default()
        };

        let opened = cx.open_window(window_options, |window, cx| {
            cx.new(|cx| TickerboardApp::new(settings, client, runtime, window, cx))
        });
        if let Err(e) = opened {
            log::error!("Failed to open window: {}", e);
            cx.quit();
        }
    });

    Ok(())
}
