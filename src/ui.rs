mod actions;
mod app;
mod gallery;
mod sidebar;
mod slots;
mod worker;

#[cfg(test)]
mod tests;

use std::sync::Arc;

use eframe::egui;
use tracing::{debug, warn};

use crate::config::ViewerConfig;
use crate::remote::{decode_image, fetch_url};
use crate::runtime::AppContext;

use app::WebsatApp;

const WINDOW_DEFAULT_SIZE: [f32; 2] = [1100.0, 900.0];
const WINDOW_MIN_SIZE: [f32; 2] = [640.0, 420.0];

pub fn run(context: AppContext) -> Result<(), String> {
    let title = context.config().window_title.clone();
    let mut viewport = egui::ViewportBuilder::default()
        .with_title(title.clone())
        .with_inner_size(WINDOW_DEFAULT_SIZE)
        .with_min_inner_size(WINDOW_MIN_SIZE)
        .with_resizable(true);
    if let Some(icon) = load_window_icon(context.config()) {
        viewport = viewport.with_icon(Arc::new(icon));
    }
    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        &title,
        options,
        Box::new(move |cc| Ok(Box::new(WebsatApp::new(cc, context)))),
    )
    .map_err(|error| error.to_string())
}

fn load_window_icon(config: &ViewerConfig) -> Option<egui::IconData> {
    let url = config.icon_url.as_deref()?;
    let icon = fetch_url(url, config.timeout()).and_then(|bytes| decode_image(&bytes));
    match icon {
        Ok(image) => {
            debug!(url, "loaded window icon");
            Some(egui::IconData {
                rgba: image.rgba,
                width: image.width as u32,
                height: image.height as u32,
            })
        }
        Err(error) => {
            warn!(url, %error, "window icon unavailable");
            None
        }
    }
}
