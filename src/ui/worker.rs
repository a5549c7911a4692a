use std::path::PathBuf;
use std::sync::Arc;
use std::sync::mpsc::Sender;
use std::thread;

use eframe::egui;
use tracing::warn;

use crate::catalog::Source;
use crate::remote::{DisplayImage, ImageSource};
use crate::runtime::{CatalogService, DownloadService};

#[derive(Debug)]
pub(super) enum WorkerEvent {
    ListingLoaded {
        paths: Vec<String>,
    },
    ImageLoaded {
        url: String,
        result: Result<DisplayImage, String>,
    },
    DownloadFinished {
        path: String,
        result: Result<PathBuf, String>,
    },
}

fn deliver(tx: &Sender<WorkerEvent>, ctx: &egui::Context, event: WorkerEvent) {
    if tx.send(event).is_err() {
        warn!("viewer closed before a background job finished");
        return;
    }
    ctx.request_repaint();
}

pub(super) fn spawn_listing(service: CatalogService, tx: Sender<WorkerEvent>, ctx: egui::Context) {
    thread::spawn(move || {
        let paths = service.fetch_listing();
        deliver(&tx, &ctx, WorkerEvent::ListingLoaded { paths });
    });
}

pub(super) fn spawn_image_load(
    server: Arc<dyn ImageSource>,
    url: String,
    path: String,
    source: Source,
    tx: Sender<WorkerEvent>,
    ctx: egui::Context,
) {
    thread::spawn(move || {
        let result = server
            .fetch_display(&path, source)
            .map_err(|error| {
                warn!(path, %error, "image load failed");
                error.inline_message()
            });
        deliver(&tx, &ctx, WorkerEvent::ImageLoaded { url, result });
    });
}

pub(super) fn spawn_download(
    service: DownloadService,
    path: String,
    target: PathBuf,
    tx: Sender<WorkerEvent>,
    ctx: egui::Context,
) {
    thread::spawn(move || {
        let result = service
            .download(&path, Some(target.as_path()))
            .map_err(|error| error.to_string());
        deliver(&tx, &ctx, WorkerEvent::DownloadFinished { path, result });
    });
}
