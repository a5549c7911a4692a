use std::collections::{HashMap, HashSet};
use std::sync::mpsc::{self, Receiver, Sender};

use eframe::egui;
use tracing::{debug, info};

use crate::catalog::file_name;
use crate::remote::{DisplayImage, Endpoints};
use crate::runtime::AppContext;
use crate::session::ViewerSession;

use super::actions::{UiAction, apply_to_session};
use super::gallery::GalleryView;
use super::sidebar::draw_sidebar;
use super::slots::{DownloadState, ImageSlots};
use super::worker::{self, WorkerEvent};

pub(super) const NOT_CONNECTED_STATUS: &str =
    "No image server configured. Start with --server <url> or set server_url in the config file.";

pub(super) struct WebsatApp {
    context: AppContext,
    endpoints: Option<Endpoints>,
    session: ViewerSession,
    images: ImageSlots<egui::TextureHandle>,
    downloads: HashMap<String, DownloadState>,
    worker_tx: Sender<WorkerEvent>,
    worker_rx: Receiver<WorkerEvent>,
    listing_pending: bool,
    status: String,
}

impl WebsatApp {
    pub(super) fn new(cc: &eframe::CreationContext<'_>, context: AppContext) -> Self {
        let (worker_tx, worker_rx) = mpsc::channel();
        let endpoints = context.config().endpoints().ok();
        let mut app = Self {
            context,
            endpoints,
            session: ViewerSession::default(),
            images: ImageSlots::default(),
            downloads: HashMap::new(),
            worker_tx,
            worker_rx,
            listing_pending: false,
            status: "Ready.".to_string(),
        };
        app.request_listing(&cc.egui_ctx);
        app
    }

    fn request_listing(&mut self, ctx: &egui::Context) {
        if !self.context.is_connected() {
            self.status = NOT_CONNECTED_STATUS.to_string();
            return;
        }
        if self.listing_pending {
            return;
        }
        self.listing_pending = true;
        self.status = "Loading image list...".to_string();
        worker::spawn_listing(
            self.context.catalog_service(),
            self.worker_tx.clone(),
            ctx.clone(),
        );
    }

    fn poll_worker_events(&mut self, ctx: &egui::Context) {
        while let Ok(event) = self.worker_rx.try_recv() {
            match event {
                WorkerEvent::ListingLoaded { paths } => {
                    self.listing_pending = false;
                    self.status = listing_status(paths.len());
                    self.images.forget_failures();
                    self.session.replace_listing(paths);
                    self.evict_hidden();
                }
                WorkerEvent::ImageLoaded { url, result } => {
                    let texture = result.map(|image| {
                        ctx.load_texture(
                            format!("websat:{url}"),
                            to_color_image(&image),
                            egui::TextureOptions::LINEAR,
                        )
                    });
                    self.images.finish(url, texture);
                }
                WorkerEvent::DownloadFinished { path, result } => {
                    let state = match result {
                        Ok(target) => DownloadState::Saved(target),
                        Err(message) => DownloadState::Failed(message),
                    };
                    self.downloads.insert(path, state);
                }
            }
        }
    }

    fn ensure_visible_images(&mut self, ctx: &egui::Context) {
        let (Ok(server), Some(endpoints)) = (self.context.source(), &self.endpoints) else {
            return;
        };
        let source = self.session.sidebar.source;
        for path in self.session.visible() {
            let url = endpoints.display(path, source);
            if self.images.begin(&url) {
                worker::spawn_image_load(
                    server.clone(),
                    url,
                    path.clone(),
                    source,
                    self.worker_tx.clone(),
                    ctx.clone(),
                );
            }
        }
    }

    fn start_download(&mut self, ctx: &egui::Context, path: String) {
        let service = match self.context.download_service() {
            Ok(service) => service,
            Err(error) => {
                self.downloads
                    .insert(path, DownloadState::Failed(error.to_string()));
                return;
            }
        };
        let Some(target) = rfd::FileDialog::new()
            .set_file_name(file_name(&path))
            .add_filter("Image", &["jpg", "jpeg", "png"])
            .save_file()
        else {
            return;
        };
        info!(path, target = %target.display(), "download requested");
        self.downloads.insert(path.clone(), DownloadState::Running);
        worker::spawn_download(service, path, target, self.worker_tx.clone(), ctx.clone());
    }

    /// Releases textures and finished download states of images that are no
    /// longer on screen.
    fn evict_hidden(&mut self) {
        let keep = match &self.endpoints {
            Some(endpoints) => visible_urls(endpoints, &self.session),
            None => HashSet::new(),
        };
        let evicted = self.images.evict_except(&keep);
        let visible = self.session.visible();
        self.downloads
            .retain(|path, state| state.is_running() || visible.contains(path));
        if evicted > 0 {
            debug!(evicted, kept = self.images.len(), "released hidden images");
        }
    }

    fn apply_actions(&mut self, ctx: &egui::Context, actions: Vec<UiAction>) {
        let mut session_changed = false;
        for action in actions {
            if apply_to_session(&mut self.session, &action) {
                session_changed = true;
                continue;
            }
            match action {
                UiAction::Refresh => self.request_listing(ctx),
                UiAction::Download { path } => self.start_download(ctx, path),
                _ => {}
            }
        }
        if session_changed {
            self.evict_hidden();
        }
    }
}

impl eframe::App for WebsatApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_worker_events(ctx);
        self.ensure_visible_images(ctx);

        let mut actions = Vec::new();
        egui::SidePanel::left("websat-sidebar")
            .resizable(true)
            .default_width(280.0)
            .show(ctx, |ui| {
                ui.heading(&self.context.config().window_title);
                ui.separator();
                draw_sidebar(ui, &self.session, self.listing_pending, &mut actions);
            });

        egui::TopBottomPanel::bottom("websat-status").show(ctx, |ui| {
            ui.label(status_text(&self.status, self.images.loading()));
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            GalleryView {
                session: &self.session,
                endpoints: self.endpoints.as_ref(),
                images: &self.images,
                downloads: &self.downloads,
            }
            .draw(ui, &mut actions);
        });

        if !actions.is_empty() {
            self.apply_actions(ctx, actions);
            ctx.request_repaint();
        }
    }
}

/// Display URLs of the images the current view shows.
pub(super) fn visible_urls(endpoints: &Endpoints, session: &ViewerSession) -> HashSet<String> {
    let source = session.sidebar.source;
    session
        .visible()
        .iter()
        .map(|path| endpoints.display(path, source))
        .collect()
}

pub(super) fn listing_status(count: usize) -> String {
    if count == 0 {
        "No images available from the server.".to_string()
    } else {
        format!("Loaded {count} image paths.")
    }
}

pub(super) fn status_text(status: &str, loading: usize) -> String {
    match loading {
        0 => status.to_string(),
        1 => format!("{status}  Loading 1 image..."),
        count => format!("{status}  Loading {count} images..."),
    }
}

pub(super) fn to_color_image(image: &DisplayImage) -> egui::ColorImage {
    egui::ColorImage::from_rgba_unmultiplied([image.width, image.height], &image.rgba)
}
