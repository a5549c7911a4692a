use std::collections::HashMap;

use eframe::egui;

use crate::remote::Endpoints;
use crate::session::{ListLimit, ViewMode, ViewerSession};

use super::actions::UiAction;
use super::slots::{DownloadState, ImageSlot, ImageSlots};

pub(super) struct GalleryView<'a> {
    pub(super) session: &'a ViewerSession,
    pub(super) endpoints: Option<&'a Endpoints>,
    pub(super) images: &'a ImageSlots<egui::TextureHandle>,
    pub(super) downloads: &'a HashMap<String, DownloadState>,
}

impl GalleryView<'_> {
    pub(super) fn draw(&self, ui: &mut egui::Ui, actions: &mut Vec<UiAction>) {
        ui.label(self.session.found_text());

        let mut mode = self.session.mode;
        egui::ComboBox::from_label("Select display mode")
            .selected_text(mode.label())
            .show_ui(ui, |ui| {
                for option in ViewMode::ALL {
                    ui.selectable_value(&mut mode, option, option.label());
                }
            });
        if mode != self.session.mode {
            actions.push(UiAction::SetMode(mode));
        }
        ui.separator();

        match self.session.mode {
            ViewMode::List => self.draw_list(ui, actions),
            ViewMode::Frame => self.draw_frame(ui, actions),
        }
    }

    fn draw_list(&self, ui: &mut egui::Ui, actions: &mut Vec<UiAction>) {
        let mut limit = self.session.limit.get();
        ui.add(
            egui::Slider::new(&mut limit, ListLimit::MIN..=ListLimit::MAX)
                .step_by(ListLimit::STEP as f64)
                .text("Number of Images to load"),
        );
        if limit != self.session.limit.get() {
            actions.push(UiAction::SetLimit(limit));
        }

        egui::ScrollArea::vertical()
            .auto_shrink([false; 2])
            .show(ui, |ui| {
                for path in self.session.visible() {
                    self.draw_image_card(ui, path, actions);
                    ui.separator();
                }
            });
    }

    fn draw_frame(&self, ui: &mut egui::Ui, actions: &mut Vec<UiAction>) {
        let total = self.session.filtered().len();
        let index = self.session.cursor.index();
        ui.horizontal(|ui| {
            if ui
                .add_enabled(index > 0, egui::Button::new("Previous"))
                .clicked()
            {
                actions.push(UiAction::PreviousFrame);
            }
            if ui.button("Reset").clicked() {
                actions.push(UiAction::ResetFrame);
            }
            if ui
                .add_enabled(index + 1 < total, egui::Button::new("Next"))
                .clicked()
            {
                actions.push(UiAction::NextFrame);
            }
            ui.label(self.session.cursor.position_text(total));
        });
        ui.separator();

        match self.session.cursor.current(self.session.filtered()) {
            Some(path) => {
                egui::ScrollArea::vertical()
                    .auto_shrink([false; 2])
                    .show(ui, |ui| self.draw_image_card(ui, path, actions));
            }
            None => {
                ui.label("No images found.");
            }
        }
    }

    fn draw_image_card(&self, ui: &mut egui::Ui, path: &str, actions: &mut Vec<UiAction>) {
        let slot = self
            .endpoints
            .map(|endpoints| endpoints.display(path, self.session.sidebar.source))
            .and_then(|url| self.images.get(&url));
        match slot {
            Some(ImageSlot::Ready(texture)) => {
                let width = ui.available_width();
                ui.add(
                    egui::Image::from_texture(egui::load::SizedTexture::from_handle(texture))
                        .max_width(width),
                );
            }
            Some(ImageSlot::Failed(message)) => {
                ui.colored_label(ui.visuals().error_fg_color, message);
            }
            Some(ImageSlot::Loading) | None => {
                ui.horizontal(|ui| {
                    ui.spinner();
                    ui.label("Loading...");
                });
            }
        }
        ui.label(egui::RichText::new(path).small().weak());

        let download = self.downloads.get(path);
        ui.horizontal(|ui| {
            let running = download.is_some_and(DownloadState::is_running);
            if ui
                .add_enabled(!running, egui::Button::new("Download Full Resolution"))
                .clicked()
            {
                actions.push(UiAction::Download {
                    path: path.to_string(),
                });
            }
            if let Some(state) = download {
                ui.label(state.status_text());
            }
        });
    }
}
