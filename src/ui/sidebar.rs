use eframe::egui;

use crate::catalog::Source;
use crate::session::ViewerSession;

use super::actions::UiAction;

pub(super) fn draw_sidebar(
    ui: &mut egui::Ui,
    session: &ViewerSession,
    listing_pending: bool,
    actions: &mut Vec<UiAction>,
) {
    let sidebar = &session.sidebar;

    let mut source = sidebar.source;
    egui::ComboBox::from_label("Satellite/Source")
        .selected_text(source.label())
        .show_ui(ui, |ui| {
            for option in Source::ALL {
                ui.selectable_value(&mut source, option, option.label());
            }
        });
    if source != sidebar.source {
        actions.push(UiAction::SetSource(source));
    }

    let mut size = sidebar.size;
    egui::ComboBox::from_label("Image Size")
        .selected_text(size.label())
        .show_ui(ui, |ui| {
            for option in sidebar.sizes() {
                ui.selectable_value(&mut size, *option, option.label());
            }
        });
    if size != sidebar.size {
        actions.push(UiAction::SetSize(size));
    }

    let mut channel = sidebar.channel;
    egui::ComboBox::from_label("Channel")
        .selected_text(channel.label)
        .show_ui(ui, |ui| {
            for option in sidebar.channels() {
                ui.selectable_value(&mut channel, *option, option.label);
            }
        });
    if channel != sidebar.channel {
        actions.push(UiAction::SetChannel(channel));
    }

    let mut overlay = sidebar.overlay;
    egui::ComboBox::from_label("Overlay")
        .selected_text(overlay.label())
        .show_ui(ui, |ui| {
            for option in sidebar.overlays() {
                ui.selectable_value(&mut overlay, *option, option.label());
            }
        });
    if overlay != sidebar.overlay {
        actions.push(UiAction::SetOverlay(overlay));
    }

    ui.separator();
    ui.horizontal(|ui| {
        if ui
            .add_enabled(!listing_pending, egui::Button::new("Refresh"))
            .clicked()
        {
            actions.push(UiAction::Refresh);
        }
        if listing_pending {
            ui.spinner();
        }
    });
    ui.label(format!("{} images on server", session.catalog().len()));
}
