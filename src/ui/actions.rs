use crate::catalog::{Channel, ImageSize, Overlay, Source};
use crate::session::{ListLimit, ViewMode, ViewerSession};

/// Everything a frame's widgets can ask for; applied once drawing is done.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) enum UiAction {
    Refresh,
    SetSource(Source),
    SetSize(ImageSize),
    SetChannel(Channel),
    SetOverlay(Overlay),
    SetMode(ViewMode),
    SetLimit(usize),
    PreviousFrame,
    NextFrame,
    ResetFrame,
    Download { path: String },
}

/// Applies actions that only touch the session. Returns `false` for the
/// ones that need the app (network, dialogs).
pub(super) fn apply_to_session(session: &mut ViewerSession, action: &UiAction) -> bool {
    match action {
        UiAction::SetSource(source) => session.set_source(*source),
        UiAction::SetSize(size) => {
            session.sidebar.size = *size;
            session.update();
        }
        UiAction::SetChannel(channel) => {
            session.sidebar.channel = *channel;
            session.update();
        }
        UiAction::SetOverlay(overlay) => {
            session.sidebar.overlay = *overlay;
            session.update();
        }
        UiAction::SetMode(mode) => session.mode = *mode,
        UiAction::SetLimit(limit) => session.limit = ListLimit::new(*limit),
        UiAction::PreviousFrame => session.previous_frame(),
        UiAction::NextFrame => session.next_frame(),
        UiAction::ResetFrame => session.reset_frame(),
        UiAction::Refresh | UiAction::Download { .. } => return false,
    }
    true
}
