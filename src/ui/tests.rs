use std::collections::HashSet;
use std::path::PathBuf;

use crate::catalog::{ImageSize, Overlay, Source};
use crate::remote::{DisplayImage, Endpoints};
use crate::session::{ViewMode, ViewerSession};

use super::actions::{UiAction, apply_to_session};
use super::app::{listing_status, status_text, to_color_image, visible_urls};
use super::slots::{DownloadState, ImageSlot, ImageSlots};

fn session() -> ViewerSession {
    ViewerSession::new(
        [
            "GOES-16/Full Disk/2024-05-01_12-00-20/a.png",
            "GOES-16/Full Disk/2024-05-01_12-10-20/b.png",
            "GOES-16/Full Disk/2024-05-01_12-10-20/b_map.png",
            "GOES-18/Mesoscale 1/2024-05-01_12-10-20/c.png",
        ]
        .iter()
        .map(|path| path.to_string())
        .collect(),
    )
}

#[test]
fn sidebar_actions_refilter_the_session() {
    let mut session = session();
    assert!(apply_to_session(&mut session, &UiAction::SetOverlay(Overlay::Map)));
    assert_eq!(session.found_text(), "Found 1 images.");

    assert!(apply_to_session(&mut session, &UiAction::SetSource(Source::Goes18)));
    assert_eq!(session.sidebar.size, ImageSize::Any);
    assert_eq!(session.found_text(), "Found 0 images.");

    assert!(apply_to_session(&mut session, &UiAction::SetOverlay(Overlay::None)));
    assert!(apply_to_session(&mut session, &UiAction::SetSize(ImageSize::Mesoscale1)));
    assert_eq!(session.found_text(), "Found 1 images.");
}

#[test]
fn view_actions_move_the_frame_cursor() {
    let mut session = session();
    assert!(apply_to_session(&mut session, &UiAction::SetMode(ViewMode::Frame)));
    assert_eq!(session.found_text(), "Found 3 images.");
    for _ in 0..3 {
        assert!(apply_to_session(&mut session, &UiAction::NextFrame));
    }
    assert_eq!(session.cursor.index(), 2);
    assert!(apply_to_session(&mut session, &UiAction::PreviousFrame));
    assert!(apply_to_session(&mut session, &UiAction::NextFrame));
    assert!(apply_to_session(&mut session, &UiAction::ResetFrame));
    assert_eq!(session.cursor.index(), 0);
    assert!(apply_to_session(&mut session, &UiAction::SetLimit(37)));
    assert_eq!(session.limit.get(), 35);
}

#[test]
fn app_level_actions_are_left_to_the_app() {
    let mut session = session();
    assert!(!apply_to_session(&mut session, &UiAction::Refresh));
    assert!(!apply_to_session(
        &mut session,
        &UiAction::Download {
            path: "GOES-16/a.png".to_string()
        }
    ));
}

#[test]
fn image_slots_load_each_path_once() {
    let mut slots = ImageSlots::<u32>::default();
    assert!(slots.begin("a.png"));
    assert!(!slots.begin("a.png"));
    assert!(slots.begin("b.png"));
    assert_eq!(slots.loading(), 2);

    slots.finish("a.png".to_string(), Ok(7));
    slots.finish(
        "b.png".to_string(),
        Err("Error loading preview: 404".to_string()),
    );
    assert_eq!(slots.loading(), 0);
    assert!(matches!(slots.get("a.png"), Some(ImageSlot::Ready(7))));
    assert!(matches!(slots.get("b.png"), Some(ImageSlot::Failed(_))));

    slots.forget_failures();
    assert!(slots.get("b.png").is_none());
    assert!(!slots.begin("a.png"));
    assert!(slots.begin("b.png"));
}

#[test]
fn download_states_describe_themselves() {
    assert_eq!(
        DownloadState::Saved(PathBuf::from("out/a.png")).status_text(),
        format!("Saved to {}", PathBuf::from("out/a.png").display())
    );
    assert!(
        DownloadState::Failed("image server responded with status 500".to_string())
            .status_text()
            .starts_with("Download failed:")
    );
}

#[test]
fn status_line_counts_pending_loads() {
    assert_eq!(status_text("Ready.", 0), "Ready.");
    assert_eq!(status_text("Ready.", 1), "Ready.  Loading 1 image...");
    assert_eq!(status_text("Ready.", 3), "Ready.  Loading 3 images...");
    assert_eq!(listing_status(0), "No images available from the server.");
    assert_eq!(listing_status(12), "Loaded 12 image paths.");
}

#[test]
fn color_image_keeps_dimensions() {
    let image = DisplayImage {
        width: 2,
        height: 1,
        rgba: vec![255, 0, 0, 255, 0, 255, 0, 255],
    };
    let color = to_color_image(&image);
    assert_eq!(color.size, [2, 1]);
    assert_eq!(color.pixels.len(), 2);
}

#[test]
fn image_keys_follow_the_display_url_of_the_source() {
    let endpoints = Endpoints::new("http://sat.local", 700, 700);
    let mut session = ViewerSession::new(vec!["Unknown/NWS_radar.jpg".to_string()]);

    session.set_source(Source::Unknown);
    let preview = visible_urls(&endpoints, &session);
    assert_eq!(
        preview,
        HashSet::from([
            "http://sat.local/preview/Unknown/NWS_radar.jpg?width=700&height=700".to_string()
        ])
    );

    session.set_source(Source::Nws);
    let full = visible_urls(&endpoints, &session);
    assert_eq!(
        full,
        HashSet::from(["http://sat.local/image/Unknown/NWS_radar.jpg".to_string()])
    );
    assert!(preview.is_disjoint(&full));
}

#[test]
fn hidden_images_are_evicted_but_pending_loads_stay() {
    let mut slots = ImageSlots::<u32>::default();
    for url in ["a", "b", "c", "d"] {
        assert!(slots.begin(url));
    }
    slots.finish("a".to_string(), Ok(1));
    slots.finish("b".to_string(), Ok(2));
    slots.finish("c".to_string(), Err("Error loading preview: 500".to_string()));

    let keep = HashSet::from(["a".to_string()]);
    assert_eq!(slots.evict_except(&keep), 2);
    assert_eq!(slots.len(), 2);
    assert!(matches!(slots.get("a"), Some(ImageSlot::Ready(1))));
    assert!(slots.get("b").is_none());
    assert!(slots.get("c").is_none());
    assert!(matches!(slots.get("d"), Some(ImageSlot::Loading)));
    assert!(slots.begin("b"));
}

#[test]
fn frame_view_keeps_only_the_current_frame_visible() {
    let endpoints = Endpoints::new("http://sat.local", 700, 700);
    let mut session = session();
    assert_eq!(visible_urls(&endpoints, &session).len(), 3);

    assert!(apply_to_session(&mut session, &UiAction::SetMode(ViewMode::Frame)));
    assert!(apply_to_session(&mut session, &UiAction::NextFrame));
    let urls = visible_urls(&endpoints, &session);
    assert_eq!(urls.len(), 1);
    let current = session.visible()[0].clone();
    assert!(urls.contains(&endpoints.preview(&current)));
    assert!(DownloadState::Running.is_running());
    assert!(!DownloadState::Failed(String::new()).is_running());
}
