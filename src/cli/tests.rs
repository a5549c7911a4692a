use clap::Parser;

use crate::catalog::{Catalog, ImageSize, Overlay, Selection, Source};
use crate::remote::Endpoints;

use super::runner::{choices_output, list_output};
use super::types::{Cli, Commands};

fn catalog() -> Catalog {
    Catalog::new(
        [
            "GOES-16/Full Disk/2024-05-01_12-00-20/GOES-16_G16_13.png",
            "GOES-16/Full Disk/2024-05-01_12-10-20/GOES-16_G16_13.png",
            "GOES-16/Full Disk/2024-05-01_12-10-20/GOES-16_G16_13_map.png",
            "NWS/radar/latest.jpg",
        ]
        .iter()
        .map(|path| path.to_string())
        .collect(),
    )
}

#[test]
fn list_flags_parse_into_selection() {
    let cli = Cli::try_parse_from([
        "websat",
        "--server",
        "http://sat.local",
        "list",
        "--source",
        "goes-18",
        "--size",
        "Full Disk",
        "--channel",
        "Channel 13",
        "--overlay",
        "map",
        "--limit",
        "10",
    ])
    .expect("parse");
    assert_eq!(cli.server.as_deref(), Some("http://sat.local"));
    let Some(Commands::List {
        selection, limit, ..
    }) = cli.command
    else {
        panic!("expected list command");
    };
    let selection = selection.selection();
    assert_eq!(selection.source, Source::Goes18);
    assert_eq!(selection.size, ImageSize::FullDisk);
    assert_eq!(selection.channel.token, "G16_13");
    assert_eq!(selection.overlay, Overlay::Map);
    assert_eq!(limit, Some(10));
}

#[test]
fn unknown_source_is_a_parse_error() {
    assert!(Cli::try_parse_from(["websat", "choices", "--source", "Meteosat"]).is_err());
}

#[test]
fn no_subcommand_means_viewer() {
    let cli = Cli::try_parse_from(["websat"]).expect("parse");
    assert!(cli.command.is_none());
}

#[test]
fn list_output_reports_found_and_capture_times() {
    let mut catalog = catalog();
    let endpoints = Endpoints::new("http://sat.local", 700, 700);
    let output = list_output(
        &mut catalog,
        &Selection::for_source(Source::Goes16),
        None,
        Some(1),
        Some(&endpoints),
    );
    assert_eq!(output.found, 3);
    assert_eq!(output.images.len(), 1);
    assert_eq!(
        output.images[0].captured.as_deref(),
        Some("2024-05-01 12:10:20")
    );
    assert_eq!(
        output.images[0].url.as_deref(),
        Some(
            "http://sat.local/preview/GOES-16/Full Disk/2024-05-01_12-10-20/GOES-16_G16_13.png?width=700&height=700"
        )
    );
    assert_eq!(output.selection.overlay, "None");
}

#[test]
fn list_folder_flag_narrows_to_one_capture() {
    let cli = Cli::try_parse_from([
        "websat",
        "list",
        "--folder",
        "GOES-16/Full Disk/2024-05-01_12-00-20",
    ])
    .expect("parse");
    let Some(Commands::List { folder, .. }) = cli.command else {
        panic!("expected list command");
    };

    let mut catalog = catalog();
    let output = list_output(
        &mut catalog,
        &Selection::for_source(Source::Goes16),
        folder.as_deref(),
        None,
        None,
    );
    assert_eq!(output.found, 1);
    assert_eq!(
        output.images[0].path,
        "GOES-16/Full Disk/2024-05-01_12-00-20/GOES-16_G16_13.png"
    );
    assert!(output.images[0].url.is_none());

    let empty = list_output(
        &mut catalog,
        &Selection::for_source(Source::Goes16),
        Some("NWS/radar"),
        None,
        None,
    );
    assert_eq!(empty.found, 0);
    assert!(empty.images.is_empty());
}

#[test]
fn choices_output_lists_offered_options() {
    let mut catalog = catalog();
    let output = choices_output(&mut catalog, Source::Nws);
    assert_eq!(output.source, "National Weather Service");
    assert_eq!(output.sizes.len(), 1);
    assert_eq!(output.sizes[0].label, "Any size");
    assert_eq!(output.channels.len(), 1);
    assert_eq!(output.overlays.len(), 1);

    let goes = choices_output(&mut catalog, Source::Goes16);
    let channel_labels = goes.channels.iter().map(|c| c.label).collect::<Vec<_>>();
    assert_eq!(channel_labels, vec!["All Channels", "Channel 13"]);
    assert_eq!(goes.overlays.len(), 2);
}
