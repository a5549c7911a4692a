use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use serde::Serialize;

use crate::catalog::{Channel, ImageSize, Overlay, Selection, Source};

#[derive(Debug, Parser)]
#[command(
    name = "websat",
    version,
    about = "Desktop viewer for satellite imagery published by a remote image server"
)]
pub(super) struct Cli {
    /// YAML or JSON configuration file.
    #[arg(long, global = true)]
    pub(super) config: Option<PathBuf>,

    /// Base URL of the image server. Overrides the configuration file.
    #[arg(long, global = true, env = "WEBSAT_SERVER")]
    pub(super) server: Option<String>,

    #[command(subcommand)]
    pub(super) command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub(super) enum Commands {
    /// Opens the desktop viewer. This is the default without a subcommand.
    View,
    /// Prints the images matching a selection, newest first.
    List {
        #[command(flatten)]
        selection: SelectionArgs,
        /// Only images directly inside this folder, as printed by `folders`.
        #[arg(long)]
        folder: Option<String>,
        #[arg(long)]
        limit: Option<usize>,
        /// Include the URL the viewer would load for each image.
        #[arg(long)]
        urls: bool,
    },
    /// Prints the sizes, channels and overlays offered for a source.
    Choices {
        #[arg(long, default_value = "GOES-16")]
        source: Source,
    },
    /// Prints every capture folder on the server.
    Folders,
    Download {
        path: String,
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
}

#[derive(Debug, Args)]
pub(super) struct SelectionArgs {
    #[arg(long, default_value = "GOES-16")]
    pub(super) source: Source,
    #[arg(long, default_value = "any")]
    pub(super) size: ImageSize,
    #[arg(long, default_value = "all")]
    pub(super) channel: Channel,
    #[arg(long, default_value = "none")]
    pub(super) overlay: Overlay,
}

impl SelectionArgs {
    pub(super) fn selection(&self) -> Selection {
        Selection {
            source: self.source,
            size: self.size,
            channel: self.channel,
            overlay: self.overlay,
        }
    }
}

#[derive(Debug, Serialize)]
pub(super) struct SelectionInfo {
    pub(super) source: &'static str,
    pub(super) size: &'static str,
    pub(super) channel: &'static str,
    pub(super) overlay: &'static str,
}

impl From<&Selection> for SelectionInfo {
    fn from(selection: &Selection) -> Self {
        Self {
            source: selection.source.label(),
            size: selection.size.label(),
            channel: selection.channel.label,
            overlay: selection.overlay.label(),
        }
    }
}

#[derive(Debug, Serialize)]
pub(super) struct ImageEntry {
    pub(super) path: String,
    pub(super) captured: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(super) url: Option<String>,
}

#[derive(Debug, Serialize)]
pub(super) struct ListOutput {
    pub(super) selection: SelectionInfo,
    pub(super) found: usize,
    pub(super) images: Vec<ImageEntry>,
}

#[derive(Debug, Serialize)]
pub(super) struct ChoiceInfo {
    pub(super) token: &'static str,
    pub(super) label: &'static str,
}

#[derive(Debug, Serialize)]
pub(super) struct ChoicesOutput {
    pub(super) source: &'static str,
    pub(super) sizes: Vec<ChoiceInfo>,
    pub(super) channels: Vec<ChoiceInfo>,
    pub(super) overlays: Vec<ChoiceInfo>,
}
