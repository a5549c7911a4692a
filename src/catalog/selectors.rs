use std::fmt;
use std::str::FromStr;

use super::CatalogError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Source {
    #[default]
    Goes16,
    Goes18,
    Nws,
    Unknown,
}

impl Source {
    pub const ALL: [Source; 4] = [Self::Goes16, Self::Goes18, Self::Nws, Self::Unknown];

    /// Substring that identifies this source inside an image path.
    pub fn token(self) -> &'static str {
        match self {
            Self::Goes16 => "GOES-16",
            Self::Goes18 => "GOES-18",
            Self::Nws => "NWS",
            Self::Unknown => "Unknown",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Goes16 => "GOES 16 Geostationary Satellite",
            Self::Goes18 => "GOES 18 Geostationary Satellite",
            Self::Nws => "National Weather Service",
            Self::Unknown => "Other",
        }
    }

    /// NWS products are stored at display size, so the viewer pulls the full image.
    pub fn serves_full_images(self) -> bool {
        matches!(self, Self::Nws)
    }
}

impl fmt::Display for Source {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.label())
    }
}

impl FromStr for Source {
    type Err = CatalogError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let value = value.trim();
        Self::ALL
            .into_iter()
            .find(|source| {
                source.token().eq_ignore_ascii_case(value)
                    || source.label().eq_ignore_ascii_case(value)
            })
            .ok_or_else(|| CatalogError::UnknownSource(value.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub enum ImageSize {
    #[default]
    Any,
    FullDisk,
    Mesoscale1,
    Mesoscale2,
}

impl ImageSize {
    pub const ALL: [ImageSize; 4] = [
        Self::Any,
        Self::FullDisk,
        Self::Mesoscale1,
        Self::Mesoscale2,
    ];

    pub fn token(self) -> &'static str {
        match self {
            Self::Any => "",
            Self::FullDisk => "Full Disk",
            Self::Mesoscale1 => "Mesoscale 1",
            Self::Mesoscale2 => "Mesoscale 2",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Any => "Any size",
            other => other.token(),
        }
    }
}

impl fmt::Display for ImageSize {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.label())
    }
}

impl FromStr for ImageSize {
    type Err = CatalogError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let value = value.trim();
        if value.is_empty() || value.eq_ignore_ascii_case("any") {
            return Ok(Self::Any);
        }
        Self::ALL
            .into_iter()
            .find(|size| {
                size.token().eq_ignore_ascii_case(value) || size.label().eq_ignore_ascii_case(value)
            })
            .ok_or_else(|| CatalogError::UnknownSize(value.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Channel {
    pub token: &'static str,
    pub label: &'static str,
}

const fn channel(token: &'static str, label: &'static str) -> Channel {
    Channel { token, label }
}

pub const CHANNELS: [Channel; 16] = [
    channel("", "All Channels"),
    channel("_Clean_Longwave_IR_Window", "Clean Longwave IR Window"),
    channel("Dirty_Longwave_Window", "Dirty Longwave Window"),
    channel("Dirty_Longwave_Window_-_CIRA", "Dirty Longwave Window - CIRA"),
    channel("GEO_False_Color", "False Color"),
    channel(
        "Infrared_Longwave_Window_Band",
        "Infrared Longwave Window Band",
    ),
    channel(
        "Mid-level_Tropospheric_Water_Vapor",
        "Mid-level Tropospheric Water Vapor",
    ),
    channel("Shortwave_Window_Band", "Shortwave Window Band"),
    channel(
        "Upper-Level_Tropospheric_Water_Vapor",
        "Upper-Level Tropospheric Water Vapor",
    ),
    channel("G16_2", "Channel 2"),
    channel("G16_7", "Channel 7"),
    channel("G16_8", "Channel 8"),
    channel("G16_9", "Channel 9"),
    channel("G16_13", "Channel 13"),
    channel("G16_14", "Channel 14"),
    channel("G16_15", "Channel 15"),
];

impl Channel {
    pub const ALL_CHANNELS: Channel = CHANNELS[0];

    pub fn from_label(label: &str) -> Option<Self> {
        CHANNELS.into_iter().find(|channel| channel.label == label)
    }

    pub fn from_token(token: &str) -> Option<Self> {
        CHANNELS.into_iter().find(|channel| channel.token == token)
    }
}

impl Default for Channel {
    fn default() -> Self {
        Self::ALL_CHANNELS
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.label)
    }
}

impl FromStr for Channel {
    type Err = CatalogError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let value = value.trim();
        if value.is_empty() || value.eq_ignore_ascii_case("all") {
            return Ok(Self::ALL_CHANNELS);
        }
        CHANNELS
            .into_iter()
            .find(|channel| {
                channel.token.eq_ignore_ascii_case(value)
                    || channel.label.eq_ignore_ascii_case(value)
            })
            .ok_or_else(|| CatalogError::UnknownChannel(value.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Overlay {
    #[default]
    None,
    Map,
}

impl Overlay {
    pub const MAP_SUFFIX: &'static str = "_map";

    pub fn token(self) -> &'static str {
        match self {
            Self::None => "",
            Self::Map => Self::MAP_SUFFIX,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::None => "None",
            Self::Map => "Map",
        }
    }

    /// `None` has an empty token and so keeps map and plain renderings alike.
    pub fn matches(self, path: &str) -> bool {
        path.contains(self.token())
    }
}

impl fmt::Display for Overlay {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.label())
    }
}

impl FromStr for Overlay {
    type Err = CatalogError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "" | "none" => Ok(Self::None),
            "map" | "_map" => Ok(Self::Map),
            other => Err(CatalogError::UnknownOverlay(other.to_string())),
        }
    }
}

/// Sizes whose token occurs in at least one path, in token order.
///
/// [`ImageSize::Any`] matches every path, so it is offered whenever `paths`
/// is non-empty.
pub fn available_sizes(paths: &[String]) -> Vec<ImageSize> {
    ImageSize::ALL
        .into_iter()
        .filter(|size| paths.iter().any(|path| path.contains(size.token())))
        .collect()
}

/// Channels whose token occurs in at least one path, sorted by label.
pub fn available_channels(paths: &[String]) -> Vec<Channel> {
    let mut channels = CHANNELS
        .into_iter()
        .filter(|channel| paths.iter().any(|path| path.contains(channel.token)))
        .collect::<Vec<_>>();
    channels.sort_by(|left, right| left.label.cmp(right.label));
    channels.dedup();
    channels
}

pub fn overlays_for(source: Source) -> &'static [Overlay] {
    match source {
        Source::Nws | Source::Unknown => &[Overlay::None],
        Source::Goes16 | Source::Goes18 => &[Overlay::None, Overlay::Map],
    }
}
