use chrono::NaiveDateTime;

/// Layout of the folder name that holds every capture on the image server.
pub const CAPTURE_TIME_FORMAT: &str = "%Y-%m-%d_%H-%M-%S";

/// Reads the capture time from the second-to-last path segment.
///
/// Returns `None` for paths without a parent folder or whose folder does not
/// match [`CAPTURE_TIME_FORMAT`] exactly.
pub fn capture_time(path: &str) -> Option<NaiveDateTime> {
    let mut segments = path.rsplit('/');
    segments.next()?;
    let folder = segments.next()?;
    NaiveDateTime::parse_from_str(folder, CAPTURE_TIME_FORMAT).ok()
}
