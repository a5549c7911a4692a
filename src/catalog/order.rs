use super::capture_time;

/// Newest captures first, then every path without a capture time in plain
/// string order.
pub fn chronological_order(paths: &[String]) -> Vec<String> {
    let mut dated = Vec::with_capacity(paths.len());
    let mut undated = Vec::new();
    for path in paths {
        match capture_time(path) {
            Some(captured) => dated.push((captured, path)),
            None => undated.push(path),
        }
    }

    // stable, so equal capture times keep their listing order
    dated.sort_by(|left, right| right.0.cmp(&left.0));
    undated.sort();

    dated
        .into_iter()
        .map(|(_, path)| path.clone())
        .chain(undated.into_iter().cloned())
        .collect()
}
