use std::collections::BTreeSet;

pub fn parent_folder(path: &str) -> &str {
    path.rsplit_once('/')
        .map(|(folder, _)| folder)
        .unwrap_or_default()
}

pub fn file_name(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}

pub fn folders(paths: &[String]) -> Vec<String> {
    paths
        .iter()
        .map(|path| parent_folder(path).to_string())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

pub fn in_folder(paths: &[String], folder: &str) -> Vec<String> {
    paths
        .iter()
        .filter(|path| parent_folder(path) == folder)
        .cloned()
        .collect()
}
