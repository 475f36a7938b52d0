use std::path::Path;

/// Strips the `base` prefix from `path` to form the identifier stored in
/// result records. Separators are normalized to forward slashes so the
/// identifier stays portable across platforms.
///
/// If `path` does not start with `base` (which traversal discipline should
/// prevent), the full path is returned unchanged rather than erroring.
pub fn relative_display(path: &Path, base: &Path) -> String {
    let full = path.to_string_lossy().replace('\\', "/");
    let prefix = base.to_string_lossy().replace('\\', "/");

    match full.strip_prefix(prefix.as_str()) {
        Some(rest) => rest.to_string(),
        None => full,
    }
}
