//! Output path safety validation.
//!
//! Sprite paths are joined onto the output root, so each one must be a
//! relative, forward-slash path made of plain file or directory names.

/// Checks if an output path is safe to join onto the output root.
pub fn is_safe_output_path(path: &str) -> bool {
    output_path_safety_errors(path).is_empty()
}

pub(super) fn output_path_safety_errors(path: &str) -> Vec<String> {
    if path.is_empty() {
        return vec!["output path cannot be empty".to_string()];
    }

    let mut errors = Vec::new();
    if path.starts_with('/') {
        errors.push(format!("output path must be relative: '{}'", path));
    }
    if path.contains('\\') {
        errors.push(format!("output path must use '/' separators: '{}'", path));
    }

    let segments: Vec<&str> = path.split('/').collect();
    if segments.contains(&"..") {
        errors.push(format!("output path must stay under the output root: '{}'", path));
    }
    // Skip the leading empty segment of an absolute path, already reported
    if segments.iter().skip(1).any(|s| s.is_empty()) {
        errors.push(format!("output path has an empty segment: '{}'", path));
    }

    errors
}
