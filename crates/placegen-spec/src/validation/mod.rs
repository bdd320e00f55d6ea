//! Sprite and manifest validation.
//!
//! Errors are collected rather than returned on the first failure, and each
//! one names the offending field (e.g. `sprites[3].height`).

mod path_safety;


use std::collections::HashSet;

use crate::error::{ErrorCode, ValidationError, ValidationResult};
use crate::sprite::{SpriteSpec, SPRITE_EXTENSION};

pub use path_safety::is_safe_output_path;

/// Validates that a sprite has a non-empty pixel area.
///
/// This is the only check the generator itself depends on; path rules are
/// enforced at the manifest level.
pub fn validate_dimensions(sprite: &SpriteSpec) -> ValidationResult {
    let mut result = ValidationResult::success();
    check_dimensions(sprite, "sprite", &mut result);
    result
}

/// Validates a single sprite descriptor.
pub fn validate_sprite(sprite: &SpriteSpec) -> ValidationResult {
    let mut result = ValidationResult::success();
    check_sprite(sprite, "sprite", &mut result);
    result
}

/// Validates a whole manifest: every sprite, plus path uniqueness.
pub fn validate_manifest(sprites: &[SpriteSpec]) -> ValidationResult {
    let mut result = ValidationResult::success();

    if sprites.is_empty() {
        result.add_error(ValidationError::new(
            ErrorCode::EmptyManifest,
            "manifest must declare at least one sprite",
        ));
        return result;
    }

    let mut seen_paths: HashSet<&str> = HashSet::new();
    for (i, sprite) in sprites.iter().enumerate() {
        let field = format!("sprites[{}]", i);

        if !seen_paths.insert(&sprite.path) {
            result.add_error(ValidationError::with_path(
                ErrorCode::DuplicateOutputPath,
                format!("duplicate output path: '{}'", sprite.path),
                format!("{}.path", field),
            ));
        }

        check_sprite(sprite, &field, &mut result);
    }

    result
}

fn check_sprite(sprite: &SpriteSpec, field: &str, result: &mut ValidationResult) {
    check_dimensions(sprite, field, result);

    let path_field = format!("{}.path", field);
    for message in path_safety::output_path_safety_errors(&sprite.path) {
        result.add_error(ValidationError::with_path(
            ErrorCode::UnsafeOutputPath,
            message,
            &path_field,
        ));
    }

    if !sprite.extension_matches() {
        result.add_error(ValidationError::with_path(
            ErrorCode::PathFormatMismatch,
            format!(
                "output path extension must be '{}': '{}'",
                SPRITE_EXTENSION, sprite.path
            ),
            &path_field,
        ));
    }
}

fn check_dimensions(sprite: &SpriteSpec, field: &str, result: &mut ValidationResult) {
    if sprite.width == 0 {
        result.add_error(ValidationError::with_path(
            ErrorCode::ZeroDimension,
            format!("width must be positive for '{}'", sprite.path),
            format!("{}.width", field),
        ));
    }
    if sprite.height == 0 {
        result.add_error(ValidationError::with_path(
            ErrorCode::ZeroDimension,
            format!("height must be positive for '{}'", sprite.path),
            format!("{}.height", field),
        ));
    }
}
