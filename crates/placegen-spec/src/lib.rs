//! Placeholder Sprite Spec Library
//!
//! This crate provides the descriptor types, the static manifest, and
//! validation for placeholder sprite generation.
//!
//! # Overview
//!
//! A placeholder sprite is a solid-color rectangle written to a fixed path
//! under `resources/sprites/<category>/`. The manifest lists every sprite a
//! game needs before real art exists.
//!
//! # Example
//!
//! ```
//! use placegen_spec::{manifest, validate_manifest, SpriteCategory, SpriteSpec};
//!
//! let sprites = manifest();
//! assert!(validate_manifest(&sprites).is_ok());
//!
//! let extra =
//!     SpriteSpec::in_category(SpriteCategory::Ui, "bomb.png", (16, 16), (40, 40, 40, 255));
//! assert_eq!(extra.path, "resources/sprites/ui/bomb.png");
//! ```
//!
//! # Modules
//!
//! - [`error`]: Error codes and validation result types
//! - [`manifest`]: The fixed list of placeholder sprites
//! - [`sprite`]: Sprite descriptor, color, and category types
//! - [`validation`]: Sprite and manifest validation

pub mod error;
pub mod manifest;
pub mod sprite;
pub mod validation;

// Re-export commonly used types at the crate root
pub use error::{ErrorCode, SpecError, ValidationError, ValidationResult};
pub use manifest::{manifest, MANIFEST_LEN};
pub use sprite::{Rgba8, SpriteCategory, SpriteSpec, SPRITE_EXTENSION, SPRITE_ROOT};
pub use validation::{is_safe_output_path, validate_dimensions, validate_manifest, validate_sprite};
