//! Placeholder Sprite Texture Backend
//!
//! This crate turns sprite descriptors into solid-color PNG files.
//! All output is byte-identical for the same descriptor, so re-running the
//! generator over an existing tree rewrites every file with the same bytes.
//!
//! # Example
//!
//! ```no_run
//! use placegen_backend_texture::{generate_all, PngConfig};
//! use placegen_spec::manifest;
//! use std::path::Path;
//!
//! let summary = generate_all(Path::new("."), &manifest(), &PngConfig::default(), |sprite| {
//!     println!("Created placeholder: {}", sprite.path);
//!     Ok(())
//! })
//! .unwrap();
//! assert_eq!(summary.total(), manifest().len());
//! ```
//!
//! # Determinism
//!
//! - PNG encoding uses fixed compression and filter settings
//! - No timestamps or other variable chunks are written
//! - Every written file is hashed with BLAKE3

pub mod buffer;
pub mod generate;
pub mod png;

// Re-export main types for convenience
pub use buffer::SolidBuffer;
pub use generate::{generate, generate_all, GenerateError, GeneratedSprite, GenerationSummary};
pub use crate::png::{PngConfig, PngError};
