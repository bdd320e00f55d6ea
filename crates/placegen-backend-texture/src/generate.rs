//! Placeholder generation entry points.
//!
//! [`generate`] writes one sprite; [`generate_all`] validates a manifest and
//! writes every sprite in order, stopping at the first failure. Files written
//! before a failure are left in place.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use placegen_spec::{validate_dimensions, validate_manifest, SpecError, SpriteCategory, SpriteSpec};

use crate::buffer::SolidBuffer;
use crate::png::{self, PngConfig, PngError};

/// Errors from placeholder generation.
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error(transparent)]
    Validation(#[from] SpecError),

    #[error("failed to create directory '{}': {source}", .path.display())]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write '{}': {source}", .path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("PNG error: {0}")]
    Png(#[from] PngError),

    #[error("failed to report '{path}': {source}")]
    Report {
        path: String,
        source: std::io::Error,
    },
}

/// Result of writing a single placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedSprite {
    /// Manifest path, relative to the output root.
    pub path: String,
    /// Category directory the sprite was written into, if any.
    pub category: Option<SpriteCategory>,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// BLAKE3 hash of the PNG file.
    pub hash: String,
    /// Size of the PNG file in bytes.
    pub bytes_written: usize,
}

/// Result of a full manifest run.
#[derive(Debug, Clone, Default)]
pub struct GenerationSummary {
    /// Every sprite written, in manifest order.
    pub sprites: Vec<GeneratedSprite>,
}

impl GenerationSummary {
    /// Total number of files written.
    pub fn total(&self) -> usize {
        self.sprites.len()
    }

    /// Number of files written per category. Sprites outside a category
    /// directory are not counted.
    pub fn categories(&self) -> BTreeMap<SpriteCategory, usize> {
        let mut counts = BTreeMap::new();
        for category in self.sprites.iter().filter_map(|s| s.category) {
            *counts.entry(category).or_insert(0) += 1;
        }
        counts
    }
}

/// Generates one placeholder sprite under `out_root`.
///
/// Creates any missing parent directories and overwrites an existing file at
/// the target path. Zero-sized sprites fail validation before anything is
/// written.
pub fn generate(
    out_root: &Path,
    sprite: &SpriteSpec,
    config: &PngConfig,
) -> Result<GeneratedSprite, GenerateError> {
    validate_dimensions(sprite).into_result()?;

    let buffer = SolidBuffer::new(sprite.width, sprite.height, sprite.color).ok_or_else(|| {
        PngError::InvalidDimensions(format!(
            "{}x{} is too large for '{}'",
            sprite.width, sprite.height, sprite.path
        ))
    })?;

    let (data, hash) = png::write_rgba_to_vec_with_hash(&buffer, config)?;

    let output_path = out_root.join(&sprite.path);
    if let Some(parent) = output_path.parent() {
        fs::create_dir_all(parent).map_err(|source| GenerateError::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    fs::write(&output_path, &data).map_err(|source| GenerateError::Write {
        path: output_path.clone(),
        source,
    })?;

    Ok(GeneratedSprite {
        path: sprite.path.clone(),
        category: sprite.category(),
        width: sprite.width,
        height: sprite.height,
        hash,
        bytes_written: data.len(),
    })
}

/// Generates every sprite in `sprites`, in order.
///
/// The manifest is validated up front. `on_created` runs after each file is
/// written; the CLI uses it to print progress. An error from `on_created`
/// stops the run before the next sprite is written.
pub fn generate_all<F>(
    out_root: &Path,
    sprites: &[SpriteSpec],
    config: &PngConfig,
    mut on_created: F,
) -> Result<GenerationSummary, GenerateError>
where
    F: FnMut(&GeneratedSprite) -> std::io::Result<()>,
{
    validate_manifest(sprites).into_result()?;

    let mut summary = GenerationSummary::default();
    for sprite in sprites {
        let generated = generate(out_root, sprite, config)?;
        on_created(&generated).map_err(|source| GenerateError::Report {
            path: generated.path.clone(),
            source,
        })?;
        summary.sprites.push(generated);
    }

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use placegen_spec::ErrorCode;

    #[test]
    fn test_generate_returns_metadata() {
        let tmp = tempfile::tempdir().unwrap();
        let sprite = SpriteSpec::new("out/a.png", (20, 20), (255, 255, 0, 255));

        let generated = generate(tmp.path(), &sprite, &PngConfig::default()).unwrap();
        assert_eq!(generated.path, "out/a.png");
        assert_eq!((generated.width, generated.height), (20, 20));

        let on_disk = fs::read(tmp.path().join("out/a.png")).unwrap();
        assert_eq!(generated.bytes_written, on_disk.len());
        assert_eq!(generated.hash, crate::png::hash_png(&on_disk));
    }

    #[test]
    fn test_zero_width_is_validation_error() {
        let tmp = tempfile::tempdir().unwrap();
        let sprite = SpriteSpec::new("out/empty.png", (0, 20), (255, 255, 0, 255));

        let err = generate(tmp.path(), &sprite, &PngConfig::default()).unwrap_err();
        match err {
            GenerateError::Validation(SpecError::Validation(errors)) => {
                assert_eq!(errors[0].code, ErrorCode::ZeroDimension);
            }
            other => panic!("expected validation error, got {other:?}"),
        }
        assert!(!tmp.path().join("out").exists());
    }

    #[test]
    fn test_generate_all_rejects_duplicates_before_writing() {
        let tmp = tempfile::tempdir().unwrap();
        let sprites = vec![
            SpriteSpec::new("out/a.png", (2, 2), (1, 2, 3, 255)),
            SpriteSpec::new("out/a.png", (4, 4), (4, 5, 6, 255)),
        ];

        let mut created = 0;
        let err = generate_all(tmp.path(), &sprites, &PngConfig::default(), |_| {
            created += 1;
            Ok(())
        })
            .unwrap_err();
        assert!(matches!(err, GenerateError::Validation(_)));
        assert_eq!(created, 0);
        assert!(!tmp.path().join("out").exists());
    }

    #[test]
    fn test_report_error_stops_run() {
        let tmp = tempfile::tempdir().unwrap();
        let sprites = vec![
            SpriteSpec::new("out/a.png", (2, 2), (1, 2, 3, 255)),
            SpriteSpec::new("out/b.png", (2, 2), (4, 5, 6, 255)),
        ];

        let err = generate_all(tmp.path(), &sprites, &PngConfig::default(), |_| {
            Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"))
        })
        .unwrap_err();

        match err {
            GenerateError::Report { path, source } => {
                assert_eq!(path, "out/a.png");
                assert_eq!(source.kind(), std::io::ErrorKind::BrokenPipe);
            }
            other => panic!("expected report error, got {other:?}"),
        }
        assert!(tmp.path().join("out/a.png").is_file());
        assert!(!tmp.path().join("out/b.png").exists());
    }

    #[test]
    fn test_summary_categories() {
        let tmp = tempfile::tempdir().unwrap();
        let sprites = vec![
            SpriteSpec::in_category(SpriteCategory::Ui, "a.png", (1, 1), (0, 0, 0, 255)),
            SpriteSpec::in_category(SpriteCategory::Ui, "b.png", (1, 1), (0, 0, 0, 255)),
            SpriteSpec::in_category(SpriteCategory::Player, "c.png", (1, 1), (0, 0, 0, 255)),
            SpriteSpec::new("loose/d.png", (1, 1), (0, 0, 0, 255)),
        ];

        let summary =
            generate_all(tmp.path(), &sprites, &PngConfig::default(), |_| Ok(())).unwrap();
        assert_eq!(summary.total(), 4);

        let categories = summary.categories();
        assert_eq!(categories.get(&SpriteCategory::Ui), Some(&2));
        assert_eq!(categories.get(&SpriteCategory::Player), Some(&1));
        assert_eq!(categories.len(), 2);
    }
}
