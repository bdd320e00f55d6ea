//! Sprite descriptor types.

/// Root directory, relative to the output root, that every sprite lives under.
pub const SPRITE_ROOT: &str = "resources/sprites";

/// File extension every placeholder is written with.
pub const SPRITE_EXTENSION: &str = "png";

/// 8-bit RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8 {
    /// Create a new color.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create a fully opaque color.
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Channels in R, G, B, A order.
    pub const fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl From<(u8, u8, u8, u8)> for Rgba8 {
    fn from((r, g, b, a): (u8, u8, u8, u8)) -> Self {
        Self::new(r, g, b, a)
    }
}

impl std::fmt::Display for Rgba8 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "RGBA({},{},{},{})", self.r, self.g, self.b, self.a)
    }
}

/// Asset category (one subdirectory of [`SPRITE_ROOT`] each).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SpriteCategory {
    /// Player character states.
    Player,
    /// Enemy creatures.
    Monsters,
    /// Weapon pieces.
    Weapons,
    /// Transient visual effects.
    Effects,
    /// Terrain tiles.
    Environment,
    /// HUD and power-up icons.
    Ui,
}

impl SpriteCategory {
    /// All categories in manifest order.
    pub const ALL: [SpriteCategory; 6] = [
        SpriteCategory::Player,
        SpriteCategory::Monsters,
        SpriteCategory::Weapons,
        SpriteCategory::Effects,
        SpriteCategory::Environment,
        SpriteCategory::Ui,
    ];

    /// Subdirectory name under [`SPRITE_ROOT`].
    pub fn dir_name(&self) -> &'static str {
        match self {
            SpriteCategory::Player => "player",
            SpriteCategory::Monsters => "monsters",
            SpriteCategory::Weapons => "weapons",
            SpriteCategory::Effects => "effects",
            SpriteCategory::Environment => "environment",
            SpriteCategory::Ui => "ui",
        }
    }

    /// Looks a category up by its subdirectory name.
    pub fn from_dir_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.dir_name() == name)
    }
}

impl std::fmt::Display for SpriteCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.dir_name())
    }
}

/// A single placeholder sprite: where it goes, how big it is, what color it is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpriteSpec {
    /// Relative path under the output root, forward slashes only.
    pub path: String,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Fill color for every pixel.
    pub color: Rgba8,
}

impl SpriteSpec {
    /// Creates a sprite descriptor at an arbitrary relative path.
    pub fn new(
        path: impl Into<String>,
        (width, height): (u32, u32),
        color: impl Into<Rgba8>,
    ) -> Self {
        Self {
            path: path.into(),
            width,
            height,
            color: color.into(),
        }
    }

    /// Creates a sprite descriptor at `resources/sprites/<category>/<file_name>`.
    pub fn in_category(
        category: SpriteCategory,
        file_name: &str,
        size: (u32, u32),
        color: impl Into<Rgba8>,
    ) -> Self {
        Self::new(
            format!("{}/{}/{}", SPRITE_ROOT, category.dir_name(), file_name),
            size,
            color,
        )
    }

    /// Dimensions as `(width, height)`.
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Category this sprite belongs to, if its path sits directly in a category directory.
    pub fn category(&self) -> Option<SpriteCategory> {
        let rest = self.path.strip_prefix(SPRITE_ROOT)?.strip_prefix('/')?;
        let (dir, file) = rest.split_once('/')?;
        if file.is_empty() || file.contains('/') {
            return None;
        }
        SpriteCategory::from_dir_name(dir)
    }

    /// Extracts the file extension from the path.
    pub fn path_extension(&self) -> Option<&str> {
        let file_name = self.path.rsplit('/').next()?;
        file_name.rsplit_once('.').map(|(_, ext)| ext)
    }

    /// Checks if the path ends in `.png` (case-insensitive).
    pub fn extension_matches(&self) -> bool {
        self.path_extension()
            .map(|ext| ext.eq_ignore_ascii_case(SPRITE_EXTENSION))
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_category_builds_path() {
        let sprite = SpriteSpec::in_category(
            SpriteCategory::Weapons,
            "harpoon_h.png",
            (20, 4),
            (150, 150, 150, 255),
        );
        assert_eq!(sprite.path, "resources/sprites/weapons/harpoon_h.png");
        assert_eq!(sprite.dimensions(), (20, 4));
        assert_eq!(sprite.color, Rgba8::opaque(150, 150, 150));
        assert_eq!(sprite.category(), Some(SpriteCategory::Weapons));
    }

    #[test]
    fn test_category_outside_sprite_root() {
        let sprite = SpriteSpec::new("out/a.png", (20, 20), (255, 255, 0, 255));
        assert_eq!(sprite.category(), None);

        let nested = SpriteSpec::new("resources/sprites/ui/icons/a.png", (1, 1), (0, 0, 0, 255));
        assert_eq!(nested.category(), None);
    }

    #[test]
    fn test_extension_matches() {
        assert!(SpriteSpec::new("a/b.PNG", (1, 1), (0, 0, 0, 0)).extension_matches());
        assert!(!SpriteSpec::new("a/b.bmp", (1, 1), (0, 0, 0, 0)).extension_matches());
        assert!(!SpriteSpec::new("a.dir/b", (1, 1), (0, 0, 0, 0)).extension_matches());
    }

    #[test]
    fn test_category_dir_names_round_trip() {
        for category in SpriteCategory::ALL {
            assert_eq!(SpriteCategory::from_dir_name(category.dir_name()), Some(category));
        }
        assert_eq!(SpriteCategory::from_dir_name("audio"), None);
    }

    #[test]
    fn test_rgba_display() {
        assert_eq!(Rgba8::new(255, 100, 0, 255).to_string(), "RGBA(255,100,0,255)");
        assert_eq!(Rgba8::new(1, 2, 3, 4).to_array(), [1, 2, 3, 4]);
    }
}
