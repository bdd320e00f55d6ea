//! The fixed list of placeholder sprites.
//!
//! Colors are chosen so each category reads as a distinct hue family in-game:
//! yellows for the player, red/green for the two monster kinds, grays for
//! weapons, oranges for explosions, earth tones for terrain, and saturated
//! primaries for the UI icons.

use crate::sprite::{Rgba8, SpriteCategory, SpriteSpec};

use SpriteCategory::{Effects, Environment, Monsters, Player, Ui, Weapons};

/// `(category, file name, (width, height), color)`
type Entry = (SpriteCategory, &'static str, (u32, u32), Rgba8);

const ENTRIES: &[Entry] = &[
    // Player
    (Player, "idle.png", (20, 20), Rgba8::opaque(255, 255, 0)),
    (Player, "walk_up.png", (20, 20), Rgba8::opaque(255, 255, 100)),
    (Player, "walk_down.png", (20, 20), Rgba8::opaque(255, 255, 100)),
    (Player, "walk_left.png", (20, 20), Rgba8::opaque(255, 255, 100)),
    (Player, "walk_right.png", (20, 20), Rgba8::opaque(255, 255, 100)),
    (Player, "digging.png", (20, 20), Rgba8::opaque(255, 200, 0)),
    (Player, "shield.png", (20, 20), Rgba8::opaque(255, 255, 255)),
    // Monsters
    (Monsters, "red_idle.png", (20, 20), Rgba8::opaque(255, 0, 0)),
    (Monsters, "red_walk.png", (20, 20), Rgba8::opaque(255, 50, 50)),
    (Monsters, "red_angry.png", (20, 20), Rgba8::opaque(200, 0, 0)),
    (Monsters, "dragon_idle.png", (20, 20), Rgba8::opaque(0, 255, 0)),
    (Monsters, "dragon_walk.png", (20, 20), Rgba8::opaque(50, 255, 50)),
    (Monsters, "dragon_breath.png", (20, 20), Rgba8::opaque(0, 200, 0)),
    // Weapons
    (Weapons, "harpoon_h.png", (20, 4), Rgba8::opaque(150, 150, 150)),
    (Weapons, "harpoon_v.png", (4, 20), Rgba8::opaque(150, 150, 150)),
    (Weapons, "chain.png", (20, 20), Rgba8::opaque(100, 100, 100)),
    // Effects
    (Effects, "explosion1.png", (30, 30), Rgba8::opaque(255, 100, 0)),
    (Effects, "explosion2.png", (30, 30), Rgba8::opaque(255, 150, 0)),
    (Effects, "explosion3.png", (30, 30), Rgba8::opaque(255, 200, 0)),
    (Effects, "explosion4.png", (30, 30), Rgba8::opaque(255, 255, 0)),
    (Effects, "sparkle.png", (10, 10), Rgba8::opaque(255, 255, 255)),
    // Environment
    (Environment, "dirt.png", (20, 20), Rgba8::opaque(139, 69, 19)),
    (Environment, "rock.png", (20, 20), Rgba8::opaque(128, 128, 128)),
    (Environment, "tunnel.png", (20, 20), Rgba8::opaque(0, 0, 0)),
    // UI
    (Ui, "speed.png", (16, 16), Rgba8::opaque(0, 255, 255)),
    (Ui, "range.png", (16, 16), Rgba8::opaque(0, 255, 0)),
    (Ui, "rapid.png", (16, 16), Rgba8::opaque(255, 0, 255)),
    (Ui, "shield.png", (16, 16), Rgba8::opaque(255, 255, 0)),
];

/// Number of sprites in [`manifest`].
pub const MANIFEST_LEN: usize = ENTRIES.len();

/// Returns every placeholder sprite, in generation order.
pub fn manifest() -> Vec<SpriteSpec> {
    ENTRIES
        .iter()
        .map(|&(category, file_name, size, color)| {
            SpriteSpec::in_category(category, file_name, size, color)
        })
        .collect()
}
