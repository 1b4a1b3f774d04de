//! Built-in level: the playfield and its character art.

use crate::catalog::{GlyphKey, SymbolCatalog};
use crate::error::Result;
use crate::types::Death;

/// The default playfield, one symbol per cell.
pub const DEFAULT_MAP: [&str; 11] = [
    "------------",
    "    sss     ",
    "^^^^ooo^^^^^",
    "^^^^^^^ooo^^",
    "^ooo^^^^^^^^",
    "            ",
    "___u_u_u_u_u",
    "_p__________",
    "u_u_u___u_u_",
    "     H      ",
    "------------",
];

const BLANK: &[&[&str]] = &[&[
    "        ",
    "        ",
    "        ",
    "        ",
]];

const WALL: &[&[&str]] = &[&[
    "--------",
    "||||||||",
    "||||||||",
    "--------",
]];

const LANE: &[&[&str]] = &[&[
    "        ",
    "________",
    "        ",
    "________",
]];

const WATER: &[&[&str]] = &[&[
    "        ",
    "        ",
    "        ",
    r#""""""""""#,
]];

const LOG: &[&[&str]] = &[&[
    "        ",
    "        ",
    "--------",
    "--------",
]];

const PLAYER: &[&[&str]] = &[&[
    "        ",
    "   o o  ",
    " _|   |_",
    r" \  |  /",
]];

const CAR: &[&[&str]] = &[
    &[
        "    _   ",
        "___| |__",
        " |_____|",
        "__O___O_",
    ],
    &[
        "    _   ",
        "___| |__",
        " |_____|",
        "__U___U_",
    ],
    &[
        "    _   ",
        "___| |__",
        " |_____|",
        "__C___C_",
    ],
];

const SPEED_CAR: &[&[&str]] = &[&[
    "        ",
    "__-----_",
    r" /_____\",
    "__O___O_",
]];

const SNAKE: &[&[&str]] = &[
    &[
        "        ",
        "    ⦢ = ",
        "  ⦢     ",
        "⦢       ",
    ],
    &[
        "        ",
        "= = ⦥   ",
        "     ⦥  ",
        "       ⦥",
    ],
    &[
        "        ",
        "       ⦢",
        "     ⦢  ",
        " = ⦢    ",
    ],
];

const WATER_DEATH: &[&[&str]] = &[&[
    "        ",
    "        ",
    "   o o  ",
    r#""""""""""#,
]];

const CAR_DEATH: &[&[&str]] = &[&[
    "        ",
    r" \ o o /",
    " _     _",
    r" /  |  \",
]];

const SNAKE_DEATH: &[&[&str]] = &[&[
    "        ",
    "        ",
    "        ",
    "   o o  ",
]];

/// Art for every symbol of [`DEFAULT_MAP`] plus the death overlays.
pub fn default_catalog() -> Result<SymbolCatalog> {
    SymbolCatalog::from_art(&[
        (GlyphKey::Cell(' '), BLANK),
        (GlyphKey::Cell('-'), WALL),
        (GlyphKey::Cell('_'), LANE),
        (GlyphKey::Cell('^'), WATER),
        (GlyphKey::Cell('o'), LOG),
        (GlyphKey::Cell('H'), PLAYER),
        (GlyphKey::Cell('u'), CAR),
        (GlyphKey::Cell('p'), SPEED_CAR),
        (GlyphKey::Cell('s'), SNAKE),
        (GlyphKey::Death(Death::Drowned), WATER_DEATH),
        (GlyphKey::Death(Death::JumpedOnCar), CAR_DEATH),
        (GlyphKey::Death(Death::HitByCar), CAR_DEATH),
        (GlyphKey::Death(Death::EatenBySnake), SNAKE_DEATH),
    ])
}
